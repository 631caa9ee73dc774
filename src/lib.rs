//! # Kuai (块)
//!
//! 纯 Rust 实现的块视频编码工具集核心算法.
//!
//! - **运动估计**: 全像素穷举搜索 + 半像素细化, 支持并行与取消
//! - **矢量量化**: 16 维码本最近邻搜索, 带不等式剪枝
//! - **熵编码**: H.264 CAVLC total_zeros / run_before 变长码表
//! - **比特流**: LSB first 比特读写
//!
//! # 快速开始
//!
//! ```rust
//! use kuai::codec::{MotionConfig, MotionEstimator};
//! use kuai::core::Plane;
//!
//! let frame = vec![0i16; 32 * 32];
//! let plane = Plane::new(&frame, 32, 32).unwrap();
//! let mut me = MotionEstimator::new(32, 32, MotionConfig::default()).unwrap();
//! let avg = me.estimate(&plane, &plane).unwrap();
//! assert_eq!(avg, 0);
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `kuai-core` | 错误类型, 比特流, 像素平面与块窗口, 运动向量容器 |
//! | `kuai-codec` | 运动估计, 矢量量化, 变长码表, 变换接口 |

/// 核心类型与工具
pub use kuai_core as core;

/// 编码算法
pub use kuai_codec as codec;

/// 获取 Kuai 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
