//! # kuai-codec
//!
//! Kuai 块视频编码算法核心.
//!
//! - [`motion`]: 全像素穷举 + 半像素细化的块运动估计 (H.263 风格)
//! - [`vq`]: 16 维码本矢量量化, 分量和不等式与逐维提前退出剪枝
//! - [`vlc`]: H.264 CAVLC 的 total_zeros / run_before 变长码表编解码
//! - [`transform`]: 正向变换接口
//!
//! ## 使用示例
//!
//! ```rust
//! use kuai_codec::vq::{CodebookQuantiser16, VectorQuantiser};
//!
//! let vq = CodebookQuantiser16::new();
//! let q = vq.quantise(&[0i16; 16]).unwrap();
//! assert!(q.index < vq.codebook_len());
//! ```

pub mod motion;
pub mod transform;
pub mod vlc;
pub mod vq;

// 重导出常用类型
pub use motion::{MotionConfig, MotionEstimator};
pub use transform::{ForwardTransform, TransformMode, TransformParam};
pub use vlc::{
    Decoded2, RunBeforeDecoder, RunBeforeEncoder, TotalZerosDecoder, TotalZerosEncoder, VlcCode,
    VlcDecoder, VlcEncoder,
};
pub use vq::{CodebookQuantiser16, Quantised, VectorQuantiser};
