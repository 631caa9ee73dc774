//! # kuai-core
//!
//! Kuai 块视频编码工具集核心库, 提供基础类型定义、错误处理和底层数据结构.
//!
//! - [`bitreader`] / [`bitwriter`]: LSB first 比特流读写
//! - [`overlay`]: 像素平面与可移动块窗口 (SSD 失真, 半像素插值)
//! - [`vector_list`]: 按块位置保存运动向量的结果容器

pub mod bitreader;
pub mod bitwriter;
pub mod error;
pub mod overlay;
pub mod vector_list;

// 重导出常用类型
pub use bitreader::BitReader;
pub use bitwriter::BitWriter;
pub use error::{KuaiError, KuaiResult};
pub use overlay::{BlockBuf, BlockView, Overlay, Plane, Sample};
pub use vector_list::{Axis, MotionVector, VectorList, VectorListKind, VectorPattern};
