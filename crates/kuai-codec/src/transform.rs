//! 正向变换接口.
//!
//! 具体变换 (整数 DCT 等) 由外部实现; 这里只定义编码核心与变换之间的约定:
//! 原地变换或输入到输出的变换, 变换后可选的缩放与量化, 以及少量由实现自行解释的参数.

use kuai_core::{KuaiError, KuaiResult};

/// 变换工作模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// 变换后量化
    #[default]
    TransformAndQuant,
    /// 只变换
    TransformOnly,
    /// 只量化
    QuantOnly,
}

impl TransformMode {
    /// 模式编号
    pub fn id(self) -> i32 {
        match self {
            Self::TransformAndQuant => 0,
            Self::TransformOnly => 1,
            Self::QuantOnly => 2,
        }
    }
}

impl TryFrom<i32> for TransformMode {
    type Error = KuaiError;

    fn try_from(id: i32) -> KuaiResult<Self> {
        match id {
            0 => Ok(Self::TransformAndQuant),
            1 => Ok(Self::TransformOnly),
            2 => Ok(Self::QuantOnly),
            _ => Err(KuaiError::InvalidArgument(format!("未知变换模式: {}", id))),
        }
    }
}

/// 实现参数编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformParam {
    /// 量化参数 (QP)
    Quant,
    /// 帧内标志
    IntraFlag,
}

impl TransformParam {
    pub fn id(self) -> i32 {
        match self {
            Self::Quant => 0,
            Self::IntraFlag => 1,
        }
    }
}

impl TryFrom<i32> for TransformParam {
    type Error = KuaiError;

    fn try_from(id: i32) -> KuaiResult<Self> {
        match id {
            0 => Ok(Self::Quant),
            1 => Ok(Self::IntraFlag),
            _ => Err(KuaiError::InvalidArgument(format!("未知变换参数: {}", id))),
        }
    }
}

/// 正向变换
///
/// 数据按块的行优先顺序存放在一维切片中, 块尺寸由实现决定.
pub trait ForwardTransform: Send {
    /// 原地变换, 系数覆盖输入
    fn transform(&mut self, block: &mut [i16]) -> KuaiResult<()>;

    /// 变换 `input`, 系数写入 `coeffs`
    fn transform_into(&mut self, input: &[i16], coeffs: &mut [i16]) -> KuaiResult<()>;

    /// 设置逐系数缩放表
    fn set_scale(&mut self, scale: &[i16]) -> KuaiResult<()>;

    /// 当前缩放表
    fn scale(&self) -> &[i16];

    fn set_mode(&mut self, mode: TransformMode);

    fn mode(&self) -> TransformMode;

    /// 设置实现参数, 不使用的参数可以忽略
    fn set_parameter(&mut self, param: TransformParam, value: i32);

    fn parameter(&self, param: TransformParam) -> i32;

    /// 按给定 QP 量化块内 `pos` 处的单个系数
    fn quantise_value(&self, value: i16, pos: usize, qp: i32) -> i32;
}
