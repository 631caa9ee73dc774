//! 统一错误类型定义.
//!
//! 所有 Kuai crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// Kuai 统一错误类型
#[derive(Debug, Error)]
pub enum KuaiError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的操作
    #[error("不支持的操作: {0}")]
    Unsupported(String),

    /// 内存分配失败
    #[error("内存分配失败: {0}")]
    OutOfMemory(String),

    /// 已到达比特流末尾
    #[error("已到达流末尾")]
    Eof,

    /// 无效数据 (无法识别的变长码等)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// 索引越界
    #[error("索引越界: {index} 超出长度 {len}")]
    OutOfRange { index: usize, len: usize },

    /// 操作被调用方取消
    #[error("操作已取消")]
    Cancelled,

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// Kuai 统一 Result 类型
pub type KuaiResult<T> = Result<T, KuaiError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// 每个变体都有构造点; 穷举匹配在新增或删除变体时无法编译
    fn origin(err: &KuaiError) -> &'static str {
        match err {
            KuaiError::InvalidArgument(_) => "参数检查",
            KuaiError::Unsupported(_) => "容器形态",
            KuaiError::OutOfMemory(_) => "容器分配",
            KuaiError::Eof => "比特流",
            KuaiError::InvalidData(_) => "变长码",
            KuaiError::OutOfRange { .. } => "容器访问",
            KuaiError::Cancelled => "运动估计",
            KuaiError::Io(_) => "表格导出",
        }
    }

    #[test]
    fn test_variant_messages() {
        let cases = [
            (KuaiError::Eof, "已到达流末尾"),
            (KuaiError::Cancelled, "操作已取消"),
            (
                KuaiError::OutOfRange { index: 5, len: 3 },
                "索引越界: 5 超出长度 3",
            ),
            (
                KuaiError::InvalidData("位置 0".into()),
                "无效数据: 位置 0",
            ),
        ];
        for (err, msg) in &cases {
            assert_eq!(err.to_string(), *msg);
            assert!(!origin(err).is_empty());
        }
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "管道关闭");
        let err: KuaiError = io.into();
        assert!(matches!(err, KuaiError::Io(_)));
        assert_eq!(origin(&err), "表格导出");
    }
}
