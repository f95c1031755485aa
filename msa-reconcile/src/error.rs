use thiserror::Error;

/// 对齐结果修复过程中的错误类型
///
/// 两类错误对当前序列对都是终止性的：输入是确定的，重试不会改变结果。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("malformed alignment report: {0}")]
    MalformedReport(String),
    #[error("alignment end offset {end} is outside the original sequence (length {len})")]
    CoordinateMismatch { end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
