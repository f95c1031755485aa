use serde::Serialize;

use crate::error::{ReconcileError, Result};
use crate::io::report::AlignedRecord;

/// 恢复了两侧残基的完整序列，保留对齐起点供填充阶段使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestoredSequence {
    pub start: usize,
    pub body: Vec<u8>,
}

/// 把局部比对丢掉的前缀 `original[..start]` 和后缀 `original[end + 1..]`
/// 拼回对齐区域两侧。
///
/// 要求 `start <= end`，否则返回 `MalformedReport`；`end` 必须是 `original`
/// 内的合法下标，否则返回 `CoordinateMismatch`。坐标不会被截断修正。
pub fn restore(original: &[u8], record: &AlignedRecord) -> Result<RestoredSequence> {
    if record.start > record.end {
        return Err(ReconcileError::MalformedReport(format!(
            "record start {} is past end {}",
            record.start, record.end
        )));
    }
    let len = original.len();
    if record.end >= len {
        return Err(ReconcileError::CoordinateMismatch { end: record.end, len });
    }

    let prefix = &original[..record.start];
    let suffix = &original[record.end + 1..];

    let mut body = Vec::with_capacity(prefix.len() + record.body.len() + suffix.len());
    body.extend_from_slice(prefix);
    body.extend_from_slice(&record.body);
    body.extend_from_slice(suffix);

    Ok(RestoredSequence { start: record.start, body })
}
