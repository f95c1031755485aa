//! 比对报告解析
//!
//! 报告是一个三行块：
//!
//! ```text
//! <start1> <gapped_body1> <end1>
//! <annotation line, ignored>
//! <start2> <gapped_body2> <end2>
//! ```
//!
//! `start` / `end` 是原始序列中的 0 基坐标（`end` 为闭区间）。只读取第一个块，
//! 其后的行全部忽略。

use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::{ReconcileError, Result};
use crate::util::symbols::Symbols;

/// 每个报告块的行数：序列 1、注释行、序列 2
pub const BLOCK_LINES: usize = 3;

/// 局部比对中一条序列的记录
///
/// `body` 中的间隙符号已被替换为填充字符。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedRecord {
    pub start: usize,
    pub body: Vec<u8>,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    pub first: AlignedRecord,
    pub second: AlignedRecord,
}

impl FromStr for AlignmentReport {
    type Err = ReconcileError;

    fn from_str(s: &str) -> Result<Self> {
        parse_report(s, &Symbols::default())
    }
}

pub fn parse_report(text: &str, symbols: &Symbols) -> Result<AlignmentReport> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < BLOCK_LINES {
        return Err(ReconcileError::MalformedReport(format!(
            "expected at least {} lines, found {}",
            BLOCK_LINES,
            lines.len()
        )));
    }
    if lines.len() > BLOCK_LINES {
        debug!(
            "alignment report has {} lines; only the first block is used",
            lines.len()
        );
    }

    let first = parse_record_line(lines[0], 1, symbols)?;
    let second = parse_record_line(lines[2], 3, symbols)?;
    Ok(AlignmentReport { first, second })
}

fn parse_record_line(line: &str, line_no: usize, symbols: &Symbols) -> Result<AlignedRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ReconcileError::MalformedReport(format!(
            "line {}: expected '<start> <body> <end>', found {} token(s)",
            line_no,
            tokens.len()
        )));
    }

    let start = parse_offset(tokens[0], line_no, "start")?;
    let end = parse_offset(tokens[2], line_no, "end")?;
    if start > end {
        return Err(ReconcileError::MalformedReport(format!(
            "line {}: start {} is past end {}",
            line_no, start, end
        )));
    }

    Ok(AlignedRecord {
        start,
        body: symbols.translate_gaps(tokens[1].as_bytes()),
        end,
    })
}

fn parse_offset(token: &str, line_no: usize, what: &str) -> Result<usize> {
    token.parse::<usize>().map_err(|_| {
        ReconcileError::MalformedReport(format!(
            "line {}: {} offset '{}' is not a non-negative integer",
            line_no, what, token
        ))
    })
}
