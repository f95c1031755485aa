use serde::Serialize;

use super::restore::RestoredSequence;

/// 等长、按列可比的序列对
///
/// 字段私有，只能通过 [`pad`] 或 [`PaddedPair::new`] 构造，两条序列始终等长。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaddedPair {
    #[serde(serialize_with = "as_str")]
    first: Vec<u8>,
    #[serde(serialize_with = "as_str")]
    second: Vec<u8>,
}

impl PaddedPair {
    /// 由已等长的两条序列构造；长度不同时返回 `None`
    pub fn new(first: Vec<u8>, second: Vec<u8>) -> Option<Self> {
        if first.len() != second.len() {
            return None;
        }
        Some(Self { first, second })
    }

    pub fn first(&self) -> &[u8] {
        &self.first
    }

    pub fn second(&self) -> &[u8] {
        &self.second
    }

    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.first, self.second)
    }

    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}

fn as_str<S: serde::Serializer>(seq: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&String::from_utf8_lossy(seq))
}

/// 两阶段填充：先按对齐起点在前端补齐，再在末尾补齐到相同长度。
pub fn pad(seq1: &RestoredSequence, seq2: &RestoredSequence, filler: u8) -> PaddedPair {
    let mut first = Vec::new();
    let mut second = Vec::new();

    // leading: shift the sequence whose aligned start is earlier
    if seq1.start < seq2.start {
        first.resize(seq2.start - seq1.start, filler);
    } else if seq2.start < seq1.start {
        second.resize(seq1.start - seq2.start, filler);
    }
    first.extend_from_slice(&seq1.body);
    second.extend_from_slice(&seq2.body);

    // trailing
    let target = first.len().max(second.len());
    first.resize(target, filler);
    second.resize(target, filler);

    PaddedPair { first, second }
}
