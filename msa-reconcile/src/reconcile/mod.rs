pub mod pad;
pub mod restore;

pub use pad::{pad, PaddedPair};
pub use restore::{restore, RestoredSequence};

use log::{debug, info};
use serde::Serialize;

use crate::error::Result;
use crate::io::report::{parse_report, AlignmentReport};
use crate::util::symbols::Symbols;

/// 修复后的序列对及其标识，交给输出端序列化
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciled {
    pub id1: String,
    pub id2: String,
    #[serde(flatten)]
    pub pair: PaddedPair,
}

/// 报告解析 → 两侧残基恢复 → 两阶段填充
#[derive(Clone, Copy, Debug, Default)]
pub struct Reconciler {
    pub symbols: Symbols,
}

impl Reconciler {
    pub fn new(symbols: Symbols) -> Self {
        Self { symbols }
    }

    pub fn reconcile(&self, report_text: &str, original1: &[u8], original2: &[u8]) -> Result<PaddedPair> {
        let report = parse_report(report_text, &self.symbols)?;
        debug!(
            "parsed report: seq1 {}..={} ({} cols), seq2 {}..={} ({} cols)",
            report.first.start,
            report.first.end,
            report.first.body.len(),
            report.second.start,
            report.second.end,
            report.second.body.len()
        );
        self.reconcile_report(&report, original1, original2)
    }

    pub fn reconcile_report(
        &self,
        report: &AlignmentReport,
        original1: &[u8],
        original2: &[u8],
    ) -> Result<PaddedPair> {
        let seq1 = restore(original1, &report.first)?;
        let seq2 = restore(original2, &report.second)?;
        debug!("restored lengths: {} / {}", seq1.body.len(), seq2.body.len());

        let pair = pad(&seq1, &seq2, self.symbols.filler);
        info!(
            "reconciled pair: {} columns (originals {} / {})",
            pair.len(),
            original1.len(),
            original2.len()
        );
        Ok(pair)
    }
}

/// 使用默认间隙 / 填充字符修复一个报告
pub fn reconcile(report_text: &str, original1: &[u8], original2: &[u8]) -> Result<PaddedPair> {
    Reconciler::default().reconcile(report_text, original1, original2)
}
