//! GCG MSF 输出
//!
//! 交错排列，每行 50 列、每 10 列一组；序列校验和使用 GCG 算法。

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::io::Write;

use crate::reconcile::Reconciled;

const LINE_WIDTH: usize = 50;
const GROUP_WIDTH: usize = 10;

#[derive(Debug, Clone)]
pub struct MsfOptions {
    /// 写入文件头的方法名（如 "DEDAL"）
    pub method: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Default for MsfOptions {
    fn default() -> Self {
        Self { method: "DEDAL".to_string(), timestamp: None }
    }
}

/// 单条序列的 GCG 校验和
pub fn gcg_checksum(seq: &[u8]) -> u32 {
    let mut check: u32 = 0;
    for (i, &b) in seq.iter().enumerate() {
        check += ((i % 57) as u32 + 1) * b.to_ascii_uppercase() as u32;
        check %= 10_000;
    }
    check
}

pub fn write_msf<W: Write + ?Sized>(out: &mut W, rec: &Reconciled, opt: &MsfOptions) -> Result<()> {
    let seqs: [(&str, &[u8]); 2] = [
        (rec.id1.as_str(), rec.pair.first()),
        (rec.id2.as_str(), rec.pair.second()),
    ];
    let len = rec.pair.len();
    let checks: Vec<u32> = seqs.iter().map(|(_, s)| gcg_checksum(s)).collect();
    let total = checks.iter().sum::<u32>() % 10_000;
    let name_w = seqs.iter().map(|(id, _)| id.len()).max().unwrap_or(0).max(10);

    writeln!(out, "PileUp")?;
    writeln!(out)?;
    writeln!(out, " {} alignment", opt.method)?;
    writeln!(out)?;
    match opt.timestamp {
        Some(ts) => writeln!(
            out,
            "   MSF: {}  Type: P  {}  Check: {}  ..",
            len,
            ts.format("%B %d, %Y %H:%M"),
            total
        )?,
        None => writeln!(out, "   MSF: {}  Type: P  Check: {}  ..", len, total)?,
    }
    writeln!(out)?;
    for ((id, _), check) in seqs.iter().zip(&checks) {
        writeln!(
            out,
            " Name: {:<w$}  Len: {:>5}  Check: {:>4}  Weight: 1.00",
            id,
            len,
            check,
            w = name_w
        )?;
    }
    writeln!(out)?;
    writeln!(out, "//")?;

    for block_start in (0..len).step_by(LINE_WIDTH) {
        let block_end = (block_start + LINE_WIDTH).min(len);
        writeln!(out)?;
        for (id, seq) in &seqs {
            let groups: Vec<String> = seq[block_start..block_end]
                .chunks(GROUP_WIDTH)
                .map(|g| String::from_utf8_lossy(g).into_owned())
                .collect();
            writeln!(out, "{:<w$}  {}", id, groups.join(" "), w = name_w)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::PaddedPair;
    use chrono::TimeZone;

    fn sample(len: usize) -> Reconciled {
        Reconciled {
            id1: "query".to_string(),
            id2: "target".to_string(),
            pair: PaddedPair::new(vec![b'A'; len], vec![b'.'; len]).unwrap(),
        }
    }

    #[test]
    fn checksum_known_values() {
        assert_eq!(gcg_checksum(b""), 0);
        assert_eq!(gcg_checksum(b"A"), 65);
        assert_eq!(gcg_checksum(b"ab"), 65 + 2 * 66);
        // position weights wrap every 57 residues
        let s = vec![b'A'; 58];
        let expected = ((1..=57u32).sum::<u32>() * 65 + 65) % 10_000;
        assert_eq!(gcg_checksum(&s), expected);
    }

    #[test]
    fn msf_header_and_blocks() {
        let rec = sample(55);
        let opt = MsfOptions {
            method: "DEDAL".to_string(),
            timestamp: Some(Utc.with_ymd_and_hms(2023, 2, 21, 9, 30, 0).unwrap()),
        };
        let mut out = Vec::new();
        write_msf(&mut out, &rec, &opt).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("PileUp\n"));
        assert!(text.contains(" DEDAL alignment"));
        assert!(text.contains("MSF: 55  Type: P  February 21, 2023 09:30  Check: "));
        assert!(text.contains(" Name: query       Len:    55"));
        assert!(text.contains("\n//\n"));

        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("query ")).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].split_whitespace().count(), 1 + 5);
        assert!(rows[1].ends_with("AAAAA"));
    }

    #[test]
    fn msf_without_timestamp() {
        let mut out = Vec::new();
        write_msf(&mut out, &sample(3), &MsfOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("   MSF: 3  Type: P  Check: "));
        assert!(text.contains("target      ..."));
    }
}
