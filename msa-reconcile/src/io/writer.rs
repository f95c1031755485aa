use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use super::msf::{write_msf, MsfOptions};
use crate::reconcile::Reconciled;

const FASTA_WIDTH: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Msf,
    Fasta,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "msf" => Ok(Self::Msf),
            "fasta" | "fa" => Ok(Self::Fasta),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}' (expected msf, fasta or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Msf => "msf",
            Self::Fasta => "fasta",
            Self::Json => "json",
        };
        f.write_str(s)
    }
}

pub fn write_reconciled<W: Write + ?Sized>(
    out: &mut W,
    rec: &Reconciled,
    format: OutputFormat,
    msf: &MsfOptions,
) -> Result<()> {
    match format {
        OutputFormat::Msf => write_msf(out, rec, msf)?,
        OutputFormat::Fasta => {
            write_fasta_record(out, &rec.id1, rec.pair.first())?;
            write_fasta_record(out, &rec.id2, rec.pair.second())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rec)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_fasta_record<W: Write + ?Sized>(out: &mut W, id: &str, seq: &[u8]) -> Result<()> {
    writeln!(out, ">{}", id)?;
    for line in seq.chunks(FASTA_WIDTH) {
        out.write_all(line)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::PaddedPair;

    fn sample() -> Reconciled {
        Reconciled {
            id1: "a".to_string(),
            id2: "b".to_string(),
            pair: PaddedPair::new(b"..MKV".to_vec(), b"AMKV.".to_vec()).unwrap(),
        }
    }

    #[test]
    fn format_from_str() {
        assert_eq!("MSF".parse::<OutputFormat>(), Ok(OutputFormat::Msf));
        assert_eq!("fa".parse::<OutputFormat>(), Ok(OutputFormat::Fasta));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("sam".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn write_aligned_fasta() {
        let mut out = Vec::new();
        write_reconciled(&mut out, &sample(), OutputFormat::Fasta, &MsfOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">a\n..MKV\n>b\nAMKV.\n");
    }

    #[test]
    fn write_json() {
        let mut out = Vec::new();
        write_reconciled(&mut out, &sample(), OutputFormat::Json, &MsfOptions::default()).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["id1"], "a");
        assert_eq!(v["first"], "..MKV");
        assert_eq!(v["second"], "AMKV.");
    }
}
