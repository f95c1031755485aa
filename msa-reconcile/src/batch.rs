//! 文件级流程与批量模式
//!
//! 每个序列对相互独立，批量模式在 rayon 线程池中并行处理；
//! 单个序列对失败时记录错误并跳过（`fail_fast` 时终止整个批次）。

use anyhow::{anyhow, Context, Result};
use log::{error, info};
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::io::fasta::read_first_record;
use crate::io::msf::MsfOptions;
use crate::io::writer::{write_reconciled, OutputFormat};
use crate::reconcile::{Reconciled, Reconciler};
use crate::util::symbols::Symbols;

#[derive(Debug, Clone, Default)]
pub struct RunOpt {
    pub symbols: Symbols,
    pub format: OutputFormat,
    pub msf: MsfOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub fasta1: PathBuf,
    pub fasta2: PathBuf,
    pub report: PathBuf,
    pub out: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// 读取两个 FASTA 与比对报告并完成修复
pub fn reconcile_files(fasta1: &Path, fasta2: &Path, report: &Path, symbols: Symbols) -> Result<Reconciled> {
    let rec1 = read_first_record(fasta1)?;
    let rec2 = read_first_record(fasta2)?;
    let text = std::fs::read_to_string(report)
        .with_context(|| format!("cannot read alignment report '{}'", report.display()))?;

    let pair = Reconciler::new(symbols)
        .reconcile(&text, &rec1.seq, &rec2.seq)
        .with_context(|| {
            format!(
                "cannot reconcile '{}' against '{}' / '{}'",
                report.display(),
                fasta1.display(),
                fasta2.display()
            )
        })?;

    Ok(Reconciled { id1: rec1.id, id2: rec2.id, pair })
}

/// 修复一个序列对并写出；修复成功后才创建输出文件
pub fn run_pair(fasta1: &Path, fasta2: &Path, report: &Path, out: Option<&Path>, opt: &RunOpt) -> Result<()> {
    let rec = reconcile_files(fasta1, fasta2, report, opt.symbols)?;

    let mut out_box: Box<dyn Write> = if let Some(p) = out {
        let fh = std::fs::File::create(p).with_context(|| format!("cannot create output '{}'", p.display()))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };
    write_reconciled(&mut *out_box, &rec, opt.format, &opt.msf)?;

    if let Some(p) = out {
        info!("{} / {}: wrote {} columns to {}", rec.id1, rec.id2, rec.pair.len(), p.display());
    }
    Ok(())
}

/// 解析批量清单：每行 `<fasta1>\t<fasta2>\t<report>\t<out>`，空行与 `#` 注释行跳过
pub fn parse_manifest(text: &str) -> Result<Vec<BatchJob>> {
    let mut jobs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < 4 || fields[..4].iter().any(|f| f.is_empty()) {
            return Err(anyhow!(
                "manifest line {}: expected 4 tab-separated fields (fasta1, fasta2, report, out)",
                i + 1
            ));
        }
        jobs.push(BatchJob {
            fasta1: PathBuf::from(fields[0]),
            fasta2: PathBuf::from(fields[1]),
            report: PathBuf::from(fields[2]),
            out: PathBuf::from(fields[3]),
        });
    }
    Ok(jobs)
}

pub fn read_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<BatchJob>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read manifest '{}'", path.display()))?;
    parse_manifest(&text).with_context(|| format!("invalid manifest '{}'", path.display()))
}

pub fn run_batch(jobs: &[BatchJob], opt: &RunOpt, threads: usize, fail_fast: bool) -> Result<BatchSummary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()
        .map_err(|e| anyhow!("cannot build thread pool: {}", e))?;

    let run = |job: &BatchJob| run_pair(&job.fasta1, &job.fasta2, &job.report, Some(job.out.as_path()), opt);

    pool.install(|| -> Result<BatchSummary> {
        if fail_fast {
            jobs.par_iter().map(run).collect::<Result<Vec<()>>>()?;
            return Ok(BatchSummary { succeeded: jobs.len(), failed: 0 });
        }

        let results: Vec<Result<()>> = jobs.par_iter().map(run).collect();
        let mut summary = BatchSummary::default();
        for (job, res) in jobs.iter().zip(results) {
            match res {
                Ok(()) => summary.succeeded += 1,
                Err(e) => {
                    error!("skipping {}: {:#}", job.report.display(), e);
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    })
}
