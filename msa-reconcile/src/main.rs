use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

use msa_reconcile::batch::{self, RunOpt};
use msa_reconcile::io::msf::MsfOptions;
use msa_reconcile::io::writer::OutputFormat;
use msa_reconcile::util::symbols::{parse_symbol, Symbols};

#[derive(Parser, Debug)]
#[command(
    name = "msa-reconcile",
    author,
    version,
    about = "Restore a local protein alignment to full length and pad it into an MSA",
    arg_required_else_help = true
)]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile one alignment report against its two FASTA inputs
    Reconcile {
        /// FASTA with the first (untruncated) sequence
        fasta1: PathBuf,
        /// FASTA with the second (untruncated) sequence
        fasta2: PathBuf,
        /// Alignment report written by the aligner
        report: PathBuf,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Reconcile every pair listed in a tab-separated manifest
    Batch {
        /// Lines of `fasta1<TAB>fasta2<TAB>report<TAB>out`
        manifest: PathBuf,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Abort on the first failing pair instead of skipping it
        #[arg(long)]
        fail_fast: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// msf, fasta or json
    #[arg(short, long, default_value_t = OutputFormat::Msf)]
    format: OutputFormat,
    /// Method label written to the MSF preamble
    #[arg(long, default_value = "DEDAL")]
    method: String,
    /// Gap character used by the aligner
    #[arg(long = "gap-char", default_value = "-", value_parser = parse_symbol)]
    gap_char: u8,
    /// Filler for restored gaps and padding
    #[arg(long = "filler-char", default_value = ".", value_parser = parse_symbol)]
    filler_char: u8,
}

impl OutputArgs {
    fn into_opt(self) -> RunOpt {
        RunOpt {
            symbols: Symbols::new(self.gap_char, self.filler_char),
            format: self.format,
            msf: MsfOptions {
                method: self.method,
                timestamp: Some(chrono::Utc::now()),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        Commands::Reconcile { fasta1, fasta2, report, out, output } => {
            batch::run_pair(&fasta1, &fasta2, &report, out.as_deref(), &output.into_opt())
        }
        Commands::Batch { manifest, threads, fail_fast, output } => {
            run_batch(&manifest, threads, fail_fast, output.into_opt())
        }
    }
}

fn run_batch(manifest: &Path, threads: usize, fail_fast: bool, opt: RunOpt) -> Result<()> {
    let jobs = batch::read_manifest(manifest)?;
    info!("manifest: {} ({} pairs, {} threads)", manifest.display(), jobs.len(), threads);

    let summary = batch::run_batch(&jobs, &opt, threads, fail_fast)?;
    info!("done: {} reconciled, {} failed", summary.succeeded, summary.failed);

    if summary.failed > 0 {
        anyhow::bail!("{} of {} pairs failed", summary.failed, jobs.len());
    }
    Ok(())
}
