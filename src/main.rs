use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use ferrous_pair::{fastx_reader, pair_opt::PairOpt, pipeline, utils};

#[derive(Parser)]
#[command(name = "ferrous-pair")]
#[command(about = "FerrousPair - reverse complement read pair detection for DNA sequencing reads", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Input reads (.fa, .fasta, .fq, .fastq, optionally .gz)
    #[arg(value_name = "READS")]
    input: PathBuf,

    /// Number of threads
    #[arg(short = 't', long, value_name = "INT", default_value = "1")]
    threads: usize,

    /// Length-ratio tolerance; reads whose short/long length ratio is below 1 - alpha are never paired
    #[arg(short = 'a', long, value_name = "FLOAT", default_value = "0.10")]
    alpha: f64,

    /// Minimum fraction of each read an overlap must cover
    #[arg(short = 'b', long, value_name = "FLOAT", default_value = "0.90")]
    beta: f64,

    /// K-mer length
    #[arg(short = 'k', long, value_name = "INT", default_value = "15")]
    kmer_length: u32,

    /// Minimizer window length
    #[arg(short = 'w', long, value_name = "INT", default_value = "5")]
    window_length: u32,

    /// Fraction of most frequent minimizer values to skip when probing the index
    #[arg(short = 'f', long, value_name = "FLOAT", default_value = "0.0002")]
    frequency: f64,

    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut opt = PairOpt::default();
    opt.alpha_p = cli.alpha;
    opt.beta_p = cli.beta;
    opt.kmer_len = cli.kmer_length;
    opt.window_len = cli.window_length;
    opt.filter_freq = cli.frequency;

    if let Err(e) = opt.validate() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    // Sanity checks on the thread count before building the global pool
    let mut num_threads = cli.threads;
    if num_threads < 1 {
        log::warn!("Invalid thread count {}, using 1 thread", num_threads);
        num_threads = 1;
    }
    let max_threads = num_cpus::get() * 2;
    if num_threads > max_threads {
        log::warn!(
            "Thread count {} exceeds recommended maximum {}, capping at {}",
            num_threads,
            max_threads,
            max_threads
        );
        num_threads = max_threads;
    }
    opt.n_threads = num_threads;

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        log::warn!(
            "Failed to configure thread pool: {} (may already be initialized)",
            e
        );
    }
    log::info!(
        "Using {} {}",
        num_threads,
        if num_threads == 1 { "thread" } else { "threads" }
    );

    let start_real = utils::realtime();

    let reads = match fastx_reader::load_reads(&cli.input) {
        Ok(reads) => reads,
        Err(e) => {
            log::error!("Error loading reads from {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };
    let total_bases: u64 = reads.iter().map(|r| r.len() as u64).sum();
    log::info!("Read {} sequences ({} bp)", reads.len(), total_bases);

    let pairs = pipeline::find_reverse_complement_pairs(&opt, reads);
    log::info!("Found {} reverse complement pairs", pairs.len());

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for (lhs, rhs) in &pairs {
        if let Err(e) = writeln!(writer, "{},{}", lhs, rhs) {
            log::error!("Error writing output: {}", e);
            std::process::exit(1);
        }
    }
    if let Err(e) = writer.flush() {
        log::error!("Error writing output: {}", e);
        std::process::exit(1);
    }

    log::info!(
        "Real time: {:.3} sec; CPU: {:.3} sec; Peak RSS: {:.3} GB",
        utils::realtime() - start_real,
        utils::cputime(),
        utils::peak_rss_bytes() as f64 / (1024.0 * 1024.0 * 1024.0)
    );
}
