pub mod chain; // target-gap clustering and longest-chain extraction
pub mod fastx_reader; // FASTA/FASTQ loading with gzip auto-detection
pub mod index; // reverse complement minimizer index over a read batch
pub mod mapper; // per-query best overlap search
pub mod matches; // minimizer match generation between two sketches
pub mod minimize; // sliding-window minimizer sketching
pub mod overlap; // overlap primitives
pub mod pair_opt; // run options
pub mod pipeline; // batched all-vs-all driver and pair resolution
pub mod sequence; // 2-bit packed read storage
pub mod utils;
