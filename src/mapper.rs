// Per-query best overlap search against one reverse complement index.

use std::ops::Range;

use rayon::prelude::*;

use crate::chain::{chain, ChainConfig};
use crate::index::RcIndex;
use crate::matches::Match;
use crate::minimize::minimize;
use crate::overlap::{overlap_length, Overlap};
use crate::pair_opt::PairOpt;
use crate::sequence::Read;

// Chaining parameters for read-vs-read mapping.
pub const MIN_CHAIN_LENGTH: u32 = 4;
pub const MAX_CHAIN_GAP_LENGTH: u32 = 800;

/// Maps each read in `queries` against `index` and returns the single best
/// overlap found for every query that produced one.
///
/// `reads` must be the full id-indexed collection; `queries` selects the
/// slice of it to map. Queries run in parallel, and the returned overlaps
/// keep ascending query order.
pub fn map_reads(
    opt: &PairOpt,
    reads: &[Read],
    queries: Range<usize>,
    index: &RcIndex,
    threshold: u32,
) -> Vec<Overlap> {
    reads[queries]
        .par_iter()
        .filter_map(|query| best_overlap_for_query(opt, reads, query, index, threshold))
        .collect()
}

/// Gathers matches between the forward strand of `query` and the index,
/// skipping over-frequent values, self matches, targets with a smaller id
/// and targets of incompatible length.
fn collect_matches(
    opt: &PairOpt,
    reads: &[Read],
    query: &Read,
    index: &RcIndex,
    threshold: u32,
) -> Vec<Match> {
    let sketch = minimize(&opt.minimize_config(), &query.inflate());

    let mut dst = Vec::new();
    for kmer in &sketch {
        let targets = match index.find(kmer.value) {
            Some(targets) => targets,
            None => continue,
        };
        if targets.len() as u32 >= threshold {
            continue;
        }
        for target in targets {
            if query.id >= target.read_id {
                continue;
            }
            let target_len = reads[target.read_id as usize].len();
            let short = query.len().min(target_len);
            let long = query.len().max(target_len);
            if (short as f64) / (long as f64) < 1.0 - opt.alpha_p {
                continue;
            }
            dst.push(Match {
                query_id: query.id,
                query_pos: kmer.position,
                target_id: target.read_id,
                target_pos: target.kmer.position,
            });
        }
    }
    dst
}

/// Both spans must cover more than `beta_p` of their read.
fn is_strong(opt: &PairOpt, reads: &[Read], ovlp: &Overlap) -> bool {
    let query_len = reads[ovlp.query_id as usize].len() as f64;
    let target_len = reads[ovlp.target_id as usize].len() as f64;
    (ovlp.query_end - ovlp.query_start) as f64 > opt.beta_p * query_len
        && (ovlp.target_end - ovlp.target_start) as f64 > opt.beta_p * target_len
}

fn best_overlap_for_query(
    opt: &PairOpt,
    reads: &[Read],
    query: &Read,
    index: &RcIndex,
    threshold: u32,
) -> Option<Overlap> {
    let mut matches = collect_matches(opt, reads, query, index, threshold);
    if matches.is_empty() {
        return None;
    }

    // Stable sort: emission order within a target run is part of the
    // deterministic-output contract.
    matches.sort_by_key(|m| m.target_id);
    let mut runs: Vec<Vec<Match>> = Vec::new();
    let mut start = 0usize;
    for i in 1..=matches.len() {
        if i == matches.len() || matches[i].target_id != matches[start].target_id {
            runs.push(matches[start..i].to_vec());
            start = i;
        }
    }

    let cfg = ChainConfig {
        min_chain_length: MIN_CHAIN_LENGTH,
        max_chain_gap_length: MAX_CHAIN_GAP_LENGTH,
        kmer_len: opt.kmer_len,
    };
    let candidates: Vec<Option<Overlap>> = runs
        .into_par_iter()
        .map(|run| {
            chain(&cfg, run)
                .into_iter()
                .next()
                .filter(|ovlp| is_strong(opt, reads, ovlp))
        })
        .collect();

    // First occurrence wins ties, so replacement is strictly-greater only.
    let mut best: Option<Overlap> = None;
    for ovlp in candidates.into_iter().flatten() {
        let better = match &best {
            None => true,
            Some(current) => overlap_length(&ovlp) > overlap_length(current),
        };
        if better {
            best = Some(ovlp);
        }
    }
    best
}
