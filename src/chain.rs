// Colinear chain extraction from position matches.
//
// Matches for one (query, target) pair are clustered by target-position gap,
// and each large enough cluster is reduced to its longest query-increasing
// subsequence. A cluster yields at most one overlap.

use crate::matches::Match;
use crate::overlap::Overlap;

#[derive(Debug, Clone, Copy)]
pub struct ChainConfig {
    /// Clusters with fewer matches are discarded.
    pub min_chain_length: u32,
    /// Maximum target-position gap between consecutive matches of a cluster.
    pub max_chain_gap_length: u32,
    pub kmer_len: u32,
}

#[path = "chain_test.rs"]
mod chain_test;

/// Longest strictly-increasing-by-query-position subsequence of `run` via
/// patience sort. `lower_bound` placement keeps the result deterministic when
/// query positions repeat.
fn longest_query_chain(run: &[Match]) -> Vec<Match> {
    if run.is_empty() {
        return Vec::new();
    }

    // tails[l] is the index of the match ending the best chain of length l+1.
    let mut tails: Vec<usize> = Vec::with_capacity(run.len());
    let mut prev = vec![usize::MAX; run.len()];
    for (idx, m) in run.iter().enumerate() {
        let slot = tails.partition_point(|&tail| run[tail].query_pos < m.query_pos);
        if slot == tails.len() {
            tails.push(idx);
        } else {
            tails[slot] = idx;
        }
        if slot > 0 {
            prev[idx] = tails[slot - 1];
        }
    }

    let mut dst = vec![Match::default(); tails.len()];
    let mut curr = tails[tails.len() - 1];
    for slot in dst.iter_mut().rev() {
        *slot = run[curr];
        curr = prev[curr];
    }
    dst
}

/// Clusters `matches` by target-position gap and emits one overlap per
/// cluster that holds at least `min_chain_length` matches.
///
/// All matches must share one `(query_id, target_id)` pair; the result is
/// independent of their input order.
pub fn chain(cfg: &ChainConfig, mut matches: Vec<Match>) -> Vec<Overlap> {
    if matches.is_empty() {
        return Vec::new();
    }
    let query_id = matches[0].query_id;
    let target_id = matches[0].target_id;

    matches.sort_unstable_by_key(|m| (m.target_pos, m.query_pos));
    matches.push(Match {
        query_id,
        query_pos: u32::MAX,
        target_id,
        target_pos: u32::MAX,
    });

    let mut dst = Vec::new();
    let mut cluster_start = 0usize;
    for i in 1..matches.len() {
        if matches[i].target_pos - matches[i - 1].target_pos <= cfg.max_chain_gap_length {
            continue;
        }
        if (i - cluster_start) as u32 >= cfg.min_chain_length {
            let chain = longest_query_chain(&matches[cluster_start..i]);
            let (first, last) = (chain[0], chain[chain.len() - 1]);
            dst.push(Overlap {
                query_id,
                query_start: first.query_pos,
                query_end: last.query_pos + cfg.kmer_len,
                target_id,
                target_start: first.target_pos,
                target_end: last.target_pos + cfg.kmer_len,
            });
        }
        cluster_start = i;
    }

    dst
}
