// Minimizer match generation between two sketches.

use crate::minimize::KMer;

/// A pair of positions at which two reads share a minimizer value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Match {
    pub query_id: u32,
    pub query_pos: u32,
    pub target_id: u32,
    pub target_pos: u32,
}

#[path = "matches_test.rs"]
mod matches_test;

fn run_end(kmers: &[KMer], start: usize) -> usize {
    let value = kmers[start].value;
    let mut end = start + 1;
    while end < kmers.len() && kmers[end].value == value {
        end += 1;
    }
    end
}

/// Emits every `(query_pos, target_pos)` pair at which the two sketches share
/// a minimizer value, tagged with the given read ids.
///
/// Both sketches are sorted by `(value, position)` and walked with two
/// cursors; each equal-value run contributes its full cross product. Output
/// order follows ascending value, then query position, then target position;
/// callers that need another order sort explicitly.
pub fn make_matches(
    query_id: u32,
    query_sketch: &[KMer],
    target_id: u32,
    target_sketch: &[KMer],
) -> Vec<Match> {
    let mut query = query_sketch.to_vec();
    let mut target = target_sketch.to_vec();
    query.sort_unstable();
    target.sort_unstable();

    let mut dst = Vec::new();
    let (mut query_idx, mut target_idx) = (0usize, 0usize);
    while query_idx < query.len() && target_idx < target.len() {
        if query[query_idx].value < target[target_idx].value {
            query_idx += 1;
            continue;
        }
        if query[query_idx].value > target[target_idx].value {
            target_idx += 1;
            continue;
        }

        let query_end = run_end(&query, query_idx);
        let target_end = run_end(&target, target_idx);
        for query_kmer in &query[query_idx..query_end] {
            for target_kmer in &target[target_idx..target_end] {
                dst.push(Match {
                    query_id,
                    query_pos: query_kmer.position,
                    target_id,
                    target_pos: target_kmer.position,
                });
            }
        }
        query_idx = query_end;
        target_idx = target_end;
    }

    dst
}
