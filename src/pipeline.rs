// Batched all-vs-all driver and pair resolution.
//
// Reads are sorted by length and walked in length-homogeneous batches. Each
// batch is indexed once; every read from the previous batch start onward is
// mapped against it, and a per-read best overlap table is folded across
// batches. The table bounds resident memory to one index plus the reads.

use crate::index::{build_rc_index, frequency_threshold};
use crate::mapper::map_reads;
use crate::overlap::{overlap_error, Overlap};
use crate::pair_opt::PairOpt;
use crate::sequence::Read;

/// Finds all mutually-best reverse complement read pairs.
///
/// Returns deduplicated `(name, name)` pairs, each pair lexicographically
/// ordered internally, the vector sorted.
pub fn find_reverse_complement_pairs(opt: &PairOpt, mut reads: Vec<Read>) -> Vec<(String, String)> {
    // Ascending length makes the length-ratio guard a contiguous window and
    // lets a batch close once its spread saturates the guard.
    reads.sort_by_key(|read| read.len());
    for (id, read) in reads.iter_mut().enumerate() {
        read.id = id as u32;
    }

    let minimize_cfg = opt.minimize_config();
    let mut best: Vec<Option<Overlap>> = vec![None; reads.len()];

    let mut batch_start = 0usize;
    let mut query_start = 0usize;
    let mut batch_bases = 0u64;

    for j in 0..reads.len() {
        batch_bases += reads[j].len() as u64;

        let spread_saturated = ((1.0 - opt.alpha_p) * reads[j].len() as f64).floor() as u64
            >= reads[batch_start].len() as u64;
        if batch_bases < opt.index_size_cap && j + 1 < reads.len() && !spread_saturated {
            continue;
        }

        let index = build_rc_index(&minimize_cfg, &reads[batch_start..=j]);
        let threshold = frequency_threshold(&index, opt.filter_freq);
        log::info!(
            "Indexed reads {}..={} ({} bp, {} minimizers)",
            batch_start,
            j,
            batch_bases,
            index.targets().len()
        );

        let overlaps = map_reads(opt, &reads, query_start..j + 1, &index, threshold);
        log::debug!(
            "Mapped {} queries, {} candidate overlaps",
            j + 1 - query_start,
            overlaps.len()
        );
        for ovlp in &overlaps {
            update_best(&mut best, ovlp);
        }

        query_start = batch_start;
        batch_start = j + 1;
        batch_bases = 0;
    }

    resolve_pairs(&reads, &best)
}

/// Folds one overlap into the best table, at both the query and the target
/// slot. A slot is replaced only on strictly smaller overlap error, so the
/// table improves monotonically across batches.
fn update_best(best: &mut [Option<Overlap>], ovlp: &Overlap) {
    let error = overlap_error(ovlp);
    for id in [ovlp.query_id, ovlp.target_id] {
        let slot = &mut best[id as usize];
        let replace = match slot {
            None => true,
            Some(stored) => error < overlap_error(stored),
        };
        if replace {
            *slot = Some(*ovlp);
        }
    }
}

/// Reduces the best overlap table to mutually-best name pairs.
///
/// A pair is emitted once, with the lexicographically smaller name first;
/// the result is sorted and deduplicated. Every name appears in at most one
/// pair.
pub fn resolve_pairs(reads: &[Read], best: &[Option<Overlap>]) -> Vec<(String, String)> {
    let partner = |id: u32| {
        best[id as usize].map(|ovlp| {
            if ovlp.query_id == id {
                ovlp.target_id
            } else {
                ovlp.query_id
            }
        })
    };

    let mut dst = Vec::new();
    for id in 0..reads.len() as u32 {
        let mate = match partner(id) {
            Some(mate) => mate,
            None => continue,
        };
        if id >= mate || partner(mate) != Some(id) {
            continue;
        }
        let lhs = &reads[id as usize].name;
        let rhs = &reads[mate as usize].name;
        if lhs <= rhs {
            dst.push((lhs.clone(), rhs.clone()));
        } else {
            dst.push((rhs.clone(), lhs.clone()));
        }
    }
    dst.sort_unstable();
    dst.dedup();
    dst
}
