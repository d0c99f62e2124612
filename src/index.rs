// Reverse complement minimizer index over a batch of reads.
//
// Every read in the batch is reverse complemented and sketched; the resulting
// (read, k-mer) entries are sorted by value into one contiguous array, and a
// hash table maps each distinct value to its run. Low frequency values are
// the common case, so a singleton run is stored inline instead of as an
// offset into the array.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::minimize::{minimize, KMer, MinimizeConfig};
use crate::sequence::Read;

/// One k-mer occurrence on a batch read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub read_id: u32,
    pub kmer: KMer,
}

/// Where the occurrences of one minimizer value live: inline for singletons,
/// offset + count into the sorted target array otherwise. `count >= 2` for
/// the `Many` arm.
#[derive(Debug, Clone, Copy)]
pub enum KMerLocator {
    Single(Target),
    Many { offset: u32, count: u32 },
}

impl KMerLocator {
    pub fn count(&self) -> u32 {
        match self {
            KMerLocator::Single(_) => 1,
            KMerLocator::Many { count, .. } => *count,
        }
    }
}

/// The locator map and the target array it points into, bundled so the two
/// are built and released together.
pub struct RcIndex {
    locations: FxHashMap<u64, KMerLocator>,
    kmers: Vec<Target>,
}

#[path = "index_test.rs"]
mod index_test;

impl RcIndex {
    /// All occurrences of `value`, or `None` if the batch never saw it.
    pub fn find(&self, value: u64) -> Option<&[Target]> {
        match self.locations.get(&value)? {
            KMerLocator::Single(target) => Some(std::slice::from_ref(target)),
            KMerLocator::Many { offset, count } => {
                Some(&self.kmers[*offset as usize..(*offset + *count) as usize])
            }
        }
    }

    /// Occurrence count of `value`; 0 if absent.
    pub fn count(&self, value: u64) -> u32 {
        self.locations.get(&value).map_or(0, KMerLocator::count)
    }

    /// Number of distinct minimizer values.
    pub fn num_values(&self) -> usize {
        self.locations.len()
    }

    /// The sorted target array backing the `Many` locators.
    pub fn targets(&self) -> &[Target] {
        &self.kmers
    }
}

/// Builds the reverse complement minimizer index over `reads`.
///
/// Sketching runs in parallel per read; the per-read scratch vectors are
/// consumed one by one while concatenating so peak memory stays close to the
/// final array size. The sort key includes read id and position so the array
/// layout does not depend on the thread count.
pub fn build_rc_index(cfg: &MinimizeConfig, reads: &[Read]) -> RcIndex {
    let scratch: Vec<Vec<Target>> = reads
        .par_iter()
        .map(|read| {
            let rc = read.inflate_rc();
            minimize(cfg, &rc)
                .into_iter()
                .map(|kmer| Target {
                    read_id: read.id,
                    kmer,
                })
                .collect()
        })
        .collect();

    let total: usize = scratch.iter().map(Vec::len).sum();
    let mut kmers: Vec<Target> = Vec::with_capacity(total);
    for mut targets in scratch {
        kmers.append(&mut targets);
    }

    kmers.par_sort_unstable_by_key(|t| (t.kmer.value, t.read_id, t.kmer.position));

    let mut locations = FxHashMap::default();
    let mut i = 0usize;
    while i < kmers.len() {
        let mut j = i + 1;
        while j < kmers.len() && kmers[j].kmer.value == kmers[i].kmer.value {
            j += 1;
        }
        let locator = if j - i == 1 {
            KMerLocator::Single(kmers[i])
        } else {
            KMerLocator::Many {
                offset: i as u32,
                count: (j - i) as u32,
            }
        };
        locations.insert(kmers[i].kmer.value, locator);
        i = j;
    }

    RcIndex { locations, kmers }
}

/// Occurrence cutoff above which probes should skip a minimizer value.
///
/// Selects the count at the `1 - f` quantile of the distinct-value count
/// distribution and returns one past it, so values with a count at or above
/// the result form roughly the top `f` fraction. Indexes with two or fewer
/// distinct values are never filtered.
pub fn frequency_threshold(index: &RcIndex, f: f64) -> u32 {
    if index.num_values() <= 2 {
        return u32::MAX;
    }
    let mut counts: Vec<u32> = index.locations.values().map(KMerLocator::count).collect();
    let nth = ((counts.len() as f64 * (1.0 - f)) as usize).min(counts.len() - 1);
    let (_, threshold, _) = counts.select_nth_unstable(nth);
    threshold.saturating_add(1)
}
