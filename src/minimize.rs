// Sliding-window minimizer sketching.
//
// A window of `window_len` consecutive k-mers is slid along the sequence and
// the k-mer with the smallest mixed hash in each window is emitted. The hash
// only orders the window; emitted `KMer`s carry the raw 2-bit encoded value.

use std::collections::VecDeque;

use crate::sequence::NUC_CODE_TABLE;

/// A k-mer occurrence: 0-based offset in the source string plus the 2-bit
/// encoded k-mer value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KMer {
    pub position: u32,
    pub value: u64,
}

impl Ord for KMer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.value, self.position).cmp(&(other.value, other.position))
    }
}

impl PartialOrd for KMer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinimizeConfig {
    pub kmer_len: u32,   // 1..=32
    pub window_len: u32, // >= 1
    pub minhash: bool,   // keep only the len/k smallest values
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        MinimizeConfig {
            kmer_len: 15,
            window_len: 5,
            minhash: false,
        }
    }
}

#[path = "minimize_test.rs"]
mod minimize_test;

/// Invertible integer mix (Thomas Wang), truncated to the 2k-bit k-mer space.
fn mix_hash(val: u64, mask: u64) -> u64 {
    let mut h = (!val).wrapping_add(val << 21) & mask;
    h ^= h >> 24;
    h = (h.wrapping_add(h << 3)).wrapping_add(h << 8) & mask;
    h ^= h >> 14;
    h = (h.wrapping_add(h << 2)).wrapping_add(h << 4) & mask;
    h ^= h >> 28;
    h = h.wrapping_add(h << 31) & mask;
    h
}

/// Computes the minimizer sketch of `sequence` under `cfg`.
///
/// Output positions are strictly increasing and the same `(position, value)`
/// is never emitted twice in a row. Equal hashes resolve to the leftmost
/// k-mer in the window. Bases outside {A, C, G, T} are a precondition
/// violation: the call still returns, but the sketch is meaningless.
pub fn minimize(cfg: &MinimizeConfig, sequence: &[u8]) -> Vec<KMer> {
    let k = cfg.kmer_len as usize;
    let w = cfg.window_len as usize;
    let mask = if k >= 32 {
        u64::MAX
    } else {
        (1u64 << (2 * k)) - 1
    };

    let mut dst = Vec::new();
    let mut window: VecDeque<(u64, KMer)> = VecDeque::new();
    let mut kmer = 0u64;

    for (i, &base) in sequence.iter().enumerate() {
        kmer = ((kmer << 2) | NUC_CODE_TABLE[base as usize] as u64) & mask;

        if i + 1 >= k + w {
            let window_start = (i - (w + k - 1)) as u32;
            if let Some(front) = window.front() {
                if front.1.position < window_start {
                    window.pop_front();
                }
            }
            if let Some(front) = window.front() {
                if dst.last() != Some(&front.1) {
                    dst.push(front.1);
                }
            }
        }

        if i + 1 >= k {
            let hash = mix_hash(kmer, mask);
            while let Some(&(back_hash, _)) = window.back() {
                if back_hash <= hash {
                    break;
                }
                window.pop_back();
            }
            window.push_back((
                hash,
                KMer {
                    position: (i + 1 - k) as u32,
                    value: kmer,
                },
            ));
        }
    }

    if cfg.minhash {
        dst.sort_unstable();
        dst.truncate(sequence.len() / k);
        dst.sort_unstable_by_key(|kmer| kmer.position);
    }

    dst
}
