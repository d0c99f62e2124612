#[cfg(test)]
mod tests {
    use crate::minimize::{minimize, KMer, MinimizeConfig};

    const TEST_SEQUENCE: &[u8] = b"GCGTGCCATAACCACCATATTCGACGATTCAAC";

    fn cfg(kmer_len: u32, window_len: u32) -> MinimizeConfig {
        MinimizeConfig {
            kmer_len,
            window_len,
            minhash: false,
        }
    }

    fn kmer(position: u32, value: u64) -> KMer {
        KMer { position, value }
    }

    // kmer length greater than the window length
    #[test]
    fn test_minimize_k15_w5() {
        let expected = [
            kmer(1, 462733637),
            kmer(5, 348210483),
            kmer(6, 319100111),
            kmer(7, 202658621),
            kmer(8, 810634486),
            kmer(12, 290256408),
            kmer(14, 349135247),
            kmer(15, 322799165),
        ];
        assert_eq!(minimize(&cfg(15, 5), TEST_SEQUENCE), expected);
    }

    // kmer length equal to the window length
    #[test]
    fn test_minimize_k7_w7() {
        let expected = [
            kmer(5, 5313),
            kmer(10, 1300),
            kmer(14, 5327),
            kmer(19, 15750),
        ];
        assert_eq!(minimize(&cfg(7, 7), TEST_SEQUENCE), expected);
    }

    // kmer length less than the window length
    #[test]
    fn test_minimize_k5_w7() {
        let expected = [
            kmer(0, 622),
            kmer(5, 332),
            kmer(11, 325),
            kmer(14, 332),
            kmer(15, 307),
            kmer(21, 390),
        ];
        assert_eq!(minimize(&cfg(5, 7), TEST_SEQUENCE), expected);
    }

    #[test]
    fn test_minimize_is_deterministic() {
        let first = minimize(&cfg(15, 5), TEST_SEQUENCE);
        let second = minimize(&cfg(15, 5), TEST_SEQUENCE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_positions_strictly_increase() {
        for (k, w) in [(3, 2), (5, 7), (7, 7), (15, 5)] {
            let minimizers = minimize(&cfg(k, w), TEST_SEQUENCE);
            for pair in minimizers.windows(2) {
                assert!(pair[0].position < pair[1].position, "k={} w={}", k, w);
            }
        }
    }

    #[test]
    fn test_values_fit_two_k_bits() {
        for (k, w) in [(3, 2), (5, 7), (15, 5)] {
            let mask = (1u64 << (2 * k)) - 1;
            for minimizer in minimize(&cfg(k, w), TEST_SEQUENCE) {
                assert_eq!(minimizer.value & !mask, 0);
            }
        }
    }

    #[test]
    fn test_sequence_shorter_than_window_is_empty() {
        assert!(minimize(&cfg(15, 5), b"").is_empty());
        assert!(minimize(&cfg(15, 5), b"ACGT").is_empty());
        // one base short of the first full window
        assert!(minimize(&cfg(15, 5), &TEST_SEQUENCE[..19]).is_empty());
        assert_eq!(minimize(&cfg(15, 5), &TEST_SEQUENCE[..20]).len(), 1);
    }

    #[test]
    fn test_window_one_emits_every_kmer() {
        let minimizers = minimize(&cfg(5, 1), TEST_SEQUENCE);
        assert_eq!(minimizers.len(), TEST_SEQUENCE.len() - 5);
        for (i, minimizer) in minimizers.iter().enumerate() {
            assert_eq!(minimizer.position, i as u32);
        }
    }

    #[test]
    fn test_minhash_truncates_and_restores_position_order() {
        let full = minimize(&cfg(5, 1), TEST_SEQUENCE);
        let reduced = minimize(
            &MinimizeConfig {
                kmer_len: 5,
                window_len: 1,
                minhash: true,
            },
            TEST_SEQUENCE,
        );
        assert_eq!(reduced.len(), TEST_SEQUENCE.len() / 5);
        for pair in reduced.windows(2) {
            assert!(pair[0].position <= pair[1].position);
        }
        for minimizer in &reduced {
            assert!(full.contains(minimizer));
        }
    }
}
