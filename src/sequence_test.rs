#[cfg(test)]
mod tests {
    use crate::sequence::{Read, NUC_CODE_TABLE};

    const TEST_SEQUENCE: &[u8] = b"GCGTGCCATAACCACCATATTCGACGATTCAAC";

    #[test]
    fn test_inflate_round_trip() {
        let read = Read::new("r".to_string(), TEST_SEQUENCE);
        assert_eq!(read.len(), TEST_SEQUENCE.len() as u32);
        assert_eq!(read.inflate(), TEST_SEQUENCE);
    }

    #[test]
    fn test_round_trip_lengths_not_multiple_of_four() {
        for len in 0..9 {
            let seq = &b"ACGTACGTA"[..len];
            let read = Read::new("r".to_string(), seq);
            assert_eq!(read.inflate(), seq);
        }
    }

    #[test]
    fn test_codes() {
        let read = Read::new("r".to_string(), b"ACGT");
        assert_eq!(read.code(0), 0);
        assert_eq!(read.code(1), 1);
        assert_eq!(read.code(2), 2);
        assert_eq!(read.code(3), 3);
    }

    #[test]
    fn test_lowercase_inflates_uppercase() {
        let read = Read::new("r".to_string(), b"acgt");
        assert_eq!(read.inflate(), b"ACGT");
    }

    #[test]
    fn test_reverse_complement() {
        // rc(AACG) = CGTT
        let read = Read::new("r".to_string(), b"AACG");
        assert_eq!(read.inflate_rc(), b"CGTT");
    }

    #[test]
    fn test_reverse_complement_palindrome() {
        let read = Read::new("r".to_string(), b"ACGT");
        assert_eq!(read.inflate_rc(), b"ACGT");
    }

    #[test]
    fn test_reverse_complement_involution() {
        let read = Read::new("r".to_string(), TEST_SEQUENCE);
        let rc = Read::new("rc".to_string(), &read.inflate_rc());
        assert_eq!(rc.inflate_rc(), TEST_SEQUENCE);
    }

    #[test]
    fn test_empty_read() {
        let read = Read::new("r".to_string(), b"");
        assert!(read.is_empty());
        assert!(read.inflate().is_empty());
        assert!(read.inflate_rc().is_empty());
    }

    #[test]
    fn test_invalid_bases_do_not_panic() {
        let read = Read::new("r".to_string(), b"ACNNGT\x00\xff");
        assert_eq!(read.len(), 8);
        for base in read.inflate() {
            assert!(matches!(base, b'A' | b'C' | b'G' | b'T'));
        }
    }

    #[test]
    fn test_coder_table() {
        assert_eq!(NUC_CODE_TABLE[b'A' as usize], 0);
        assert_eq!(NUC_CODE_TABLE[b'C' as usize], 1);
        assert_eq!(NUC_CODE_TABLE[b'G' as usize], 2);
        assert_eq!(NUC_CODE_TABLE[b'T' as usize], 3);
        assert_eq!(NUC_CODE_TABLE[b'a' as usize], 0);
        assert_eq!(NUC_CODE_TABLE[b't' as usize], 3);
        // U is treated as T
        assert_eq!(NUC_CODE_TABLE[b'U' as usize], 3);
    }
}
