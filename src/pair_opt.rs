// Run options for reverse complement pair detection.

use crate::minimize::MinimizeConfig;

/// Options driving the whole pipeline, populated from the command line.
#[derive(Debug, Clone)]
pub struct PairOpt {
    pub n_threads: usize, // -t

    // Pairing tolerances
    pub alpha_p: f64, // -a: drop pairs whose short/long length ratio is below 1 - alpha
    pub beta_p: f64,  // -b: per-read span coverage required for a strong overlap

    // Sketching parameters
    pub kmer_len: u32,   // -k
    pub window_len: u32, // -w
    pub minhash: bool,   // sketch reduction, off in the standard pipeline

    // Index parameters
    pub filter_freq: f64,   // -f: fraction of most frequent values to skip
    pub index_size_cap: u64, // bases per index batch
}

impl Default for PairOpt {
    fn default() -> Self {
        PairOpt {
            n_threads: 1,
            alpha_p: 0.10,
            beta_p: 0.90,
            kmer_len: 15,
            window_len: 5,
            minhash: false,
            filter_freq: 0.0002,
            index_size_cap: 1 << 30,
        }
    }
}

impl PairOpt {
    pub fn minimize_config(&self) -> MinimizeConfig {
        MinimizeConfig {
            kmer_len: self.kmer_len,
            window_len: self.window_len,
            minhash: self.minhash,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=32).contains(&self.kmer_len) {
            return Err(format!(
                "k-mer length must be between 1 and 32, got {}",
                self.kmer_len
            ));
        }
        if self.window_len < 1 {
            return Err(format!(
                "window length must be at least 1, got {}",
                self.window_len
            ));
        }
        if !(0.0..1.0).contains(&self.alpha_p) {
            return Err(format!("alpha must be in [0, 1), got {}", self.alpha_p));
        }
        if !(0.0..=1.0).contains(&self.beta_p) {
            return Err(format!("beta must be in [0, 1], got {}", self.beta_p));
        }
        if !(0.0..1.0).contains(&self.filter_freq) {
            return Err(format!(
                "frequency filter fraction must be in [0, 1), got {}",
                self.filter_freq
            ));
        }
        if self.index_size_cap == 0 {
            return Err("index size cap must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PairOpt::default().validate().is_ok());
    }

    #[test]
    fn test_kmer_length_bounds() {
        let mut opt = PairOpt::default();
        opt.kmer_len = 0;
        assert!(opt.validate().is_err());
        opt.kmer_len = 33;
        assert!(opt.validate().is_err());
        opt.kmer_len = 32;
        assert!(opt.validate().is_ok());
    }

    #[test]
    fn test_window_length_bound() {
        let mut opt = PairOpt::default();
        opt.window_len = 0;
        assert!(opt.validate().is_err());
    }

    #[test]
    fn test_fraction_bounds() {
        let mut opt = PairOpt::default();
        opt.alpha_p = 1.0;
        assert!(opt.validate().is_err());

        let mut opt = PairOpt::default();
        opt.beta_p = 1.5;
        assert!(opt.validate().is_err());

        let mut opt = PairOpt::default();
        opt.filter_freq = -0.1;
        assert!(opt.validate().is_err());
    }
}
