use std::time::{SystemTime, UNIX_EPOCH};

pub fn realtime() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

fn getrusage_self() -> libc::rusage {
    unsafe {
        let mut rusage = std::mem::MaybeUninit::uninit();
        libc::getrusage(libc::RUSAGE_SELF, rusage.as_mut_ptr());
        rusage.assume_init()
    }
}

pub fn cputime() -> f64 {
    let rusage = getrusage_self();
    let user_time = rusage.ru_utime;
    let sys_time = rusage.ru_stime;
    (user_time.tv_sec as f64 + user_time.tv_usec as f64 * 1e-6)
        + (sys_time.tv_sec as f64 + sys_time.tv_usec as f64 * 1e-6)
}

/// Peak resident set size of this process in bytes.
pub fn peak_rss_bytes() -> u64 {
    let rusage = getrusage_self();
    // ru_maxrss is kilobytes on Linux, bytes on macOS.
    #[cfg(target_os = "macos")]
    {
        rusage.ru_maxrss as u64
    }
    #[cfg(not(target_os = "macos"))]
    {
        rusage.ru_maxrss as u64 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realtime_advances() {
        let t0 = realtime();
        let t1 = realtime();
        assert!(t1 >= t0);
        assert!(t0 > 0.0);
    }

    #[test]
    fn test_cputime_non_negative() {
        assert!(cputime() >= 0.0);
    }

    #[test]
    fn test_peak_rss_positive() {
        assert!(peak_rss_bytes() > 0);
    }
}
