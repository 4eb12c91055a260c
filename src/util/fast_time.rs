//! Fast timing using direct clock_gettime calls
//!
//! Every measured invocation is bracketed by two clock reads, so the read
//! itself must stay cheap next to a sweep of a few thousand divisions.

use std::time::Duration;

/// Monotonic timestamp in nanoseconds
///
/// Reads `CLOCK_MONOTONIC` through libc on Unix, bypassing the extra work
/// `std::time::Instant` does. Resolution is one nanosecond.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FastInstant {
    nanos: u64,
}

impl FastInstant {
    #[cfg(unix)]
    #[inline(always)]
    pub fn now() -> Self {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        // SAFETY: `ts` is a valid, writable timespec.
        unsafe {
            libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts);
        }

        let nanos = (ts.tv_sec as u64) * 1_000_000_000 + (ts.tv_nsec as u64);

        Self { nanos }
    }

    #[cfg(not(unix))]
    #[inline(always)]
    pub fn now() -> Self {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        let origin = *ORIGIN.get_or_init(Instant::now);

        Self {
            nanos: origin.elapsed().as_nanos() as u64,
        }
    }

    /// Duration since an earlier instant, zero if `earlier` is later
    #[inline(always)]
    pub fn duration_since(&self, earlier: FastInstant) -> Duration {
        Duration::from_nanos(self.nanos_since(earlier))
    }

    #[inline(always)]
    pub fn nanos_since(&self, earlier: FastInstant) -> u64 {
        self.nanos.saturating_sub(earlier.nanos)
    }

    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        Self::now().duration_since(*self)
    }
}
