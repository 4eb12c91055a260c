//! CPU affinity for trial threads
//!
//! Pinning the measuring thread keeps it from migrating between cores in the
//! middle of an iteration, which would otherwise show up as cold-cache
//! outliers in the latency histogram.
//!
//! # Platform Support
//!
//! Pinning uses `sched_setaffinity` and is only available on Linux.
//!
//! # Example
//!
//! ```no_run
//! use udivbench::runner::affinity::{parse_cpu_list, set_cpu_affinity};
//!
//! let cores = parse_cpu_list("2-3").unwrap();
//! set_cpu_affinity(&cores).unwrap();
//! ```

use crate::Result;
use anyhow::Context;

/// Bind the current thread to the given CPU cores
#[cfg(target_os = "linux")]
pub fn set_cpu_affinity(cores: &[usize]) -> Result<()> {
    use libc::{cpu_set_t, sched_setaffinity, CPU_SET, CPU_ZERO};
    use std::mem;

    if cores.is_empty() {
        anyhow::bail!("CPU core list cannot be empty");
    }

    if let Some(&core) = cores.iter().find(|&&core| core >= 1024) {
        anyhow::bail!("CPU core ID {} is too large (max 1023)", core);
    }

    // SAFETY: cpu_set_t is plain data; all-zero is a valid empty set, every
    // core index was checked against the set's capacity, and
    // sched_setaffinity only reads the set.
    let result = unsafe {
        let mut cpu_set: cpu_set_t = mem::zeroed();
        CPU_ZERO(&mut cpu_set);

        for &core in cores {
            CPU_SET(core, &mut cpu_set);
        }

        // 0 = current thread
        sched_setaffinity(0, mem::size_of::<cpu_set_t>(), &cpu_set)
    };

    if result != 0 {
        let err = std::io::Error::last_os_error();
        return Err(err).context(format!("Failed to set CPU affinity to cores {:?}", cores));
    }

    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn set_cpu_affinity(_cores: &[usize]) -> Result<()> {
    anyhow::bail!("CPU affinity is only supported on Linux")
}

/// Parse CPU core list from string
///
/// Supports formats:
/// - Single core: "0"
/// - Multiple cores: "0,1,2,3"
/// - Range: "0-3"
/// - Mixed: "0,2-4,7"
///
/// The result is sorted and deduplicated.
pub fn parse_cpu_list(list: &str) -> Result<Vec<usize>> {
    let mut cores = Vec::new();

    for part in list.split(',').map(str::trim) {
        if let Some((start, end)) = part.split_once('-') {
            let start: usize = start
                .trim()
                .parse()
                .with_context(|| format!("Invalid CPU core number: {}", start))?;
            let end: usize = end
                .trim()
                .parse()
                .with_context(|| format!("Invalid CPU core number: {}", end))?;

            if start > end {
                anyhow::bail!("Invalid CPU range: start ({}) > end ({})", start, end);
            }

            cores.extend(start..=end);
        } else {
            let core: usize = part
                .parse()
                .with_context(|| format!("Invalid CPU core number: {}", part))?;
            cores.push(core);
        }
    }

    if cores.is_empty() {
        anyhow::bail!("CPU core list cannot be empty");
    }

    cores.sort_unstable();
    cores.dedup();

    Ok(cores)
}
