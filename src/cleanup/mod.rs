//! Bounded retention for month directories: once a new month directory appears,
//! the oldest historical ones beyond the retention count are removed.

mod period;
mod result;

pub use period::Period;
pub use result::CleanupResult;

use crate::internal;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists every subdirectory of `base_dir` whose name parses as a period, newest first.
///
/// # Errors
/// Directory traversal failures are returned.
pub fn list_periods(base_dir: &Path) -> Result<Vec<(Period, PathBuf)>, crate::Error> {
    let mut periods = Vec::new();
    if !base_dir.is_dir() {
        return Ok(periods);
    }

    for entry in fs::read_dir(base_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(period) = name.to_str().and_then(Period::parse) else {
            internal::warn(
                "CLEANUP",
                &format!("Skipping non-period directory: {}", entry.path().display()),
            );
            continue;
        };
        periods.push((period, entry.path()));
    }

    periods.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(periods)
}

/// Keeps `current` plus the `keep` newest other periods and removes the rest recursively.
///
/// The cap counts historical months only: with the default of 6, seven month
/// directories (six past ones and the current one) remain on disk.
///
/// # Errors
/// Listing or removal failures are returned; directories removed before the
/// failure stay removed.
pub fn prune_periods(
    base_dir: &Path,
    keep: usize,
    current: Period,
) -> Result<CleanupResult, crate::Error> {
    let historical: Vec<_> = list_periods(base_dir)?
        .into_iter()
        .filter(|(period, _)| *period != current)
        .collect();

    let current_exists = base_dir.join(current.code()).is_dir();
    let mut result = CleanupResult {
        deleted: Vec::new(),
        retained: historical.len().min(keep) + usize::from(current_exists),
    };

    // newest first, so everything past `keep` is the overflow; remove oldest first
    for (period, path) in historical.into_iter().skip(keep).rev() {
        internal::info("CLEANUP", &format!("Removing expired period {period}"));
        fs::remove_dir_all(&path)?;
        result.deleted.push(path);
    }

    Ok(result)
}
