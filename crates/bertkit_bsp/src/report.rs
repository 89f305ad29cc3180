//! Provisioning run report model.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters for one provisioning run.
///
/// The copy stage is fail-fast: the first I/O failure aborts the run, so no
/// per-entry error list exists here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportProvision {
    /// Direct entries found in the copy source.
    pub cnt_scanned: u64,
    /// Files copied (including files inside copied subdirectories).
    pub cnt_copied_files: u64,
    /// Destination subdirectories created.
    pub cnt_dirs_created: u64,
}

impl ReportProvision {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Increment copied-file count by one.
    pub fn add_copied_file(&mut self) {
        self.cnt_copied_files += 1;
    }

    /// Increment created-directory count by one.
    pub fn add_dir_created(&mut self) {
        self.cnt_dirs_created += 1;
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_copied_files".to_string(), self.cnt_copied_files);
        dict_counts.insert("cnt_dirs_created".to_string(), self.cnt_dirs_created);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} copied={} dirs_created={}",
            self.cnt_scanned, self.cnt_copied_files, self.cnt_dirs_created
        )
    }
}

impl fmt::Display for ReportProvision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[BSP]"))
    }
}
