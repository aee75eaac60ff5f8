//! Batch run reports

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::models::FailurePolicy;

/// Which driver produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchKind {
    Normalize,
    Augment,
}

/// A file that could not be processed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Per-class counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub label: String,
    /// Source images found in the class directory
    pub images: usize,
    /// Files written (overwritten sources, or new augmented files)
    pub written: usize,
}

/// Outcome of one normalization or augmentation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub kind: BatchKind,
    pub root: PathBuf,
    /// Source images visited, including ones that failed
    pub images_found: usize,
    pub written: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    pub classes: Vec<ClassSummary>,
}

impl BatchReport {
    pub fn new(kind: BatchKind, root: &Path) -> Self {
        Self {
            kind,
            root: root.to_path_buf(),
            images_found: 0,
            written: Vec::new(),
            failures: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn begin_class(&mut self, label: String) {
        self.classes.push(ClassSummary {
            label,
            images: 0,
            written: 0,
        });
    }

    pub(crate) fn record_image(&mut self) {
        self.images_found += 1;
        if let Some(class) = self.classes.last_mut() {
            class.images += 1;
        }
    }

    pub(crate) fn record_written(&mut self, path: PathBuf) {
        if let Some(class) = self.classes.last_mut() {
            class.written += 1;
        }
        self.written.push(path);
    }

    /// Apply `policy` to a per-file result.
    ///
    /// `Ok(Some(value))` on success. On failure, `Abort` returns the error and
    /// `Continue` records it and returns `Ok(None)`.
    pub(crate) fn check<T>(
        &mut self,
        policy: FailurePolicy,
        path: &Path,
        result: Result<T, String>,
    ) -> Result<Option<T>, String> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) => match policy {
                FailurePolicy::Abort => Err(error),
                FailurePolicy::Continue => {
                    crate::verbose_println!("  Skipping {}: {}", path.display(), error);
                    self.failures.push(FileFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                    Ok(None)
                }
            },
        }
    }

    /// Pretty JSON rendering, for `--report` files.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize report: {}", e))
    }
}
