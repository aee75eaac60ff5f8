//! End-of-run reporting shared by the batch commands.

use std::path::Path;
use std::time::Duration;

use dataprep_core::{BatchKind, BatchReport};

/// Print the completion block for a batch run.
pub fn print_summary(report: &BatchReport, elapsed: Duration, silent: bool) {
    if silent {
        return;
    }

    let title = match report.kind {
        BatchKind::Normalize => "NORMALIZATION COMPLETE",
        BatchKind::Augment => "AUGMENTATION COMPLETE",
    };

    println!("\n========================================");
    println!("{}", title);
    println!("========================================");
    println!("  Dataset root: {}", report.root.display());
    println!("  Classes:      {}", report.classes.len());
    println!("  Images found: {}", report.images_found);
    println!("  Written:      {}", report.written.len());
    println!("  Failed:       {}", report.failures.len());
    println!("  Total time:   {:.2}s", elapsed.as_secs_f64());

    if dataprep_core::config::is_verbose() {
        for class in &report.classes {
            println!(
                "    {}: {} images, {} written",
                class.label, class.images, class.written
            );
        }
    }

    if !report.failures.is_empty() {
        println!("\nErrors:");
        for failure in &report.failures {
            println!("  {}: {}", failure.path.display(), failure.error);
        }
    }
}

/// Write the report as pretty JSON to `path`.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<(), String> {
    let json = report.to_json()?;
    std::fs::write(path, json)
        .map_err(|e| format!("Failed to write report {}: {}", path.display(), e))
}

/// Turn recorded failures into the command's error.
pub fn finish(report: &BatchReport) -> Result<(), String> {
    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} files failed to process", report.failures.len()))
    }
}
