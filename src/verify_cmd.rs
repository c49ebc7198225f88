//! Verify command: exhaustive sweep of the conversion invariants.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use daycount_calendar::sweep;

use crate::cli::VerifyArgs;
use crate::config::{DEFAULT_CONFIG_PATH, DaycountConfig};
use crate::convert;

/// Run the verification sweep and print its duration and span.
pub fn run(args: VerifyArgs) -> Result<()> {
    let _cmd = info_span!("verify").entered();

    // 1. Load config; only an explicitly named file must exist
    let (path, required) = match &args.config {
        Some(p) => (p.as_path(), true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };
    let config = DaycountConfig::load(path, required)?;
    let sweep_cfg = convert::build_sweep_config(&config.verify, &args);
    info!(
        years = sweep_cfg.years,
        chunk_years = sweep_cfg.chunk_years,
        "starting sweep"
    );

    // 2. Sweep
    let start = Instant::now();
    let report = sweep(&sweep_cfg).context("verification sweep failed")?;
    let elapsed = start.elapsed();
    info!(dates_checked = report.dates_checked, "all checks passed");

    // 3. Report
    println!("Duration: {:.2} seconds", elapsed.as_secs_f64());
    println!("Processed {} days", report.days_spanned);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn small_sweep_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[verify]\nyears = 40\nchunk_years = 7").unwrap();
        let args = VerifyArgs {
            config: Some(file.path().to_path_buf()),
            years: None,
            chunk_years: None,
        };
        run(args).unwrap();
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // Would be rejected by the sweep if the flag did not win.
        writeln!(file, "[verify]\nyears = 0\nchunk_years = 1").unwrap();
        let args = VerifyArgs {
            config: Some(file.path().to_path_buf()),
            years: Some(2),
            chunk_years: None,
        };
        run(args).unwrap();
    }

    #[test]
    fn invalid_sweep_settings_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[verify]\nyears = 2\nchunk_years = 0").unwrap();
        let args = VerifyArgs {
            config: Some(file.path().to_path_buf()),
            years: None,
            chunk_years: None,
        };
        let err = run(args).unwrap_err();
        assert!(format!("{err:#}").contains("chunk_years must be >= 1"));
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = VerifyArgs {
            config: Some(dir.path().join("missing.toml")),
            years: Some(2),
            chunk_years: Some(1),
        };
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
