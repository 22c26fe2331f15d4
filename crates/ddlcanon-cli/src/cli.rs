//! ddlcanon - judges whether two PostgreSQL schema dumps are the same
//!
//! Reads two DDL dump files, classifies their statements by leading
//! keyword, and compares the classifications. Exit code 0 means the
//! dumps are structurally equivalent; exit code 1 means they differ
//! (or the invocation was wrong). Meant to run at the end of a CI
//! pipeline that installs two product versions and dumps each schema.

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ddlcanon_core::classify::{UnclassifiedReporter, classify};
use ddlcanon_core::compare::{ComparisonResult, compare};

use crate::logging::LoggingConfig;

/// Compares two PostgreSQL schema dumps by statement category.
#[derive(Debug, Parser)]
#[command(name = "ddlcanon", version)]
struct Args {
    /// Path to the old schema dump
    old_ddl: PathBuf,

    /// Path to the new schema dump
    new_ddl: PathBuf,

    /// Suppress console log output
    #[arg(short, long)]
    quiet: bool,

    /// Do not write a log file
    #[arg(long)]
    no_log_file: bool,

    /// Directory for the per-run log file
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // A bad invocation prints usage on stdout and exits 1,
            // before any file is touched. Help and version requests are
            // not errors.
            println!("{err}");
            return match err.kind() {
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

/// Reads, classifies, and compares the two dumps.
///
/// Returns the process exit code: 0 when the dumps are equivalent, 1
/// when they differ.
fn run(args: &Args) -> anyhow::Result<u8> {
    // The guard flushes buffered file-log lines when run() returns, so
    // the exit path must stay inside this function.
    let _guard = logging::init(LoggingConfig {
        log_dir: args.log_dir.clone(),
        enable_console_logs: !args.quiet,
        enable_file_log: !args.no_log_file,
        ..Default::default()
    })?;

    let old_ddl = read_dump(&args.old_ddl)?;
    let new_ddl = read_dump(&args.new_ddl)?;

    let reporter = TracingReporter;
    let old = classify(&old_ddl, &reporter)?;
    let new = classify(&new_ddl, &reporter)?;

    match compare(&old, &new) {
        ComparisonResult::Equivalent => {
            tracing::debug!("canonicalized DDL is the same");
            Ok(0)
        }
        ComparisonResult::Different(diff) => {
            for (category, entry) in &diff.categories {
                if entry.is_empty() {
                    tracing::debug!("{category}: statements equal");
                    continue;
                }
                crate::fail!("{category}: In old DDL but not new: {:?}", entry.only_in_old);
                crate::fail!("{category}: In new DDL but not old: {:?}", entry.only_in_new);
            }
            Ok(1)
        }
    }
}

fn read_dump(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read DDL dump {}", path.display()))
}

/// Forwards unclassified statements to the debug log.
struct TracingReporter;

impl UnclassifiedReporter for TracingReporter {
    fn unclassified(&self, statement: &str) {
        tracing::debug!("unknown statement: {statement}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses args for two dump files with logging fully disabled, so
    /// `run` stays hermetic and callable more than once per process.
    fn quiet_args(old: &Path, new: &Path) -> Args {
        Args::try_parse_from([
            "ddlcanon",
            "--quiet",
            "--no-log-file",
            old.to_str().unwrap(),
            new.to_str().unwrap(),
        ])
        .unwrap()
    }

    fn write_dumps(subdir: &str, old_ddl: &str, new_ddl: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join("ddlcanon-cli-tests").join(subdir);
        std::fs::create_dir_all(&dir).unwrap();
        let old = dir.join("old.sql");
        let new = dir.join("new.sql");
        std::fs::write(&old, old_ddl).unwrap();
        std::fs::write(&new, new_ddl).unwrap();
        (old, new)
    }

    #[test]
    fn test_equivalent_dumps_exit_zero() {
        let ddl = "CREATE TABLE t(id int);\nALTER TABLE t ADD COLUMN x int;";
        let (old, new) = write_dumps("equivalent", ddl, ddl);
        assert_eq!(run(&quiet_args(&old, &new)).unwrap(), 0);
    }

    #[test]
    fn test_differing_dumps_exit_one() {
        let (old, new) = write_dumps(
            "differing",
            "CREATE TABLE t(id int);",
            "CREATE TABLE t(id int, y int);",
        );
        assert_eq!(run(&quiet_args(&old, &new)).unwrap(), 1);
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let (old, _) = write_dumps("missing", "CREATE TABLE t(id int);", "");
        let absent = old.with_file_name("does-not-exist.sql");
        assert!(run(&quiet_args(&old, &absent)).is_err());
    }

    #[test]
    fn test_two_paths_parse_with_defaults() {
        let args = Args::try_parse_from(["ddlcanon", "old.sql", "new.sql"]).unwrap();
        assert_eq!(args.old_ddl, PathBuf::from("old.sql"));
        assert_eq!(args.new_ddl, PathBuf::from("new.sql"));
        assert!(!args.quiet);
        assert!(!args.no_log_file);
        assert_eq!(args.log_dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_argument_is_a_usage_error() {
        assert!(Args::try_parse_from(["ddlcanon", "old.sql"]).is_err());
    }

    #[test]
    fn test_extra_argument_is_a_usage_error() {
        assert!(Args::try_parse_from(["ddlcanon", "a.sql", "b.sql", "c.sql"]).is_err());
    }

    #[test]
    fn test_logging_flags_parse() {
        let args = Args::try_parse_from([
            "ddlcanon",
            "--quiet",
            "--no-log-file",
            "--log-dir",
            "/tmp/logs",
            "old.sql",
            "new.sql",
        ])
        .unwrap();
        assert!(args.quiet);
        assert!(args.no_log_file);
        assert_eq!(args.log_dir, PathBuf::from("/tmp/logs"));
    }
}
