//! The `fix` command: fix files in place, or report what would change.
//!
//! Directories are walked recursively for `*.php`; files are processed
//! in parallel and the summary is counted with atomics.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::config_file;
use crate::fix_source;

/// Options for the fix command.
#[derive(Debug, Default)]
pub struct FixOptions {
    /// Report files that would change and exit nonzero, writing nothing.
    pub check: bool,
    /// Run risky rules even when the configuration does not opt in.
    pub allow_risky: bool,
    /// Explicit configuration file, bypassing discovery.
    pub config_path: Option<PathBuf>,
}

/// What happened to one file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// Already clean.
    Unchanged,
    /// Rewritten on disk.
    Fixed,
    /// Would be rewritten (check mode).
    WouldFix,
    /// Not processed; the message says why.
    Skipped(String),
}

/// Fix every path. Returns the process exit code: nonzero when any file
/// was skipped or, in check mode, would change.
pub fn run_fix(paths: &[String], options: &FixOptions) -> i32 {
    let mut files = Vec::new();
    for path in paths {
        collect_php_files(Path::new(path), &mut files);
    }
    if files.is_empty() {
        eprintln!("no PHP files found");
        return 1;
    }
    files.sort();
    files.dedup();

    let fixed = AtomicUsize::new(0);
    let unchanged = AtomicUsize::new(0);
    let would_fix = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);

    files.par_iter().for_each(|file| {
        match process_file(file, options) {
            FileOutcome::Unchanged => {
                unchanged.fetch_add(1, Ordering::Relaxed);
            }
            FileOutcome::Fixed => {
                fixed.fetch_add(1, Ordering::Relaxed);
                println!("fixed {}", file.display());
            }
            FileOutcome::WouldFix => {
                would_fix.fetch_add(1, Ordering::Relaxed);
                println!("would fix {}", file.display());
            }
            FileOutcome::Skipped(reason) => {
                skipped.fetch_add(1, Ordering::Relaxed);
                eprintln!("skipped {}: {reason}", file.display());
            }
        }
    });

    let fixed = fixed.load(Ordering::Relaxed);
    let unchanged = unchanged.load(Ordering::Relaxed);
    let would_fix = would_fix.load(Ordering::Relaxed);
    let skipped = skipped.load(Ordering::Relaxed);

    if options.check {
        println!("{would_fix} would fix, {unchanged} clean, {skipped} skipped");
    } else {
        println!("{fixed} fixed, {unchanged} clean, {skipped} skipped");
    }

    if skipped > 0 || would_fix > 0 {
        1
    } else {
        0
    }
}

/// Fix or check a single file.
pub(crate) fn process_file(path: &Path, options: &FixOptions) -> FileOutcome {
    let config = match config_file::resolve(path, options.config_path.as_deref()) {
        Ok(mut config) => {
            config.allow_risky |= options.allow_risky;
            config
        }
        Err(error) => return FileOutcome::Skipped(error.to_string()),
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => return FileOutcome::Skipped(error.to_string()),
    };

    let fixed = match fix_source(&source, &config) {
        Ok(fixed) => fixed,
        Err(error) => return FileOutcome::Skipped(error.to_string()),
    };

    if fixed == source {
        return FileOutcome::Unchanged;
    }
    if options.check {
        return FileOutcome::WouldFix;
    }
    match std::fs::write(path, &fixed) {
        Ok(()) => FileOutcome::Fixed,
        Err(error) => FileOutcome::Skipped(error.to_string()),
    }
}

/// Recursively collect `*.php` files, skipping hidden directories and
/// the usual dependency/build trees.
fn collect_php_files(path: &Path, files: &mut Vec<PathBuf>) {
    if path.is_file() {
        files.push(path.to_path_buf());
        return;
    }
    let Ok(entries) = std::fs::read_dir(path) else {
        return;
    };
    for entry in entries.flatten() {
        let entry_path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || name == "vendor" || name == "node_modules" || name == "target"
        {
            continue;
        }
        if entry_path.is_dir() {
            collect_php_files(&entry_path, files);
        } else if entry_path.extension().is_some_and(|e| e == "php") {
            files.push(entry_path);
        }
    }
}
