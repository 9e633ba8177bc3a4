//! Discovery of `.ts` catalogs under the configured include paths.
//!
//! `.ts` is shared with TypeScript, so candidates are sniffed for a `<TS`
//! root tag before they are accepted.

use std::{
    collections::BTreeSet,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Bytes read from the head of a candidate file when sniffing.
const SNIFF_LEN: usize = 1024;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for catalogs.
pub struct ScanResult {
    /// Catalog paths, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

pub fn scan_catalog_files(
    base_dir: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let roots: Vec<PathBuf> = if includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten()),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for root in roots {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_catalog_file(path) {
                files.insert(path_str.into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// A `.ts` file whose head contains a `<TS` tag.
pub fn is_catalog_file(path: &Path) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some("ts") {
        return false;
    }
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut head = Vec::with_capacity(SNIFF_LEN);
    if file.take(SNIFF_LEN as u64).read_to_end(&mut head).is_err() {
        return false;
    }
    String::from_utf8_lossy(&head).contains("<TS")
}
