//! `.env` discovery and loading.
//!
//! Responsibilities:
//! - Locate a `.env` file by walking parent directories.
//! - Parse it with `dotenvy` and apply its assignments to the process environment.
//!
//! Does NOT handle:
//! - Reading individual variables (see `manager`).
//!
//! Invariants:
//! - Variables already present in the environment always win over the file.
//! - Auto-discovery that finds nothing is not an error; an explicit path that
//!   cannot be read is.
//! - Shell `set -a` / `set +a` lines outside quoted values are ignored.
//! - A key assigned twice takes its last value.
//! - Nothing is applied from a file that fails to parse or holds a NUL byte.
//! - Errors never include raw .env line contents.

use std::path::{Path, PathBuf};

use crate::constants::DOTENV_FILE_NAME;
use crate::manager::ConfigError;

/// Where an `EnvManager` looks for its `.env` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DotenvSource {
    /// Search the current directory and its ancestors.
    #[default]
    Discover,
    /// Search the given directory and its ancestors.
    DiscoverFrom(PathBuf),
    /// Load exactly this file; failing to read it is an error.
    Path(PathBuf),
    /// Do not load any file.
    Disabled,
}

/// Outcome of applying a `.env` file to the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvReport {
    pub path: PathBuf,
    /// Keys set from the file.
    pub applied: Vec<String>,
    /// Keys left alone because the environment already had them.
    pub skipped: Vec<String>,
}

/// Walk from `start` up to the filesystem root looking for `file_name`.
pub fn find_file_upwards(start: &Path, file_name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}

/// Find the closest `.env` file at or above `start`.
pub fn find_dotenv(start: &Path) -> Option<PathBuf> {
    find_file_upwards(start, DOTENV_FILE_NAME)
}

impl DotenvSource {
    /// Resolve the file this source points at, if any.
    pub fn resolve(&self) -> Option<PathBuf> {
        match self {
            DotenvSource::Discover => match std::env::current_dir() {
                Ok(cwd) => find_dotenv(&cwd),
                Err(e) => {
                    tracing::debug!(error = %e, "Cannot read current directory, skipping .env discovery");
                    None
                }
            },
            DotenvSource::DiscoverFrom(dir) => find_dotenv(dir),
            DotenvSource::Path(path) => Some(path.clone()),
            DotenvSource::Disabled => None,
        }
    }

    /// Load the file this source points at.
    ///
    /// Returns `Ok(None)` when loading is disabled or discovery found nothing.
    pub fn load(&self) -> Result<Option<DotenvReport>, ConfigError> {
        match self.resolve() {
            Some(path) => load_path(&path).map(Some),
            None => {
                if *self != DotenvSource::Disabled {
                    tracing::debug!(source = ?self, "No .env file found");
                }
                Ok(None)
            }
        }
    }
}

/// Parse `path` and set every variable the environment does not already have.
pub fn load_path(path: &Path) -> Result<DotenvReport, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DotenvIo {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;
    let content = strip_shell_directives(&content);

    // Later assignments of a key replace earlier ones; first-seen order is kept.
    let mut entries: Vec<(String, String)> = Vec::new();
    for item in dotenvy::from_read_iter(content.as_bytes()) {
        let (key, value) = item.map_err(|e| ConfigError::from_dotenv(path.to_path_buf(), e))?;
        match entries.iter_mut().find(|(seen, _)| *seen == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }

    // The process environment cannot hold NUL bytes.
    if let Some((key, _)) = entries.iter().find(|(_, value)| value.contains('\0')) {
        return Err(ConfigError::DotenvInvalidValue {
            path: path.to_path_buf(),
            key: key.clone(),
        });
    }

    let mut report = DotenvReport {
        path: path.to_path_buf(),
        applied: Vec::new(),
        skipped: Vec::new(),
    };

    for (key, value) in entries {
        if std::env::var_os(&key).is_some() {
            report.skipped.push(key);
            continue;
        }
        // SAFETY: configuration is loaded on a single thread before any
        // worker threads that read the environment are started.
        unsafe {
            std::env::set_var(&key, value);
        }
        report.applied.push(key);
    }

    tracing::debug!(
        path = %path.display(),
        applied = report.applied.len(),
        skipped = report.skipped.len(),
        "Loaded .env file"
    );

    Ok(report)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Blank out `set -a` / `set +a` lines, keeping line numbers stable.
///
/// Lines inside a multi-line quoted value are kept as they are.
fn strip_shell_directives(content: &str) -> String {
    let mut quote = Quote::None;
    content
        .lines()
        .map(|line| {
            let kept = if quote == Quote::None && is_shell_directive(line) {
                ""
            } else {
                line
            };
            quote = quote_after(line, quote);
            kept
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote state at the end of `line`, given the state at its start.
fn quote_after(line: &str, mut quote: Quote) -> Quote {
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match (quote, c) {
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::Single, _) => {}
            (Quote::Double, '\\') | (Quote::None, '\\') => {
                chars.next();
            }
            (Quote::Double, _) => {}
            (Quote::None, '\'') => quote = Quote::Single,
            (Quote::None, '"') => quote = Quote::Double,
            (Quote::None, '#') => break,
            (Quote::None, _) => {}
        }
    }
    quote
}

fn is_shell_directive(line: &str) -> bool {
    let mut words = line.split_whitespace();
    matches!(
        (words.next(), words.next(), words.next()),
        (Some("set"), Some(flags), None)
            if flags.len() > 1
                && (flags.starts_with('-') || flags.starts_with('+'))
                && flags[1..].chars().all(|c| c.is_ascii_alphabetic())
    )
}
