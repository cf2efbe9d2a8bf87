//! Fixture harness.
//!
//! A fixture root holds one directory per case. Each case directory has an
//! `input.html` and an `output.json` containing the array of nodes that
//! parsing the input must produce. Expected and actual output are compared
//! as JSON values, so object key order does not matter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::parser::HtmlParser;

/// Input file name inside a case directory.
pub const INPUT_FILE: &str = "input.html";
/// Expected-output file name inside a case directory.
pub const OUTPUT_FILE: &str = "output.json";

/// Errors raised while loading or running fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A directory or file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// `output.json` is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
    /// The parse result could not be turned into JSON.
    #[error("failed to serialize the result of fixture {name}: {source}")]
    Serialize {
        /// Fixture name.
        name: String,
        /// Underlying error.
        source: serde_json::Error,
    },
}

/// One loaded case.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Directory name of the case.
    pub name: String,
    /// Directory the case was loaded from.
    pub dir: PathBuf,
    /// Contents of `input.html`.
    pub input: String,
    /// Parsed contents of `output.json`.
    pub expected: Value,
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureOutcome {
    /// Directory name of the case.
    pub name: String,
    /// Whether the actual output matched.
    pub passed: bool,
    /// Expected nodes as JSON.
    pub expected: Value,
    /// Actual nodes as JSON.
    pub actual: Value,
}

impl FixtureOutcome {
    /// Expected and received output, for failure reports.
    #[must_use]
    pub fn mismatch_report(&self) -> String {
        format!(
            "Expected:\n{}\n\nReceived:\n{}\n",
            self.expected, self.actual
        )
    }
}

impl Fixture {
    /// Load the case stored in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if either file is unreadable and
    /// [`FixtureError::Json`] if `output.json` does not parse.
    pub fn load(dir: &Path) -> Result<Self, FixtureError> {
        let input_path = dir.join(INPUT_FILE);
        let output_path = dir.join(OUTPUT_FILE);

        let input = read_file(&input_path)?;
        let output = read_file(&output_path)?;
        let expected = serde_json::from_str(&output).map_err(|source| FixtureError::Json {
            path: output_path,
            source,
        })?;

        let name = dir
            .file_name()
            .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self {
            name,
            dir: dir.to_path_buf(),
            input,
            expected,
        })
    }

    /// Parse the input and compare it with the expected output.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Serialize`] if the parsed nodes cannot be
    /// converted to JSON.
    pub fn check(&self) -> Result<FixtureOutcome, FixtureError> {
        let nodes = HtmlParser::new(&self.input)
            .with_warnings(false)
            .run()
            .into_nodes();
        let actual = serde_json::to_value(&nodes).map_err(|source| FixtureError::Serialize {
            name: self.name.clone(),
            source,
        })?;

        Ok(FixtureOutcome {
            name: self.name.clone(),
            passed: actual == self.expected,
            expected: self.expected.clone(),
            actual,
        })
    }
}

fn read_file(path: &Path) -> Result<String, FixtureError> {
    fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// List the case directories directly under `root`, sorted by path.
///
/// Plain files in `root` are ignored.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if `root` or one of its entries cannot be read.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>, FixtureError> {
    let io_error = |source| FixtureError::Io {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Load and check every case under `root`.
///
/// # Errors
///
/// Stops at the first case that cannot be loaded or serialized. Mismatches
/// are not errors; they are reported through [`FixtureOutcome::passed`].
pub fn run_all(root: &Path) -> Result<Vec<FixtureOutcome>, FixtureError> {
    discover(root)?
        .iter()
        .map(|dir| Fixture::load(dir)?.check())
        .collect()
}
