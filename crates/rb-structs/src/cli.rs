//! Core logic behind the `rb-structs` binary.
//!
//! Input is read line by line. In `strings` mode every non-empty line is a
//! word; in `vectors` mode every non-empty line is a JSON array of numbers.
//! Lines already present in the set are reported and skipped.

use std::str::FromStr;

use log::{info, warn, LevelFilter};
use rb_tree::TreeError;

use crate::error::StructsError;
use crate::strings::{concatenate_all, new_string_tree};
use crate::vector::{find_max_norm_vector, new_vector_tree, Vector};

/// Environment variable holding the log level (`off`, `error` … `trace`).
pub const LOG_ENV: &str = "RB_LOG";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Strings,
    Vectors,
}

impl FromStr for Mode {
    type Err = StructsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strings" => Ok(Mode::Strings),
            "vectors" => Ok(Mode::Vectors),
            other => Err(StructsError::InvalidMode(other.to_string())),
        }
    }
}

/// `--verbose` wins; otherwise a parseable `RB_LOG` value; otherwise `Warn`.
pub fn log_level(verbose: bool, env: Option<&str>) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    env.and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

pub fn run(mode: Mode, input: &str) -> Result<String, StructsError> {
    match mode {
        Mode::Strings => run_strings(input),
        Mode::Vectors => run_vectors(input),
    }
}

fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty())
}

/// Sorted, de-duplicated words, one per line.
pub fn run_strings(input: &str) -> Result<String, StructsError> {
    let mut tree = new_string_tree();
    for (line, word) in lines(input) {
        match tree.insert(word.to_string()) {
            Ok(()) => {}
            Err(TreeError::Duplicate(word)) => warn!("line {line}: skipping duplicate {word:?}"),
            Err(err) => return Err(err.into()),
        }
    }
    info!("collected {} distinct word(s)", tree.len());
    concatenate_all(&tree)
}

/// The vector of largest norm, as a JSON array.
pub fn run_vectors(input: &str) -> Result<String, StructsError> {
    let mut tree = new_vector_tree();
    for (line, text) in lines(input) {
        let vector = Vector::parse(text, line)?;
        match tree.insert(vector) {
            Ok(()) => {}
            Err(TreeError::Duplicate(v)) => {
                warn!("line {line}: skipping duplicate vector {:?}", v.coords)
            }
            Err(err) => return Err(err.into()),
        }
    }
    info!("collected {} distinct vector(s)", tree.len());
    let max = find_max_norm_vector(&tree)?.ok_or(StructsError::NoVectors)?;
    Ok(serde_json::to_string(&max.coords)?)
}
