//! Harness configuration.
//!
//! Settings come from an optional JSON file and are then overridden by
//! command-line flags. Validation collects every violation at once using
//! Stillwater's `Validation` instead of stopping at the first.

use crate::game::{GameMode, OperationMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Every answer the generator can produce: `1 + 1 ..= 10 + 10` and `0 ..= 14`.
pub const REACHABLE_ANSWERS: RangeInclusive<i32> = 0..=20;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for reproducible problems; entropy when absent.
    pub seed: Option<u64>,
    pub game_mode: GameMode,
    pub operation_mode: OperationMode,
    /// Lowest answer the harness accepts; lower inputs are clamped.
    pub answer_min: i32,
    /// Highest answer the harness accepts; higher inputs are clamped.
    pub answer_max: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            game_mode: GameMode::Story,
            operation_mode: OperationMode::Addition,
            answer_min: -100,
            answer_max: 200,
        }
    }
}

/// A single broken configuration rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("answer_min ({min}) is greater than answer_max ({max})")]
    InvertedRange { min: i32, max: i32 },

    #[error(
        "answer range {min}..={max} cannot hold every correct answer ({low}..={high})",
        low = REACHABLE_ANSWERS.start(),
        high = REACHABLE_ANSWERS.end()
    )]
    UnreachableAnswers { min: i32, max: i32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Invalid(NonEmptyVec<ConfigViolation>),
}

impl GameConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Check {
        let (min, max) = (self.answer_min, self.answer_max);

        let ordered: Check = if min <= max {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::InvertedRange { min, max })
        };

        let covers: Check = if min <= *REACHABLE_ANSWERS.start() && max >= *REACHABLE_ANSWERS.end()
        {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UnreachableAnswers { min, max })
        };

        Validation::all_vec(vec![ordered, covers]).map(|_| ())
    }

    /// Validate and convert failures into a [`ConfigError`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(violations)),
        }
    }

    /// Clamp a raw player input into the accepted answer range.
    pub fn clamp_answer(&self, raw: i64) -> i32 {
        raw.clamp(i64::from(self.answer_min), i64::from(self.answer_max)) as i32
    }
}
