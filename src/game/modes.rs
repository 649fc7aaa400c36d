//! Game and operation modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cosmetic presentation variant.
///
/// Only affects unlock content and how score and streak are displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Story,
    Joke,
    Practice,
}

/// Which operators are eligible for the next problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    #[default]
    Addition,
    Subtraction,
    Mixed,
}

/// The operator a concrete problem was generated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    /// Symbol shown in the prompt. Subtraction uses U+2212.
    pub fn symbol(self) -> char {
        match self {
            Self::Addition => '+',
            Self::Subtraction => '\u{2212}',
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseModeError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Story => "story",
            Self::Joke => "joke",
            Self::Practice => "practice",
        })
    }
}

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "story" => Ok(Self::Story),
            "joke" | "jokes" => Ok(Self::Joke),
            "practice" => Ok(Self::Practice),
            _ => Err(ParseModeError {
                kind: "game mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Mixed => "mixed",
        })
    }
}

impl FromStr for OperationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "addition" | "add" => Ok(Self::Addition),
            "subtraction" | "sub" | "subtract" => Ok(Self::Subtraction),
            "mixed" | "mix" => Ok(Self::Mixed),
            _ => Err(ParseModeError {
                kind: "operation mode",
                value: s.to_string(),
            }),
        }
    }
}
