//! Input line parsing.

use crate::config::GameConfig;
use crate::effects::Intent;
use crate::game::{GameMode, OperationMode};
use std::num::IntErrorKind;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Intent),
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' is not a number or a command (type 'help')")]
    Unrecognized(String),
}

/// Turn one line of player input into a command.
///
/// An empty line submits no answer. Numbers beyond the configured answer
/// range are clamped into it.
pub fn parse_command(line: &str, config: &GameConfig) -> Result<Command, CommandError> {
    let input = line.trim();
    if input.is_empty() {
        return Ok(Command::Play(Intent::Submit(None)));
    }

    let command = match input.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "h" | "help" | "?" => Command::Help,
        "n" | "next" => Command::Play(Intent::Next),
        "story" => Command::Play(Intent::SetGameMode(GameMode::Story)),
        "joke" | "jokes" => Command::Play(Intent::SetGameMode(GameMode::Joke)),
        "practice" => Command::Play(Intent::SetGameMode(GameMode::Practice)),
        "add" => Command::Play(Intent::SetOperationMode(OperationMode::Addition)),
        "sub" | "subtract" => Command::Play(Intent::SetOperationMode(OperationMode::Subtraction)),
        "mixed" => Command::Play(Intent::SetOperationMode(OperationMode::Mixed)),
        _ => return parse_answer(input, config).map(|n| Command::Play(Intent::Submit(Some(n)))),
    };
    Ok(command)
}

fn parse_answer(input: &str, config: &GameConfig) -> Result<i32, CommandError> {
    match input.parse::<i64>() {
        Ok(n) => Ok(config.clamp_answer(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(config.answer_max),
            IntErrorKind::NegOverflow => Ok(config.answer_min),
            _ => Err(CommandError::Unrecognized(input.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        parse_command(line, &GameConfig::default())
    }

    #[test]
    fn blank_line_submits_nothing() {
        assert_eq!(parse("   "), Ok(Command::Play(Intent::Submit(None))));
    }

    #[test]
    fn numbers_submit_answers() {
        assert_eq!(parse("7"), Ok(Command::Play(Intent::Submit(Some(7)))));
        assert_eq!(parse(" -3 "), Ok(Command::Play(Intent::Submit(Some(-3)))));
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        assert_eq!(parse("5000"), Ok(Command::Play(Intent::Submit(Some(200)))));
        assert_eq!(parse("-5000"), Ok(Command::Play(Intent::Submit(Some(-100)))));
        assert_eq!(
            parse("99999999999999999999999"),
            Ok(Command::Play(Intent::Submit(Some(200))))
        );
    }

    #[test]
    fn words_map_to_intents() {
        assert_eq!(parse("NEXT"), Ok(Command::Play(Intent::Next)));
        assert_eq!(
            parse("joke"),
            Ok(Command::Play(Intent::SetGameMode(GameMode::Joke)))
        );
        assert_eq!(
            parse("sub"),
            Ok(Command::Play(Intent::SetOperationMode(OperationMode::Subtraction)))
        );
        assert_eq!(parse("q"), Ok(Command::Quit));
        assert_eq!(parse("help"), Ok(Command::Help));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            parse("seven"),
            Err(CommandError::Unrecognized("seven".to_string()))
        );
    }
}
