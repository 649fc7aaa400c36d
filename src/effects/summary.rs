//! End-of-session summary.

use crate::core::Phase;
use crate::effects::GameMachine;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub attempted: u32,
    pub score: u32,
    pub best_streak: u32,
    /// Problems whose answer was checked.
    pub rounds: usize,
    pub transitions: usize,
    pub elapsed: Option<Duration>,
}

impl Summary {
    pub fn of(machine: &GameMachine) -> Self {
        let session = machine.session();
        let history = machine.history();
        Self {
            attempted: session.problems_solved(),
            score: session.score(),
            best_streak: session.best_streak(),
            rounds: history.entries_into(&Phase::ShowingFeedback),
            transitions: history.transitions().len(),
            elapsed: history.duration(),
        }
    }

    /// Share of correct answers in percent, `None` before any attempt.
    pub fn accuracy(&self) -> Option<f64> {
        (self.attempted > 0).then(|| f64::from(self.score) * 100.0 / f64::from(self.attempted))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Problems attempted: {}", self.attempted)?;
        writeln!(f, "Correct answers:    {}", self.score)?;
        match self.accuracy() {
            Some(pct) => writeln!(f, "Accuracy:           {pct:.0}%")?,
            None => writeln!(f, "Accuracy:           -")?,
        }
        writeln!(f, "Best streak:        {}", self.best_streak)?;
        writeln!(f, "Rounds:             {}", self.rounds)?;
        writeln!(f, "Transitions:        {}", self.transitions)?;
        if let Some(elapsed) = self.elapsed {
            writeln!(f, "Time played:        {}s", elapsed.as_secs())?;
        }
        Ok(())
    }
}
