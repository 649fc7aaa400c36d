//! Property-based tests for the game rules.
//!
//! These tests use proptest to drive sessions with arbitrary seeds and
//! submission sequences and check the counting laws hold throughout.

use math_quest::game::{
    Evaluation, GameMode, Operation, OperationMode, Problem, Session, ADDITION_OPERANDS,
    SUBTRACTION_MINUEND,
};
use math_quest::random::SeededRandom;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Submission {
    Right,
    Wrong,
    Blank,
}

prop_compose! {
    fn arbitrary_submission()(variant in 0..3u8) -> Submission {
        match variant {
            0 => Submission::Right,
            1 => Submission::Wrong,
            _ => Submission::Blank,
        }
    }
}

prop_compose! {
    fn arbitrary_operation_mode()(variant in 0..3u8) -> OperationMode {
        match variant {
            0 => OperationMode::Addition,
            1 => OperationMode::Subtraction,
            _ => OperationMode::Mixed,
        }
    }
}

prop_compose! {
    fn arbitrary_game_mode()(variant in 0..3u8) -> GameMode {
        match variant {
            0 => GameMode::Story,
            1 => GameMode::Joke,
            _ => GameMode::Practice,
        }
    }
}

fn answer_for(session: &Session, submission: &Submission) -> Option<i32> {
    let expected = session.problem().answer();
    match submission {
        Submission::Right => Some(expected),
        Submission::Wrong => Some(expected + 1),
        Submission::Blank => None,
    }
}

proptest! {
    #[test]
    fn generated_problems_respect_bounds(seed in any::<u64>(), mode in arbitrary_operation_mode()) {
        let mut rng = SeededRandom::from_seed(seed);
        for _ in 0..50 {
            let problem = Problem::generate(mode, &mut rng);
            match problem.operation() {
                Operation::Addition => {
                    prop_assert!(mode != OperationMode::Subtraction);
                    prop_assert!(ADDITION_OPERANDS.contains(&problem.lhs()));
                    prop_assert!(ADDITION_OPERANDS.contains(&problem.rhs()));
                    prop_assert_eq!(problem.answer(), problem.lhs() + problem.rhs());
                }
                Operation::Subtraction => {
                    prop_assert!(mode != OperationMode::Addition);
                    prop_assert!(SUBTRACTION_MINUEND.contains(&problem.lhs()));
                    prop_assert!(problem.rhs() >= 1 && problem.rhs() <= problem.lhs());
                    prop_assert_eq!(problem.answer(), problem.lhs() - problem.rhs());
                    prop_assert!(problem.answer() >= 0);
                }
            }
        }
    }

    #[test]
    fn generate_problem_always_clears_feedback(
        seed in any::<u64>(),
        first in arbitrary_submission(),
    ) {
        let mut rng = SeededRandom::from_seed(seed);
        let mut session = Session::with_modes(GameMode::Joke, OperationMode::Mixed, &mut rng);
        let answer = answer_for(&session, &first);
        session.submit_answer(answer, &mut rng);

        session.generate_problem(&mut rng);
        session.generate_problem(&mut rng);

        prop_assert!(session.feedback().is_none());
        prop_assert!(session.unlocked_joke().is_none());
    }

    #[test]
    fn counting_laws_hold(
        seed in any::<u64>(),
        game_mode in arbitrary_game_mode(),
        op_mode in arbitrary_operation_mode(),
        submissions in prop::collection::vec(arbitrary_submission(), 0..60),
    ) {
        let mut rng = SeededRandom::from_seed(seed);
        let mut session = Session::with_modes(game_mode, op_mode, &mut rng);
        let mut run = 0u32;

        for submission in &submissions {
            let before = session.problems_solved();
            let answer = answer_for(&session, submission);
            let eval = session.submit_answer(answer, &mut rng);

            match submission {
                Submission::Blank => {
                    prop_assert_eq!(eval, Evaluation::Missing);
                    prop_assert_eq!(session.problems_solved(), before);
                }
                Submission::Right => {
                    run += 1;
                    prop_assert_eq!(session.problems_solved(), before + 1);
                    let joke_due = game_mode == GameMode::Joke && run % 3 == 0;
                    prop_assert_eq!(session.unlocked_joke().is_some(), joke_due);
                    prop_assert_eq!(eval, Evaluation::Correct { joke_unlocked: joke_due });
                }
                Submission::Wrong => {
                    run = 0;
                    prop_assert_eq!(session.problems_solved(), before + 1);
                    prop_assert!(session.unlocked_joke().is_none());
                }
            }

            prop_assert_eq!(session.streak(), run);
            prop_assert!(session.score() <= session.problems_solved());
            prop_assert!(session.best_streak() >= session.streak());
            session.advance(&mut rng);
        }

        let right = submissions.iter().filter(|s| matches!(s, Submission::Right)).count() as u32;
        let blank = submissions.iter().filter(|s| matches!(s, Submission::Blank)).count() as u32;
        prop_assert_eq!(session.score(), right);
        prop_assert_eq!(session.problems_solved(), submissions.len() as u32 - blank);
    }
}
