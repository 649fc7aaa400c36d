//! Game machine that executes intents as effects.

use crate::core::{Phase, State, StateHistory, StateTransition};
use crate::effects::env::GameEnv;
use crate::effects::transition::{
    game_transitions, Intent, Transition, TransitionError, TransitionResult,
};
use crate::game::{Evaluation, Session, Snapshot};
use chrono::Utc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::{debug, warn};

/// Output of running the effect returned by [`GameMachine::step`].
///
/// Holds the proposed next session; nothing changes until it is passed to
/// [`GameMachine::apply_result`].
#[derive(Clone, Debug)]
pub struct Step {
    pub from: Phase,
    pub trigger: &'static str,
    pub session: Session,
    pub result: TransitionResult,
}

/// Result of applying a single step
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The session moved to `to` (possibly the same phase).
    Transitioned {
        from: Phase,
        to: Phase,
        evaluation: Option<Evaluation>,
    },

    /// The intent needs to be repeated with better input.
    Retry { feedback: String, attempts: usize },
}

/// Owns one player's session and routes intents through guarded transitions.
pub struct GameMachine {
    session: Session,
    transitions: Vec<Transition>,
    history: StateHistory<Phase>,
    retry_count: usize,
}

impl GameMachine {
    /// Wrap a session with the standard game transitions.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            transitions: game_transitions(),
            history: StateHistory::new(),
            retry_count: 0,
        }
    }

    /// Current session (pure)
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current phase (pure)
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Phase history (pure)
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// Build the effect for one intent.
    ///
    /// Guards are checked up front against the current session. The returned
    /// effect draws from the environment's random source and yields the
    /// proposed session; call [`apply_result`](Self::apply_result) with it.
    pub fn step(
        &self,
        intent: Intent,
    ) -> impl Effect<Output = Step, Error = TransitionError, Env = GameEnv> {
        let Some(transition) = self.transitions.iter().find(|t| t.handles(&intent)) else {
            return fail(TransitionError::NoTransition {
                intent: intent.name(),
            })
            .boxed();
        };

        if !transition.can_execute(&self.session, &intent) {
            let reason = transition.guard.as_ref().map_or("", |g| g.reason());
            let phase = self.phase();
            warn!(
                session = %self.session.id(),
                intent = intent.name(),
                phase = phase.name(),
                reason,
                "intent blocked"
            );
            return fail(TransitionError::GuardBlocked {
                intent: intent.name(),
                phase: phase.name().to_string(),
                reason,
            })
            .boxed();
        }

        let action = transition.action;
        let from = self.phase();
        let current = self.session.clone();

        from_fn(move |env: &GameEnv| {
            let mut session = current.clone();
            let result = env.with_rng(|rng| action(&mut session, intent, rng))?;
            Ok::<_, TransitionError>(Step {
                from,
                trigger: intent.name(),
                session,
                result,
            })
        })
        .boxed()
    }

    /// Commit a step produced by [`step`](Self::step).
    pub fn apply_result(&mut self, step: Step) -> StepResult {
        let Step {
            from,
            trigger,
            session,
            result,
        } = step;
        self.session = session;

        match result {
            TransitionResult::Success { evaluation } => {
                let to = self.session.phase();
                self.history = self.history.record(StateTransition {
                    from,
                    to,
                    timestamp: Utc::now(),
                    trigger: trigger.to_string(),
                });
                self.retry_count = 0;
                debug!(session = %self.session.id(), trigger, ?from, ?to, "transition applied");
                StepResult::Transitioned {
                    from,
                    to,
                    evaluation,
                }
            }
            TransitionResult::Retry { feedback } => {
                self.retry_count += 1;
                debug!(
                    session = %self.session.id(),
                    trigger,
                    attempts = self.retry_count,
                    "retry requested"
                );
                StepResult::Retry {
                    feedback,
                    attempts: self.retry_count,
                }
            }
        }
    }

    /// Run `intent` against `env` and apply the result.
    pub async fn dispatch(
        &mut self,
        intent: Intent,
        env: &GameEnv,
    ) -> Result<StepResult, TransitionError> {
        let step = self.step(intent).run(env).await?;
        Ok(self.apply_result(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameMode, Operation, OperationMode, Problem};
    use crate::random::ScriptedRandom;

    fn machine_with(script: &[i64]) -> (GameMachine, GameEnv) {
        let mut rng = ScriptedRandom::new(script.iter().copied());
        let session = Session::new(&mut rng);
        (GameMachine::new(session), GameEnv::new(rng))
    }

    #[tokio::test]
    async fn submit_moves_to_feedback() {
        let (mut machine, env) = machine_with(&[3, 4]);

        let result = machine.dispatch(Intent::Submit(Some(7)), &env).await.unwrap();

        assert_eq!(
            result,
            StepResult::Transitioned {
                from: Phase::AwaitingAnswer,
                to: Phase::ShowingFeedback,
                evaluation: Some(Evaluation::Correct {
                    joke_unlocked: false
                }),
            }
        );
        assert_eq!(machine.session().score(), 1);
        assert_eq!(machine.history().transitions().len(), 1);
    }

    #[tokio::test]
    async fn step_does_not_mutate_until_applied() {
        let (machine, env) = machine_with(&[3, 4]);

        let step = machine.step(Intent::Submit(Some(7))).run(&env).await.unwrap();

        assert_eq!(step.session.score(), 1);
        assert_eq!(machine.session().score(), 0);
        assert_eq!(machine.phase(), Phase::AwaitingAnswer);
    }

    #[tokio::test]
    async fn second_submit_is_blocked() {
        let (mut machine, env) = machine_with(&[3, 4]);
        machine.dispatch(Intent::Submit(Some(7)), &env).await.unwrap();

        let err = machine
            .dispatch(Intent::Submit(Some(7)), &env)
            .await
            .unwrap_err();

        assert!(matches!(err, TransitionError::GuardBlocked { intent: "Submit", .. }));
        assert_eq!(machine.session().problems_solved(), 1);
    }

    #[tokio::test]
    async fn next_is_blocked_without_feedback() {
        let (mut machine, env) = machine_with(&[3, 4]);

        let err = machine.dispatch(Intent::Next, &env).await.unwrap_err();

        assert!(matches!(err, TransitionError::GuardBlocked { intent: "Next", .. }));
        assert!(machine.history().transitions().is_empty());
    }

    #[tokio::test]
    async fn missing_answer_counts_retries() {
        let (mut machine, env) = machine_with(&[3, 4]);

        let first = machine.dispatch(Intent::Submit(None), &env).await.unwrap();
        let second = machine.dispatch(Intent::Submit(None), &env).await.unwrap();

        assert_eq!(
            second,
            StepResult::Retry {
                feedback: "Please enter an answer first!".to_string(),
                attempts: 2,
            }
        );
        assert!(matches!(first, StepResult::Retry { attempts: 1, .. }));
        assert_eq!(machine.session().problems_solved(), 0);
        assert!(machine.history().transitions().is_empty());

        // feedback is showing, so the player may skip the problem
        machine.dispatch(Intent::Next, &env).await.unwrap();
        assert_eq!(machine.history().transitions().len(), 1);
    }

    #[tokio::test]
    async fn operation_switch_regenerates_problem() {
        let (mut machine, env) = machine_with(&[3, 4]);
        machine.dispatch(Intent::Submit(Some(1)), &env).await.unwrap();

        machine
            .dispatch(Intent::SetGameMode(GameMode::Practice), &env)
            .await
            .unwrap();
        assert_eq!(machine.phase(), Phase::ShowingFeedback);

        machine
            .dispatch(Intent::SetOperationMode(OperationMode::Subtraction), &env)
            .await
            .unwrap();
        assert_eq!(machine.phase(), Phase::AwaitingAnswer);
        assert_eq!(
            machine.session().problem(),
            &Problem::new(5, 1, Operation::Subtraction)
        );
        assert!(machine.snapshot().feedback.is_none());
    }

    #[tokio::test]
    async fn full_round_records_path() {
        let (mut machine, env) = machine_with(&[3, 4]);

        machine.dispatch(Intent::Submit(Some(7)), &env).await.unwrap();
        machine.dispatch(Intent::Next, &env).await.unwrap();
        machine.dispatch(Intent::Submit(Some(0)), &env).await.unwrap();

        let path = machine.history().get_path();
        assert_eq!(
            path,
            vec![
                &Phase::AwaitingAnswer,
                &Phase::ShowingFeedback,
                &Phase::AwaitingAnswer,
                &Phase::ShowingFeedback
            ]
        );
        assert_eq!(machine.session().streak(), 0);
    }
}
