//! The two phases of the practice loop.

crate::state_enum! {
    /// Where the player is in the question/answer loop.
    ///
    /// `AwaitingAnswer` holds while a problem is on screen without an
    /// evaluated answer. `ShowingFeedback` holds from the first evaluated
    /// submission until the player asks for the next problem.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        AwaitingAnswer,
        ShowingFeedback,
    }
    accepting: [AwaitingAnswer]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn only_awaiting_answer_accepts() {
        assert!(Phase::AwaitingAnswer.accepts_answer());
        assert!(!Phase::ShowingFeedback.accepts_answer());
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(Phase::AwaitingAnswer.name(), "AwaitingAnswer");
        assert_eq!(Phase::ShowingFeedback.name(), "ShowingFeedback");
    }
}
