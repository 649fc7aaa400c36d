//! Effect environment.

use crate::random::RandomSource;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Environment handed to every game effect.
///
/// Carries the random source. Effects only get `&GameEnv`, so the source
/// sits behind a mutex; there is never more than one effect running.
#[derive(Clone)]
pub struct GameEnv {
    rng: Arc<Mutex<dyn RandomSource + Send>>,
}

impl GameEnv {
    pub fn new(rng: impl RandomSource + Send + 'static) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Run `f` with exclusive access to the random source.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }
}

impl fmt::Debug for GameEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEnv").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn clones_share_one_source() {
        let env = GameEnv::new(ScriptedRandom::new([4, 8]));
        let other = env.clone();

        assert_eq!(env.with_rng(|rng| rng.range(1, 10)), 4);
        assert_eq!(other.with_rng(|rng| rng.range(1, 10)), 8);
    }
}
