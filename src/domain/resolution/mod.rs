//! Resolution engine: draws a session's result from its submissions.
//!
//! Every submission is an equally weighted ticket. The engine never looks at
//! restaurant identity, so a restaurant chosen by `k` of `n` participants is
//! drawn with probability `k / n`.
//!
//! The random source is injected so tests can seed it; production builds use
//! an entropy-seeded [`StdRng`].

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::submission::Submission;

/// Uniform random selection over a session's submissions.
pub struct ResolutionEngine {
    source: Mutex<Box<dyn RngCore + Send>>,
}

impl ResolutionEngine {
    /// Engine backed by an OS-seeded generator.
    pub fn from_entropy() -> Self {
        Self::with_source(StdRng::from_entropy())
    }

    /// Deterministic engine for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(StdRng::seed_from_u64(seed))
    }

    /// Engine drawing from an arbitrary random source.
    pub fn with_source(source: impl RngCore + Send + 'static) -> Self {
        Self {
            source: Mutex::new(Box::new(source)),
        }
    }

    /// Draw one submission uniformly at random.
    ///
    /// # Errors
    ///
    /// - `PreconditionViolation` if `submissions` is empty; callers must
    ///   check and skip the draw instead
    pub fn select<'a>(&self, submissions: &'a [Submission]) -> Result<&'a Submission, DomainError> {
        let mut source = self
            .source
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        submissions.choose(&mut **source).ok_or_else(|| {
            DomainError::new(
                ErrorCode::PreconditionViolation,
                "Cannot draw a result from an empty submission set",
            )
        })
    }
}

impl std::fmt::Debug for ResolutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionEngine").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ParticipantId, RestaurantId, SessionId, SubmissionId};
    use crate::domain::submission::NewSubmission;

    fn submission(id: i64, restaurant: i64) -> Submission {
        Submission::recorded(
            SubmissionId::from_store(id),
            NewSubmission::new(
                SessionId::from_store(1),
                ParticipantId::from_store(id),
                RestaurantId::from_store(restaurant),
            ),
        )
    }

    #[test]
    fn empty_input_is_a_precondition_violation() {
        let engine = ResolutionEngine::seeded(7);
        let err = engine.select(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::PreconditionViolation);
    }

    #[test]
    fn single_submission_is_always_drawn() {
        let engine = ResolutionEngine::from_entropy();
        let submissions = vec![submission(1, 9)];
        for _ in 0..20 {
            assert_eq!(engine.select(&submissions).unwrap().id(), submissions[0].id());
        }
    }

    #[test]
    fn same_seed_draws_same_sequence() {
        let submissions: Vec<_> = (1..=5).map(|i| submission(i, i)).collect();
        let a = ResolutionEngine::seeded(42);
        let b = ResolutionEngine::seeded(42);

        for _ in 0..10 {
            assert_eq!(
                a.select(&submissions).unwrap().id(),
                b.select(&submissions).unwrap().id()
            );
        }
    }

    #[test]
    fn draws_are_uniform_over_submissions_not_restaurants() {
        // Restaurant 1 has three tickets, restaurant 2 has one.
        let submissions = vec![
            submission(1, 1),
            submission(2, 1),
            submission(3, 1),
            submission(4, 2),
        ];
        let engine = ResolutionEngine::seeded(2024);

        let draws = 20_000;
        let mut per_submission = [0u32; 4];
        for _ in 0..draws {
            let drawn = engine.select(&submissions).unwrap();
            per_submission[(drawn.id().value() - 1) as usize] += 1;
        }

        for count in per_submission {
            let share = f64::from(count) / f64::from(draws);
            assert!((share - 0.25).abs() < 0.02, "share {} too far from 0.25", share);
        }

        let restaurant_one: u32 = per_submission[..3].iter().sum();
        let share = f64::from(restaurant_one) / f64::from(draws);
        assert!((share - 0.75).abs() < 0.02, "share {} too far from 0.75", share);
    }
}
