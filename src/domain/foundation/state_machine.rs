//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state transitions
//! on entity lifecycle statuses.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// let closed = SessionStatus::Open.transition_to(SessionStatus::Closed)?;
/// assert!(closed.is_terminal());
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum OrderStatus {
        Collecting,
        Ordered,
        Delivered,
        Cancelled,
    }

    impl StateMachine for OrderStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            use OrderStatus::*;
            matches!(
                (self, target),
                (Collecting, Ordered) | (Collecting, Cancelled) | (Ordered, Delivered)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use OrderStatus::*;
            match self {
                Collecting => vec![Ordered, Cancelled],
                Ordered => vec![Delivered],
                Delivered | Cancelled => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let result = OrderStatus::Collecting.transition_to(OrderStatus::Ordered);
        assert_eq!(result, Ok(OrderStatus::Ordered));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let result = OrderStatus::Collecting.transition_to(OrderStatus::Delivered);
        assert!(result.is_err());
    }

    #[test]
    fn terminal_states_have_no_transitions() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Collecting.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [
            OrderStatus::Collecting,
            OrderStatus::Ordered,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            for target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    target
                );
            }
        }
    }
}
