use tracing::{debug, warn};

use crate::models::{AppointmentError, AppointmentStatus};

/// Status state machine. Transitions are monotone: a request only moves
/// forward from `Pending`, and `Cancelled` is terminal.
pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_status_transition(
        &self,
        current_status: AppointmentStatus,
        new_status: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!(
            "Validating status transition from {} to {}",
            current_status, new_status
        );

        let valid_transitions = self.get_valid_transitions(current_status);

        if !valid_transitions.contains(&new_status) {
            warn!(
                "Invalid status transition attempted: {} -> {}",
                current_status, new_status
            );
            return Err(AppointmentError::InvalidTransition {
                from: current_status,
                to: new_status,
            });
        }

        Ok(())
    }

    pub fn get_valid_transitions(&self, current_status: AppointmentStatus) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Pending => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::Rescheduled,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::Cancelled,
                AppointmentStatus::Rescheduled,
            ],
            AppointmentStatus::Rescheduled => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
            ],
            // Terminal state - no transitions allowed
            AppointmentStatus::Cancelled => vec![],
        }
    }
}

impl Default for AppointmentLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn pending_moves_to_any_forward_status() {
        let lifecycle = AppointmentLifecycleService::new();
        for next in [
            AppointmentStatus::Confirmed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Rescheduled,
        ] {
            lifecycle
                .validate_status_transition(AppointmentStatus::Pending, next)
                .unwrap();
        }
    }

    #[test]
    fn cancelled_is_terminal() {
        let lifecycle = AppointmentLifecycleService::new();
        for next in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Rescheduled,
        ] {
            let result =
                lifecycle.validate_status_transition(AppointmentStatus::Cancelled, next);
            assert_matches!(result, Err(AppointmentError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn nothing_returns_to_pending() {
        let lifecycle = AppointmentLifecycleService::new();
        for current in [
            AppointmentStatus::Confirmed,
            AppointmentStatus::Rescheduled,
            AppointmentStatus::Cancelled,
        ] {
            let result =
                lifecycle.validate_status_transition(current, AppointmentStatus::Pending);
            assert_matches!(result, Err(AppointmentError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn rescheduled_can_be_confirmed() {
        let lifecycle = AppointmentLifecycleService::new();
        lifecycle
            .validate_status_transition(
                AppointmentStatus::Rescheduled,
                AppointmentStatus::Confirmed,
            )
            .unwrap();
    }
}
