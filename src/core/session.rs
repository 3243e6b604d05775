use crate::core::history::SessionHistory;
use crate::core::ledger;
use crate::core::registry::SerialRegistry;
use crate::core::validator;
use crate::domain::model::{DepositRequest, SubmissionOutcome};
use crate::domain::ports::SerialStore;
use crate::utils::error::ValidationError;

/// One interactive session: a serial store plus the running history.
///
/// Each submission is validated first; only a valid one reaches the registry,
/// the history and the calculator.
pub struct DepositSession<S: SerialStore = SerialRegistry> {
    registry: S,
    history: SessionHistory,
}

impl DepositSession<SerialRegistry> {
    /// A session backed by a freshly seeded registry.
    pub fn seeded() -> Self {
        Self::new(SerialRegistry::seeded())
    }
}

impl<S: SerialStore> DepositSession<S> {
    pub fn new(registry: S) -> Self {
        Self {
            registry,
            history: SessionHistory::new(),
        }
    }

    pub fn submit(
        &mut self,
        request: &DepositRequest,
    ) -> Result<SubmissionOutcome, ValidationError> {
        let input = match validator::validate_request(request) {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!(customer = %request.customer_name, error = %e, "submission rejected");
                return Err(e);
            }
        };

        let status = self.registry.check_and_register(&input.serial_number);
        self.history
            .record(&request.customer_name, &input.serial_number, status);

        let report = ledger::compute_for(&input);
        tracing::info!(
            customer = %request.customer_name,
            serial = %input.serial_number,
            status = %status,
            investment = report.investment_amount,
            total_bank_cost = report.total_bank_cost,
            "ledger report computed"
        );

        Ok(SubmissionOutcome {
            customer_name: request.customer_name.clone(),
            serial_number: input.serial_number,
            status,
            report,
        })
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn registry(&self) -> &S {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SerialStatus;

    fn request(name: &str, deposit: f64, serial: &str) -> DepositRequest {
        DepositRequest {
            customer_name: name.to_string(),
            daily_deposit: deposit,
            interest_rate: 0.04,
            maturity_days: 365,
            serial_number: serial.to_string(),
        }
    }

    #[test]
    fn test_accepted_then_flagged() {
        let mut session = DepositSession::seeded();

        let first = session.submit(&request("Asha", 100.0, "z9z9z9z9z9")).unwrap();
        assert_eq!(first.status, SerialStatus::Accepted);
        assert_eq!(first.serial_number.as_str(), "Z9Z9Z9Z9Z9");

        let second = session.submit(&request("Ravi", 50.0, "Z9Z9Z9Z9Z9")).unwrap();
        assert_eq!(second.status, SerialStatus::FakeOrRegistered);

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().flagged_count(), 1);
    }

    #[test]
    fn test_rejected_submission_mutates_nothing() {
        let mut session = DepositSession::seeded();

        let err = session.submit(&request("Asha", -1.0, "Z9Z9Z9Z9Z9")).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeInput { .. }));
        assert_eq!(session.registry().len(), 20);
        assert!(session.history().is_empty());

        // the serial was never registered, so it is still accepted
        let ok = session.submit(&request("Asha", 1.0, "Z9Z9Z9Z9Z9")).unwrap();
        assert_eq!(ok.status, SerialStatus::Accepted);
    }

    #[test]
    fn test_shared_registry_across_sessions() {
        let registry = std::sync::Arc::new(SerialRegistry::seeded());
        let mut counter_a = DepositSession::new(std::sync::Arc::clone(&registry));
        let mut counter_b = DepositSession::new(std::sync::Arc::clone(&registry));

        let a = counter_a.submit(&request("Asha", 10.0, "K9K9K9K9K9")).unwrap();
        let b = counter_b.submit(&request("Ravi", 10.0, "K9K9K9K9K9")).unwrap();
        assert_eq!(a.status, SerialStatus::Accepted);
        assert_eq!(b.status, SerialStatus::FakeOrRegistered);
        assert_eq!(counter_a.history().len(), 1);
        assert_eq!(counter_b.history().len(), 1);
    }
}
