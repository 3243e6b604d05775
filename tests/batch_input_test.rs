use daily_deposit::core::batch::read_requests;
use daily_deposit::core::SerialStatus;
use daily_deposit::{DepositError, DepositSession};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_batch_file_flags_duplicates_within_the_run() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,daily_deposit,interest_rate,maturity_days,serial_number").unwrap();
    writeln!(file, "Asha,100,0.04,365,Z9Z9Z9Z9Z9").unwrap();
    writeln!(file, "Ravi,-5,0.04,365,Q1Q1Q1Q1Q1").unwrap();
    writeln!(file, "Meera,10,0.01,30,z9z9z9z9z9").unwrap();
    writeln!(file, "Kiran,10,0.01,30,F6G7H8I9J0").unwrap();

    let rows = read_requests(std::fs::File::open(file.path()).unwrap()).unwrap();
    let mut session = DepositSession::seeded();

    let results: Vec<Result<SerialStatus, DepositError>> = rows
        .into_iter()
        .map(|row| {
            row.and_then(|request| {
                session
                    .submit(&request)
                    .map(|outcome| outcome.status)
                    .map_err(DepositError::from)
            })
        })
        .collect();

    assert!(matches!(results[0], Ok(SerialStatus::Accepted)));
    assert!(matches!(results[1], Err(DepositError::Validation(_))));
    assert!(matches!(results[2], Ok(SerialStatus::FakeOrRegistered)));
    assert!(matches!(results[3], Ok(SerialStatus::FakeOrRegistered)));

    // the rejected row never reached the registry
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.history().flagged_count(), 2);
}
