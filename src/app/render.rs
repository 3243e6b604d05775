use crate::core::fake_notes::{
    fake_note_table, max_fake_notes, predicted_fake_notes, FAKE_NOTE_REPORT_TITLE,
};
use crate::core::history::SessionHistory;
use crate::domain::model::{SerialStatus, SubmissionOutcome};
use crate::utils::format::{format_count, format_currency};
use std::fmt::Write;

const BAR_WIDTH: usize = 40;

pub fn status_banner(status: SerialStatus) -> &'static str {
    match status {
        SerialStatus::Accepted => "✅ Serial number accepted. No match in registered database.",
        SerialStatus::FakeOrRegistered => "⚠️ Already registered. Possible FAKE note detected!",
    }
}

pub fn render_outcome(outcome: &SubmissionOutcome, currency: &str) -> String {
    let report = &outcome.report;
    let money = |amount: f64| format_currency(currency, amount);
    let mut out = String::new();

    let _ = writeln!(out, "{}", status_banner(outcome.status));
    let _ = writeln!(out, "{}", "-".repeat(48));
    let _ = writeln!(out, "💰 Summary Report");
    let _ = writeln!(out, "  Name:                         {}", outcome.customer_name);
    let _ = writeln!(out, "  Serial Number:                {}", outcome.serial_number);
    let _ = writeln!(out, "  Total Investment:             {}", money(report.investment_amount));
    let _ = writeln!(out, "  Total Return (with Interest): {}", money(report.total_return));
    let _ = writeln!(out, "  Bank Cost (Interest Paid):    {}", money(report.bank_interest_cost));
    let _ = writeln!(out, "  Agent Cost:                   {}", money(report.agency_cost));
    let _ = writeln!(out, "  Machine Cost:                 {}", money(report.hardware_cost));
    let _ = writeln!(out, "  Total Bank Cost per Person:   {}", money(report.total_bank_cost));
    out
}

pub fn render_history(history: &SessionHistory) -> String {
    let mut out = String::new();
    if history.is_empty() {
        return out;
    }

    let name_width = history
        .entries()
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let _ = writeln!(out, "Checked Serial Numbers This Session");
    let _ = writeln!(
        out,
        "  {:<name_width$}  {:<13}  Status",
        "Name",
        "Serial Number",
        name_width = name_width
    );
    for entry in history.entries() {
        let _ = writeln!(
            out,
            "  {:<name_width$}  {:<13}  {}",
            entry.name,
            entry.serial_number.as_str(),
            entry.status,
            name_width = name_width
        );
    }
    out
}

/// Fake-note listing followed by a horizontal bar chart scaled to the largest count.
pub fn render_fake_notes(currency: &str) -> String {
    let mut out = String::new();
    let max = max_fake_notes();

    let _ = writeln!(out, "📄 {}:", FAKE_NOTE_REPORT_TITLE);
    for entry in fake_note_table() {
        let _ = writeln!(
            out,
            "  {}{}: {} fake notes",
            currency,
            entry.denomination,
            format_count(entry.fake_notes)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Fake Notes by Denomination (Bar Chart)");
    for entry in fake_note_table() {
        let len = if max == 0 {
            0
        } else {
            (entry.fake_notes as f64 / max as f64 * BAR_WIDTH as f64).round() as usize
        };
        let _ = writeln!(
            out,
            "  {:>5} | {:<width$} {}",
            entry.denomination,
            "█".repeat(len),
            format_count(entry.fake_notes),
            width = BAR_WIDTH
        );
    }
    out
}

pub fn render_denomination(currency: &str, denomination: u32) -> String {
    match predicted_fake_notes(denomination) {
        Some(count) => format!(
            "{}{}: {} fake notes\n",
            currency,
            denomination,
            format_count(count)
        ),
        None => format!("No fake-note data for {}{} notes\n", currency, denomination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::DepositSession;
    use crate::domain::model::DepositRequest;

    fn outcome() -> SubmissionOutcome {
        let mut session = DepositSession::seeded();
        session
            .submit(&DepositRequest {
                customer_name: "Asha".to_string(),
                daily_deposit: 100.0,
                interest_rate: 0.04,
                maturity_days: 365,
                serial_number: "Z9Z9Z9Z9Z9".to_string(),
            })
            .unwrap()
    }

    #[test]
    fn test_render_outcome_formats_amounts() {
        let text = render_outcome(&outcome(), "₹");
        assert!(text.contains("Serial number accepted"));
        assert!(text.contains("₹36,500.00"));
        assert!(text.contains("₹37,960.00"));
        assert!(text.contains("₹1,277.50"));
        assert!(text.contains("₹3,237.50"));
    }

    #[test]
    fn test_render_history_lists_rows() {
        let mut session = DepositSession::seeded();
        for name in ["Asha", "Ravi"] {
            session
                .submit(&DepositRequest {
                    customer_name: name.to_string(),
                    daily_deposit: 1.0,
                    interest_rate: 0.0,
                    maturity_days: 1,
                    serial_number: "A1B2C3D4E5".to_string(),
                })
                .unwrap();
        }
        let text = render_history(session.history());
        assert!(text.contains("Asha"));
        assert!(text.contains("Ravi"));
        assert_eq!(text.matches("Fake/Registered").count(), 2);
        assert!(render_history(&SessionHistory::new()).is_empty());
    }

    #[test]
    fn test_render_single_denomination() {
        assert_eq!(render_denomination("₹", 500), "₹500: 383,842 fake notes\n");
        assert_eq!(render_denomination("₹", 20), "₹20: 0 fake notes\n");
        assert_eq!(render_denomination("₹", 5), "No fake-note data for ₹5 notes\n");
    }

    #[test]
    fn test_render_fake_notes_has_every_denomination() {
        let text = render_fake_notes("₹");
        assert!(text.contains("₹2000: 444,023 fake notes"));
        assert!(text.contains("₹20: 0 fake notes"));
        assert!(text.contains(&"█".repeat(BAR_WIDTH)));
    }
}
