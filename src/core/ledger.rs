use crate::domain::model::{LedgerReport, NormalizedInput};

/// Commission paid to the collection agent, as a fraction of the investment.
pub const AGENCY_COMMISSION_RATE: f64 = 0.035;
/// Flat machine/hardware cost charged per customer.
pub const HARDWARE_COST: f64 = 500.0;

/// Computes the full report in one pass; every figure derives from the three inputs.
pub fn compute(daily_deposit: f64, interest_rate: f64, maturity_days: u64) -> LedgerReport {
    let investment_amount = daily_deposit * maturity_days as f64;
    let total_return = investment_amount * (1.0 + interest_rate);
    let bank_interest_cost = total_return - investment_amount;
    let agency_cost = investment_amount * AGENCY_COMMISSION_RATE;
    let hardware_cost = HARDWARE_COST;
    let total_bank_cost = bank_interest_cost + agency_cost + hardware_cost;

    LedgerReport {
        investment_amount,
        total_return,
        bank_interest_cost,
        agency_cost,
        hardware_cost,
        total_bank_cost,
    }
}

pub fn compute_for(input: &NormalizedInput) -> LedgerReport {
    compute(input.daily_deposit, input.interest_rate, input.maturity_days)
}
