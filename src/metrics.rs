use crate::model::DealInputs;
use crate::model::DealMetrics;

/// Derive the full metric set from one input snapshot.
///
/// A zero total investment is not guarded: profit_margin and roi come out
/// non-finite and the renderers print them as-is.
pub fn evaluate(inputs: &DealInputs) -> DealMetrics {
    let total_investment = inputs.purchase_price
        + inputs.reno_costs
        + inputs.closing_costs
        + inputs.holding_costs
        + inputs.selling_costs
        + inputs.misc_costs;

    let target_resale_price = total_investment * (1.0 + inputs.desired_profit_margin / 100.0);

    let profit = inputs.resale_price - total_investment;
    let profit_margin = (profit / total_investment) * 100.0;

    // NaN compares false, so an empty deal never passes
    let is_deal_good = profit_margin >= inputs.desired_profit_margin;

    // Simple (non-compounding) interest over the loan term
    let monthly_interest = inputs.interest_rate / 100.0 / 12.0;
    let financing_cost = if inputs.loan_amount > 0.0
        && inputs.interest_rate > 0.0
        && inputs.loan_term_months > 0.0
    {
        inputs.loan_amount * monthly_interest * inputs.loan_term_months
    } else {
        0.0
    };

    let net_rental_income = inputs.rental_income * inputs.hold_months;

    let roi = round2((profit + net_rental_income - financing_cost) / total_investment * 100.0);

    DealMetrics {
        total_investment,
        target_resale_price,
        profit,
        profit_margin,
        is_deal_good,
        financing_cost,
        net_rental_income,
        roi,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
