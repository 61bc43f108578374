use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DealInputs {
    pub purchase_price: f64,
    pub reno_costs: f64,
    pub closing_costs: f64,
    pub holding_costs: f64,
    pub selling_costs: f64,
    pub misc_costs: f64,

    pub resale_price: f64,
    pub desired_profit_margin: f64,  // percent

    pub loan_amount: f64,
    pub interest_rate: f64,  // percent per year
    pub loan_term_months: f64,

    pub rental_income: f64,  // per month while holding
    pub hold_months: f64,
}

impl Default for DealInputs {
    fn default() -> Self {
        DealInputs {
            purchase_price: 0.0,
            reno_costs: 0.0,
            closing_costs: 0.0,
            holding_costs: 0.0,
            selling_costs: 0.0,
            misc_costs: 0.0,

            resale_price: 0.0,
            desired_profit_margin: 25.0,

            loan_amount: 0.0,
            interest_rate: 0.0,
            loan_term_months: 0.0,

            rental_income: 0.0,
            hold_months: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DealMetrics {
    pub total_investment: f64,
    pub target_resale_price: f64,

    pub profit: f64,
    pub profit_margin: f64,  // NaN when total_investment is 0
    pub is_deal_good: bool,

    pub financing_cost: f64,
    pub net_rental_income: f64,
    pub roi: f64,  // percent, rounded to 2 decimals
}
