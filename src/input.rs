use crate::model::DealInputs;

/// Raw form text, one string per field. The calculator never sees these;
/// everything is coerced to a number first via [`parse_amount`].
#[derive(Debug, Clone)]
pub struct DealForm {
    pub purchase_price: String,
    pub reno_costs: String,
    pub closing_costs: String,
    pub holding_costs: String,
    pub selling_costs: String,
    pub misc_costs: String,

    pub resale_price: String,
    pub desired_profit_margin: String,

    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_term_months: String,

    pub rental_income: String,
    pub hold_months: String,
}

impl DealForm {
    pub fn new() -> Self {
        DealForm {
            purchase_price: String::new(),
            reno_costs: String::new(),
            closing_costs: String::new(),
            holding_costs: String::new(),
            selling_costs: String::new(),
            misc_costs: String::new(),

            resale_price: String::new(),
            desired_profit_margin: "25".into(),

            loan_amount: String::new(),
            interest_rate: String::new(),
            loan_term_months: String::new(),

            rental_income: String::new(),
            hold_months: String::new(),
        }
    }

    /// Snapshot the current field texts as a numeric record.
    pub fn inputs(&self) -> DealInputs {
        DealInputs {
            purchase_price: parse_amount(&self.purchase_price),
            reno_costs: parse_amount(&self.reno_costs),
            closing_costs: parse_amount(&self.closing_costs),
            holding_costs: parse_amount(&self.holding_costs),
            selling_costs: parse_amount(&self.selling_costs),
            misc_costs: parse_amount(&self.misc_costs),

            resale_price: parse_amount(&self.resale_price),
            desired_profit_margin: parse_amount(&self.desired_profit_margin),

            loan_amount: parse_amount(&self.loan_amount),
            interest_rate: parse_amount(&self.interest_rate),
            loan_term_months: parse_amount(&self.loan_term_months),

            rental_income: parse_amount(&self.rental_income),
            hold_months: parse_amount(&self.hold_months),
        }
    }
}

/// Empty, unparsable or NaN text counts as zero.
pub fn parse_amount(text: &str) -> f64 {
    let value: f64 = text.trim().parse().unwrap_or(0.0);
    if value.is_nan() { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_amount("120000"), 120000.0);
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("  7 "), 7.0);
        assert_eq!(parse_amount("-300"), -300.0);
    }

    #[test]
    fn garbage_coerces_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn fresh_form_defaults_to_25_percent_margin() {
        let inputs = DealForm::new().inputs();
        assert_eq!(inputs.desired_profit_margin, 25.0);
        assert_eq!(inputs.purchase_price, 0.0);
        assert_eq!(inputs.loan_term_months, 0.0);
    }
}
