use crate::model::DealMetrics;

/// One labeled row of the deal summary. Screen table and PDF both render
/// from these, so the two outputs can never drift apart.
#[derive(Debug, Clone)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

pub fn summary_rows(m: &DealMetrics) -> Vec<SummaryLine> {
    vec![
        SummaryLine { label: "Total Investment", value: format_currency(m.total_investment) },
        SummaryLine { label: "Target Resale Price", value: format_currency(m.target_resale_price) },
        SummaryLine { label: "Estimated Profit", value: format_currency(m.profit) },
        SummaryLine { label: "Profit Margin", value: format_percent(m.profit_margin) },
        SummaryLine { label: "Financing Cost", value: format_currency(m.financing_cost) },
        SummaryLine { label: "Net Rental Income", value: format_currency(m.net_rental_income) },
        SummaryLine { label: "ROI", value: format_percent(m.roi) },
    ]
}

pub fn verdict_line(m: &DealMetrics) -> String {
    if m.is_deal_good {
        "✅ Meets profit target".to_string()
    } else {
        "❌ Does NOT meet profit target".to_string()
    }
}

/// The eight final summary lines, in display order.
pub fn render_lines(m: &DealMetrics) -> Vec<String> {
    let mut lines: Vec<String> = summary_rows(m)
        .iter()
        .map(|row| format!("{}: {}", row.label, row.value))
        .collect();
    lines.push(verdict_line(m));
    lines
}

/// Dollar amount with comma grouping and at most two (trimmed) decimals.
/// Non-finite values print literally ("$NaN"), sign sits after the "$".
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = format!("${sign}{}", group_thousands(whole));
    if frac > 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{frac:02}"));
        }
    }
    out
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::evaluate;
    use crate::model::DealInputs;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(120_000.0), "$120,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn currency_trims_decimals() {
        assert_eq!(format_currency(120_000.5), "$120,000.5");
        assert_eq!(format_currency(1_234.56), "$1,234.56");
        assert_eq!(format_currency(0.25), "$0.25");
    }

    #[test]
    fn currency_sign_follows_the_dollar() {
        assert_eq!(format_currency(-5_000.0), "$-5,000");
        assert_eq!(format_currency(-0.5), "$-0.5");
    }

    #[test]
    fn non_finite_currency_prints_literally() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$inf");
    }

    #[test]
    fn percent_always_two_decimals() {
        assert_eq!(format_percent(25.0), "25.00%");
        assert_eq!(format_percent(27.2), "27.20%");
        assert_eq!(format_percent(-3.333), "-3.33%");
        assert_eq!(format_percent(f64::NAN), "NaN%");
    }

    #[test]
    fn rows_keep_label_order() {
        let m = evaluate(&DealInputs::default());
        let labels: Vec<&str> = summary_rows(&m).iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![
            "Total Investment",
            "Target Resale Price",
            "Estimated Profit",
            "Profit Margin",
            "Financing Cost",
            "Net Rental Income",
            "ROI",
        ]);
    }

    #[test]
    fn worked_example_lines() {
        let inputs = DealInputs {
            purchase_price: 100_000.0,
            reno_costs: 20_000.0,
            resale_price: 150_000.0,
            ..DealInputs::default()
        };
        let lines = render_lines(&evaluate(&inputs));

        assert_eq!(lines, vec![
            "Total Investment: $120,000",
            "Target Resale Price: $150,000",
            "Estimated Profit: $30,000",
            "Profit Margin: 25.00%",
            "Financing Cost: $0",
            "Net Rental Income: $0",
            "ROI: 25.00%",
            "✅ Meets profit target",
        ]);
    }

    #[test]
    fn empty_deal_renders_nan_literally() {
        let lines = render_lines(&evaluate(&DealInputs::default()));

        assert_eq!(lines[3], "Profit Margin: NaN%");
        assert_eq!(lines[6], "ROI: NaN%");
        assert_eq!(lines[7], "❌ Does NOT meet profit target");
    }

    #[test]
    fn failing_deal_gets_the_not_met_verdict() {
        let inputs = DealInputs {
            purchase_price: 100_000.0,
            resale_price: 110_000.0,
            ..DealInputs::default()
        };
        let m = evaluate(&inputs);

        assert!(!m.is_deal_good);
        assert_eq!(verdict_line(&m), "❌ Does NOT meet profit target");
    }
}
