//! Currency and summary formatting for prediction output.
//!
//! The point estimate renders with cents, the range in whole dollars with
//! an en dash between the bounds. Thousands are comma-grouped.

use crate::facade::PredictionResult;
use crate::request::PredictionRequest;

/// Format a dollar amount with cents: `12345.678` renders as `$12,345.68`.
pub fn usd(value: f64) -> String {
    format_currency(value, 2)
}

/// Format a whole-dollar amount: `9876.5424` renders as `$9,877`.
pub fn usd_whole(value: f64) -> String {
    format_currency(value, 0)
}

/// Format the display band: `$9,877 – $14,815`.
pub fn range(lower: f64, upper: f64) -> String {
    format!("{} – {}", usd_whole(lower), usd_whole(upper))
}

/// Format a full result: point with cents, band in whole dollars.
pub fn result_lines(result: &PredictionResult) -> (String, String) {
    (usd(result.point), range(result.lower, result.upper))
}

/// Ordered label/value rows echoing a request for the summary table.
pub fn input_summary(request: &PredictionRequest) -> Vec<(&'static str, String)> {
    vec![
        ("Age", request.age.to_string()),
        ("Sex", request.sex.to_string()),
        ("BMI", format!("{:.1}", request.bmi)),
        ("Children", request.children.to_string()),
        ("Smoker", request.smoker.to_string()),
        ("Region", request.region.to_string()),
    ]
}

fn format_currency(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
    out.push('$');
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
