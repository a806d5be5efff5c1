//! Display Formatting
//!
//! Dutch-locale money and date rendering for result cards and billing
//! metadata.

/// Euro amount in nl-NL style: `€ 1.234,56`. Absent or non-finite
/// values render as zero, matching how the result cards treat missing
/// totals.
pub fn euro(amount: Option<f64>) -> String {
    let v = match amount {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    };
    let negative = v < 0.0;
    let cents = (v.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("€ {}{},{:02}", sign, grouped, frac)
}

const MONTHS_NL: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Long Dutch date for an ISO timestamp: `5 augustus 2026`. Falls back
/// to the raw input when it does not start with a `YYYY-MM-DD` date.
pub fn date_nl(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return iso.to_string(),
    };
    let month_idx: usize = match month.parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => m - 1,
        _ => return iso.to_string(),
    };
    let day: u32 = match day.get(..2).unwrap_or(day).parse() {
        Ok(d) => d,
        Err(_) => return iso.to_string(),
    };
    format!("{} {} {}", day, MONTHS_NL[month_idx], year)
}

/// Compact history timestamp: `2026-08-05T14:03:22.123Z` becomes
/// `2026-08-05 14:03:22`
pub fn timestamp(iso: &str) -> String {
    let mut s: String = iso.chars().take(19).collect();
    if let Some(pos) = s.find('T') {
        s.replace_range(pos..pos + 1, " ");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euro_formatting() {
        assert_eq!(euro(Some(12.34)), "€ 12,34");
        assert_eq!(euro(Some(0.5)), "€ 0,50");
        assert_eq!(euro(Some(1234.5)), "€ 1.234,50");
        assert_eq!(euro(Some(1_000_000.0)), "€ 1.000.000,00");
    }

    #[test]
    fn test_euro_missing_is_zero() {
        assert_eq!(euro(None), "€ 0,00");
        assert_eq!(euro(Some(f64::NAN)), "€ 0,00");
        assert_eq!(euro(Some(f64::INFINITY)), "€ 0,00");
    }

    #[test]
    fn test_euro_negative() {
        assert_eq!(euro(Some(-3.07)), "€ -3,07");
    }

    #[test]
    fn test_date_nl() {
        assert_eq!(date_nl("2026-08-05T12:00:00Z"), "5 augustus 2026");
        assert_eq!(date_nl("2025-01-31"), "31 januari 2025");
        assert_eq!(date_nl("not a date"), "not a date");
    }

    #[test]
    fn test_timestamp_trim() {
        assert_eq!(timestamp("2026-08-05T14:03:22.123456"), "2026-08-05 14:03:22");
        assert_eq!(timestamp(""), "");
    }
}
