//! Display helpers for large financial figures
//!
//! Amounts are abbreviated with one decimal and a magnitude suffix
//! (`$1.5M`, `$383.3B`). Values below one thousand, and values of a
//! quadrillion or more, are printed in full.

const SUFFIXES: [(f64, &str); 4] =
  [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

const UPPER_BOUND: f64 = 1e15;

fn abbreviate(number: f64) -> Option<String> {
  if !(1e3..UPPER_BOUND).contains(&number) {
    return None;
  }
  SUFFIXES
    .iter()
    .find(|(scale, _)| number >= *scale)
    .map(|(scale, suffix)| format!("{:.1}{}", number / scale, suffix))
}

/// Format a monetary amount, e.g. `1_500_000.0` -> `"$1.5M"`, `-250.0` -> `"-$250"`
pub fn format_large_monetary_number(number: f64) -> String {
  if number < 0.0 {
    return format!("-{}", format_large_monetary_number(-number));
  }
  match abbreviate(number) {
    Some(short) => format!("${}", short),
    None => format!("${}", number),
  }
}

/// Format a count or other non-monetary figure; zero renders as `"-"`
pub fn format_large_non_monetary_number(number: f64) -> String {
  if number == 0.0 || number.is_nan() {
    return "-".to_string();
  }
  if number < 0.0 {
    return format!("-{}", format_large_non_monetary_number(-number));
  }
  abbreviate(number).unwrap_or_else(|| number.to_string())
}

/// Format a ratio rounded to two decimals, e.g. `0.98765` -> `"0.99"`
pub fn format_ratio(ratio: f64) -> String {
  // round half toward positive infinity
  let rounded = (ratio * 100.0 + 0.5).floor() / 100.0;
  format!("{:.2}", rounded)
}

/// Format an optional monetary amount, `"-"` when absent
pub fn format_optional_monetary(number: Option<f64>) -> String {
  number.map(format_large_monetary_number).unwrap_or_else(|| "-".to_string())
}
