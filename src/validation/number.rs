//! Strict decimal parsing for amount fields
//!
//! Amount inputs hold the raw keystroke buffer. A buffer is only a number
//! once it is a complete decimal: `"12."` or `"-"` are still being typed and
//! parse to NaN so the binding can withhold them from the parent.

/// Parse a raw amount buffer, returning NaN for anything that is not a
/// complete decimal number.
///
/// Accepted after trimming: an optional sign, then digits with an optional
/// fractional part of at least one digit (`12`, `12.50`, `.5`, `-3`).
/// Exponents, thousands separators, currency symbols and `inf`/`nan` are
/// rejected.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    let unsigned = s
        .strip_prefix('-')
        .or_else(|| s.strip_prefix('+'))
        .unwrap_or(s);

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let well_formed = match frac_part {
        Some(frac) => !frac.is_empty() && all_digits(frac) && all_digits(int_part),
        None => !int_part.is_empty() && all_digits(int_part),
    };

    if !well_formed {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// `parse_number` with NaN mapped to `None`
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value = parse_number(raw);
    (!value.is_nan()).then_some(value)
}

/// Render an amount back into an editable buffer
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        String::new()
    } else {
        amount.to_string()
    }
}
