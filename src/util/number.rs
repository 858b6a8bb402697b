//! Numeric helpers for values read from element markup.

/// Parse a markup attribute the way the browser's `Number()` conversion
/// does for the forms a page realistically carries, returning `None` for
/// anything that is not a finite number.
///
/// Surrounding whitespace is ignored and an empty string is `0`. Decimal,
/// exponent and signed forms are accepted, as are `0x`/`0o`/`0b` integers.
/// `Infinity`, `NaN` and garbage are rejected.
#[must_use]
pub fn parse_finite(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        // from_str_radix tolerates a sign; Number() does not after a prefix.
        if digits.starts_with('+') {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }

    // Rust accepts "inf"/"nan" spellings that Number() does not; both end
    // up rejected by the finiteness check.
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Clamp a percentage to `[0, 100]`. Negative zero comes out as `0`.
#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    percent.clamp(0.0, 100.0) + 0.0
}

/// Clamp a fraction to `[0, 1]`.
#[must_use]
pub fn clamp_unit(fraction: f64) -> f64 {
    fraction.clamp(0.0, 1.0)
}

/// Group the integer part of `value` in threes with `separator`.
///
/// Fallback for hosts without locale-aware number formatting; the browser
/// host formats through `Number.prototype.toLocaleString`.
#[must_use]
pub fn group_thousands(value: f64, separator: char) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs().trunc());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative && digits != "0" {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
