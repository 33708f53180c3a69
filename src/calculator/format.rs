//! Result formatting.
//!
//! Whole values are shown without a decimal point, everything else with
//! exactly two fractional digits. The same string is fed back into the
//! working expression when an operator chains off a result.

/// Format a result for display.
///
/// Rounding is half away from zero, applied to the shortest decimal
/// representation that round-trips to `value`. That way `2.675` shows as
/// `2.68`, the way it was typed, even though the nearest `f64` is slightly
/// below it.
///
/// `value` must be finite; the evaluator never produces anything else.
pub fn format_result(value: f64) -> String {
    debug_assert!(value.is_finite(), "cannot format {value}");

    if value.fract() == 0.0 {
        // Collapse -0 into 0
        let whole = if value == 0.0 { 0.0 } else { value };
        return format!("{:.0}", whole);
    }

    format_two_decimals(value)
}

fn format_two_decimals(value: f64) -> String {
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac = frac_part.bytes().map(|b| b - b'0');
    digits.push(frac.next().unwrap_or(0));
    digits.push(frac.next().unwrap_or(0));

    if frac.next().is_some_and(|d| d >= 5) {
        round_up(&mut digits);
    }

    let is_zero = digits.iter().all(|&d| d == 0);
    let split = digits.len() - 2;

    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == split {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// Add one unit in the last place, carrying leftwards.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}
