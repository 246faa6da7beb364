//! USD display formatting
//!
//! en-US conventions: `$` prefix, `,` thousands grouping, fixed fraction
//! digits. Positive amounts that would round to `$0.00` at cent precision
//! render as `<$0.01` so small line items never look free.
//!
//! Rounding works on the shortest decimal form of the value (what `{}`
//! prints) and sends halves away from zero: 2.625 renders as `$2.63` and an
//! annual 2.5 as `$3`. `{:.2}` alone would round the binary tie to even.

/// Marker for positive amounts below one cent
pub const LESS_THAN_ONE_CENT: &str = "<$0.01";

/// Rendering for values with no meaningful figure
pub const NOT_APPLICABLE: &str = "n/a";

/// Format `value` as USD with `decimals` fraction digits
///
/// # Example
/// ```
/// use kodiak_cost_core::format::format_currency;
///
/// assert_eq!(format_currency(2472.21, 2), "$2,472.21");
/// assert_eq!(format_currency(2472.21, 0), "$2,472");
/// assert_eq!(format_currency(0.004, 2), "<$0.01");
/// ```
pub fn format_currency(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_APPLICABLE.to_string();
    }
    if value > 0.0 && value < 0.01 {
        return LESS_THAN_ONE_CENT.to_string();
    }

    let (whole, fraction) = round_half_away(value.abs(), decimals);

    let mut out = String::with_capacity(whole.len() + fraction.len() + 6);
    if value < 0.0 {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(&whole));
    if decimals > 0 {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Round a non-negative finite value to `decimals` places
///
/// Returns the whole and fraction digits; the fraction is always exactly
/// `decimals` long.
fn round_half_away(value: f64, decimals: usize) -> (String, String) {
    let shortest = value.to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    if matches!(fraction.as_bytes().get(decimals), Some(next) if *next >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (whole, fraction) = digits.split_at(digits.len() - decimals);
    let text = |bytes: &[u8]| bytes.iter().map(|&b| char::from(b)).collect::<String>();
    (text(whole), text(fraction))
}

/// Monthly figures and line items: two decimals
pub fn format_monthly(value: f64) -> String {
    format_currency(value, 2)
}

/// Annual totals: whole dollars
pub fn format_annual(value: f64) -> String {
    format_currency(value, 0)
}

pub fn format_cost_per_hire(cost_per_hire: Option<f64>) -> String {
    match cost_per_hire {
        Some(value) => format_currency(value, 2),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Integer with thousands separators (`7800` -> `7,800`)
pub fn format_count(n: u64) -> String {
    group_thousands(&n.to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_default() {
        assert_eq!(format_monthly(0.0), "$0.00");
        assert_eq!(format_monthly(47.0), "$47.00");
        assert_eq!(format_monthly(168.0081), "$168.01");
        assert_eq!(format_monthly(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_annual_has_no_fraction() {
        assert_eq!(format_annual(2472.21), "$2,472");
        assert_eq!(format_annual(999.6), "$1,000");
    }

    #[test]
    fn test_halves_round_away_from_zero() {
        // exact binary ties
        assert_eq!(format_monthly(2.625), "$2.63");
        assert_eq!(format_monthly(0.125), "$0.13");
        assert_eq!(format_monthly(4.125), "$4.13");
        assert_eq!(format_annual(2.5), "$3");
        assert_eq!(format_annual(1082.5), "$1,083");
        assert_eq!(format_monthly(-2.625), "-$2.63");
        // shortest form is 1.005 even though the stored value is just below it
        assert_eq!(format_monthly(1.005), "$1.01");
    }

    #[test]
    fn test_rounding_carries_into_whole_dollars() {
        assert_eq!(format_monthly(9.995), "$10.00");
        assert_eq!(format_monthly(999.999), "$1,000.00");
        assert_eq!(format_annual(99999.5), "$100,000");
    }

    #[test]
    fn test_below_half_rounds_down() {
        assert_eq!(format_monthly(2.624), "$2.62");
        assert_eq!(format_monthly(0.0149), "$0.01");
        assert_eq!(format_annual(2.4999), "$2");
    }

    #[test]
    fn test_sub_cent_marker() {
        assert_eq!(format_monthly(0.009), LESS_THAN_ONE_CENT);
        assert_eq!(format_monthly(0.0001), LESS_THAN_ONE_CENT);
        // applies regardless of requested precision
        assert_eq!(format_annual(0.005), LESS_THAN_ONE_CENT);
        // exactly one cent is not "less than"
        assert_eq!(format_monthly(0.01), "$0.01");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_monthly(-1.0), "-$1.00");
        assert_eq!(format_monthly(-12345.5), "-$12,345.50");
    }

    #[test]
    fn test_non_finite_is_not_applicable() {
        assert_eq!(format_monthly(f64::NAN), NOT_APPLICABLE);
        assert_eq!(format_monthly(f64::INFINITY), NOT_APPLICABLE);
    }

    #[test]
    fn test_cost_per_hire() {
        assert_eq!(format_cost_per_hire(None), "n/a");
        assert_eq!(format_cost_per_hire(Some(0.25)), "$0.25");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(7800), "7,800");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
