//! Lenient parsing of typed guesses.
//!
//! Input is read the way a browser number box hands it over: leading
//! whitespace is skipped, an optional sign is accepted, and the leading run
//! of digits is the number. Anything after the digits is ignored.

/// Parse the leading base-10 integer of `raw`.
///
/// Returns `None` when `raw` has no leading digits. Digit runs that do not
/// fit in an `i64` saturate.
///
/// ```
/// use number_guesser::rules::parse_guess;
///
/// assert_eq!(parse_guess(" 42"), Some(42));
/// assert_eq!(parse_guess("3.9"), Some(3));
/// assert_eq!(parse_guess("-7 apples"), Some(-7));
/// assert_eq!(parse_guess(".5"), None);
/// assert_eq!(parse_guess("abc"), None);
/// ```
#[must_use]
pub fn parse_guess(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digit_count == 0 {
        return None;
    }

    let magnitude = unsigned.as_bytes()[..digit_count]
        .iter()
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    Some(if negative { -magnitude } else { magnitude })
}
