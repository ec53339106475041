//! English words for integers.
//!
//! ```
//! use number_guesser::narration::to_words;
//!
//! assert_eq!(to_words(123), "one hundred and twenty three");
//! assert_eq!(to_words(1050), "one thousand fifty");
//! assert_eq!(to_words(-5), "minus five");
//! ```

const UNITS: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Convert an integer to lowercase English words.
///
/// Groups above the hundreds are formed by recursing on thousands, so
/// `1_000_000` reads `"one thousand thousand"`. `"and"` only joins a
/// hundreds word to the two-digit remainder that follows it.
#[must_use]
pub fn to_words(n: i64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let mut words = Vec::new();
    if n < 0 {
        words.push("minus");
    }
    push_words(n.unsigned_abs(), &mut words);
    words.join(" ")
}

fn push_words(n: u64, words: &mut Vec<&'static str>) {
    let thousands = n / 1000;
    if thousands > 0 {
        push_words(thousands, words);
        words.push("thousand");
    }

    let hundreds = (n % 1000 / 100) as usize;
    let remainder = (n % 100) as usize;

    if hundreds > 0 {
        words.push(UNITS[hundreds]);
        words.push("hundred");
        if remainder > 0 {
            words.push("and");
        }
    }

    match remainder {
        0 => {}
        1..=9 => words.push(UNITS[remainder]),
        10..=19 => words.push(TEENS[remainder - 10]),
        _ => {
            words.push(TENS[remainder / 10]);
            if remainder % 10 > 0 {
                words.push(UNITS[remainder % 10]);
            }
        }
    }
}
