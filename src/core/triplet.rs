//! Verbalization of a single three-digit group.

use super::lexicon::{self, digit_word};

/// Render one group (0–999) as word tokens.
///
/// `rank` is the 1-based position of this group among the non-zero groups
/// spoken so far, counting this one. A rank above 1 means a higher group
/// has already been spoken, which forces "không trăm" for an empty hundreds
/// place and "linh" before a lone units digit.
///
/// The output is always in northern spelling; regional substitution happens
/// after the whole number is assembled.
///
/// # Rules
///
/// | Position | Condition | Words |
/// |----------|-----------|-------|
/// | hundreds | `a > 0` | `a` "trăm" |
/// | hundreds | `a == 0`, rank > 1, rest non-zero | "không trăm" |
/// | tens | `b == 0`, `c > 0`, something spoken before | "linh" |
/// | tens | `b == 1` | "mười" |
/// | tens | `b > 1` | `b` "mươi" |
/// | units | `c == 5`, `b >= 1` | "lăm" |
/// | units | `c == 1`, `b >= 2` | "mốt" |
/// | units | `c == 0`, first and only group, all zero | "không" |
pub fn render_triplet(group: u16, rank: usize) -> Vec<&'static str> {
    debug_assert!(group < 1_000, "group {group} is not a triplet");
    debug_assert!(rank >= 1, "group rank is 1-based");

    let a = group / 100;
    let b = (group % 100) / 10;
    let c = group % 10;

    let spoken_before = rank > 1;
    let has_rest = b > 0 || c > 0;

    let speaks_zero_hundreds = a == 0 && spoken_before && has_rest;
    let needs_filler = b == 0 && c > 0 && (a > 0 || spoken_before);
    let is_lone_five = c == 5 && b >= 1;
    let is_lone_one = c == 1 && b >= 2;
    let is_standalone_zero = group == 0 && rank == 1;

    let mut words = Vec::with_capacity(5);

    if a > 0 || speaks_zero_hundreds {
        words.push(digit_word(a));
        words.push(lexicon::HUNDRED);
    }

    match b {
        0 if needs_filler => words.push(lexicon::FILLER),
        0 => {}
        1 => words.push(lexicon::TEN),
        _ => {
            words.push(digit_word(b));
            words.push(lexicon::TENS);
        }
    }

    if c > 0 {
        words.push(if is_lone_five {
            lexicon::FIVE_AFTER_TENS
        } else if is_lone_one {
            lexicon::ONE_AFTER_TENS
        } else {
            digit_word(c)
        });
    } else if is_standalone_zero {
        words.push(digit_word(0));
    }

    words
}
