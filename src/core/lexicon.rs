//! Fixed Vietnamese numeral vocabulary.
//!
//! Every token a conversion can produce is one of the constants below,
//! so all output borrows from `'static` storage.

/// Cardinal words for the digits 0 through 9, indexed by digit.
static DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// "hundred"
pub const HUNDRED: &str = "trăm";
/// Ten, when the tens digit is 1.
pub const TEN: &str = "mười";
/// Tens suffix after a tens digit of 2 or more.
pub const TENS: &str = "mươi";
/// Filler spoken before a lone units digit (northern spelling).
pub const FILLER: &str = "linh";
/// Southern spelling of [`FILLER`].
pub const FILLER_SOUTH: &str = "lẻ";
/// 5 in the units position after a non-zero tens digit.
pub const FIVE_AFTER_TENS: &str = "lăm";
/// 1 in the units position after a tens digit of 2 or more.
pub const ONE_AFTER_TENS: &str = "mốt";
/// "thousand" (northern spelling).
pub const THOUSAND: &str = "nghìn";
/// Southern spelling of [`THOUSAND`].
pub const THOUSAND_SOUTH: &str = "ngàn";
/// "million"
pub const MILLION: &str = "triệu";
/// "billion"
pub const BILLION: &str = "tỷ";

/// The cardinal word for a single digit.
///
/// # Panics
///
/// Panics if `digit > 9`; callers only pass digits split off a group.
pub fn digit_word(digit: u16) -> &'static str {
    DIGITS[usize::from(digit)]
}
