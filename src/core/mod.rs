//! Number-to-words conversion for Vietnamese.
//!
//! A number is split into four three-digit groups (billions, millions,
//! thousands, units). Each non-zero group is verbalized on its own, followed
//! by its place-value word, and the southern spelling is applied last.

mod builder;
mod converter;
mod error;
mod formatter;
pub mod lexicon;
mod triplet;
mod types;

pub use builder::*;
pub use converter::*;
pub use error::*;
pub use formatter::{
    MAX_NUMBER, convert, convert_decimal, convert_signed, convert_str, to_words,
};
pub use triplet::render_triplet;
pub use types::*;
