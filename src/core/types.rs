//! Regions, place-value slots and the converted numeral.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::NumeralError;
use super::lexicon;

/// Regional spelling convention.
///
/// Both regions share digit and group logic. They differ only in two words:
/// the filler before a lone units digit ("linh" / "lẻ") and the word for
/// thousand ("nghìn" / "ngàn").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Northern usage (Hà Nội): "linh", "nghìn".
    #[default]
    North,
    /// Southern usage (Sài Gòn): "lẻ", "ngàn".
    South,
}

impl Region {
    /// The lowercase tag used in configuration ("north" / "south").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
        }
    }

    /// Apply this region's spelling to a single word.
    ///
    /// Only whole words are substituted, never fragments of other words.
    pub fn localize(&self, word: &'static str) -> &'static str {
        match (self, word) {
            (Self::South, lexicon::FILLER) => lexicon::FILLER_SOUTH,
            (Self::South, lexicon::THOUSAND) => lexicon::THOUSAND_SOUTH,
            _ => word,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Region {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            _ => Err(NumeralError::InvalidRegion(s.into())),
        }
    }
}

/// One of the four fixed three-digit slots of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceValue {
    /// 10^9, "tỷ".
    Billion,
    /// 10^6, "triệu".
    Million,
    /// 10^3, "nghìn".
    Thousand,
    /// 10^0, unnamed.
    Unit,
}

impl PlaceValue {
    /// All slots, most significant first.
    pub const DESCENDING: [PlaceValue; 4] =
        [Self::Billion, Self::Million, Self::Thousand, Self::Unit];

    /// The multiplier of this slot.
    pub fn scale(&self) -> u64 {
        match self {
            Self::Billion => 1_000_000_000,
            Self::Million => 1_000_000,
            Self::Thousand => 1_000,
            Self::Unit => 1,
        }
    }

    /// The word spoken after a non-zero group in this slot (northern spelling).
    pub fn word(&self) -> Option<&'static str> {
        match self {
            Self::Billion => Some(lexicon::BILLION),
            Self::Million => Some(lexicon::MILLION),
            Self::Thousand => Some(lexicon::THOUSAND),
            Self::Unit => None,
        }
    }

    /// Extract this slot's three-digit group from `n`.
    pub fn group_of(&self, n: u64) -> u16 {
        // Always < 1000, so the narrowing is lossless.
        ((n / self.scale()) % 1_000) as u16
    }
}

/// A converted numeral: the ordered word tokens plus the region they are spelled for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral {
    region: Region,
    words: Vec<&'static str>,
}

impl Numeral {
    pub(crate) fn new(region: Region, words: Vec<&'static str>) -> Self {
        Self { region, words }
    }

    /// The region whose spelling was applied.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The word tokens in speaking order.
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Consume the numeral, returning its tokens.
    pub fn into_words(self) -> Vec<&'static str> {
        self.words
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}
