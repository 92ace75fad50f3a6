//! Word → sound file resolution.

use std::path::{Path, PathBuf};

use crate::core::Region;

use super::PlaybackError;

/// Default directory holding one sub-directory of recordings per region.
pub const DEFAULT_SOUND_ROOT: &str = "./sounds/vie";

/// File extension of the recordings.
pub const SOUND_EXTENSION: &str = "ogg";

/// Look up the file stem recorded for `word`.
pub fn asset_stem(word: &str) -> Option<&'static str> {
    SOUND_FILES
        .binary_search_by_key(&word, |&(w, _)| w)
        .ok()
        .map(|i| SOUND_FILES[i].1)
}

/// Sound file stems keyed by numeral word.
/// Sorted by word (byte order) for binary search.
static SOUND_FILES: &[(&str, &str)] = &[
    ("ba", "ba"),
    ("bảy", "bay"),
    ("bốn", "bon"),
    ("chín", "chin"),
    ("hai", "hai"),
    ("không", "khong"),
    ("linh", "linh"),
    ("lăm", "lam"),
    ("lẻ", "le"),
    ("mươi", "muoi2"),
    ("mười", "muoi1"),
    ("mốt", "mot2"),
    ("một", "mot1"),
    ("nghìn", "nghin"),
    ("ngàn", "ngan"),
    ("năm", "nam"),
    ("sáu", "sau"),
    ("triệu", "trieu"),
    ("trăm", "tram"),
    ("tám", "tam"),
    ("tỷ", "ty"),
];

/// A directory tree of per-region word recordings.
///
/// Layout: `{root}/{region}/{stem}.ogg`, e.g. `sounds/vie/south/le.ogg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundBank {
    root: PathBuf,
}

impl SoundBank {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the recording for `word` in `region`'s voice.
    pub fn asset_path(&self, region: Region, word: &str) -> Result<PathBuf, PlaybackError> {
        let stem = asset_stem(word).ok_or_else(|| PlaybackError::UnknownWord(word.into()))?;
        Ok(self
            .root
            .join(region.tag())
            .join(stem)
            .with_extension(SOUND_EXTENSION))
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new(DEFAULT_SOUND_ROOT)
    }
}
