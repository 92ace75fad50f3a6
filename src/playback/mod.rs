//! Spoken output of converted numerals.
//!
//! Maps each word of a [`Numeral`](crate::core::Numeral) to a recorded
//! sound file and hands the files, one at a time, to a caller-supplied
//! [`Player`]. Nothing here affects the conversion itself.
//!
//! # Example
//!
//! ```ignore
//! use docso::playback::*;
//! use docso::{Region, to_words};
//!
//! let numeral = to_words(1_005, Region::South)?;
//! speak(&numeral, &SoundBank::default(), &mut my_audio_device)?;
//! ```

mod asset;
mod player;

use std::path::PathBuf;

use thiserror::Error;

pub use asset::{DEFAULT_SOUND_ROOT, SOUND_EXTENSION, SoundBank, asset_stem};
pub use player::{Player, playlist, speak};

/// Errors raised while speaking a numeral.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaybackError {
    /// The word has no recording.
    #[error("no recording for word {0:?}")]
    UnknownWord(String),

    /// The recording file could not be found or opened.
    #[error("missing sound file {}", .0.display())]
    MissingAsset(PathBuf),

    /// The audio device reported an error.
    #[error("audio device error: {0}")]
    Device(String),
}
