//! Sequential playback through a caller-supplied audio device.

use std::path::{Path, PathBuf};

use crate::core::Numeral;

use super::PlaybackError;
use super::asset::SoundBank;

/// Audio output capability supplied by the caller.
///
/// `play` must block until the recording has finished, so that consecutive
/// words do not overlap.
pub trait Player {
    fn play(&mut self, asset: &Path) -> Result<(), PlaybackError>;
}

impl<P: Player + ?Sized> Player for &mut P {
    fn play(&mut self, asset: &Path) -> Result<(), PlaybackError> {
        (**self).play(asset)
    }
}

/// Resolve the recordings for every word of `numeral`, in speaking order.
pub fn playlist(numeral: &Numeral, bank: &SoundBank) -> Result<Vec<PathBuf>, PlaybackError> {
    numeral
        .words()
        .iter()
        .map(|word| bank.asset_path(numeral.region(), word))
        .collect()
}

/// Speak `numeral` word by word through `player`.
///
/// All recordings are resolved before anything is played, so an unknown
/// word produces no partial output. Playback stops at the first error.
pub fn speak<P: Player>(
    numeral: &Numeral,
    bank: &SoundBank,
    mut player: P,
) -> Result<(), PlaybackError> {
    let assets = playlist(numeral, bank)?;
    for asset in &assets {
        if let Err(e) = player.play(asset) {
            tracing::warn!(asset = %asset.display(), error = %e, "playback aborted");
            return Err(e);
        }
        tracing::debug!(asset = %asset.display(), "played");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Region, to_words};

    #[derive(Default)]
    struct Recorder {
        played: Vec<PathBuf>,
    }

    impl Player for Recorder {
        fn play(&mut self, asset: &Path) -> Result<(), PlaybackError> {
            self.played.push(asset.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn plays_every_word_in_order() {
        let numeral = to_words(21, Region::North).unwrap();
        let mut recorder = Recorder::default();
        speak(&numeral, &SoundBank::new("s"), &mut recorder).unwrap();
        assert_eq!(
            recorder.played,
            [
                PathBuf::from("s/north/hai.ogg"),
                PathBuf::from("s/north/muoi2.ogg"),
                PathBuf::from("s/north/mot2.ogg"),
            ]
        );
    }

    #[test]
    fn playlist_uses_southern_words() {
        let numeral = to_words(1_005, Region::South).unwrap();
        let list = playlist(&numeral, &SoundBank::new("s")).unwrap();
        assert!(list.contains(&PathBuf::from("s/south/ngan.ogg")));
        assert!(list.contains(&PathBuf::from("s/south/le.ogg")));
    }
}
