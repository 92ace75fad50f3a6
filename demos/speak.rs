use std::path::Path;

use docso::playback::*;
use docso::*;

/// Prints each file instead of playing it.
struct DryRun;

impl Player for DryRun {
    fn play(&mut self, asset: &Path) -> Result<(), PlaybackError> {
        if !asset.is_file() {
            return Err(PlaybackError::MissingAsset(asset.to_path_buf()));
        }
        println!("  ▶ {}", asset.display());
        Ok(())
    }
}

fn main() {
    let numeral = to_words(1_005, Region::South).unwrap();
    println!("{numeral}");

    let bank = SoundBank::default();
    for path in playlist(&numeral, &bank).unwrap() {
        println!("  {}", path.display());
    }

    if let Err(e) = speak(&numeral, &bank, DryRun) {
        println!("Playback failed: {e}");
    }
}
