//! # docso
//!
//! Written-out Vietnamese cardinal numerals for integers from 0 up to
//! 999,999,999,999, in northern and southern spelling.
//!
//! ## Quick Start
//!
//! ```rust
//! use docso::*;
//!
//! assert_eq!(convert(0, Region::North).unwrap(), "không");
//! assert_eq!(convert(15, Region::North).unwrap(), "mười lăm");
//! assert_eq!(convert(1_005, Region::North).unwrap(), "một nghìn không trăm linh năm");
//! assert_eq!(convert(1_005, Region::South).unwrap(), "một ngàn không trăm lẻ năm");
//!
//! let err = convert_str("-4", "north").unwrap_err();
//! assert!(matches!(err, NumeralError::InvalidInput(_)));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Conversion, regions, configuration |
//! | `playback` | Word → sound file mapping and sequential playback |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "playback")]
pub mod playback;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
