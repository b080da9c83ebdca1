//! Session persistence (save/restore) support.
//!
//! Converts the committed shape log into a serialised representation,
//! writes it to disk with locking, optional compression, and backup
//! rotation, and restores it on startup. Loading is deliberately tolerant:
//! any read or parse failure is swallowed and treated as an empty history.

mod options;
mod snapshot;

pub use options::{CompressionMode, DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES, SessionOptions};
pub use snapshot::{load_history, save_history};
