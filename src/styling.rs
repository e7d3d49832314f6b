//! Styling for terminal output.
//!
//! Messages use `color-print` tags in format strings:
//! - Errors: `<red>...</>`
//! - Hints: `<dim>...</>`
//! - Success: `<green>...</>`
//!
//! Print through the re-exported `anstream` macros rather than `std`'s: they
//! strip escape codes when the stream is not a terminal or `NO_COLOR` is set,
//! so redirected output never picks up color codes.

pub use anstream::{eprintln, print, println};

/// Success emoji: `cprintln!("{SUCCESS_EMOJI} <green>message</>");`
pub const SUCCESS_EMOJI: &str = "✅";

/// Error emoji: `cprintln!("{ERROR_EMOJI} <red>message</>");`
pub const ERROR_EMOJI: &str = "❌";

/// Hint emoji: `cprintln!("{HINT_EMOJI} <dim>message</>");`
pub const HINT_EMOJI: &str = "💡";
