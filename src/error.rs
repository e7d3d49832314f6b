//! Comphook error types and formatting
//!
//! Hook generation has exactly one way to fail: asking for a shell that has no
//! template. **`HookError`** carries the data needed to report that, can be
//! pattern-matched by callers, and survives `.into()` to `anyhow::Error` so the
//! CLI can still downcast it. Display produces styled output for users.

use color_print::cwrite;

use crate::styling::{ERROR_EMOJI, HINT_EMOJI};

/// Domain errors for hook generation.
///
/// # Usage
///
/// ```
/// use comphook::{HookError, generate_hook};
///
/// let err = generate_hook("fish", "/bin/app", None, false).unwrap_err();
/// let HookError::UnknownShellType { requested, available } = &err;
/// assert_eq!(requested, "fish");
/// assert!(available.contains(&"bash".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookError {
    UnknownShellType {
        requested: String,
        available: Vec<String>,
    },
}

impl HookError {
    pub(crate) fn unknown_shell_type(requested: &str, available: &[&str]) -> Self {
        HookError::UnknownShellType {
            requested: requested.to_string(),
            available: available.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The shell-type identifier that was asked for.
    pub fn requested(&self) -> &str {
        match self {
            HookError::UnknownShellType { requested, .. } => requested,
        }
    }

    /// Shell-type identifiers that would have been accepted.
    pub fn available(&self) -> &[String] {
        match self {
            HookError::UnknownShellType { available, .. } => available,
        }
    }
}

impl std::error::Error for HookError {}

impl std::fmt::Display for HookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookError::UnknownShellType {
                requested,
                available,
            } => {
                let available = available.join(", ");
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Unknown shell type <bold>{requested}</></>\n\n{HINT_EMOJI} <dim>Supported shells: {available}</>"
                )
            }
        }
    }
}
