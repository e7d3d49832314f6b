//! Shell template registry for comphook.
//!
//! This module provides:
//! - The canonical hook script for each supported shell (bash, zsh)
//! - Lookup of templates by shell-type identifier
//! - Shell detection from the user's environment
//!
//! Templates are plain shell scripts under `templates/` with `%%marker%%`
//! placeholders. They are compiled into the binary and never mutated; see
//! [`crate::hook`] for how they are turned into a finished hook.

mod detection;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

pub use detection::{current_shell, shell_from_path};

/// Placeholder replaced with the generated shell function name.
pub const FUNCTION_NAME_MARKER: &str = "%%function_name%%";

/// Placeholder replaced with the name the completion is registered for.
pub const PROGRAM_NAME_MARKER: &str = "%%program_name%%";

/// Placeholder replaced with the program's filesystem path.
pub const PROGRAM_PATH_MARKER: &str = "%%program_path%%";

/// Placeholder replaced with the command the hook runs to get candidates.
pub const COMPLETION_COMMAND_MARKER: &str = "%%completion_command%%";

/// Every placeholder a template may use.
pub const MARKERS: [&str; 4] = [
    FUNCTION_NAME_MARKER,
    PROGRAM_NAME_MARKER,
    PROGRAM_PATH_MARKER,
    COMPLETION_COMMAND_MARKER,
];

/// Exit status the completion command uses to request native path completion.
///
/// Nothing stops a program from exiting 200 for its own reasons, in which case
/// the hook silently falls back to path completion. Keep it stable anyway:
/// installed hooks in the wild test for this exact value.
pub const NATIVE_PATH_COMPLETION_STATUS: i32 = 200;

/// A raw hook script for one shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellTemplate {
    shell: &'static str,
    body: &'static str,
}

impl ShellTemplate {
    const fn new(shell: &'static str, body: &'static str) -> Self {
        Self { shell, body }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(body: &'static str) -> Self {
        Self::new("test", body)
    }

    /// Shell-type identifier, e.g. `bash`.
    pub fn shell(&self) -> &'static str {
        self.shell
    }

    /// Unprocessed template text, comments and placeholders included.
    pub fn body(&self) -> &'static str {
        self.body
    }
}

/// Immutable mapping from shell-type identifier to its template.
///
/// Iteration follows registration order, which is also the order shells are
/// listed in help text and error hints.
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: IndexMap<&'static str, ShellTemplate>,
}

impl TemplateRegistry {
    fn builtin() -> Self {
        let templates = [
            ShellTemplate::new("bash", include_str!("../../templates/bash.sh")),
            ShellTemplate::new("zsh", include_str!("../../templates/zsh.zsh")),
        ]
        .into_iter()
        .map(|template| (template.shell, template))
        .collect();

        Self { templates }
    }

    /// The registry of built-in templates, initialised on first use.
    pub fn global() -> &'static TemplateRegistry {
        static REGISTRY: Lazy<TemplateRegistry> = Lazy::new(TemplateRegistry::builtin);
        &REGISTRY
    }

    /// Look up the template registered for `shell`.
    ///
    /// Identifiers are matched exactly; `BASH` is not `bash`.
    pub fn get(&self, shell: &str) -> Option<&ShellTemplate> {
        let template = self.templates.get(shell);
        log::debug!(
            "Template lookup for {shell:?}: {}",
            if template.is_some() { "found" } else { "missing" }
        );
        template
    }

    pub fn contains(&self, shell: &str) -> bool {
        self.templates.contains_key(shell)
    }

    /// Registered shell-type identifiers, in registration order.
    pub fn shell_types(&self) -> Vec<&'static str> {
        self.templates.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShellTemplate> {
        self.templates.values()
    }
}

/// All shell types a hook can be generated for.
pub fn list_shell_types() -> Vec<&'static str> {
    TemplateRegistry::global().shell_types()
}
