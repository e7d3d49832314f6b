//! Hook generation.
//!
//! Turns a [`ShellTemplate`] into a script ready to be sourced by the shell:
//!
//! 1. Comment lines are stripped from the raw template
//! 2. A function name unique to the program path is derived
//! 3. The completion command is built (direct, or through `$1` in multi-program mode)
//! 4. The four `%%marker%%` placeholders are substituted
//!
//! Generation is pure string work. Nothing here touches the filesystem, and
//! the program path is never checked for existence.

use md5::{Digest, Md5};

use crate::error::HookError;
use crate::shell::{
    COMPLETION_COMMAND_MARKER, FUNCTION_NAME_MARKER, PROGRAM_NAME_MARKER, PROGRAM_PATH_MARKER,
    ShellTemplate, TemplateRegistry,
};

/// Subcommand the hook appends when invoking the program for candidates.
pub const COMPLETION_SUBCOMMAND: &str = "_completion";

/// Number of hex characters of the path digest kept in function names.
const HASH_PREFIX_LEN: usize = 16;

/// Parameters for generating one hook.
///
/// ```
/// use comphook::HookRequest;
///
/// let hook = HookRequest::new("bash", "/usr/local/bin/app")
///     .with_program_name("app")
///     .generate()
///     .unwrap();
/// assert!(hook.script().contains(r#"complete -F "#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRequest {
    pub shell: String,
    pub program_path: String,
    pub program_name: Option<String>,
    pub multiple: bool,
}

impl HookRequest {
    pub fn new(shell: impl Into<String>, program_path: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            program_path: program_path.into(),
            program_name: None,
            multiple: false,
        }
    }

    /// Register the completion under `name` instead of the program path.
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Let one hook dispatch completions for several programs.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// The name completion is registered for. Falls back to the program path
    /// when no name, or an empty one, was given.
    pub fn resolved_program_name(&self) -> &str {
        match self.program_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.program_path,
        }
    }

    pub fn generate(&self) -> Result<GeneratedHook, HookError> {
        let registry = TemplateRegistry::global();
        let template = registry
            .get(&self.shell)
            .ok_or_else(|| HookError::unknown_shell_type(&self.shell, &registry.shell_types()))?;

        let program_name = self.resolved_program_name();
        let function_name = generate_function_name(&self.program_path, program_name);
        let completion_command = completion_command(&self.program_path, self.multiple);

        let script = render(
            template,
            &[
                (FUNCTION_NAME_MARKER, function_name.as_str()),
                (PROGRAM_NAME_MARKER, program_name),
                (PROGRAM_PATH_MARKER, self.program_path.as_str()),
                (COMPLETION_COMMAND_MARKER, completion_command.as_str()),
            ],
        );

        Ok(GeneratedHook {
            shell: template.shell(),
            function_name,
            script,
        })
    }
}

/// A finished hook script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHook {
    shell: &'static str,
    function_name: String,
    script: String,
}

impl GeneratedHook {
    pub fn shell(&self) -> &'static str {
        self.shell
    }

    /// Name of the shell function the hook defines and registers.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn into_script(self) -> String {
        self.script
    }
}

/// Generate the completion hook for `program_path` in the given shell's syntax.
///
/// `program_name` defaults to `program_path` when `None` or empty. With
/// `multiple`, the hook calls `$1 _completion` so one function can serve
/// several programs; otherwise it calls the program path directly.
pub fn generate_hook(
    shell: &str,
    program_path: &str,
    program_name: Option<&str>,
    multiple: bool,
) -> Result<String, HookError> {
    let mut request = HookRequest::new(shell, program_path).multiple(multiple);
    request.program_name = program_name.map(str::to_string);
    request.generate().map(GeneratedHook::into_script)
}

/// Derive the shell function name for a program.
///
/// The result is `_{name}_{hash}_complete`, where `name` is the basename of
/// `program_name` reduced to `[A-Za-z0-9_]` (dashes become underscores) and
/// `hash` is the first 16 hex digits of the MD5 of `program_path`. Two installs
/// of the same program at different paths get different functions, while
/// regenerating for the same path is stable.
///
/// ```
/// use comphook::generate_function_name;
///
/// assert_eq!(
///     generate_function_name("/bin/my-tool", "my-tool"),
///     "_my_tool_81ec41047a5a791f_complete"
/// );
/// ```
pub fn generate_function_name(program_path: &str, program_name: &str) -> String {
    let name = sanitize_function_name(basename(program_name));
    let digest = format!("{:x}", Md5::digest(program_path.as_bytes()));
    let function_name = format!("_{name}_{}_complete", &digest[..HASH_PREFIX_LEN]);
    log::debug!("Function name for {program_path:?} ({program_name:?}): {function_name}");
    function_name
}

/// Final `/`-separated segment, ignoring trailing slashes.
fn basename(name: &str) -> &str {
    let trimmed = name.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

fn sanitize_function_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// The command the hook runs to fetch candidates.
///
/// The program path is emitted as given, so `~/bin/app`, `$HOME/bin/app` or
/// `php bin/console` are expanded by the shell when the hook runs.
fn completion_command(program_path: &str, multiple: bool) -> String {
    if multiple {
        format!("$1 {COMPLETION_SUBCOMMAND}")
    } else {
        format!("{program_path} {COMPLETION_SUBCOMMAND}")
    }
}

/// Remove every line whose first non-whitespace character is `#`.
///
/// The whole line goes, terminator included; all other lines are kept byte
/// for byte.
pub fn strip_comments(template: &str) -> String {
    template
        .split_inclusive('\n')
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect()
}

/// Strip comments, then replace each marker with its value.
///
/// Substitution is a single left-to-right pass, so a value that happens to
/// contain marker text is copied through untouched.
fn render(template: &ShellTemplate, values: &[(&str, &str)]) -> String {
    let stripped = strip_comments(template.body());
    let mut out = String::with_capacity(stripped.len());
    let mut rest = stripped.as_str();

    while let Some(start) = rest.find("%%") {
        let candidate = &rest[start..];
        match values
            .iter()
            .find(|(marker, _)| candidate.starts_with(marker))
        {
            Some((marker, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &candidate[marker.len()..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = &candidate[2..];
            }
        }
    }
    out.push_str(rest);
    out
}
