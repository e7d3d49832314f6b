//! Detect the user's shell from the environment.

use std::path::Path;

use super::TemplateRegistry;

/// The user's login shell, when it is one we have a template for.
///
/// Reads `$SHELL` and keeps only its basename, so `/usr/local/bin/zsh`
/// becomes `zsh`.
pub fn current_shell() -> Option<&'static str> {
    let shell = std::env::var_os("SHELL")?;
    let detected = shell_from_path(Path::new(&shell));
    log::debug!("Detected shell from $SHELL={}: {detected:?}", shell.to_string_lossy());
    detected
}

/// Map a shell executable path to a registered shell-type identifier.
pub fn shell_from_path(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_str()?;
    TemplateRegistry::global()
        .get(name)
        .map(|template| template.shell())
}
