use std::path::Path;

/// Format a filesystem path for user-facing output.
///
/// When the path lives under the user's home directory, it is shown with a
/// leading `~` (e.g., `/Users/alex/.bash_completion.d/app` ->
/// `~/.bash_completion.d/app`). Paths outside home are returned unchanged.
pub fn format_path_for_display(path: &Path) -> String {
    match home::home_dir() {
        Some(home) => format_relative_to_home(path, &home),
        None => path.display().to_string(),
    }
}

fn format_relative_to_home(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(stripped) if stripped.as_os_str().is_empty() => "~".to_string(),
        Ok(stripped) => Path::new("~").join(stripped).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
