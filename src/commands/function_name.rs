use comphook::generate_function_name;
use comphook::styling::println;

/// Print the function name a hook for this program defines.
///
/// Useful for install instructions that call the function directly, e.g.
/// `complete -F <name> other-alias`.
pub fn handle_function_name(program_path: &str, program_name: Option<&str>) -> anyhow::Result<()> {
    let program_name = program_name
        .filter(|name| !name.is_empty())
        .unwrap_or(program_path);
    println!("{}", generate_function_name(program_path, program_name));
    Ok(())
}
