use comphook::list_shell_types;
use comphook::styling::println;

pub fn handle_shells() -> anyhow::Result<()> {
    for shell in list_shell_types() {
        println!("{shell}");
    }
    Ok(())
}
