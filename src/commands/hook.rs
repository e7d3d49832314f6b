use anyhow::Context;
use color_print::cformat;
use std::path::PathBuf;

use comphook::config::ComphookConfig;
use comphook::path::format_path_for_display;
use comphook::shell::{TemplateRegistry, current_shell};
use comphook::styling::{ERROR_EMOJI, HINT_EMOJI, SUCCESS_EMOJI, eprintln, print};
use comphook::{GeneratedHook, HookRequest};

/// Arguments of `comphook hook`, as given on the command line.
pub struct HookArgs {
    pub program_path: String,
    pub shell: Option<String>,
    pub program_name: Option<String>,
    pub multiple: bool,
    pub output: Option<PathBuf>,
}

pub fn handle_hook(args: HookArgs, config: &ComphookConfig) -> anyhow::Result<()> {
    let shell = resolve_shell(args.shell, config)?;

    let mut request =
        HookRequest::new(shell, args.program_path).multiple(args.multiple || config.multiple);
    request.program_name = args.program_name;

    let hook = request.generate()?;

    match args.output {
        Some(path) => write_hook(&hook, &request, path),
        None => {
            print!("{}", hook.script());
            Ok(())
        }
    }
}

/// Pick the shell: explicit flag, then configured default, then `$SHELL`.
///
/// An explicit shell is passed through unchecked so that generation reports
/// it as unknown together with the supported list.
fn resolve_shell(flag: Option<String>, config: &ComphookConfig) -> anyhow::Result<String> {
    if let Some(shell) = flag {
        return Ok(shell);
    }
    if let Some(shell) = &config.shell {
        log::debug!("Using configured shell {shell}");
        return Ok(shell.clone());
    }
    if let Some(shell) = current_shell() {
        return Ok(shell.to_string());
    }

    let available = TemplateRegistry::global().shell_types().join(", ");
    anyhow::bail!(cformat!(
        "{ERROR_EMOJI} <red>Could not detect shell from $SHELL</>\n\n{HINT_EMOJI} <dim>Pass --shell with one of: {available}</>"
    ))
}

fn write_hook(hook: &GeneratedHook, request: &HookRequest, path: PathBuf) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(&path, hook.script())
        .with_context(|| format!("Failed to write hook to {}", path.display()))?;

    let shell = hook.shell();
    let program = request.resolved_program_name();
    let path_display = format_path_for_display(&path);
    eprintln!(
        "{}",
        cformat!(
            "{SUCCESS_EMOJI} <green>Wrote <bold>{shell}</> completion hook for <bold>{program}</> to <bold>{path_display}</></>"
        )
    );
    eprintln!(
        "{}",
        cformat!("{HINT_EMOJI} <dim>Source it from your shell config: source {path_display}</>")
    );
    Ok(())
}
