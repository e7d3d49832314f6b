use anyhow::Context;
use clap::{Parser, Subcommand};
use comphook::config::ComphookConfig;
use comphook::styling::eprintln;
use std::path::PathBuf;
use std::process;

mod commands;

use commands::{HookArgs, handle_function_name, handle_hook, handle_shells};

#[derive(Parser)]
#[command(name = "comphook")]
#[command(about = "Generate shell completion hooks", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a completion hook for a program
    Hook {
        /// Path of the program that answers `_completion` requests
        program_path: String,

        /// Shell to generate the hook for (default: config, then $SHELL)
        #[arg(long, short)]
        shell: Option<String>,

        /// Name to register completion for (default: the program path)
        #[arg(long, short = 'p')]
        program_name: Option<String>,

        /// Dispatch to whichever program is being completed, via `$1 _completion`
        #[arg(long, short)]
        multiple: bool,

        /// Write the hook to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List supported shells
    Shells,

    /// Print the shell function name a hook would define
    FunctionName {
        /// Path of the program that answers `_completion` requests
        program_path: String,

        /// Name completion is registered for (default: the program path)
        #[arg(long, short = 'p')]
        program_name: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hook {
            program_path,
            shell,
            program_name,
            multiple,
            output,
        } => ComphookConfig::load()
            .context("Failed to load config")
            .and_then(|config| {
                handle_hook(
                    HookArgs {
                        program_path,
                        shell,
                        program_name,
                        multiple,
                        output,
                    },
                    &config,
                )
            }),
        Commands::Shells => handle_shells(),
        Commands::FunctionName {
            program_path,
            program_name,
        } => handle_function_name(&program_path, program_name.as_deref()),
    };

    if let Err(e) = result {
        // HookError is already formatted with emoji and colors; {:#} adds any context
        eprintln!("{e:#}");
        process::exit(1);
    }
}
