pub mod config;
pub mod error;
pub mod hook;
pub mod path;
pub mod shell;
pub mod styling;

// Re-export the generation API for convenience
pub use error::HookError;
pub use hook::{GeneratedHook, HookRequest, generate_function_name, generate_hook};
pub use shell::list_shell_types;
