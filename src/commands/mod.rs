pub mod function_name;
pub mod hook;
pub mod shells;

pub use function_name::handle_function_name;
pub use hook::{HookArgs, handle_hook};
pub use shells::handle_shells;
