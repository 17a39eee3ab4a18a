//! CLI command handlers, one per file.

mod check;
mod completions;
mod domain;
mod manpage;
mod normalize;
mod resize;
mod validate;
mod version;

pub use check::run_check;
pub use completions::run_completions;
pub use domain::run_domain;
pub use manpage::run_manpage;
pub use normalize::run_normalize;
pub use resize::{run_resize, ResizeRequest};
pub use validate::run_validate;
pub use version::run_version;
