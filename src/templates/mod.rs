pub mod components;
pub mod email;

pub use email::{found_params, nothing_params, startup_params, TemplateParams};
