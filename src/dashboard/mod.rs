pub mod handlers;
pub mod templates;

pub use handlers::*;
