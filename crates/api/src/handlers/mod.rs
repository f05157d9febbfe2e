pub mod health;
pub mod quotes;

pub use health::health;
pub use quotes::{get_form, post_quote};
