pub mod json;
pub mod text;

pub use json::{JsonConfig, JsonFormatter, ranked_to_json, stories_to_json};
pub use text::{TextConfig, TextFormatter, stories_to_text};
