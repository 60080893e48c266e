use crate::{PipelineMode, Result, Story};
use serde::Serialize;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
    /// Wrap the stories in an object that also names the mode
    pub include_mode: bool,
}

/// Stories together with the mode that produced them
#[derive(Debug, Clone, Serialize)]
pub struct RankedOutput<'a> {
    pub mode: PipelineMode,
    pub count: usize,
    pub stories: &'a [Story],
}

fn to_string<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    Ok(json)
}

/// Convert stories to a JSON array, the shape the HTTP API returns
pub fn stories_to_json(stories: &[Story], config: &JsonConfig) -> Result<String> {
    to_string(&stories, config.pretty)
}

/// Convert stories to a JSON object carrying the mode and a count
pub fn ranked_to_json(stories: &[Story], mode: PipelineMode, config: &JsonConfig) -> Result<String> {
    to_string(&RankedOutput { mode, count: stories.len(), stories }, config.pretty)
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, stories: &[Story], mode: PipelineMode) -> Result<String> {
        if self.config.include_mode {
            ranked_to_json(stories, mode, &self.config)
        } else {
            stories_to_json(stories, &self.config)
        }
    }
}
