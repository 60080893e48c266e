use crate::{PipelineMode, Story};

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap titles at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Include a header naming the mode and story count
    pub include_header: bool,
}

/// Plain text formatter for story lists
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Render stories as numbered plain text
    pub fn convert(&self, stories: &[Story], mode: PipelineMode) -> String {
        let mut output = String::new();

        if self.config.include_header {
            output.push_str(&generate_header(mode, stories.len()));
            output.push_str("\n\n");
        }

        output.push_str(&stories_to_text(stories, &self.config));
        output
    }
}

/// Render stories as numbered plain text, one block per story
///
/// ```text
///  12. Title of the story
///      118 points | 54 comments
/// ```
pub fn stories_to_text(stories: &[Story], config: &TextConfig) -> String {
    stories
        .iter()
        .map(|story| format_story(story, config.line_width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate a header from the mode and count
fn generate_header(mode: PipelineMode, count: usize) -> String {
    let title = format!("Hacker News ({})", mode);
    format!("{}\n{}\n{} stories", title, "=".repeat(title.len()), count)
}

fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 { format!("{} {}", count, singular) } else { format!("{} {}", count, plural) }
}

fn format_story(story: &Story, width: usize) -> String {
    let prefix = format!("{:>3}. ", story.number);
    let indent = " ".repeat(prefix.len());

    let title_width = width.saturating_sub(prefix.len());
    let title = if title_width > 0 { wrap_words(&story.title, title_width) } else { story.title.clone() };
    let title = title.replace('\n', &format!("\n{}", indent));

    format!(
        "{}{}\n{}{} | {}",
        prefix,
        title,
        indent,
        plural(story.points, "point", "points"),
        plural(story.number_of_comments, "comment", "comments")
    )
}

/// Wrap words to specified line width
fn wrap_words(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line.push_str(word);
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines.join("\n")
}
