#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Role;

/// A single entry in the transcript. Fields are private so a message can't be
/// edited once it has been created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Message {
        return Message {
            role,
            content: content.to_string(),
        };
    }

    pub fn user(content: &str) -> Message {
        return Message::new(Role::User, content);
    }

    pub fn assistant(content: &str) -> Message {
        return Message::new(Role::Assistant, content);
    }

    pub fn role(&self) -> Role {
        return self.role;
    }

    pub fn content(&self) -> &str {
        return &self.content;
    }

    /// Word wraps the content to fit within `line_max_width` characters. Words
    /// longer than a full line are hard split.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let line_max_width = line_max_width.max(1);
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.content.replace('\t', "  ").split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<String> = vec![];

            for word in full_line.split(' ') {
                let mut word = word.to_string();
                let mut was_split = false;
                while word.chars().count() > line_max_width {
                    was_split = true;
                    if !current_lines.is_empty() {
                        lines.push(current_lines.join(" ").trim_end().to_string());
                        current_lines = vec![];
                        char_count = 0;
                    }
                    let head = word.chars().take(line_max_width).collect::<String>();
                    word = word.chars().skip(line_max_width).collect::<String>();
                    lines.push(head);
                }

                if was_split && word.is_empty() {
                    continue;
                }

                let word_len = word.chars().count();
                if !current_lines.is_empty() && word_len + char_count > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![];
                    char_count = 0;
                }

                current_lines.push(word);
                char_count += word_len + 1;
            }

            if !current_lines.is_empty() {
                let line = current_lines.join(" ").trim_end().to_string();
                if !line.is_empty() {
                    lines.push(line);
                }
            }
        }

        return lines;
    }
}
