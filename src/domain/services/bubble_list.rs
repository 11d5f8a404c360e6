#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use crate::domain::models::Message;
use crate::domain::models::Role;

/// Rendered transcript lines, cached per message. The transcript only ever
/// grows, so an entry stays valid until the viewport width changes.
pub struct BubbleList {
    cache: Vec<Vec<Line<'static>>>,
    line_width: usize,
    user_name: String,
    assistant_name: String,
}

impl BubbleList {
    pub fn new(user_name: &str, assistant_name: &str) -> BubbleList {
        return BubbleList {
            cache: vec![],
            line_width: 0,
            user_name: user_name.to_string(),
            assistant_name: assistant_name.to_string(),
        };
    }

    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        if line_width == 0 {
            return;
        }

        for message in messages.iter().skip(self.cache.len()) {
            let name = match message.role() {
                Role::User => &self.user_name,
                Role::Assistant => &self.assistant_name,
            };

            let lines = Bubble::new(message, name, line_width).as_lines();
            self.cache.push(lines);
        }
    }

    pub fn len(&self) -> usize {
        return self.cache.iter().map(|lines| return lines.len()).sum();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        let lines = self
            .cache
            .iter()
            .flat_map(|lines| return lines.iter().cloned())
            .collect::<Vec<Line<'static>>>();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
