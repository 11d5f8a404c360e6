#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Message;
use crate::domain::models::Role;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    name: &'a str,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub scrollbar_width: usize,
    pub outer_padding_percentage: f32,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, name: &'a str, window_max_width: usize) -> Bubble<'a> {
        let mut alignment = BubbleAlignment::Left;
        if message.role() == Role::User {
            alignment = BubbleAlignment::Right;
        }

        return Bubble {
            alignment,
            message,
            name,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // "│ " + " │"
            bubble_padding: 4,
            scrollbar_width: 1,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();
        let border_style = self.border_style();

        let mut lines = vec![self.to_line(vec![Span::styled(
            self.top_bar(max_line_length),
            border_style,
        )])];

        for text in self.message.as_string_lines(max_line_length) {
            let fill = " ".repeat(max_line_length.saturating_sub(text.chars().count()));
            lines.push(self.to_line(vec![
                Span::styled("│ ".to_string(), border_style),
                Span::from(text),
                Span::styled(format!("{fill} │"), border_style),
            ]));
        }

        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));
        lines.push(self.to_line(vec![Span::styled(bottom_bar, border_style)]));

        return lines;
    }

    fn border_style(&self) -> Style {
        if self.message.role() == Role::User {
            return Style::default().fg(Color::Magenta);
        }

        return Style::default().fg(Color::Cyan);
    }

    fn top_bar(&self, max_line_length: usize) -> String {
        let dashes = "─".repeat(
            max_line_length
                .saturating_sub(1)
                .saturating_sub(self.name.chars().count()),
        );
        return format!("╭─ {} {dashes}╮", self.name);
    }

    fn to_line(&self, mut spans: Vec<Span<'static>>) -> Line<'static> {
        if self.alignment == BubbleAlignment::Left {
            return Line::from(spans);
        }

        let line_len: usize = spans
            .iter()
            .map(|span| return span.content.chars().count())
            .sum();
        let style_config = Bubble::style_config();
        let outer_padding = " ".repeat(
            self.window_max_width
                .saturating_sub(line_len)
                .saturating_sub(style_config.scrollbar_width),
        );

        let mut line_spans = vec![Span::from(outer_padding)];
        line_spans.append(&mut spans);

        return Line::from(line_spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Keep a minimum 4% gap on the far side of the bubble.
        let min_outer_padding = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        let available = self
            .window_max_width
            .saturating_sub(style_config.bubble_padding)
            .saturating_sub(style_config.scrollbar_width)
            .saturating_sub(min_outer_padding)
            .max(1);

        let longest = self
            .message
            .content()
            .replace('\t', "  ")
            .lines()
            .map(|line| return line.chars().count())
            .max()
            .unwrap_or(0);

        // The name sits inside the top border.
        let name_length = self.name.chars().count() + 1;

        return longest.max(name_length).min(available);
    }
}
