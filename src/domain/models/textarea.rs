use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use tui_textarea::Input;
use tui_textarea::Key;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title("Ask me anything (Enter to send, Tab for topics)")
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    /// Builds a fresh textarea holding `text`, with the cursor at the end.
    pub fn with_text(text: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = TextArea::default();
        TextArea::insert_text(&mut textarea, text);

        return textarea;
    }

    pub fn insert_text(textarea: &mut tui_textarea::TextArea<'a>, text: &str) {
        for char in text.chars() {
            textarea.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }
}
