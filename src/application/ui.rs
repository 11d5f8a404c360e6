use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::models::TopicCatalog;
use crate::domain::services::events::EventsService;
use crate::domain::services::ConversationSession;

const HINT: &str =
    "Hi! Press Tab to pick a topic for an example question, or ask me anything about my experience and skills!";

fn topics_bar() -> Paragraph<'static> {
    let spans = TopicCatalog::labels()
        .into_iter()
        .enumerate()
        .flat_map(|(idx, label)| {
            return vec![
                Span::styled(
                    format!(" {} ", idx + 1),
                    Style::default().fg(Color::Black).bg(Color::Magenta),
                ),
                Span::styled(format!(" {label}  "), Style::default().fg(Color::Magenta)),
            ];
        })
        .collect::<Vec<Span>>();

    return Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
}

fn suggestions_panel() -> Paragraph<'static> {
    let lines = TopicCatalog::all()
        .iter()
        .enumerate()
        .map(|(idx, topic)| {
            return Line::from(vec![
                Span::styled(
                    format!("({}) ", idx + 1),
                    Style::default().fg(Color::Magenta),
                ),
                Span::from(topic.label),
                Span::styled(
                    format!(" - {}", topic.questions.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
        })
        .collect::<Vec<Line>>();

    return Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Pick a topic (1-9), Esc to close"),
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut ConversationSession,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut textarea = TextArea::default();
    let loading = Loading::new(&Config::get(ConfigKey::AssistantName));
    let suggestions_height = TopicCatalog::all().len() as u16 + 2;

    loop {
        terminal.draw(|frame| {
            let mut topics_height = 2;
            if session.input.suggestions_open() {
                topics_height = suggestions_height;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(topics_height),
                    Constraint::Max(4),
                ])
                .split(frame.size());

            if layout[1].width != session.last_known_width
                || layout[1].height != session.last_known_height
            {
                session.set_rect(layout[1]);
            }

            frame.render_widget(
                Paragraph::new(HINT)
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true }),
                layout[0],
            );

            session
                .bubble_list
                .render(frame, layout[1], session.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[1].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut session.scroll.scrollbar_state,
            );

            if session.input.suggestions_open() {
                frame.render_widget(suggestions_panel(), layout[2]);
            } else {
                frame.render_widget(topics_bar(), layout[2]);
            }

            if session.state().is_awaiting_response() {
                loading.render(frame, layout[3]);
            } else {
                frame.render_widget(textarea.widget(), layout[3]);
            }
        })?;

        match events.next().await? {
            Event::BackendResponse(res) => {
                session.handle_backend_response(res);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                if let Some(prompt) = session.submit() {
                    textarea = TextArea::default();
                    tx.send(Action::BackendRequest(prompt))?;
                }
            }
            Event::KeyboardTab() => {
                session.input.toggle_suggestions();
            }
            Event::KeyboardEsc() | Event::MouseClick() => {
                session.input.dismiss_suggestions();
            }
            Event::KeyboardPaste(text) => {
                if session.state().is_awaiting_response() {
                    continue;
                }
                TextArea::insert_text(&mut textarea, &text.replace(['\r', '\n'], " "));
                session.input.set_draft(&textarea.lines().join("\n"));
            }
            Event::KeyboardCharInput(input) => {
                if session.input.suggestions_open() {
                    if let Input {
                        key: Key::Char(char),
                        ctrl: false,
                        alt: false,
                    } = input
                    {
                        if let Some(number) = char.to_digit(10) {
                            if let Some(question) =
                                session.input.select_topic_number(number as usize)
                            {
                                textarea = TextArea::with_text(question);
                            }
                            continue;
                        }
                    }
                }

                if session.state().is_awaiting_response() {
                    continue;
                }
                textarea.input(input);
                session.input.set_draft(&textarea.lines().join("\n"));
            }
            Event::UIResize() => {}
            Event::UIScrollDown() => {
                session.scroll.down();
            }
            Event::UIScrollUp() => {
                session.scroll.up();
            }
            Event::UIScrollPageDown() => {
                session.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                session.scroll.up_page();
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut session = ConversationSession::new(
        &Config::get(ConfigKey::Username),
        &Config::get(ConfigKey::AssistantName),
        Config::topic_seed()?,
    );

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut events = EventsService::new(rx);

    let res = start_loop(&mut terminal, &mut session, tx, &mut events).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return res;
}
