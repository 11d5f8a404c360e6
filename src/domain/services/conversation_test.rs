use anyhow::anyhow;
use anyhow::Result;
use async_trait::async_trait;
use ratatui::prelude::Rect;

use super::ConversationSession;
use super::FALLBACK_MESSAGE;
use crate::domain::models::Backend;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Message;
use crate::domain::models::Role;
use crate::domain::models::SessionState;
use crate::domain::models::TopicCatalog;
use crate::infrastructure::backends::ask_endpoint::AskEndpoint;

struct BrokenBackend {}

#[async_trait]
impl Backend for BrokenBackend {
    #[allow(clippy::implicit_return)]
    async fn ask(&self, _prompt: &BackendPrompt) -> Result<String> {
        return Err(anyhow!("connection reset by peer"));
    }
}

fn new_session() -> ConversationSession {
    return ConversationSession::new("Visitor", "Assistant", Some(11));
}

fn roles(session: &ConversationSession) -> Vec<Role> {
    return session
        .messages()
        .iter()
        .map(|msg| return msg.role())
        .collect();
}

mod submit {
    use super::*;

    #[test]
    fn it_starts_idle_and_empty() {
        let session = new_session();

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.messages().is_empty());
    }

    #[test]
    fn it_locks_the_session_on_submit() {
        let mut session = new_session();
        session.input.set_draft("What did you build at GAME?");

        let prompt = session.submit().unwrap();

        assert_eq!(prompt.question, "What did you build at GAME?");
        assert_eq!(
            session.messages(),
            &[Message::user("What did you build at GAME?")]
        );
        assert_eq!(session.state(), SessionState::AwaitingResponse);
        assert_eq!(session.input.draft(), "");
    }

    #[test]
    fn it_trims_the_submitted_question() {
        let mut session = new_session();
        session.input.set_draft("   Why Berkeley Haas?  ");

        let prompt = session.submit().unwrap();

        assert_eq!(prompt.question, "Why Berkeley Haas?");
        assert_eq!(session.messages()[0].content(), "Why Berkeley Haas?");
    }

    #[test]
    fn it_ignores_blank_drafts() {
        let mut session = new_session();
        session.input.set_draft("   \n\t ");

        assert!(session.submit().is_none());
        assert!(session.messages().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn it_rejects_rapid_submissions_while_awaiting() {
        let mut session = new_session();
        session.input.set_draft("First");
        assert!(session.submit().is_some());

        for idx in 0..5 {
            session.input.set_draft(&format!("Again {idx}"));
            assert!(session.submit().is_none());
            assert!(session.begin_ask(format!("Direct {idx}")).is_none());
        }

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.state(), SessionState::AwaitingResponse);
        assert_eq!(session.input.draft(), "Again 4");
    }

    #[test]
    fn it_does_not_submit_when_selecting_topics() {
        let mut session = new_session();
        let selected = session.input.select_topic("Skills").unwrap().to_string();

        assert!(TopicCatalog::get("Skills")
            .unwrap()
            .questions
            .contains(&selected.as_str()));
        assert!(session.messages().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }
}

mod handle_backend_response {
    use super::*;

    #[test]
    fn it_appends_answers_and_unlocks() {
        let mut session = new_session();
        session.input.set_draft("What did you build at GAME?");
        session.submit();

        session.handle_backend_response(BackendResponse::Answered(
            "He built an SMB accelerator.".to_string(),
        ));

        assert_eq!(
            session.messages(),
            &[
                Message::user("What did you build at GAME?"),
                Message::assistant("He built an SMB accelerator."),
            ]
        );
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn it_substitutes_the_fallback_on_failure() {
        let mut session = new_session();
        session.input.set_draft("Hello?");
        session.submit();

        session.handle_backend_response(BackendResponse::Failed("boom".to_string()));

        assert_eq!(session.messages()[1].role(), Role::Assistant);
        assert_eq!(
            session.messages()[1].content(),
            "I'm sorry, I'm having trouble connecting right now. Please try again later."
        );
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn it_drops_responses_when_nothing_is_in_flight() {
        let mut session = new_session();
        session.handle_backend_response(BackendResponse::Answered("stray".to_string()));

        assert!(session.messages().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn it_pairs_every_question_with_one_answer() {
        let mut session = new_session();

        for idx in 0..4 {
            session.input.set_draft(&format!("Question {idx}"));
            session.submit().unwrap();

            let res = if idx % 2 == 0 {
                BackendResponse::Answered(format!("Answer {idx}"))
            } else {
                BackendResponse::Failed("timeout".to_string())
            };
            session.handle_backend_response(res.clone());
            session.handle_backend_response(res);
        }

        assert_eq!(session.messages().len(), 8);
        for pair in session.messages().chunks(2) {
            assert_eq!(pair[0].role(), Role::User);
            assert_eq!(pair[1].role(), Role::Assistant);
        }
        assert_eq!(session.messages()[2].content(), "Question 1");
        assert_eq!(session.messages()[3].content(), FALLBACK_MESSAGE);
        assert_eq!(session.messages()[5].content(), "Answer 2");
    }
}

mod ask {
    use super::*;

    #[tokio::test]
    async fn it_completes_an_exchange() -> Result<()> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/ask")
            .with_status(200)
            .with_body(r#"{"response": "He built an SMB accelerator."}"#)
            .expect(1)
            .create();

        let backend: BackendBox = Box::new(AskEndpoint::new(server.url()));
        let mut session = new_session();
        let accepted = session.ask(&backend, "What did you build at GAME?").await;

        assert!(accepted);
        assert_eq!(
            session.messages(),
            &[
                Message::user("What did you build at GAME?"),
                Message::assistant("He built an SMB accelerator."),
            ]
        );
        assert_eq!(session.state(), SessionState::Idle);
        mock.assert();

        return Ok(());
    }

    #[tokio::test]
    async fn it_falls_back_on_network_errors() {
        let backend: BackendBox = Box::new(BrokenBackend {});
        let mut session = new_session();
        session.ask(&backend, "Are you there?").await;

        assert_eq!(roles(&session), vec![Role::User, Role::Assistant]);
        assert_eq!(session.messages()[1].content(), FALLBACK_MESSAGE);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn it_falls_back_on_bad_statuses() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/ask").with_status(503).create();

        let backend: BackendBox = Box::new(AskEndpoint::new(server.url()));
        let mut session = new_session();
        session.ask(&backend, "Are you there?").await;

        assert_eq!(session.messages()[1].content(), FALLBACK_MESSAGE);
        assert_eq!(session.state(), SessionState::Idle);
        mock.assert();
    }

    #[tokio::test]
    async fn it_rejects_asks_while_awaiting() {
        let backend: BackendBox = Box::new(BrokenBackend {});
        let mut session = new_session();
        session.input.set_draft("First");
        session.submit().unwrap();

        let accepted = session.ask(&backend, "Second").await;

        assert!(!accepted);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.state(), SessionState::AwaitingResponse);
    }

    #[tokio::test]
    async fn it_accepts_new_questions_after_a_failure() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/ask")
            .with_status(200)
            .with_body(r#"{"response": "Back online."}"#)
            .create();

        let broken: BackendBox = Box::new(BrokenBackend {});
        let working: BackendBox = Box::new(AskEndpoint::new(server.url()));
        let mut session = new_session();

        assert!(session.ask(&broken, "First").await);
        assert!(session.ask(&working, "Second").await);

        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.messages()[1].content(), FALLBACK_MESSAGE);
        assert_eq!(session.messages()[3].content(), "Back online.");
        mock.assert();
    }
}

mod presentation_sync {
    use super::*;

    fn sized_session() -> ConversationSession {
        let mut session = new_session();
        session.set_rect(Rect::new(0, 0, 60, 10));
        return session;
    }

    #[test]
    fn it_renders_bubbles_for_each_message() {
        let mut session = sized_session();
        session.input.set_draft("Hi there!");
        session.submit();

        assert_eq!(session.bubble_list.len(), 3);
    }

    #[test]
    fn it_snaps_to_the_newest_message() {
        let mut session = sized_session();

        for idx in 0..3 {
            session.input.set_draft(&format!("Question {idx}"));
            session.submit();
            session.handle_backend_response(BackendResponse::Answered(format!("Answer {idx}")));
        }

        // Six three-line bubbles in a ten line viewport.
        assert_eq!(session.bubble_list.len(), 18);
        assert_eq!(session.scroll.position, 8);
    }

    #[test]
    fn it_snaps_back_after_manual_scrolling() {
        let mut session = sized_session();
        for idx in 0..3 {
            session.input.set_draft(&format!("Question {idx}"));
            session.submit();
            session.handle_backend_response(BackendResponse::Answered(format!("Answer {idx}")));
        }

        session.scroll.up_page();
        assert_eq!(session.scroll.position, 0);

        session.input.set_draft("One more");
        session.submit();

        assert_eq!(session.bubble_list.len(), 21);
        assert_eq!(session.scroll.position, 11);
    }

    #[test]
    fn it_does_not_move_on_rejected_submissions() {
        let mut session = sized_session();
        for idx in 0..3 {
            session.input.set_draft(&format!("Question {idx}"));
            session.submit();
            session.handle_backend_response(BackendResponse::Answered(format!("Answer {idx}")));
        }

        session.scroll.up();
        session.input.set_draft("   ");
        session.submit();

        assert_eq!(session.scroll.position, 7);
    }
}
