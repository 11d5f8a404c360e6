use anyhow::Result;

use super::build;
use super::format_topics;
use crate::configuration::ConfigKey;

#[test]
fn it_formats_topics() {
    let res = format_topics();

    assert!(res.starts_with("(1) Work Experience\n  - "));
    assert!(res.contains("(3) Skills\n  - What are your core product management skills?"));
    assert!(res.contains("  - What did you build at GAME?"));
    assert_eq!(res.matches("\n\n").count(), 4);
}

#[test]
fn it_accepts_assistant_url_on_the_chat_subcommand() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "askme",
        "chat",
        "--assistant-url",
        "https://example.com",
    ])?;

    let (name, chat_matches) = matches.subcommand().unwrap();
    assert_eq!(name, "chat");
    assert_eq!(
        chat_matches.get_one::<String>(&ConfigKey::AssistantURL.to_string()),
        Some(&"https://example.com".to_string())
    );

    return Ok(());
}

#[test]
fn it_requires_a_shell_for_completions() {
    let res = build().try_get_matches_from(vec!["askme", "completions"]);

    assert!(res.is_err());
}

#[test]
fn it_passes_global_args_to_subcommands() -> Result<()> {
    let matches =
        build().try_get_matches_from(vec!["askme", "chat", "--username", "Visitor"])?;

    let (_, chat_matches) = matches.subcommand().unwrap();
    assert_eq!(
        chat_matches.get_one::<String>(&ConfigKey::Username.to_string()),
        Some(&"Visitor".to_string())
    );

    return Ok(());
}

#[test]
fn it_requires_a_question_for_ask() -> Result<()> {
    assert!(build().try_get_matches_from(vec!["askme", "ask"]).is_err());

    let matches =
        build().try_get_matches_from(vec!["askme", "ask", "What did you build at GAME?"])?;
    let (name, ask_matches) = matches.subcommand().unwrap();
    assert_eq!(name, "ask");
    assert_eq!(
        ask_matches.get_one::<String>("question"),
        Some(&"What did you build at GAME?".to_string())
    );

    return Ok(());
}
