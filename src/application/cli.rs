#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::TopicCatalog;
use crate::domain::services::ConversationSession;
use crate::infrastructure::backends::BackendManager;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Enter - Send your question. Ignored while the assistant is still answering.
- Tab - Show or hide the suggested topics.
- 1-9 - Pick a topic while the suggestions are open. Fills in an example question without sending it.
- Esc - Hide the suggested topics.
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U / Page Up - Page up
- CTRL+D / Page Down - Page down
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

pub fn format_topics() -> String {
    return TopicCatalog::all()
        .iter()
        .enumerate()
        .map(|(idx, topic)| {
            let questions = topic
                .questions
                .iter()
                .map(|question| return format!("  - {question}"))
                .collect::<Vec<String>>()
                .join("\n");

            return format!("({}) {}\n{questions}", idx + 1, topic.label);
        })
        .collect::<Vec<String>>()
        .join("\n\n");
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        )
        .subcommand(
            Command::new("keys").about("List all config keys.")
        );
}

fn arg_assistant_url() -> Arg {
    return Arg::new(ConfigKey::AssistantURL.to_string())
        .short('u')
        .long(ConfigKey::AssistantURL.to_string())
        .env("ASKME_ASSISTANT_URL")
        .num_args(1)
        .help(format!(
            "Base URL of the assistant service. Questions are posted to {{assistant-url}}/ask. [default: {}]",
            Config::default(ConfigKey::AssistantURL)
        ));
}

fn arg_topic_seed() -> Arg {
    return Arg::new(ConfigKey::TopicSeed.to_string())
        .long(ConfigKey::TopicSeed.to_string())
        .env("ASKME_TOPIC_SEED")
        .num_args(1)
        .help("Seed for picking example questions when a topic is selected. Picks randomly every run when unset.");
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start a new chat with the assistant. This is the default command.")
        .arg(arg_assistant_url())
        .arg(arg_topic_seed());
}

fn subcommand_ask() -> Command {
    return Command::new("ask")
        .about("Ask a single question, print the answer and exit.")
        .arg(
            Arg::new("question")
                .help("The question to ask.")
                .num_args(1)
                .required(true),
        )
        .arg(arg_assistant_url());
}

async fn ask_once(question: &str) -> Result<()> {
    let backend = BackendManager::get()?;
    let mut session = ConversationSession::new(
        &Config::get(ConfigKey::Username),
        &Config::get(ConfigKey::AssistantName),
        Config::topic_seed()?,
    );

    if !session.ask(&backend, question).await {
        bail!("Question was rejected");
    }

    if let Some(answer) = session.messages().last() {
        println!("{}", answer.content());
    }

    return Ok(());
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("askme")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_ask())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(Command::new("topics").about("List the suggested topics and their example questions."))
        .arg(arg_assistant_url())
        .arg(arg_topic_seed())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("ASKME_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::AssistantName.to_string())
                .long(ConfigKey::AssistantName.to_string())
                .env("ASKME_ASSISTANT_NAME")
                .num_args(1)
                .help(format!("Name shown above the assistant's chat bubbles. [default: {}]", Config::default(ConfigKey::AssistantName)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .long(ConfigKey::Username.to_string())
                .env("ASKME_USERNAME")
                .num_args(1)
                .help("Your name, shown above your chat bubbles. Defaults to $USER.")
                .global(true),
        );
}

/// Handles every subcommand that doesn't open the chat. Returns true when
/// the chat should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    create_config_file().await?;
                }
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    println!("{}", Config::default(ConfigKey::ConfigFile));
                }
                Some(("keys", _)) => {
                    println!("{}", ConfigKey::VARIANTS.join("\n"));
                }
                _ => {
                    subcommand_config().print_long_help()?;
                }
            }
            return Ok(false);
        }
        Some(("topics", _)) => {
            println!("{}", format_topics());
            return Ok(false);
        }
        Some(("ask", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            if let Some(question) = subcmd_matches.get_one::<String>("question") {
                ask_once(question).await?;
            }
            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
