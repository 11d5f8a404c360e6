pub mod ask_endpoint;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> Result<BackendBox> {
        let url = Config::get(ConfigKey::AssistantURL);
        if url.is_empty() {
            bail!("No assistant URL configured. Set `assistant-url` in the config file or pass --assistant-url.");
        }

        return Ok(Box::new(ask_endpoint::AskEndpoint::new(url)));
    }
}
