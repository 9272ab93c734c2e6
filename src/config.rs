use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

pub const LOCAL_URL: &str = "http://127.0.0.1:1111";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub title: String,
    pub base_url: Url,
}

impl Config {
    pub fn load(home: &Path, local: bool) -> anyhow::Result<Self> {
        let config_text = fs::read_to_string(home.join("config.toml"))?;
        let mut config: Config = toml::from_str(&config_text)?;

        if local {
            config.base_url = Url::from_str(LOCAL_URL)?;
        }

        Ok(config)
    }

    pub fn make_permalink(&self, path: &str) -> Result<Url, url::ParseError> {
        let escaped = path.strip_suffix("index.html").unwrap_or(path);
        self.base_url.join(escaped)
    }
}
