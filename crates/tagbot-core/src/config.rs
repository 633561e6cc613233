use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bot credential. May be empty; see [`Config::configured`].
    pub bot_token: String,

    /// Public HTTPS URL Telegram should deliver updates to. When unset the
    /// bot falls back to long polling.
    pub webhook_url: Option<String>,
    pub webhook_port: u16,

    /// Bound timeout for every outbound Telegram call.
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        // The token may legitimately be absent (e.g. a misconfigured host);
        // the process still starts and reports itself unconfigured instead of
        // crashing. Every Telegram call will fail until it is set.
        let bot_token = env_str("BOT_TOKEN").unwrap_or_default().trim().to_string();

        let webhook_url = env_str("WEBHOOK_URL").and_then(non_empty);
        if let Some(url) = &webhook_url {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(Error::Config(format!(
                    "WEBHOOK_URL must be an http(s) URL, got {url}"
                )));
            }
        }
        let webhook_port = env_u16("WEBHOOK_PORT").unwrap_or(8443);

        let request_timeout =
            Duration::from_millis(env_u64("REQUEST_TIMEOUT_MS").unwrap_or(10_000));

        Ok(Self {
            bot_token,
            webhook_url,
            webhook_port,
            request_timeout,
        })
    }

    /// Whether the bot credential is present.
    pub fn configured(&self) -> bool {
        !self.bot_token.is_empty()
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_u16(key: &str) -> Option<u16> {
    env_str(key).and_then(|s| s.trim().parse::<u16>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
