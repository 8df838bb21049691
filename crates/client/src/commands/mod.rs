//! Command implementations for the `balcao` binary.
//!
//! Each submodule corresponds to a top-level CLI command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

use balcao_auth::Session;
use balcao_client::{ClientConfig, HttpBackend, LocalStore, SessionAccessor};

/// `balcao login`, `logout` and `whoami`.
pub mod auth;

/// `balcao products list|add|delete`.
pub mod products;

/// `balcao sell`: the interactive counter.
///
/// Reads commands line by line (`list`, `add`, `remove`, `show`, `html`,
/// `submit`, `quit`) and prints the re-rendered order after every change.
pub mod sell;

/// `balcao users list|add|delete`.
pub mod users;

/// What every command needs: resolved configuration, the HTTP backend, the
/// session accessor over local storage and the console.
pub struct Context {
    pub config: ClientConfig,
    pub backend: Arc<HttpBackend>,
    pub sessions: SessionAccessor,
    pub console: Console,
}

impl Context {
    pub fn build(api_url: Option<&str>, data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = ClientConfig::from_env().context("loading configuration")?;
        if let Some(url) = api_url {
            config = config.with_api_url(url)?;
        }
        if let Some(dir) = data_dir {
            config = config.with_data_dir(dir);
        }

        tracing::debug!(api_url = %config.api_url, data_dir = ?config.data_dir, "configuration resolved");

        let backend = Arc::new(HttpBackend::new(config.api_url.clone()));
        let sessions = SessionAccessor::new(LocalStore::at_path(config.store_path()));

        Ok(Self {
            config,
            backend,
            sessions,
            console: Console::stdin(),
        })
    }

    pub async fn session(&self) -> anyhow::Result<Option<Session>> {
        Ok(self.sessions.read().await?)
    }
}

/// Line input for prompts and the sell loop.
///
/// One buffered reader serves every read, so bytes buffered past a line stay
/// available to the next one.
pub struct Console<R = BufReader<Stdin>> {
    input: Mutex<R>,
}

impl Console {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Console<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }

    /// Next line without its line ending; `None` at end of input.
    pub async fn read_line(&self) -> anyhow::Result<Option<String>> {
        let mut input = self.input.lock().await;
        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Write `label` to stdout and read the answer.
    pub async fn prompt(&self, label: &str) -> anyhow::Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(label.as_bytes()).await?;
        stdout.flush().await?;

        Ok(self.read_line().await?.unwrap_or_default())
    }

    /// The given value, or one read from the console.
    pub async fn password_or_prompt(&self, password: Option<String>) -> anyhow::Result<String> {
        match password {
            Some(password) => Ok(password),
            None => self.prompt("Password: ").await,
        }
    }
}
