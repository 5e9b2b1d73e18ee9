pub mod auth;
pub mod catalog;
pub mod chat;
pub mod clock;
pub mod config;
pub mod contacts;
pub mod core_state;
pub mod db;
pub mod directory;
pub mod emergency;
pub mod location;
pub mod models;
pub mod quiz;
pub mod tutorials;

use std::io::{BufRead, Write};

use tracing_subscriber::EnvFilter;

use crate::config::DashboardConfig;
use crate::core_state::DashboardState;

const QUIT_COMMAND: &str = "/quit";
const TOPICS_COMMAND: &str = "/topics";

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return;
        }
    };

    let state = match DashboardState::open(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open dashboard state");
            return;
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = chat_loop(&state, stdin.lock(), stdout.lock()) {
        tracing::error!(error = %e, "Terminal I/O failed");
    }
    tracing::info!("{} stopped", config::APP_NAME);
}

/// Line-based chat: every line is a message until `/quit` or end of input.
fn chat_loop(
    state: &DashboardState,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    if let Ok(chat) = state.chat() {
        if let Some(welcome) = chat.last() {
            writeln!(output, "{}", welcome.content)?;
        }
    }
    writeln!(output, "(type {TOPICS_COMMAND} for suggestions, {QUIT_COMMAND} to exit)")?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            QUIT_COMMAND => break,
            TOPICS_COMMAND => {
                for topic in state.quick_topics() {
                    writeln!(output, "  - {topic}")?;
                }
            }
            "" => continue,
            text => match state.send_chat(text) {
                Ok(reply) => writeln!(output, "\n{}\n", reply.content)?,
                Err(e) => writeln!(output, "{e}")?,
            },
        }
        output.flush()?;
    }
    Ok(())
}
