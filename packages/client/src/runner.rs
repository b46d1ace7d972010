//! Interactive loop: reads lines with rustyline and feeds them to the shell.

use std::sync::Arc;

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use crate::{
    config::ClientConfig,
    error::ClientError,
    infrastructure::HttpRoomApi,
    ui::{App, Flow, command::Command},
};

const PROMPT: &str = "houseparty> ";

/// Run the client until the user quits.
pub async fn run(config: ClientConfig) -> Result<(), ClientError> {
    config.validate()?;
    let api = HttpRoomApi::new(&config.base_url, config.timeout())?;
    tracing::info!(
        "Using backend {} (timeout {} ms, poll every {} ms)",
        api.base_url(),
        config.timeout_ms,
        config.poll_interval_ms
    );

    let mut app = App::new(Arc::new(api), config);
    app.start().await;
    println!("{}", app.render().await);

    // rustyline blocks, so it gets its own thread.
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let input = std::thread::spawn(move || read_lines(tx));

    while let Some(line) = rx.recv().await {
        if app.handle(&line).await == Flow::Quit {
            break;
        }
        println!("{}", app.render().await);
    }

    match input.join() {
        Ok(result) => result,
        Err(_) => Err(ClientError::Input("input thread panicked".to_string())),
    }
}

fn read_lines(tx: mpsc::UnboundedSender<String>) -> Result<(), ClientError> {
    let mut editor = DefaultEditor::new().map_err(|e| ClientError::Input(e.to_string()))?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let quit = Command::parse(&line) == Command::Quit;
                if tx.send(line).is_err() || quit {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                let _ = tx.send("quit".to_string());
                return Ok(());
            }
            Err(e) => return Err(ClientError::Input(e.to_string())),
        }
    }
}
