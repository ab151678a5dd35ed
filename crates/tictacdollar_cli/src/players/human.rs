//! Human player that reads lines of keyboard input.

use super::{Command, Player};
use anyhow::Result;
use std::io::BufRead;
use std::sync::Arc;
use tictacdollar::MatchState;
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

/// Input lines shared by every human at the same keyboard.
pub type InputLines = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Forwards lines from `reader` on a dedicated thread.
///
/// The thread blocks in `read_line` and is never joined, so an idle
/// keyboard cannot hold up runtime shutdown. It ends at end of input or
/// once every receiver is gone.
pub fn spawn_line_reader<R: BufRead + Send + 'static>(reader: R) -> InputLines {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Input read failed");
                    break;
                }
            }
        }
        debug!("Input reader finished");
    });
    Arc::new(Mutex::new(rx))
}

/// Human player fed by an input channel.
pub struct HumanPlayer {
    name: String,
    input: InputLines,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: InputLines) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn choose(&mut self, _state: &MatchState) -> Result<Command> {
        let mut input = self.input.lock().await;
        loop {
            match input.recv().await {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => {
                    debug!(player = %self.name, %line, "Read input");
                    return Ok(Command::parse(&line));
                }
                None => {
                    debug!(player = %self.name, "Input closed");
                    return Ok(Command::Quit);
                }
            }
        }
    }

    fn is_human(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
