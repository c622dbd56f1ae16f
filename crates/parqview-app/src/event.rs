use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

const INPUT_POLL: Duration = Duration::from_millis(50);
const MIN_TICK: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    #[allow(dead_code)]
    Resize(u16, u16),
}

/// Merges terminal input and a periodic tick into one ordered stream. The
/// app consumes one event at a time, so a key is fully handled before the next
/// is read.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let input_tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            while !input_tx.is_closed() {
                match read_input() {
                    Ok(Some(event)) => {
                        if input_tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::debug!("Terminal input unavailable: {e}");
                        std::thread::sleep(INPUT_POLL);
                    }
                }
            }
        });

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate.max(MIN_TICK));
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> anyhow::Result<AppEvent> {
        self.rx.recv().await.ok_or_else(|| anyhow::anyhow!("Event channel closed"))
    }
}

fn read_input() -> std::io::Result<Option<AppEvent>> {
    if !event::poll(INPUT_POLL)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    })
}
