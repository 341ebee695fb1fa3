//! Terminal event pump
//!
//! A background thread polls crossterm and forwards key, mouse and resize
//! events, plus a `Tick` at a fixed rate that drives notification expiry
//! and the chart animation.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Interval between ticks
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Receives events from the polling thread
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                // A terminal that can no longer be polled ends the thread;
                // the receiver then sees a disconnected channel
                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(e) => {
                        tracing::error!(error = %e, "event poll failed");
                        return;
                    }
                };

                if ready {
                    let forwarded = match event::read() {
                        // Windows reports releases too
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                        Ok(_) => None,
                        Err(e) => {
                            tracing::error!(error = %e, "event read failed");
                            return;
                        }
                    };
                    if let Some(event) = forwarded {
                        if sender.send(event).is_err() {
                            return;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// Block until the next event
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}
