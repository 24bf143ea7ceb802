use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    /// One-shot ready signal, sent by the app loop after the first
    /// committed frame. The hero view renders nothing until it arrives.
    Mount,
    SystemMessage(String),
    Key(KeyEvent),
}
