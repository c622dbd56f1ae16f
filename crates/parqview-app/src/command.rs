use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// vi-style focus keys and the grid vector each one moves along.
pub const NAVIGATION_KEYS: [(char, (i32, i32)); 4] = [('h', (-1, 0)), ('j', (0, 1)), ('k', (0, -1)), ('l', (1, 0))];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    MoveFocus((i32, i32)),
    /// Hand the key to the focused pane.
    Forward(KeyEvent),
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Self {
        if is_quit(&key) {
            return Command::Quit;
        }
        if let KeyCode::Char(c) = key.code {
            if key.modifiers.is_empty() {
                if let Some((_, vector)) = NAVIGATION_KEYS.iter().find(|(k, _)| *k == c) {
                    return Command::MoveFocus(*vector);
                }
            }
        }
        Command::Forward(key)
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
