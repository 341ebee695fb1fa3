//! Configurable key bindings
//!
//! Each bindable action maps to one key string from `config.json`, such as
//! `"a"`, `"?"`, `"ctrl+d"` or `"f1"`. The map is checked once at startup
//! and the TUI refuses to start when an action has no usable key.

use std::collections::BTreeMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Settings;
use crate::error::ExpenseError;

/// Something the user can trigger from the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Quit,
    Help,
    AddExpense,
    SetLimit,
    DeleteExpense,
    ToggleTheme,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Quit,
        Action::Help,
        Action::AddExpense,
        Action::SetLimit,
        Action::DeleteExpense,
        Action::ToggleTheme,
    ];

    /// Key in the `keybindings` settings table
    pub fn config_name(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Help => "help",
            Self::AddExpense => "add_expense",
            Self::SetLimit => "set_limit",
            Self::DeleteExpense => "delete_expense",
            Self::ToggleTheme => "toggle_theme",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Help => "Show/hide help",
            Self::AddExpense => "Add expense",
            Self::SetLimit => "Set monthly limit",
            Self::DeleteExpense => "Delete selected expense",
            Self::ToggleTheme => "Toggle dark/light theme",
        }
    }

    fn from_config_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.config_name() == name)
    }
}

/// A key plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Parse strings like `"q"`, `"?"`, `"enter"`, `"ctrl+d"`, `"f2"`
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = text;

        loop {
            let lower = rest.to_ascii_lowercase();
            if let Some(stripped) = lower.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = &rest[rest.len() - stripped.len()..];
            } else if let Some(stripped) = lower.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = &rest[rest.len() - stripped.len()..];
            } else {
                break;
            }
        }

        let code = match rest.to_ascii_lowercase().as_str() {
            "" => return None,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "insert" | "ins" => KeyCode::Insert,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            lower => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(if modifiers.is_empty() {
                        c
                    } else {
                        c.to_ascii_lowercase()
                    }),
                    _ => {
                        let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
                        if !(1..=12).contains(&n) {
                            return None;
                        }
                        KeyCode::F(n)
                    }
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Whether a key event triggers this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        // Terminals report shifted characters with SHIFT set; the char itself
        // already carries the case
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        let code = match (key.code, self.modifiers.is_empty()) {
            (KeyCode::Char(c), false) => KeyCode::Char(c.to_ascii_lowercase()),
            (code, _) => code,
        };
        code == self.code && modifiers == self.modifiers
    }

    /// Keys the main screen uses for navigation and dismissal
    fn is_reserved(&self) -> bool {
        self.modifiers.is_empty()
            && matches!(
                self.code,
                KeyCode::Char('j')
                    | KeyCode::Char('k')
                    | KeyCode::Char(' ')
                    | KeyCode::Up
                    | KeyCode::Down
                    | KeyCode::Enter
                    | KeyCode::Esc
            )
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "Alt+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Esc => write!(f, "Esc"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Del"),
            KeyCode::Insert => write!(f, "Ins"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Validated action-to-key table
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: BTreeMap<Action, KeyBinding>,
}

impl KeyMap {
    /// Build the map from settings, collecting every problem found
    pub fn from_settings(settings: &Settings) -> Result<Self, ExpenseError> {
        Self::from_table(&settings.keybindings)
    }

    pub fn from_table(table: &BTreeMap<String, String>) -> Result<Self, ExpenseError> {
        let mut problems = Vec::new();
        let mut bindings: BTreeMap<Action, KeyBinding> = BTreeMap::new();

        for name in table.keys() {
            if Action::from_config_name(name).is_none() {
                problems.push(format!("{}: unknown action", name));
            }
        }

        for action in Action::ALL {
            let Some(text) = table.get(action.config_name()) else {
                problems.push(format!("{}: no key bound", action.config_name()));
                continue;
            };
            let Some(binding) = KeyBinding::parse(text) else {
                problems.push(format!("{}: unrecognised key '{}'", action.config_name(), text));
                continue;
            };
            if binding.is_reserved() {
                problems.push(format!(
                    "{}: '{}' is reserved for navigation",
                    action.config_name(),
                    text
                ));
                continue;
            }
            if let Some((other, _)) = bindings.iter().find(|(_, b)| **b == binding) {
                problems.push(format!(
                    "{}: '{}' already bound to {}",
                    action.config_name(),
                    text,
                    other.config_name()
                ));
                continue;
            }
            bindings.insert(action, binding);
        }

        if problems.is_empty() {
            Ok(Self { bindings })
        } else {
            Err(ExpenseError::MissingBindings(problems))
        }
    }

    /// The action a key event triggers, if any
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, binding)| binding.matches(key))
            .map(|(action, _)| *action)
    }

    pub fn binding(&self, action: Action) -> Option<KeyBinding> {
        self.bindings.get(&action).copied()
    }

    /// Display label for an action's key, e.g. `"a"` or `"Ctrl+d"`
    pub fn label(&self, action: Action) -> String {
        self.binding(action)
            .map(|b| b.to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}
