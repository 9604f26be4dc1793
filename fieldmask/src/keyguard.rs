//! Key-press filtering for guarded decimal fields.
//!
//! The guard is a pure allow/deny gate: it looks only at the key identity, the
//! caret position and whether the field already holds a minus sign. It never
//! computes the value the key would produce; sanitizing that is the policy's
//! job.

/// Key identity as reported by the DOM `KeyboardEvent.key` property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    Backspace,
    Delete,
    Tab,
    Enter,
    Escape,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
    /// Any other named key (`F5`, `PageUp`, `Shift`, ...).
    Other(Box<str>),
}

impl Key {
    /// Normalizes a DOM `key` value.
    ///
    /// Single characters map to [`Key::Char`]; legacy aliases (`Esc`,
    /// `Left`, `Spacebar`, ...) map to their modern counterparts.
    #[must_use]
    pub fn from_dom(dom_key: &str) -> Self {
        let mut chars = dom_key.chars();
        if let Some(first) = chars.next()
            && chars.next().is_none()
        {
            return Key::Char(first);
        }

        match dom_key {
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Tab" => Key::Tab,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Home" => Key::Home,
            "End" => Key::End,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "Spacebar" => Key::Char(' '),
            other => Key::Other(other.into()),
        }
    }

    /// Editing and caret-movement keys, which are never filtered.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::Backspace
                | Key::Delete
                | Key::Tab
                | Key::Enter
                | Key::Escape
                | Key::Home
                | Key::End
                | Key::Left
                | Key::Right
                | Key::Up
                | Key::Down
        )
    }
}

/// Outcome of a guarded key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDecision {
    /// The key reaches the field.
    Allow,
    /// The key's default action is suppressed.
    Block,
}

impl KeyDecision {
    /// Whether the host must call `preventDefault()`.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        self == KeyDecision::Block
    }

    /// Whether the host must stop further listeners from seeing the event.
    ///
    /// The guard owns every key press on its field, allowed or not, so this is
    /// always true.
    #[must_use]
    pub fn stops_propagation(self) -> bool {
        true
    }
}

/// Key filter for guarded decimal fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeystrokeGuard {
    allow_sign: bool,
}

impl KeystrokeGuard {
    #[must_use]
    pub fn new(allow_sign: bool) -> Self {
        Self { allow_sign }
    }

    #[must_use]
    pub fn allows_sign(&self) -> bool {
        self.allow_sign
    }

    /// Decides whether `key` may reach a field holding `value` with the caret
    /// at character index `caret`.
    #[must_use]
    pub fn check(&self, key: &Key, caret: usize, value: &str) -> KeyDecision {
        let allowed = match key {
            key if key.is_navigation() => true,
            Key::Char('0'..='9' | ',' | '.') => true,
            Key::Char('-') => self.allow_sign && caret == 0 && !value.contains('-'),
            _ => false,
        };
        if allowed {
            KeyDecision::Allow
        } else {
            KeyDecision::Block
        }
    }
}
