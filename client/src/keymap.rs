#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Clear,
    Save,
}

impl KeyAction {
    /// Clearing keys include Backspace, which would otherwise navigate back.
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyAction::Clear)
    }
}

pub fn key_action(key: &str, modifier: bool) -> Option<KeyAction> {
    if modifier {
        return None;
    }
    match key {
        "Backspace" | "Delete" | "c" | "C" => Some(KeyAction::Clear),
        "Enter" | "s" | "S" => Some(KeyAction::Save),
        _ => None,
    }
}

/// Keys a focused button turns into its own click; shortcuts skip them so
/// the button's action is not doubled by a second one.
pub fn button_handles_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
