//! Keybinding definitions
//!
//! The table the help dialog is built from. Key handling itself lives in
//! `handler` and the dialog modules.

/// A keybinding definition
#[derive(Debug, Clone, Copy)]
pub struct Keybinding {
    /// Key as shown to the user
    pub key: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active on the main screen
    Global,
    /// Active on the Ledger tab
    Ledger,
    /// Active inside a form dialog
    Dialog,
}

impl KeyContext {
    pub const ALL: [KeyContext; 3] = [KeyContext::Global, KeyContext::Ledger, KeyContext::Dialog];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Ledger => "Ledger",
            Self::Dialog => "Dialogs",
        }
    }
}

const fn bind(key: &'static str, description: &'static str, context: KeyContext) -> Keybinding {
    Keybinding {
        key,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    bind("q", "Quit", KeyContext::Global),
    bind("?", "Show/hide help", KeyContext::Global),
    bind("c", "Update capital", KeyContext::Global),
    bind("a", "Add spending", KeyContext::Global),
    bind("1/2/3", "Ledger / Distribution / Daily trend", KeyContext::Global),
    bind("Tab", "Next tab", KeyContext::Global),
    bind("Shift+Tab", "Previous tab", KeyContext::Global),
    bind("j/k", "Move selection down/up", KeyContext::Ledger),
    bind("g/G", "Go to top/bottom", KeyContext::Ledger),
    bind("Tab", "Next field", KeyContext::Dialog),
    bind("Shift+Tab", "Previous field", KeyContext::Dialog),
    bind("↑/↓", "Step value or cycle choice", KeyContext::Dialog),
    bind("Enter", "Submit", KeyContext::Dialog),
    bind("Esc", "Cancel", KeyContext::Dialog),
];

/// Keybindings for one context, in table order
pub fn for_context(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |k| k.context == context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_bindings() {
        for context in KeyContext::ALL {
            assert!(for_context(context).count() > 0, "{:?}", context);
        }
    }

    #[test]
    fn test_global_quit() {
        assert!(for_context(KeyContext::Global).any(|k| k.key == "q"));
    }
}
