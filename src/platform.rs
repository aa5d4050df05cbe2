//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts
/// - macOS: SUPER (Cmd key), with CONTROL accepted too
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reveal/obscure shortcut display
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";

/// Whether the key carries the platform shortcut modifier
pub fn has_shortcut_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
