//! Observable per-field state

/// Obscure toggle state machine. No terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Revealed,
    Obscured,
}

impl Visibility {
    pub fn initial(obscured_by_default: bool) -> Self {
        if obscured_by_default {
            Self::Obscured
        } else {
            Self::Revealed
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Revealed => Self::Obscured,
            Self::Obscured => Self::Revealed,
        }
    }

    /// Label of the reveal affordance: the action a toggle would perform
    pub fn affordance(&self) -> &'static str {
        match self {
            Self::Revealed => "[hide]",
            Self::Obscured => "[show]",
        }
    }
}

/// Current text and visibility of one field instance
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub text: String,
    pub visibility: Visibility,
}

impl FieldState {
    pub fn new(obscured_by_default: bool) -> Self {
        Self {
            text: String::new(),
            visibility: Visibility::initial(obscured_by_default),
        }
    }

    pub fn obscured(&self) -> bool {
        self.visibility == Visibility::Obscured
    }

    /// Text as it should be drawn, masked while obscured
    pub fn display_text(&self, mask: char) -> String {
        if self.obscured() {
            std::iter::repeat(mask).take(self.text.chars().count()).collect()
        } else {
            self.text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_visibility() {
        assert_eq!(Visibility::initial(true), Visibility::Obscured);
        assert_eq!(Visibility::initial(false), Visibility::Revealed);
    }

    #[test]
    fn test_toggle_is_own_inverse() {
        for start in [Visibility::Revealed, Visibility::Obscured] {
            assert_ne!(start.toggle(), start);
            assert_eq!(start.toggle().toggle(), start);
        }
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = FieldState::new(true);
        assert!(state.text.is_empty());
        assert!(state.obscured());
    }

    #[test]
    fn test_display_text_masks_per_char() {
        let mut state = FieldState::new(true);
        state.text = "pässword".to_string();
        assert_eq!(state.display_text('•'), "••••••••");

        state.visibility = Visibility::Revealed;
        assert_eq!(state.display_text('•'), "pässword");
    }
}
