use serde::{Deserialize, Serialize};

/// Open/closed state of the mobile navigation.
///
/// The browser keeps this as the presence of the open class on both the links
/// container and the hamburger icon; both always receive the same toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Build the state from what the DOM currently reports.
    #[must_use]
    pub const fn from_class_present(present: bool) -> Self {
        Self { open: present }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_presence_maps_to_open() {
        assert!(MenuState::from_class_present(true).is_open());
        assert!(!MenuState::from_class_present(false).is_open());
        assert_eq!(MenuState::default(), MenuState::from_class_present(false));
    }
}
