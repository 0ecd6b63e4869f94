/// Configuration for a tab reorder behavior.
///
/// Every field has a default that matches the stock tab strip stylesheet, so
/// `ReorderConfig::default()` is usually all a host needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderConfig {
    /// Class marking the tab the user last pressed.
    pub active_class: String,
    /// Class applied to the host while it follows the pointer.
    pub dragging_class: String,
    /// Smallest slot index a drop may target.
    ///
    /// Slot 0, the leading position, is reserved and never a drop target.
    pub min_target_slot: usize,
}

pub const DEFAULT_ACTIVE_CLASS: &str = "active-tab";
pub const DEFAULT_DRAGGING_CLASS: &str = "movable";
pub const DEFAULT_MIN_TARGET_SLOT: usize = 1;

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            active_class: DEFAULT_ACTIVE_CLASS.to_owned(),
            dragging_class: DEFAULT_DRAGGING_CLASS.to_owned(),
            min_target_slot: DEFAULT_MIN_TARGET_SLOT,
        }
    }
}

impl ReorderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn dragging_class(mut self, class: impl Into<String>) -> Self {
        self.dragging_class = class.into();
        self
    }

    pub fn min_target_slot(mut self, slot: usize) -> Self {
        self.min_target_slot = slot;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReorderConfig::default();
        assert_eq!(config.active_class, "active-tab");
        assert_eq!(config.dragging_class, "movable");
        assert_eq!(config.min_target_slot, 1);
    }

    #[test]
    fn test_builder_setters() {
        let config = ReorderConfig::new()
            .active_class("selected")
            .dragging_class("lifted")
            .min_target_slot(0);
        assert_eq!(config.active_class, "selected");
        assert_eq!(config.dragging_class, "lifted");
        assert_eq!(config.min_target_slot, 0);
    }
}
