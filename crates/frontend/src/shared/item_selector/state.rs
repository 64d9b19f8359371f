use contracts::catalog::Item;
use leptos::prelude::*;
use std::collections::HashSet;

/// Where the dialog currently is within one selection episode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Idle,
    /// Validation rejected the selection; the message is shown in the
    /// status bar until the selection changes again.
    Error(String),
    Confirmed,
    Cancelled,
}

/// Selection state for one episode.
///
/// Owned by the dialog and shared with the grid through a signal. Entries
/// are keyed by item index (items have positional identity), so a
/// structural re-render of the grid keeps the current selection.
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    selected: HashSet<usize>,
    pub phase: DialogPhase,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn is_resolved(&self) -> bool {
        matches!(self.phase, DialogPhase::Confirmed | DialogPhase::Cancelled)
    }

    /// Flips the entry for `index` and returns the new value.
    ///
    /// A changed selection invalidates a previous validation message, so
    /// this also moves the dialog from Error back to Idle.
    pub fn toggle(&mut self, index: usize) -> bool {
        if matches!(self.phase, DialogPhase::Error(_)) {
            self.phase = DialogPhase::Idle;
        }
        if self.selected.remove(&index) {
            false
        } else {
            self.selected.insert(index);
            true
        }
    }

    /// Selected items in collection order, as of right now.
    pub fn selected_items(&self, items: &[Item]) -> Vec<Item> {
        items
            .iter()
            .enumerate()
            .filter(|(index, _)| self.selected.contains(index))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// OK pressed: run the validator over the current selection.
    ///
    /// Returns the confirmed items, or `None` when the validator rejected
    /// the selection (its message moves the dialog to Error) or the
    /// episode is already resolved. An empty validator message counts as
    /// a pass.
    pub fn confirm(
        &mut self,
        items: &[Item],
        validate: impl Fn(&[Item]) -> Option<String>,
    ) -> Option<Vec<Item>> {
        if self.is_resolved() {
            return None;
        }
        let picked = self.selected_items(items);
        match validate(&picked) {
            Some(message) if !message.is_empty() => {
                self.phase = DialogPhase::Error(message);
                None
            }
            _ => {
                self.phase = DialogPhase::Confirmed;
                Some(picked)
            }
        }
    }

    /// Cancel is immediate and total: no validation, selection discarded.
    ///
    /// Returns false when the episode was already resolved.
    pub fn cancel(&mut self) -> bool {
        if self.is_resolved() {
            return false;
        }
        self.phase = DialogPhase::Cancelled;
        true
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            DialogPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Default confirmation gate: require at least one selected item.
pub fn default_validate(selected: &[Item]) -> Option<String> {
    if selected.is_empty() {
        Some("Please select at least 1 item.".to_string())
    } else {
        None
    }
}

pub fn create_state() -> RwSignal<SelectorState> {
    RwSignal::new(SelectorState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Item {
        Item {
            name: name.to_string(),
            ..Item::default()
        }
    }

    fn five_items() -> Vec<Item> {
        ["A", "B", "C", "D", "E"].iter().map(|n| named(n)).collect()
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = SelectorState::new();
        assert!(state.toggle(2));
        assert!(state.is_selected(2));
        assert!(!state.toggle(2));
        assert!(!state.is_selected(2));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_selection_reported_in_collection_order() {
        let items = five_items();
        let mut state = SelectorState::new();
        // select D before B; the report still follows collection order
        state.toggle(3);
        state.toggle(1);
        let picked = state.selected_items(&items);
        let names: Vec<&str> = picked.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D"]);
    }

    #[test]
    fn test_confirm_empty_selection_fails_default_validation() {
        let items = five_items();
        let mut state = SelectorState::new();
        let confirmed = state.confirm(&items, default_validate);
        assert_eq!(confirmed, None);
        assert_eq!(state.error_message(), Some("Please select at least 1 item."));
    }

    #[test]
    fn test_confirm_selected_items() {
        let items = five_items();
        let mut state = SelectorState::new();
        state.toggle(1);
        state.toggle(3);
        let confirmed = state.confirm(&items, default_validate).expect("should confirm");
        let names: Vec<&str> = confirmed.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D"]);
        assert_eq!(state.phase, DialogPhase::Confirmed);
    }

    #[test]
    fn test_confirm_is_terminal() {
        let items = five_items();
        let mut state = SelectorState::new();
        state.toggle(0);
        assert!(state.confirm(&items, default_validate).is_some());
        assert_eq!(state.confirm(&items, default_validate), None);
        assert!(!state.cancel());
    }

    #[test]
    fn test_custom_validator_message_surfaces() {
        let items = five_items();
        let mut state = SelectorState::new();
        state.toggle(0);
        state.toggle(1);
        let confirmed = state.confirm(&items, |picked| {
            (picked.len() > 1).then(|| "Pick exactly one item.".to_string())
        });
        assert_eq!(confirmed, None);
        assert_eq!(state.error_message(), Some("Pick exactly one item."));
    }

    #[test]
    fn test_empty_validator_message_counts_as_pass() {
        let items = five_items();
        let mut state = SelectorState::new();
        state.toggle(4);
        let confirmed = state.confirm(&items, |_| Some(String::new()));
        assert_eq!(confirmed.map(|p| p.len()), Some(1));
    }

    #[test]
    fn test_toggle_clears_error() {
        let items = five_items();
        let mut state = SelectorState::new();
        state.confirm(&items, default_validate);
        assert!(state.error_message().is_some());
        state.toggle(0);
        assert_eq!(state.phase, DialogPhase::Idle);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_cancel_skips_validation() {
        let mut state = SelectorState::new();
        state.toggle(0);
        assert!(state.cancel());
        assert_eq!(state.phase, DialogPhase::Cancelled);
        // a resolved episode rejects a late confirm regardless of validator
        assert_eq!(state.confirm(&[], |_| panic!("validator must not run")), None);
    }
}
