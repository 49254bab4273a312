//! Dropdown state machine for a report action item.
//!
//! ```text
//! Closed --Trigger--> Open
//! Open   --Trigger--> Closed
//! Open   --Select(enabled entry)--> Closed   (emits the entry's intent first)
//! Open   --OutsideClick--> Closed
//! any    --Primary--> unchanged              (emits Execute)
//! ```
//!
//! Pro-tier items have no menu, so only `Primary` does anything for them.

use crate::report::ReportTier;

/// Open/closed state of one item's dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Menu hidden (initial state)
    #[default]
    Closed,
    /// Menu visible
    Open,
}

/// User input routed into a [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the primary action area
    Primary,
    /// Click on the dropdown trigger
    Trigger,
    /// Pointer-down outside the item's subtree
    OutsideClick,
    /// Click on a dropdown entry
    Select(MenuEntry),
}

/// Which caller-supplied callback a transition asks to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportIntent {
    /// Run the report
    Execute,
    /// Show information about the report
    Info,
    /// Send feedback about the report
    Feedback,
}

/// Entries of the secondary menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    /// "More Information"
    MoreInformation,
    /// "Send a Suggestion"
    SendSuggestion,
    /// "Mark as Favorite" (always disabled)
    MarkAsFavorite,
}

impl MenuEntry {
    /// All entries in render order.
    pub const ALL: [MenuEntry; 3] = [
        MenuEntry::MoreInformation,
        MenuEntry::SendSuggestion,
        MenuEntry::MarkAsFavorite,
    ];

    /// Text shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::MoreInformation => "More Information",
            MenuEntry::SendSuggestion => "Send a Suggestion",
            MenuEntry::MarkAsFavorite => "Mark as Favorite",
        }
    }

    /// Disabled entries render greyed out and ignore clicks.
    pub fn is_enabled(self) -> bool {
        self.intent().is_some()
    }

    /// Callback the entry fires. `None` for disabled entries.
    pub fn intent(self) -> Option<ReportIntent> {
        match self {
            MenuEntry::MoreInformation => Some(ReportIntent::Info),
            MenuEntry::SendSuggestion => Some(ReportIntent::Feedback),
            MenuEntry::MarkAsFavorite => None,
        }
    }
}

/// Result of feeding one event into a [`MenuState`].
///
/// The intent must be dispatched while the menu is still logically in the
/// previous state, and only then is `next` committed. [`Transition::commit`]
/// encodes that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    /// State to commit after dispatching
    pub next: MenuState,
    /// Callback to run, if any
    pub intent: Option<ReportIntent>,
}

impl Transition {
    fn stay(state: MenuState) -> Self {
        Self {
            next: state,
            intent: None,
        }
    }

    /// Dispatch the intent (if any), then hand back the state to store.
    pub fn commit(self, dispatch: impl FnOnce(ReportIntent)) -> MenuState {
        if let Some(intent) = self.intent {
            dispatch(intent);
        }
        self.next
    }
}

impl MenuState {
    /// Whether the dropdown is showing.
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Compute the transition for `event` on an item of the given tier.
    pub fn on(self, event: MenuEvent, tier: ReportTier) -> Transition {
        match (self, event) {
            (state, MenuEvent::Primary) => Transition {
                next: state,
                intent: Some(ReportIntent::Execute),
            },
            (state, _) if !tier.has_menu() => Transition::stay(state),
            (MenuState::Closed, MenuEvent::Trigger) => Transition::stay(MenuState::Open),
            (MenuState::Open, MenuEvent::Trigger) => Transition::stay(MenuState::Closed),
            (MenuState::Open, MenuEvent::OutsideClick) => Transition::stay(MenuState::Closed),
            (MenuState::Open, MenuEvent::Select(entry)) => match entry.intent() {
                Some(intent) => Transition {
                    next: MenuState::Closed,
                    intent: Some(intent),
                },
                None => Transition::stay(MenuState::Open),
            },
            // Entries are not rendered while closed; outside clicks are idempotent.
            (MenuState::Closed, _) => Transition::stay(MenuState::Closed),
        }
    }

    /// Stacking class that lifts an open item above its siblings.
    pub fn layer_class(self) -> &'static str {
        match self {
            MenuState::Open => "relative z-20",
            MenuState::Closed => "relative z-0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STD: ReportTier = ReportTier::Standard;

    #[test]
    fn trigger_toggles_standard_menu() {
        let open = MenuState::Closed.on(MenuEvent::Trigger, STD);
        assert_eq!(open, Transition::stay(MenuState::Open));
        let closed = open.next.on(MenuEvent::Trigger, STD);
        assert_eq!(closed, Transition::stay(MenuState::Closed));
    }

    #[test]
    fn outside_click_closes_and_is_idempotent() {
        let t = MenuState::Open.on(MenuEvent::OutsideClick, STD);
        assert_eq!(t.next, MenuState::Closed);
        let again = t.next.on(MenuEvent::OutsideClick, STD);
        assert_eq!(again, Transition::stay(MenuState::Closed));
    }

    #[test]
    fn primary_emits_execute_without_moving() {
        for state in [MenuState::Closed, MenuState::Open] {
            for tier in [ReportTier::Standard, ReportTier::Pro] {
                let t = state.on(MenuEvent::Primary, tier);
                assert_eq!(t.next, state);
                assert_eq!(t.intent, Some(ReportIntent::Execute));
            }
        }
    }

    #[test]
    fn disabled_entry_keeps_menu_open() {
        let t = MenuState::Open.on(MenuEvent::Select(MenuEntry::MarkAsFavorite), STD);
        assert_eq!(t, Transition::stay(MenuState::Open));
        assert!(!MenuEntry::MarkAsFavorite.is_enabled());
    }

    #[test]
    fn pro_tier_ignores_menu_events() {
        for event in [
            MenuEvent::Trigger,
            MenuEvent::OutsideClick,
            MenuEvent::Select(MenuEntry::MoreInformation),
        ] {
            let t = MenuState::Closed.on(event, ReportTier::Pro);
            assert_eq!(t, Transition::stay(MenuState::Closed));
        }
    }

    #[test]
    fn commit_dispatches_before_returning_next() {
        let t = MenuState::Open.on(MenuEvent::Select(MenuEntry::SendSuggestion), STD);
        let mut seen = Vec::new();
        let next = t.commit(|intent| seen.push(intent));
        assert_eq!(seen, vec![ReportIntent::Feedback]);
        assert_eq!(next, MenuState::Closed);
    }

    #[test]
    fn entry_labels_in_order() {
        let labels: Vec<_> = MenuEntry::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["More Information", "Send a Suggestion", "Mark as Favorite"]
        );
    }

    #[test]
    fn layer_class_tracks_open_state() {
        assert!(MenuState::Open.layer_class().contains("z-20"));
        assert!(MenuState::Closed.layer_class().contains("z-0"));
    }
}
