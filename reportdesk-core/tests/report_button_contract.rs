//! Interaction contract of a report action item, driven the way the web
//! component drives it: events in, intents dispatched, state committed.

use std::cell::RefCell;

use pretty_assertions::assert_eq;
use reportdesk_core::menu::{MenuEntry, MenuEvent, MenuState, ReportIntent};
use reportdesk_core::outside::{Subtree, classify};
use reportdesk_core::report::ReportItem;

/// Host-side stand-in for one mounted item: its state plus a log of
/// `(intent, item id, menu state at dispatch time)`.
struct Harness {
    item: ReportItem,
    menu: MenuState,
    calls: RefCell<Vec<(ReportIntent, String, MenuState)>>,
}

impl Harness {
    fn new(item: ReportItem) -> Self {
        Self {
            item,
            menu: MenuState::default(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn send(&mut self, event: MenuEvent) {
        let before = self.menu;
        let step = before.on(event, self.item.tier());
        self.menu = step.commit(|intent| {
            self.calls
                .borrow_mut()
                .push((intent, self.item.id.clone(), before));
        });
    }

    fn calls(&self) -> Vec<(ReportIntent, String, MenuState)> {
        self.calls.borrow().clone()
    }
}

/// Flat document: node ids `0..10` belong to the item, everything else does not.
struct ItemSubtree;

impl Subtree for ItemSubtree {
    type Node = u32;

    fn contains(&self, node: &u32) -> bool {
        *node < 10
    }
}

fn standard() -> ReportItem {
    ReportItem::new("signup-funnel", "Signup funnel").with_meta("category", "conversion")
}

#[test]
fn pro_items_never_change_state() {
    let mut h = Harness::new(standard().pro());
    assert!(!h.item.tier().has_menu());
    for event in [
        MenuEvent::Trigger,
        MenuEvent::OutsideClick,
        MenuEvent::Select(MenuEntry::MoreInformation),
        MenuEvent::Select(MenuEntry::SendSuggestion),
    ] {
        h.send(event);
        assert_eq!(h.menu, MenuState::Closed);
    }
    assert!(h.calls().is_empty());
}

#[test]
fn standard_items_start_closed_and_toggle() {
    let mut h = Harness::new(standard());
    assert_eq!(h.menu, MenuState::Closed);
    h.send(MenuEvent::Trigger);
    assert_eq!(h.menu, MenuState::Open);
    h.send(MenuEvent::Trigger);
    assert_eq!(h.menu, MenuState::Closed);
}

#[test]
fn primary_runs_in_both_states_without_moving() {
    let mut h = Harness::new(standard());
    h.send(MenuEvent::Primary);
    h.send(MenuEvent::Trigger);
    h.send(MenuEvent::Primary);
    h.send(MenuEvent::Primary);

    assert_eq!(h.menu, MenuState::Open);
    let id = h.item.id.clone();
    assert_eq!(
        h.calls(),
        vec![
            (ReportIntent::Execute, id.clone(), MenuState::Closed),
            (ReportIntent::Execute, id.clone(), MenuState::Open),
            (ReportIntent::Execute, id, MenuState::Open),
        ]
    );
}

#[test]
fn outside_pointer_down_closes_inside_does_not() {
    let mut h = Harness::new(standard());
    h.send(MenuEvent::Trigger);

    // pointer-down on a menu entry (inside)
    if let Some(event) = classify(Some(&ItemSubtree), Some(&3)).and_then(|hit| hit.menu_event()) {
        h.send(event);
    }
    assert_eq!(h.menu, MenuState::Open);

    // pointer-down on a sibling item (outside)
    if let Some(event) = classify(Some(&ItemSubtree), Some(&42)).and_then(|hit| hit.menu_event()) {
        h.send(event);
    }
    assert_eq!(h.menu, MenuState::Closed);
    assert!(h.calls().is_empty());
}

#[test]
fn info_and_feedback_dispatch_while_open_then_close() {
    let mut h = Harness::new(standard());
    h.send(MenuEvent::Trigger);
    h.send(MenuEvent::Select(MenuEntry::MoreInformation));
    assert_eq!(h.menu, MenuState::Closed);

    h.send(MenuEvent::Trigger);
    h.send(MenuEvent::Select(MenuEntry::SendSuggestion));
    assert_eq!(h.menu, MenuState::Closed);

    let id = h.item.id.clone();
    assert_eq!(
        h.calls(),
        vec![
            (ReportIntent::Info, id.clone(), MenuState::Open),
            (ReportIntent::Feedback, id, MenuState::Open),
        ]
    );
}

#[test]
fn favorite_entry_is_inert() {
    let mut h = Harness::new(standard());
    h.send(MenuEvent::Trigger);
    h.send(MenuEvent::Select(MenuEntry::MarkAsFavorite));
    assert_eq!(h.menu, MenuState::Open);
    assert!(h.calls().is_empty());
}

#[test]
fn instances_do_not_share_state() {
    let mut a = Harness::new(standard());
    let b = Harness::new(ReportItem::new("top-pages", "Top pages"));
    a.send(MenuEvent::Trigger);
    assert_eq!(a.menu, MenuState::Open);
    assert_eq!(b.menu, MenuState::Closed);
}

#[test]
fn unmounted_detector_is_inert() {
    assert_eq!(classify::<ItemSubtree>(None, Some(&42)), None);
}
