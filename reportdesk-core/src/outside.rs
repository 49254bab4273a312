//! Outside-click classification.
//!
//! The browser side owns the listener; this module only answers "was that
//! pointer-down inside the item?". [`Subtree`] abstracts the containment check
//! so the rule can be exercised without a DOM.

use crate::menu::MenuEvent;

/// A mounted subtree that can answer containment queries.
pub trait Subtree {
    /// Node type event targets are expressed in.
    type Node: ?Sized;

    /// True if `node` is the root itself or one of its descendants.
    fn contains(&self, node: &Self::Node) -> bool;
}

/// Where a pointer-down landed relative to a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerHit {
    /// Target is the root or a descendant
    Inside,
    /// Target is elsewhere in the document (or has no node)
    Outside,
}

impl PointerHit {
    /// Menu event to feed for this hit. Inside hits are left to the item's own handlers.
    pub fn menu_event(self) -> Option<MenuEvent> {
        match self {
            PointerHit::Inside => None,
            PointerHit::Outside => Some(MenuEvent::OutsideClick),
        }
    }
}

/// Classify a pointer-down target against a possibly-unmounted root.
///
/// Returns `None` while the root is not mounted: an unbound detector never
/// fires. A missing target counts as outside.
pub fn classify<S: Subtree>(root: Option<&S>, target: Option<&S::Node>) -> Option<PointerHit> {
    let root = root?;
    let hit = match target {
        Some(node) if root.contains(node) => PointerHit::Inside,
        _ => PointerHit::Outside,
    };
    Some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Parent-pointer tree keyed by node id.
    struct Tree {
        parents: HashMap<u32, u32>,
    }

    struct Root<'a> {
        tree: &'a Tree,
        id: u32,
    }

    impl Subtree for Root<'_> {
        type Node = u32;

        fn contains(&self, node: &u32) -> bool {
            let mut cur = *node;
            loop {
                if cur == self.id {
                    return true;
                }
                match self.tree.parents.get(&cur) {
                    Some(parent) => cur = *parent,
                    None => return false,
                }
            }
        }
    }

    // 1 = body, 2 = item A, 3 = A's menu entry, 4 = item B
    fn tree() -> Tree {
        Tree {
            parents: HashMap::from([(2, 1), (3, 2), (4, 1)]),
        }
    }

    #[test]
    fn descendants_are_inside() {
        let tree = tree();
        let a = Root { tree: &tree, id: 2 };
        assert_eq!(classify(Some(&a), Some(&3)), Some(PointerHit::Inside));
        assert_eq!(classify(Some(&a), Some(&2)), Some(PointerHit::Inside));
    }

    #[test]
    fn siblings_and_ancestors_are_outside() {
        let tree = tree();
        let a = Root { tree: &tree, id: 2 };
        assert_eq!(classify(Some(&a), Some(&4)), Some(PointerHit::Outside));
        assert_eq!(classify(Some(&a), Some(&1)), Some(PointerHit::Outside));
        assert_eq!(classify(Some(&a), None), Some(PointerHit::Outside));
    }

    #[test]
    fn unmounted_root_never_fires() {
        assert_eq!(classify::<Root<'_>>(None, Some(&3)), None);
    }

    #[test]
    fn only_outside_hits_map_to_menu_events() {
        assert_eq!(PointerHit::Inside.menu_event(), None);
        assert_eq!(
            PointerHit::Outside.menu_event(),
            Some(MenuEvent::OutsideClick)
        );
    }
}
