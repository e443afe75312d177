//! Widget handles and ancestor-chain queries.
//!
//! The host's widget tree is opaque to ijkl. All it needs is a way to step to
//! a widget's parent ([`HasParent`]) and two facts about each widget
//! ([`Widget::is_tree`] and [`Widget::description`]).

use std::borrow::Cow;

/// Anything that can report the node above it in a hierarchy.
pub trait HasParent: Sized {
    /// The parent of this node, or `None` at the root.
    fn parent(&self) -> Option<Self>;
}

/// A handle to a widget in the host's widget tree.
///
/// Handles are cloned freely (once per intercepted key event), so they should
/// be cheap ids or reference-counted pointers.
pub trait Widget: HasParent + Clone + 'static {
    /// Whether this widget is a tree widget (one that expands and collapses
    /// nodes with Left and Right).
    fn is_tree(&self) -> bool;

    /// A human readable description of the widget, including its layout or
    /// type identity. Used to recognise the commit dialog.
    fn description(&self) -> Cow<'_, str>;
}

/// Iterator over a node and its ancestors, nearest first.
///
/// The walk ends at the first missing parent, so a host that hands back an
/// inconsistent chain simply yields a shorter walk.
#[derive(Debug, Clone)]
pub struct Ancestors<T> {
    next: Option<T>,
}

impl<T: HasParent> Iterator for Ancestors<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

/// Walk from `node` (inclusive) up to the root.
pub fn ancestors<T: HasParent + Clone>(node: Option<&T>) -> Ancestors<T> {
    Ancestors {
        next: node.cloned(),
    }
}

/// Find the nearest node, starting with `node` itself, that matches `predicate`.
pub fn find_ancestor<T: HasParent + Clone>(
    node: Option<&T>,
    predicate: impl FnMut(&T) -> bool,
) -> Option<T> {
    ancestors(node).find(predicate)
}

/// Whether `widget` or any of its ancestors is a tree.
pub fn has_parent_tree<W: Widget>(widget: Option<&W>) -> bool {
    find_ancestor(widget, W::is_tree).is_some()
}

/// Whether `widget` or any of its ancestors describes itself with `marker`.
pub fn has_commit_dialog_parent<W: Widget>(widget: Option<&W>, marker: &str) -> bool {
    find_ancestor(widget, |w| w.description().contains(marker)).is_some()
}
