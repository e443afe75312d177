//! The traits a host application implements so ijkl can plug into it.
//!
//! All of these are called on the host's event thread. Implementations must
//! not hold interior borrows while calling back into a dispatcher or an
//! activity listener, because those callbacks re-enter the queue (to post a
//! rewritten event or to push and remove popup dispatchers).

use std::rc::Rc;

use slotmap::new_key_type;

use crate::event::{Event, EventPropagation};
use crate::widget::Widget;

new_key_type! {
    /// Identifies a dispatcher registered with [`EventQueue::add_dispatcher`].
    pub struct DispatcherId;

    /// Identifies a listener registered with [`EventQueue::add_activity_listener`].
    pub struct ListenerId;
}

/// Reports which widget currently has keyboard focus.
pub trait FocusTracker<W> {
    fn focus_owner(&self) -> Option<W>;
}

impl<W, F> FocusTracker<W> for F
where
    F: Fn() -> Option<W>,
{
    fn focus_owner(&self) -> Option<W> {
        self()
    }
}

/// A low-level dispatcher consulted before the host's own focus-based dispatch.
pub trait EventDispatcher<W> {
    /// Inspect `event`. Returning [`EventPropagation::Stop`] suppresses the
    /// host's default handling of it.
    fn dispatch(&self, event: &Event<W>) -> EventPropagation;
}

/// A dispatcher living on the host's popup dispatcher stack.
///
/// While a popup is open the host offers every event to this stack, top
/// first, before any generic [`EventDispatcher`].
pub trait PopupDispatcher<W>: EventDispatcher<W> {
    /// The component the host positions popup-related UI against.
    fn anchor(&self) -> Option<W>;

    /// Whether this dispatcher owns popups of its own.
    fn owns_popups(&self) -> bool;

    /// Ask the dispatcher to take focus. Returns whether it did.
    fn request_focus(&self) -> bool;

    /// Ask the dispatcher to close. Returns whether it did.
    fn close(&self) -> bool;

    /// Called when the host wants focus restored without side effects.
    fn restore_focus_silently(&self);
}

/// The host's event queue and dispatch pipeline.
pub trait EventQueue {
    type Widget: Widget;

    /// Enqueue `event` for a later dispatch round.
    fn post_event(&self, event: Event<Self::Widget>);

    /// Whether a transient popup is currently open.
    fn is_popup_active(&self) -> bool;

    fn add_dispatcher(&self, dispatcher: Rc<dyn EventDispatcher<Self::Widget>>) -> DispatcherId;

    /// Removing an id that is no longer registered is a no-op.
    fn remove_dispatcher(&self, id: DispatcherId);

    /// Register `listener` to be called whenever the queue observes user
    /// activity, before the activity's event is dispatched.
    fn add_activity_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId;

    /// Removing an id that is no longer registered is a no-op.
    fn remove_activity_listener(&self, id: ListenerId);

    fn push_popup_dispatcher(&self, dispatcher: Rc<dyn PopupDispatcher<Self::Widget>>);

    /// Remove `dispatcher` (compared by pointer) from the popup stack. Removing
    /// a dispatcher that is not on the stack is a no-op.
    fn remove_popup_dispatcher(&self, dispatcher: &Rc<dyn PopupDispatcher<Self::Widget>>);
}
