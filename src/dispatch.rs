//! The dispatchers ijkl plugs into the host pipeline.
//!
//! [`RemapDispatcher`] sits in the host's generic dispatcher chain for the
//! whole life of the application. Hosts offer events to their popup
//! dispatcher stack before that chain, so while a popup is open a
//! [`PopupRemapDispatcher`] is pushed onto the stack as well. It services one
//! dispatch, removes itself, and is pushed again by the activity listener on
//! the next event if the popup is still open:
//!
//! ```text
//! Unregistered --(activity while a popup is active)--> Registered
//! Registered   --(one dispatch serviced)------------> Unregistered
//! ```

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::event::{Event, EventPropagation};
use crate::focus::FocusResolver;
use crate::host::{EventDispatcher, EventQueue, PopupDispatcher};
use crate::remap::RemapEngine;

/// Rewrites remappable key events and posts the replacement back to the queue.
pub struct RemapDispatcher<Q: EventQueue> {
    engine: RemapEngine,
    focus: FocusResolver<Q::Widget>,
    queue: Weak<Q>,
}

impl<Q: EventQueue> RemapDispatcher<Q> {
    pub fn new(engine: RemapEngine, focus: FocusResolver<Q::Widget>, queue: &Rc<Q>) -> Self {
        Self {
            engine,
            focus,
            queue: Rc::downgrade(queue),
        }
    }

    pub fn focus(&self) -> &FocusResolver<Q::Widget> {
        &self.focus
    }
}

impl<Q: EventQueue> EventDispatcher<Q::Widget> for RemapDispatcher<Q> {
    fn dispatch(&self, event: &Event<Q::Widget>) -> EventPropagation {
        let Event::Key(key) = event else {
            return EventPropagation::Continue;
        };
        if !self.engine.accepts(key) {
            return EventPropagation::Continue;
        }
        let Some(queue) = self.queue.upgrade() else {
            return EventPropagation::Continue;
        };

        let focused = self.focus.find();
        match self
            .engine
            .decide(key, focused.as_ref(), queue.is_popup_active())
        {
            Some(rewritten) => {
                queue.post_event(Event::Key(rewritten));
                EventPropagation::Stop
            }
            None => EventPropagation::Continue,
        }
    }
}

/// Registration state of a [`PopupRemapDispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupRegistration {
    Unregistered,
    Registered,
}

/// The popup-stack persona of [`RemapDispatcher`].
pub struct PopupRemapDispatcher<Q: EventQueue + 'static> {
    delegate: Rc<RemapDispatcher<Q>>,
    queue: Weak<Q>,
    this: Weak<Self>,
    state: Cell<PopupRegistration>,
}

impl<Q: EventQueue + 'static> PopupRemapDispatcher<Q> {
    pub fn new(delegate: Rc<RemapDispatcher<Q>>, queue: &Rc<Q>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            delegate,
            queue: Rc::downgrade(queue),
            this: this.clone(),
            state: Cell::new(PopupRegistration::Unregistered),
        })
    }

    pub fn registration(&self) -> PopupRegistration {
        self.state.get()
    }

    /// Activity listener body: push onto the popup stack if a popup is open.
    ///
    /// Any entry already on the stack is removed first. The host may drop
    /// entries on its own, so the stack is the source of truth, not
    /// [`PopupRemapDispatcher::registration`].
    pub fn on_activity(&self) {
        let (Some(queue), Some(this)) = (self.queue.upgrade(), self.as_popup_dispatcher()) else {
            return;
        };
        if !queue.is_popup_active() {
            return;
        }

        queue.remove_popup_dispatcher(&this);
        queue.push_popup_dispatcher(this);
        self.state.set(PopupRegistration::Registered);
        trace!("popup dispatcher registered");
    }

    /// Take this dispatcher off the popup stack if it is on it.
    pub fn unregister(&self) {
        if self.state.replace(PopupRegistration::Unregistered) == PopupRegistration::Unregistered {
            return;
        }
        if let (Some(queue), Some(this)) = (self.queue.upgrade(), self.as_popup_dispatcher()) {
            queue.remove_popup_dispatcher(&this);
        }
        trace!("popup dispatcher unregistered");
    }

    fn as_popup_dispatcher(&self) -> Option<Rc<dyn PopupDispatcher<Q::Widget>>> {
        let this: Rc<dyn PopupDispatcher<Q::Widget>> = self.this.upgrade()?;
        Some(this)
    }
}

impl<Q: EventQueue + 'static> EventDispatcher<Q::Widget> for PopupRemapDispatcher<Q> {
    fn dispatch(&self, event: &Event<Q::Widget>) -> EventPropagation {
        let propagation = self.delegate.dispatch(event);
        self.unregister();
        propagation
    }
}

impl<Q: EventQueue + 'static> PopupDispatcher<Q::Widget> for PopupRemapDispatcher<Q> {
    fn anchor(&self) -> Option<Q::Widget> {
        self.delegate.focus().find()
    }

    fn owns_popups(&self) -> bool {
        false
    }

    fn request_focus(&self) -> bool {
        false
    }

    fn close(&self) -> bool {
        false
    }

    fn restore_focus_silently(&self) {}
}
