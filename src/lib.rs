//! # ijkl
//!
//! Alt+IJKL navigation for host GUI applications.
//!
//! ijkl sits in front of a host's focus-based keyboard dispatch and rewrites a
//! small, fixed set of Alt chords into navigation keys:
//!
//! | chord   | becomes                                      |
//! |---------|----------------------------------------------|
//! | Alt+I   | Up                                           |
//! | Alt+K   | Down                                         |
//! | Alt+J   | Left                                         |
//! | Alt+L   | Right                                        |
//! | Alt+U   | Home                                         |
//! | Alt+O   | End                                          |
//! | Alt+W   | Page Up                                      |
//! | Alt+F   | Page Down                                    |
//! | Alt+N   | Left (popups and the commit dialog)          |
//! | Alt+M   | Right (popups and the commit dialog)         |
//! | Alt+;   | Delete (popups)                              |
//!
//! Remapping only happens while focus is inside a tree, inside the commit
//! dialog, or while a transient popup is open. Everywhere else the chord is
//! passed through untouched.
//!
//! ## Wiring it into a host
//!
//! A host implements [`EventQueue`](host::EventQueue) for its event queue,
//! [`FocusTracker`](host::FocusTracker) for its focus bookkeeping and
//! [`Widget`](widget::Widget) for its widget handles, then calls [`install`]
//! once at startup:
//!
//! ```rust,ignore
//! let scope = AppScope::new();
//! let focus = FocusResolver::new(window_focus).with_fallback(global_focus);
//! ijkl::install(&queue, focus, &scope)?;
//! // ... run the application ...
//! scope.dispose(); // removes every registration from the queue
//! ```
//!
//! Everything runs on the host's event thread. Rewritten events are posted back
//! into the host queue and processed as ordinary events in a later round.

pub mod dispatch;
pub mod event;
pub mod focus;
pub mod host;
mod install;
pub mod remap;
pub mod scope;
pub mod settings;
pub mod widget;

pub use dispatch::{PopupRegistration, PopupRemapDispatcher, RemapDispatcher};
pub use event::{Event, EventPropagation, KeyEvent};
pub use focus::FocusResolver;
pub use install::{InstallError, install};
pub use remap::{FocusContext, Navigation, RemapEngine};
pub use scope::AppScope;
pub use settings::{Platform, Settings};
pub use ui_events;
pub use widget::{HasParent, Widget};

pub mod prelude {
    pub use crate::host::{EventDispatcher, EventQueue, FocusTracker, PopupDispatcher};
    pub use crate::{
        AppScope, Event, EventPropagation, FocusResolver, KeyEvent, Platform, Settings, Widget,
        install,
    };
    pub use ui_events::keyboard::{Code, Key, KeyState, KeyboardEvent, Modifiers, NamedKey};
}
