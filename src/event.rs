#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use ui_events::keyboard::{Code, Key, KeyState, KeyboardEvent, Modifiers, NamedKey};

/// Control whether an event will continue through the host's dispatch or whether it should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPropagation {
    /// Stop dispatch and mark the event as consumed
    Stop,
    /// Let the host continue its normal dispatch
    Continue,
}

impl EventPropagation {
    pub fn is_continue(&self) -> bool {
        matches!(self, EventPropagation::Continue)
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, EventPropagation::Stop)
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, EventPropagation::Stop)
    }
}

/// An event travelling through the host's queue.
///
/// `W` is the host's widget handle, carried by keyboard events as their source.
#[derive(Debug, Clone)]
pub enum Event<W> {
    Key(KeyEvent<W>),
    ImeCommit(String),
    FocusGained,
}

impl<W> Event<W> {
    pub fn as_key(&self) -> Option<&KeyEvent<W>> {
        match self {
            Event::Key(key) => Some(key),
            _ => None,
        }
    }
}

impl<W> From<KeyEvent<W>> for Event<W> {
    fn from(key: KeyEvent<W>) -> Self {
        Event::Key(key)
    }
}

/// A single key transition together with the widget it was aimed at and the
/// time the host's input layer produced it.
///
/// Key events are never mutated in place. A rewrite produces a new event that
/// keeps `source`, `timestamp` and the key state of the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent<W> {
    pub source: W,
    pub timestamp: Instant,
    pub key: KeyboardEvent,
}

impl<W> KeyEvent<W> {
    /// Create a key event stamped with the current time.
    pub fn new(source: W, key: KeyboardEvent) -> Self {
        Self::with_timestamp(source, Instant::now(), key)
    }

    pub fn with_timestamp(source: W, timestamp: Instant, key: KeyboardEvent) -> Self {
        Self {
            source,
            timestamp,
            key,
        }
    }

    pub fn code(&self) -> Code {
        self.key.code
    }

    pub fn modifiers(&self) -> Modifiers {
        self.key.modifiers
    }

    pub fn state(&self) -> KeyState {
        self.key.state
    }

    /// The text this key would insert, if any.
    ///
    /// Rewritten events always return `None` here: they carry a named key
    /// instead of the letter that was pressed.
    pub fn character(&self) -> Option<&str> {
        match &self.key.key {
            Key::Character(text) => Some(text.as_str()),
            Key::Named(_) => None,
        }
    }

    /// Build the replacement for this event.
    ///
    /// The logical key becomes `named`, so the replacement never carries a
    /// character, neither the pressed letter nor any other text.
    pub(crate) fn rewrite(&self, code: Code, named: NamedKey, modifiers: Modifiers) -> Self
    where
        W: Clone,
    {
        Self {
            source: self.source.clone(),
            timestamp: self.timestamp,
            key: KeyboardEvent {
                state: self.key.state,
                key: Key::Named(named),
                code,
                location: self.key.location,
                modifiers,
                repeat: self.key.repeat,
                is_composing: self.key.is_composing,
            },
        }
    }
}
