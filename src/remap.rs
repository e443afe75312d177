//! The remapping policy.
//!
//! [`remap_code`] is the whole decision as a pure function of the pressed code
//! and the [`FocusContext`]. [`RemapEngine::decide`] gathers that context for
//! a concrete key event and builds the replacement event.

use std::borrow::Cow;

use tracing::trace;
use ui_events::keyboard::{Code, Modifiers, NamedKey};

use crate::event::KeyEvent;
use crate::settings::{Platform, Settings};
use crate::widget::{Widget, has_commit_dialog_parent, has_parent_tree};

/// Whether `code` is one of the eleven keys ijkl may remap.
pub fn is_trigger(code: Code) -> bool {
    matches!(
        code,
        Code::KeyI
            | Code::KeyJ
            | Code::KeyK
            | Code::KeyL
            | Code::KeyF
            | Code::KeyW
            | Code::KeyU
            | Code::KeyO
            | Code::KeyM
            | Code::KeyN
            | Code::Semicolon
    )
}

/// A navigation key a chord can be rewritten into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
}

impl Navigation {
    pub fn code(self) -> Code {
        match self {
            Navigation::Up => Code::ArrowUp,
            Navigation::Down => Code::ArrowDown,
            Navigation::Left => Code::ArrowLeft,
            Navigation::Right => Code::ArrowRight,
            Navigation::PageUp => Code::PageUp,
            Navigation::PageDown => Code::PageDown,
            Navigation::Home => Code::Home,
            Navigation::End => Code::End,
            Navigation::Delete => Code::Delete,
        }
    }

    pub fn named_key(self) -> NamedKey {
        match self {
            Navigation::Up => NamedKey::ArrowUp,
            Navigation::Down => NamedKey::ArrowDown,
            Navigation::Left => NamedKey::ArrowLeft,
            Navigation::Right => NamedKey::ArrowRight,
            Navigation::PageUp => NamedKey::PageUp,
            Navigation::PageDown => NamedKey::PageDown,
            Navigation::Home => NamedKey::Home,
            Navigation::End => NamedKey::End,
            Navigation::Delete => NamedKey::Delete,
        }
    }
}

/// How the modifiers of a remapped chord are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierRewrite {
    /// Drop Alt, keep everything else.
    StripAlt,
    /// Drop Alt, then add the platform's word-navigation modifier.
    WordJump,
}

impl ModifierRewrite {
    pub fn apply(self, modifiers: Modifiers, platform: Platform) -> Modifiers {
        let stripped = modifiers - Modifiers::ALT;
        match self {
            ModifierRewrite::StripAlt => stripped,
            ModifierRewrite::WordJump => stripped | platform.word_modifier(),
        }
    }
}

/// The outcome of a successful decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remap {
    pub target: Navigation,
    pub modifiers: ModifierRewrite,
}

impl Remap {
    const fn strip_alt(target: Navigation) -> Option<Self> {
        Some(Self {
            target,
            modifiers: ModifierRewrite::StripAlt,
        })
    }

    const fn word_jump(target: Navigation) -> Option<Self> {
        Some(Self {
            target,
            modifiers: ModifierRewrite::WordJump,
        })
    }
}

/// Where focus is, as far as the remapping policy is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FocusContext {
    /// A transient popup is open.
    pub popup_active: bool,
    /// The focused widget is, or is inside, a tree.
    pub in_tree: bool,
    /// The focused widget is inside the commit dialog.
    pub in_commit_dialog: bool,
}

impl FocusContext {
    /// Remapping is only active in one of these three contexts.
    pub fn is_applicable(&self) -> bool {
        self.popup_active || self.in_tree || self.in_commit_dialog
    }
}

/// Decide what `code` (pressed with Alt) becomes in `cx`.
///
/// Overrides are tried in a fixed order and the first match wins: commit
/// dialog, tree, popup, then the default mapping.
pub fn remap_code(code: Code, cx: FocusContext) -> Option<Remap> {
    use Navigation::*;

    if !is_trigger(code) || !cx.is_applicable() {
        return None;
    }

    if cx.in_commit_dialog && !cx.in_tree {
        match code {
            // Alt+I is the dialog's "Commit" mnemonic, K stays unmapped to match.
            Code::KeyI | Code::KeyK => return None,
            Code::KeyJ => return Remap::word_jump(Left),
            // Takes over the "Clean code" mnemonic.
            Code::KeyL => return Remap::word_jump(Right),
            Code::KeyN => return Remap::strip_alt(Left),
            // Takes over the "Amend commit" mnemonic.
            Code::KeyM => return Remap::strip_alt(Right),
            _ => {}
        }
    }

    if cx.in_tree {
        // Plain Left/Right so the tree collapses and expands nodes.
        match code {
            Code::KeyJ => return Remap::strip_alt(Left),
            Code::KeyL => return Remap::strip_alt(Right),
            _ => {}
        }
    }

    if cx.popup_active {
        match code {
            Code::KeyN => return Remap::strip_alt(Left),
            Code::KeyM => return Remap::strip_alt(Right),
            Code::Semicolon => return Remap::strip_alt(Delete),
            _ => {}
        }
    }

    match code {
        Code::KeyI => Remap::strip_alt(Up),
        Code::KeyK => Remap::strip_alt(Down),
        Code::KeyF => Remap::strip_alt(PageDown),
        Code::KeyW => Remap::strip_alt(PageUp),
        Code::KeyU => Remap::strip_alt(Home),
        Code::KeyO => Remap::strip_alt(End),
        _ => None,
    }
}

/// Turns intercepted key events into their navigation replacements.
#[derive(Debug, Clone)]
pub struct RemapEngine {
    platform: Platform,
    commit_dialog_marker: Cow<'static, str>,
}

impl Default for RemapEngine {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl RemapEngine {
    pub fn new(settings: &Settings) -> Self {
        Self {
            platform: settings.platform,
            commit_dialog_marker: settings.commit_dialog_marker.clone(),
        }
    }

    /// The checks that need neither focus nor host state: Alt must be held
    /// and the code must be one of the trigger keys.
    pub fn accepts<W>(&self, event: &KeyEvent<W>) -> bool {
        event.modifiers().contains(Modifiers::ALT) && is_trigger(event.code())
    }

    /// Build the focus context for `focused`.
    ///
    /// The commit dialog walk is skipped inside trees, where the dialog
    /// overrides never apply.
    pub fn focus_context<W: Widget>(&self, focused: Option<&W>, popup_active: bool) -> FocusContext {
        let in_tree = has_parent_tree(focused);
        let in_commit_dialog =
            !in_tree && has_commit_dialog_parent(focused, &self.commit_dialog_marker);
        FocusContext {
            popup_active,
            in_tree,
            in_commit_dialog,
        }
    }

    /// The replacement for `event`, or `None` to let it through unchanged.
    ///
    /// Runs for every keystroke the host sees, so the cheap checks on the
    /// event itself come before any walk of the widget tree.
    pub fn decide<W: Widget>(
        &self,
        event: &KeyEvent<W>,
        focused: Option<&W>,
        popup_active: bool,
    ) -> Option<KeyEvent<W>> {
        if !self.accepts(event) {
            return None;
        }

        let cx = self.focus_context(focused, popup_active);
        let remap = remap_code(event.code(), cx)?;
        let modifiers = remap.modifiers.apply(event.modifiers(), self.platform);

        trace!(
            from = ?event.code(),
            to = ?remap.target,
            ?modifiers,
            ?cx,
            "remapping key"
        );
        Some(event.rewrite(remap.target.code(), remap.target.named_key(), modifiers))
    }
}
