use std::borrow::Cow;

use ui_events::keyboard::Modifiers;

/// The description fragment that identifies the commit dialog's root panel.
pub const COMMIT_DIALOG_MARKER: &str =
    "layout=com.intellij.openapi.vcs.changes.ui.CommitChangeListDialog";

/// The keyboard convention the rewritten events must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    Mac,
    Other,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    /// The modifier that turns Left/Right into "move one word".
    pub fn word_modifier(self) -> Modifiers {
        match self {
            Platform::Mac => Modifiers::ALT,
            Platform::Other => Modifiers::CONTROL,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Install-time settings.
///
/// The key mapping itself is fixed; these only describe the host ijkl runs
/// in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Settings {
    pub(crate) platform: Platform,
    pub(crate) commit_dialog_marker: Cow<'static, str>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            commit_dialog_marker: Cow::Borrowed(COMMIT_DIALOG_MARKER),
        }
    }
}

impl Settings {
    /// Override the detected platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Change the description fragment used to recognise the commit dialog.
    pub fn commit_dialog_marker(mut self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.commit_dialog_marker = marker.into();
        self
    }

    pub fn get_platform(&self) -> Platform {
        self.platform
    }

    pub fn get_commit_dialog_marker(&self) -> &str {
        &self.commit_dialog_marker
    }
}
