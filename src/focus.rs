use crate::host::FocusTracker;

/// Finds the focused widget for each intercepted key event.
///
/// The primary tracker is asked first. While focus is being transferred it
/// can briefly report nothing, in which case the fallback tracker (a
/// context-free, application-wide query) is asked instead.
pub struct FocusResolver<W> {
    primary: Box<dyn FocusTracker<W>>,
    fallback: Option<Box<dyn FocusTracker<W>>>,
}

impl<W> FocusResolver<W> {
    pub fn new(primary: impl FocusTracker<W> + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl FocusTracker<W> + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// The focused widget, or `None` when neither tracker knows of one (for
    /// example when no window of the application is focused).
    pub fn find(&self) -> Option<W> {
        self.primary
            .focus_owner()
            .or_else(|| self.fallback.as_ref()?.focus_owner())
    }
}

impl<W> FocusTracker<W> for FocusResolver<W> {
    fn focus_owner(&self) -> Option<W> {
        self.find()
    }
}
