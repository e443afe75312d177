use std::rc::Rc;

use tracing::debug;

use crate::dispatch::{PopupRemapDispatcher, RemapDispatcher};
use crate::focus::FocusResolver;
use crate::host::{EventDispatcher, EventQueue};
use crate::remap::RemapEngine;
use crate::scope::AppScope;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstallError {
    /// An empty marker would match every widget and put the whole
    /// application into commit dialog mode.
    #[error("commit dialog marker must not be empty")]
    EmptyCommitDialogMarker,
    #[error("application scope has already been disposed")]
    ScopeDisposed,
}

/// Install ijkl into `queue` with default [`Settings`].
///
/// Registrations live until `scope` is disposed.
pub fn install<Q>(
    queue: &Rc<Q>,
    focus: FocusResolver<Q::Widget>,
    scope: &AppScope,
) -> Result<(), InstallError>
where
    Q: EventQueue + 'static,
{
    Settings::default().install(queue, focus, scope)
}

impl Settings {
    /// Install ijkl into `queue` with these settings.
    ///
    /// Registers the generic dispatcher and an activity listener that keeps
    /// the popup dispatcher on the popup stack while popups are open.
    pub fn install<Q>(
        &self,
        queue: &Rc<Q>,
        focus: FocusResolver<Q::Widget>,
        scope: &AppScope,
    ) -> Result<(), InstallError>
    where
        Q: EventQueue + 'static,
    {
        if self.commit_dialog_marker.is_empty() {
            return Err(InstallError::EmptyCommitDialogMarker);
        }
        if scope.is_disposed() {
            return Err(InstallError::ScopeDisposed);
        }

        let dispatcher = Rc::new(RemapDispatcher::new(RemapEngine::new(self), focus, queue));
        let popup_dispatcher = PopupRemapDispatcher::new(dispatcher.clone(), queue);

        let listener = {
            let popup_dispatcher = popup_dispatcher.clone();
            Rc::new(move || popup_dispatcher.on_activity())
        };
        let listener_id = queue.add_activity_listener(listener);
        let dispatcher: Rc<dyn EventDispatcher<Q::Widget>> = dispatcher;
        let dispatcher_id = queue.add_dispatcher(dispatcher);
        debug!(platform = ?self.platform, "ijkl installed");

        let queue = Rc::downgrade(queue);
        scope.on_cleanup(move || {
            popup_dispatcher.unregister();
            if let Some(queue) = queue.upgrade() {
                queue.remove_dispatcher(dispatcher_id);
                queue.remove_activity_listener(listener_id);
            }
            debug!("ijkl uninstalled");
        });

        Ok(())
    }
}
