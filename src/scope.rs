use std::cell::{Cell, RefCell};
use std::fmt;

use smallvec::SmallVec;

type Cleanup = Box<dyn FnOnce()>;

/// The lifetime of the host application, as seen by ijkl.
///
/// Everything [`install`](crate::install) registers with the host is tied to
/// an `AppScope`. Disposing the scope, explicitly or by dropping it, runs the
/// registered cleanups in reverse order and removes those registrations again.
#[derive(Default)]
pub struct AppScope {
    cleanups: RefCell<SmallVec<[Cleanup; 2]>>,
    disposed: Cell<bool>,
}

impl fmt::Debug for AppScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AppScope");
        s.field("cleanups", &self.cleanups.borrow().len());
        s.field("disposed", &self.disposed.get());
        s.finish()
    }
}

impl AppScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Run `f` when this scope is disposed. If it already has been, `f` runs
    /// immediately.
    pub fn on_cleanup(&self, f: impl FnOnce() + 'static) {
        if self.disposed.get() {
            f();
            return;
        }
        self.cleanups.borrow_mut().push(Box::new(f));
    }

    /// Run every registered cleanup, most recent first. Disposing twice is a
    /// no-op.
    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        let cleanups = std::mem::take(&mut *self.cleanups.borrow_mut());
        for cleanup in cleanups.into_iter().rev() {
            cleanup();
        }
    }
}

impl Drop for AppScope {
    fn drop(&mut self) {
        self.dispose();
    }
}
