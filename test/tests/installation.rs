//! Tests for installing ijkl into a host and tearing it down again.

use std::rc::Rc;

use ijkl::InstallError;
use ijkl_test::prelude::*;

#[test]
fn test_install_registers_dispatcher_and_listener() {
    let host = TestHost::new();
    host.install();

    assert_eq!(host.dispatcher_count(), 1);
    assert_eq!(host.listener_count(), 1);
    assert_eq!(host.popup_stack_len(), 0);
}

#[test]
fn test_dispose_removes_everything() {
    let host = TestHost::new();
    let scope = AppScope::new();
    install(&host, host.focus_resolver(), &scope).unwrap();

    // Leave the popup dispatcher registered to check it is removed as well.
    host.open_popup();
    host.notify_activity();
    assert_eq!(host.popup_stack_len(), 1);

    scope.dispose();

    assert_eq!(host.dispatcher_count(), 0);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.popup_stack_len(), 0);

    let tree = WidgetId::tree("project view");
    host.set_focus(Some(tree));
    host.press(alt(Code::KeyI, tree));
    assert_eq!(host.delivered_codes(), [Code::KeyI]);
}

#[test]
fn test_dropping_scope_uninstalls() {
    let host = TestHost::new();
    {
        let scope = AppScope::new();
        install(&host, host.focus_resolver(), &scope).unwrap();
        assert_eq!(host.dispatcher_count(), 1);
    }
    assert_eq!(host.dispatcher_count(), 0);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_scope_outliving_host() {
    let scope = AppScope::new();
    let host = TestHost::new();
    install(&host, host.focus_resolver(), &scope).unwrap();
    let weak = Rc::downgrade(&host);

    drop(host);
    assert!(weak.upgrade().is_none(), "ijkl must not keep the queue alive");

    scope.dispose();
}

#[test]
fn test_empty_marker_is_rejected() {
    let host = TestHost::new();
    let result = host.install_with(&Settings::default().commit_dialog_marker(""));

    assert_eq!(result, Err(InstallError::EmptyCommitDialogMarker));
    assert_eq!(host.dispatcher_count(), 0);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_disposed_scope_is_rejected() {
    let host = TestHost::new();
    let scope = AppScope::new();
    scope.dispose();

    let result = install(&host, host.focus_resolver(), &scope);

    assert_eq!(result, Err(InstallError::ScopeDisposed));
    assert_eq!(host.dispatcher_count(), 0);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        InstallError::EmptyCommitDialogMarker.to_string(),
        "commit dialog marker must not be empty"
    );
    assert_eq!(
        InstallError::ScopeDisposed.to_string(),
        "application scope has already been disposed"
    );
}
