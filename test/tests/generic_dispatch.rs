//! Tests for the generic dispatcher inside a host pipeline.
//!
//! These tests verify that:
//! - Remapped chords are consumed and their replacement is delivered instead
//! - Everything else reaches normal delivery untouched
//! - Focus falls back to the secondary tracker

use ijkl_test::prelude::*;

fn installed_host() -> std::rc::Rc<TestHost> {
    let host = TestHost::new();
    host.install_with(&Settings::default().platform(Platform::Other))
        .unwrap();
    host
}

#[test]
fn test_remapped_chord_is_replaced() {
    let host = installed_host();
    let tree = WidgetId::tree("project view");
    host.set_focus(Some(tree));

    host.press(alt(Code::KeyK, tree));

    let delivered = host.delivered_keys();
    assert_eq!(delivered.len(), 1, "only the replacement should be delivered");
    assert_eq!(delivered[0].code(), Code::ArrowDown);
    assert_eq!(delivered[0].modifiers(), Modifiers::empty());
    assert_eq!(delivered[0].source, tree);
    assert_eq!(host.posted_count(), 1);
}

#[test]
fn test_press_and_release_stay_paired() {
    let host = installed_host();
    let tree = WidgetId::tree("project view");
    host.set_focus(Some(tree));

    host.press(alt(Code::KeyL, tree));
    host.press(alt_up(Code::KeyL, tree));

    let delivered: Vec<_> = host
        .delivered_keys()
        .iter()
        .map(|k| (k.code(), k.state()))
        .collect();
    assert_eq!(
        delivered,
        [
            (Code::ArrowRight, KeyState::Down),
            (Code::ArrowRight, KeyState::Up)
        ]
    );
}

#[test]
fn test_unfocused_context_passes_through() {
    let host = installed_host();
    let editor = WidgetId::new("editor");
    host.set_focus(Some(editor));

    host.press(alt(Code::KeyI, editor));

    assert_eq!(host.delivered_codes(), [Code::KeyI]);
    assert_eq!(host.delivered_keys()[0].character(), Some("i"));
    assert_eq!(host.posted_count(), 0);
}

#[test]
fn test_plain_letters_pass_through_in_tree() {
    let host = installed_host();
    let tree = WidgetId::tree("project view");
    host.set_focus(Some(tree));

    host.press(key_down(Code::KeyI, Modifiers::empty(), tree));
    host.press(key_down(Code::KeyI, Modifiers::CONTROL, tree));
    host.press(alt(Code::KeyA, tree));

    assert_eq!(host.delivered_codes(), [Code::KeyI, Code::KeyI, Code::KeyA]);
    assert_eq!(host.posted_count(), 0);
}

#[test]
fn test_non_key_events_pass_through() {
    let host = installed_host();
    host.set_focus(Some(WidgetId::tree("project view")));

    host.press(Event::FocusGained);
    host.press(Event::ImeCommit("ä".into()));

    assert_eq!(host.delivered().len(), 2);
    assert_eq!(host.posted_count(), 0);
}

#[test]
fn test_fallback_focus_is_used() {
    let host = installed_host();
    let tree = WidgetId::tree("project view");
    host.set_focus(None);
    host.set_fallback_focus(Some(tree));

    host.press(alt(Code::KeyU, tree));

    assert_eq!(host.delivered_codes(), [Code::Home]);
}

#[test]
fn test_no_focus_at_all_passes_through() {
    let host = installed_host();
    let somewhere = WidgetId::new("window");

    host.press(alt(Code::KeyU, somewhere));

    assert_eq!(host.delivered_codes(), [Code::KeyU]);
}

#[test]
fn test_decision_uses_focus_not_event_source() {
    let host = installed_host();
    let tree = WidgetId::tree("project view");
    let editor = WidgetId::new("editor");
    host.set_focus(Some(tree));

    // The event was aimed at the editor, but the tree owns focus.
    host.press(alt(Code::KeyW, editor));

    let delivered = host.delivered_keys();
    assert_eq!(delivered[0].code(), Code::PageUp);
    assert_eq!(delivered[0].source, editor);
}

#[test]
fn test_commit_dialog_word_jump_is_delivered() {
    let host = installed_host();
    let dialog = WidgetId::new(ijkl::settings::COMMIT_DIALOG_MARKER);
    let message = dialog.child("commit message");
    host.set_focus(Some(message));

    host.press(key_down(Code::KeyL, Modifiers::ALT | Modifiers::SHIFT, message));
    host.press(alt(Code::KeyI, message));

    let delivered: Vec<_> = host
        .delivered_keys()
        .iter()
        .map(|k| (k.code(), k.modifiers()))
        .collect();
    assert_eq!(
        delivered,
        [
            (Code::ArrowRight, Modifiers::SHIFT | Modifiers::CONTROL),
            (Code::KeyI, Modifiers::ALT)
        ]
    );
}

#[test]
fn test_replacement_is_not_remapped_again() {
    let host = TestHost::new();
    host.install_with(&Settings::default().platform(Platform::Mac))
        .unwrap();
    let dialog = WidgetId::new(ijkl::settings::COMMIT_DIALOG_MARKER);
    host.set_focus(Some(dialog));

    // On macOS the word jump keeps Alt held; the replacement still must not loop.
    host.press(alt(Code::KeyJ, dialog));

    let delivered = host.delivered_keys();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].code(), Code::ArrowLeft);
    assert_eq!(delivered[0].modifiers(), Modifiers::ALT);
    assert_eq!(host.posted_count(), 1);
}
