//! The counted quit-confirmation sub-state.

mod common;

use common::state_from;
use core_actions::{Directive, dispatch};
use core_events::{Key, Navigate};

#[test]
fn clean_document_needs_no_confirmation() {
    let mut st = state_from(b"saved content");
    assert_eq!(dispatch(Key::Quit, &mut st), Directive::Quit);
}

#[test]
fn dirty_document_counts_down_to_quit() {
    let mut st = state_from(b"");
    dispatch(Key::Literal(b'x'), &mut st);
    assert!(st.document.is_dirty());

    // Press 1: editor stays open, two more presses required.
    assert_eq!(dispatch(Key::Quit, &mut st), Directive::Continue);
    assert_eq!(st.quit_pending, Some(2));
    let msg = st.status.as_ref().expect("warning shown").text().to_string();
    assert!(msg.contains('2'), "message reflects remaining presses: {msg}");

    // Press 2.
    assert_eq!(dispatch(Key::Quit, &mut st), Directive::Continue);
    assert_eq!(st.quit_pending, Some(1));

    // Press 3: countdown exhausted, quit goes through.
    assert_eq!(dispatch(Key::Quit, &mut st), Directive::Quit);
}

#[test]
fn any_other_key_disarms_the_countdown() {
    let mut st = state_from(b"");
    dispatch(Key::Literal(b'x'), &mut st);
    assert_eq!(dispatch(Key::Quit, &mut st), Directive::Continue);
    assert_eq!(st.quit_pending, Some(2));

    dispatch(Key::Navigate(Navigate::Left), &mut st);
    assert_eq!(st.quit_pending, None, "countdown reset");

    // The full count is required again from scratch.
    assert_eq!(dispatch(Key::Quit, &mut st), Directive::Continue);
    assert_eq!(st.quit_pending, Some(2));
}

#[test]
fn single_press_policy_quits_dirty_documents_immediately() {
    let mut st = state_from(b"");
    st.quit_confirm = 1;
    dispatch(Key::Literal(b'x'), &mut st);
    assert_eq!(dispatch(Key::Quit, &mut st), Directive::Quit);
}

#[test]
fn zero_press_policy_never_blocks_quit() {
    let mut st = state_from(b"");
    st.quit_confirm = 0;
    dispatch(Key::Literal(b'x'), &mut st);
    assert_eq!(dispatch(Key::Quit, &mut st), Directive::Quit);
}
