use super::*;
use crate::clipboard::RecordingClipboard;
use crate::controller::events::WORKER_STARTUP_FAILED_MESSAGE;
use shared::error::{GenerateError, GENERATION_FAILED_MESSAGE};

fn filled_form() -> FormState {
    let mut state = FormState::default();
    state.update_email_content("Hi, can you send the Q3 numbers?");
    state.update_tone(Tone::Professional);
    state
}

fn generation_failure() -> UiEvent {
    UiEvent::Error(UiError::from_generate_error(&GenerateError::Status {
        status: 502,
    }))
}

#[test]
fn starts_idle_and_empty() {
    let state = FormState::default();
    assert_eq!(state.email_content(), "");
    assert_eq!(state.tone(), Tone::None);
    assert!(!state.loading());
    assert!(!state.dark_mode());
    assert!(!state.copy_confirmed());
    assert!(state.error_message().is_none());
}

#[test]
fn empty_content_never_produces_a_request() {
    let mut state = FormState::default();
    state.update_tone(Tone::Casual);

    assert!(!state.can_submit());
    assert!(state.begin_submission().is_none());
    assert!(!state.loading());
}

#[test]
fn whitespace_only_content_is_submittable() {
    let mut state = FormState::default();
    state.update_email_content("   ");
    assert!(state.can_submit());
}

#[test]
fn submission_carries_content_and_tone() {
    let mut state = filled_form();
    let request = state.begin_submission().expect("request");

    assert_eq!(request.email_content, "Hi, can you send the Q3 numbers?");
    assert_eq!(request.tone, Tone::Professional);
}

#[test]
fn loading_spans_exactly_the_outstanding_request() {
    let mut state = filled_form();
    assert!(!state.loading());

    state.begin_submission().expect("request");
    assert!(state.loading());
    assert!(!state.can_submit());
    assert!(state.begin_submission().is_none(), "second submit while loading");

    state.apply(UiEvent::Info("still waiting".to_string()));
    assert!(state.loading());

    state.apply(UiEvent::ReplyGenerated("Attached, thanks!".to_string()));
    assert!(!state.loading());
    assert!(state.can_submit());
}

#[test]
fn success_stores_reply_and_clears_error() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.apply(generation_failure());
    assert!(state.error_message().is_some());

    state.begin_submission().expect("retry");
    assert!(state.error_message().is_none(), "cleared at submit start");
    state.apply(UiEvent::ReplyGenerated("Here you go.".to_string()));

    assert_eq!(state.generated_reply(), "Here you go.");
    assert!(state.error_message().is_none());
}

#[test]
fn failure_sets_fixed_message_and_leaves_reply_cleared() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.apply(UiEvent::ReplyGenerated("First draft".to_string()));
    assert_eq!(state.generated_reply(), "First draft");

    state.begin_submission().expect("second request");
    assert_eq!(state.generated_reply(), "", "cleared at submit start");
    state.apply(generation_failure());

    assert_eq!(state.error_message(), Some(GENERATION_FAILED_MESSAGE));
    assert_eq!(state.generated_reply(), "");
    assert!(!state.loading());
}

#[test]
fn failure_keeps_form_editable() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.apply(generation_failure());

    state.update_email_content("Different email");
    assert!(state.can_submit());
    assert_eq!(state.email_content(), "Different email");
}

#[test]
fn worker_startup_failure_uses_its_own_message() {
    let mut state = FormState::default();
    state.apply(UiEvent::Error(UiError::worker_startup("failed to build runtime")));
    assert_eq!(state.error_message(), Some(WORKER_STARTUP_FAILED_MESSAGE));
}

#[test]
fn copies_exact_reply_and_confirms() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.apply(UiEvent::ReplyGenerated("Line one\n  Line two ".to_string()));

    let mut clipboard = RecordingClipboard::default();
    assert!(state.copy_to_clipboard(&mut clipboard, Instant::now()));

    assert_eq!(clipboard.writes, vec!["Line one\n  Line two ".to_string()]);
    assert!(state.copy_confirmed());
}

#[test]
fn copy_confirmation_expires_after_three_seconds() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.apply(UiEvent::ReplyGenerated("ok".to_string()));

    let copied_at = Instant::now();
    let mut clipboard = RecordingClipboard::default();
    state.copy_to_clipboard(&mut clipboard, copied_at);

    state.expire_copy_confirmation(copied_at + Duration::from_millis(2_900));
    assert!(state.copy_confirmed());
    assert_eq!(
        state.copy_confirmation_remaining(copied_at + Duration::from_secs(1)),
        Some(Duration::from_secs(2))
    );

    state.expire_copy_confirmation(copied_at + COPY_CONFIRMATION_DURATION);
    assert!(!state.copy_confirmed());
}

#[test]
fn copy_confirmation_can_be_dismissed() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.apply(UiEvent::ReplyGenerated("ok".to_string()));
    state.copy_to_clipboard(&mut RecordingClipboard::default(), Instant::now());

    state.dismiss_copy_confirmation();
    assert!(!state.copy_confirmed());
}

#[test]
fn clipboard_failure_does_not_confirm() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.apply(UiEvent::ReplyGenerated("ok".to_string()));

    let mut clipboard = RecordingClipboard {
        fail_with: Some("no display".to_string()),
        ..Default::default()
    };
    assert!(!state.copy_to_clipboard(&mut clipboard, Instant::now()));
    assert!(!state.copy_confirmed());
    assert!(state.status().contains("no display"));
}

#[test]
fn nothing_to_copy_without_a_reply() {
    let mut state = FormState::default();
    let mut clipboard = RecordingClipboard::default();
    assert!(!state.copy_to_clipboard(&mut clipboard, Instant::now()));
    assert!(clipboard.writes.is_empty());
}

#[test]
fn toggling_dark_mode_twice_restores_theme_and_keeps_form_data() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.apply(UiEvent::ReplyGenerated("reply".to_string()));

    state.toggle_dark_mode();
    assert!(state.dark_mode());
    state.toggle_dark_mode();
    assert!(!state.dark_mode());

    assert_eq!(state.email_content(), "Hi, can you send the Q3 numbers?");
    assert_eq!(state.tone(), Tone::Professional);
    assert_eq!(state.generated_reply(), "reply");
}

#[test]
fn dark_mode_can_change_while_loading() {
    let mut state = filled_form();
    state.begin_submission().expect("request");
    state.toggle_dark_mode();
    assert!(state.dark_mode());
    assert!(state.loading());
}
