use painel_core::{first_error, PageState, RequestGuard};

#[test]
fn first_error_follows_declaration_order() {
    assert_eq!(
        first_error([None, Some("segundo"), Some("terceiro")]),
        Some("segundo".to_string())
    );
    assert_eq!(first_error([None, None]), None);
}

#[test]
fn empty_slot_becomes_empty_state() {
    assert_eq!(PageState::<u8>::from_slot(None), PageState::Empty);
    assert_eq!(PageState::from_slot(Some(3)), PageState::Ready(3));
    assert!(PageState::<u8>::default().is_loading());
}

#[test]
fn error_state_exposes_message_only() {
    let state: PageState<u8> = PageState::Error("Erro 500: boom".to_string());
    assert_eq!(state.error(), Some("Erro 500: boom"));
    assert_eq!(state.ready(), None);
    assert_eq!(state.phase(), "error");
    assert_eq!(state.map(|value| value + 1).error(), Some("Erro 500: boom"));
}

#[test]
fn stale_ticket_is_not_current() {
    let guard = RequestGuard::default();
    let first = guard.issue();
    assert!(guard.is_current(first));

    let second = guard.clone().issue();
    assert!(!guard.is_current(first));
    assert!(guard.is_current(second));
}
