//! Tests for the application state

#[cfg(test)]
mod tests {
    use crate::models::app_state::AppState;
    use shared::session::{MemoryStore, SessionStore};

    #[test]
    fn test_default_state_is_signed_out() {
        let state = AppState::default();
        assert!(!state.session.is_authenticated());
        assert!(!state.chat_open);
    }

    #[test]
    fn test_state_from_stored_session() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_token("tok-123");
        session.set_submission_id(8);

        let state = AppState::from_session(&session);

        assert!(state.session.is_authenticated());
        assert_eq!(state.session.submission_id, Some(8));
        assert!(!state.chat_open);
    }
}
