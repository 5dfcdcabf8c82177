use shared::session::{KeyValueStore, Session, SessionStore};
use yewdux::{Dispatch, Store};

use crate::storage;

/// Application wide state shared through yewdux.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct AppState {
    /// Mirror of the persisted session, refreshed after every session change.
    pub session: Session,
    /// Whether the chat window is open.
    pub chat_open: bool,
}

impl AppState {
    /// State with the session read from `store`.
    pub fn from_session<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        Self {
            session: store.snapshot(),
            chat_open: false,
        }
    }
}

/// Re-read the persisted session into the store.
pub fn refresh_session(dispatch: &Dispatch<AppState>) {
    let session = storage::session().snapshot();
    dispatch.reduce_mut(|state| state.session = session);
}

/// Forget the token and publish the change.
pub fn sign_out(dispatch: &Dispatch<AppState>) {
    storage::session().sign_out();
    refresh_session(dispatch);
}

/// Open or close the chat window.
pub fn set_chat_open(dispatch: &Dispatch<AppState>, open: bool) {
    dispatch.reduce_mut(|state| state.chat_open = open);
}
