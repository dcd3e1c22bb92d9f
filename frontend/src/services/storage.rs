//! Session persistence in the browser's local storage.

use gloo::storage::{LocalStorage, Storage};
use shared::{Session, User};

pub const TOKEN_KEY: &str = "@GoBarber:token";
pub const USER_KEY: &str = "@GoBarber:user";

/// Session left by a previous visit, if both halves are present.
pub fn load_session() -> Option<Session> {
    let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
    match LocalStorage::get::<User>(USER_KEY) {
        Ok(user) => Some(Session { token, user }),
        Err(e) => {
            tracing::warn!("Discarding stored session: {}", e);
            clear_session();
            None
        }
    }
}

pub fn save_session(session: &Session) {
    if let Err(e) = LocalStorage::set(TOKEN_KEY, &session.token) {
        tracing::error!("Failed to store token: {}", e);
    }
    if let Err(e) = LocalStorage::set(USER_KEY, &session.user) {
        tracing::error!("Failed to store user: {}", e);
    }
}

pub fn clear_session() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_round_trip() {
        let session = Session {
            token: "token".to_string(),
            user: User {
                id: Uuid::new_v4(),
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                avatar_url: None,
            },
        };

        save_session(&session);
        assert_eq!(load_session(), Some(session));

        clear_session();
        assert_eq!(load_session(), None);
    }

    #[wasm_bindgen_test]
    fn test_token_without_user_is_discarded() {
        clear_session();
        LocalStorage::set(TOKEN_KEY, "orphan").unwrap();

        assert_eq!(load_session(), None);
        assert!(LocalStorage::get::<String>(TOKEN_KEY).is_err());
    }
}
