use profile_directory::core::error::ProfileDirError;
use profile_directory::core::store::{USER_EMAIL_KEY, USER_TOKEN_KEY};
use profile_directory::{KeyValueStore, MemoryStore, SessionManager, SessionState};
use std::cell::RefCell;
use std::rc::Rc;

mod common;
use common::fakes::*;

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn test_login_persists_credentials() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let mut session = SessionManager::new(&store, SingleUserAuth::default());

        let state = session.login("eve.holt@reqres.in", "cityslicka")?;
        assert!(state.is_logged_in());
        assert_eq!(store.get(USER_TOKEN_KEY)?.as_deref(), Some("QpwL5tke4Pnpja7X4"));
        assert_eq!(store.get(USER_EMAIL_KEY)?.as_deref(), Some("eve.holt@reqres.in"));
        Ok(())
    }

    #[test]
    fn test_fresh_manager_restores_stored_session() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        SessionManager::new(&store, SingleUserAuth::default())
            .login("eve.holt@reqres.in", "cityslicka")?;

        let mut restored = SessionManager::new(&store, SingleUserAuth::default());
        assert!(!restored.state().is_logged_in());
        let state = restored.restore()?;
        assert_eq!(state.email.as_deref(), Some("eve.holt@reqres.in"));
        assert_eq!(restored.require_token()?, "QpwL5tke4Pnpja7X4");
        Ok(())
    }

    #[test]
    fn test_rejected_login_leaves_state_untouched() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let mut session = SessionManager::new(&store, SingleUserAuth::default());

        let err = session.login("eve.holt@reqres.in", "wrong").unwrap_err();
        assert_eq!(err.to_string(), "Sign in failed: user not found");
        assert_eq!(session.state(), &SessionState::default());
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_logout_clears_store_and_state() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let mut session = SessionManager::new(&store, SingleUserAuth::default());
        session.login("eve.holt@reqres.in", "cityslicka")?;

        session.logout()?;
        assert!(!session.state().is_logged_in());
        assert_eq!(store.get(USER_TOKEN_KEY)?, None);
        assert_eq!(store.get(USER_EMAIL_KEY)?, None);
        assert!(matches!(
            session.require_token(),
            Err(ProfileDirError::NotLoggedIn)
        ));
        Ok(())
    }

    #[test]
    fn test_store_failure_during_login_is_reported() {
        let store = FlakyStore::new();
        store.fail_writes.set(true);
        let mut session = SessionManager::new(&store, SingleUserAuth::default());

        let err = session.login("eve.holt@reqres.in", "cityslicka").unwrap_err();
        assert!(matches!(err, ProfileDirError::StorageUnavailable { .. }));
        assert!(!session.state().is_logged_in());
    }

    #[test]
    fn test_observers_follow_login_and_logout() -> anyhow::Result<()> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut session = SessionManager::new(MemoryStore::new(), SingleUserAuth::default());
        session.subscribe(move |state: &SessionState| sink.borrow_mut().push(state.is_logged_in()));

        session.restore()?;
        session.login("eve.holt@reqres.in", "cityslicka")?;
        session.logout()?;

        assert_eq!(*seen.borrow(), vec![false, true, false]);
        Ok(())
    }

    #[test]
    fn test_sessions_are_isolated() -> anyhow::Result<()> {
        let mut first = SessionManager::new(MemoryStore::new(), SingleUserAuth::default());
        let second = SessionManager::new(MemoryStore::new(), SingleUserAuth::default());

        first.login("eve.holt@reqres.in", "cityslicka")?;
        assert!(first.state().is_logged_in());
        assert!(!second.state().is_logged_in());
        Ok(())
    }
}
