//! Tooth session storage.

use tokio::sync::RwLock;

use toothtutor_domain::{Condition, ToothSession};

/// Shared tooth session for use cases.
///
/// Guards are never held across an await on the LLM; callers mutate through
/// [`SessionStore::update`], which keeps the write lock for the closure only.
pub struct SessionStore {
    session: RwLock<ToothSession>,
}

impl SessionStore {
    pub fn new(condition: Condition) -> Self {
        Self {
            session: RwLock::new(ToothSession::new(condition)),
        }
    }

    /// Copy of the current session.
    pub async fn snapshot(&self) -> ToothSession {
        self.session.read().await.clone()
    }

    /// Run one transition under the write lock.
    pub async fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ToothSession) -> R,
    {
        let mut session = self.session.write().await;
        f(&mut session)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Condition::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toothtutor_domain::KnownRemedy;

    #[tokio::test]
    async fn test_update_is_visible_in_snapshot() {
        let store = SessionStore::default();
        let ticket = store
            .update(|session| session.begin_selection(KnownRemedy::Mouthwash.into()))
            .await;

        let session = store.snapshot().await;
        assert_eq!(session.latest_token(), ticket.token);
        assert!(session.is_loading());
        assert_eq!(session.selected_remedy().as_str(), "Mouthwash (Alcohol-based)");
    }
}
