//! Remedy picker: dropdown state and option filtering.

use std::sync::Arc;

use toothtutor_domain::KnownRemedy;

use crate::stores::SessionStore;

pub struct RemedyPicker {
    store: Arc<SessionStore>,
}

impl RemedyPicker {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Known remedies matching `query`. The "no remedy" entry is never offered.
    pub fn options(&self, query: &str) -> Vec<KnownRemedy> {
        KnownRemedy::search(query)
    }

    /// Returns whether the dropdown is open afterwards.
    pub async fn toggle(&self) -> bool {
        self.store.update(|session| session.toggle_dropdown()).await
    }

    pub async fn close(&self) {
        self.store.update(|session| session.close_dropdown()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toggle_and_close() {
        let picker = RemedyPicker::new(Arc::new(SessionStore::default()));
        assert!(picker.toggle().await);
        assert!(!picker.toggle().await);
        picker.toggle().await;
        picker.close().await;
        assert!(!picker.store.snapshot().await.is_dropdown_open());
    }

    #[test]
    fn test_options_filter_case_insensitively() {
        let picker = RemedyPicker::new(Arc::new(SessionStore::default()));
        assert_eq!(picker.options("SALT"), vec![KnownRemedy::SaltWater]);
        assert_eq!(picker.options("").len(), KnownRemedy::all().len() - 1);
        assert!(picker.options("no remedy").is_empty());
    }
}
