use std::sync::Arc;

use tracing::info;
use wishtree_ai::Polisher;

use crate::error::WishError;
use crate::store::WishStore;
use crate::types::{NewWish, Wish, ANONYMOUS};

#[derive(Clone, Copy, Debug)]
pub struct SubmitPolicy {
    /// Reject submissions without an `anonymousId` instead of defaulting it.
    pub require_anonymous_id: bool,
    /// Run the best-effort polish on submitted content.
    pub enhance_on_submit: bool,
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self {
            require_anonymous_id: false,
            enhance_on_submit: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubmitWish {
    pub content: Option<String>,
    pub anonymous_id: Option<String>,
}

/// Validates, polishes and stores wishes. One instance, holding the one
/// long-lived store, is shared by every request.
pub struct WishService {
    store: Arc<dyn WishStore>,
    polisher: Polisher,
    policy: SubmitPolicy,
}

impl WishService {
    pub fn new(store: Arc<dyn WishStore>, polisher: Polisher, policy: SubmitPolicy) -> Self {
        Self {
            store,
            polisher,
            policy,
        }
    }

    pub async fn submit(&self, req: SubmitWish) -> Result<Wish, WishError> {
        let content = non_blank(req.content)
            .ok_or_else(|| WishError::validation("content is required"))?;
        let anonymous_id = non_blank(req.anonymous_id);
        if self.policy.require_anonymous_id && anonymous_id.is_none() {
            return Err(WishError::validation("anonymousId is required"));
        }

        // enhancement problems never fail a submission
        let content = if self.policy.enhance_on_submit {
            self.polisher.polish_or_keep(&content).await
        } else {
            content
        };

        let new = NewWish::new(content, anonymous_id.unwrap_or_else(|| ANONYMOUS.to_string()));
        let wish = self.store.append(new).await?;
        info!(id = wish.id, anonymous_id = %wish.anonymous_id, "wish stored");
        Ok(wish)
    }

    pub async fn list_wishes(&self) -> Result<Vec<Wish>, WishError> {
        Ok(self.store.list_all().await?)
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct MemStore(Mutex<Vec<Wish>>);

    #[async_trait]
    impl WishStore for MemStore {
        async fn append(&self, wish: NewWish) -> Result<Wish, StoreError> {
            let mut all = self.0.lock().await;
            let wish = wish.with_id(all.len() as i64 + 1);
            all.insert(0, wish.clone());
            Ok(wish)
        }

        async fn list_all(&self) -> Result<Vec<Wish>, StoreError> {
            Ok(self.0.lock().await.clone())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl WishStore for Unreachable {
        async fn append(&self, _: NewWish) -> Result<Wish, StoreError> {
            Err(StoreError::io("/nowhere", std::io::ErrorKind::PermissionDenied.into()))
        }

        async fn list_all(&self) -> Result<Vec<Wish>, StoreError> {
            Err(StoreError::io("/nowhere", std::io::ErrorKind::PermissionDenied.into()))
        }
    }

    fn service(policy: SubmitPolicy) -> (Arc<MemStore>, WishService) {
        let store = Arc::new(MemStore::default());
        let svc = WishService::new(store.clone(), Polisher::disabled(), policy);
        (store, svc)
    }

    fn submit(content: Option<&str>, anon: Option<&str>) -> SubmitWish {
        SubmitWish {
            content: content.map(Into::into),
            anonymous_id: anon.map(Into::into),
        }
    }

    #[tokio::test]
    async fn blank_content_is_rejected_before_storage() {
        let (store, svc) = service(SubmitPolicy::default());
        for content in [None, Some(""), Some("  \n")] {
            let err = svc.submit(submit(content, Some("me"))).await.unwrap_err();
            assert!(matches!(err, WishError::Validation(ref m) if m == "content is required"));
        }
        assert!(store.0.lock().await.is_empty());
    }

    #[tokio::test]
    async fn anonymous_id_defaults_unless_required() {
        let (_, svc) = service(SubmitPolicy::default());
        let wish = svc.submit(submit(Some("a bicycle"), None)).await.unwrap();
        assert_eq!(wish.anonymous_id, ANONYMOUS);
        assert_eq!(wish.content, "a bicycle");

        let (store, strict) = service(SubmitPolicy {
            require_anonymous_id: true,
            ..SubmitPolicy::default()
        });
        let err = strict.submit(submit(Some("a bicycle"), Some(" "))).await.unwrap_err();
        assert!(matches!(err, WishError::Validation(ref m) if m == "anonymousId is required"));
        assert!(store.0.lock().await.is_empty());

        let ok = strict.submit(submit(Some("a bicycle"), Some("kid-7"))).await.unwrap();
        assert_eq!(ok.anonymous_id, "kid-7");
    }

    #[tokio::test]
    async fn storage_failure_surfaces() {
        let svc = WishService::new(
            Arc::new(Unreachable),
            Polisher::disabled(),
            SubmitPolicy::default(),
        );
        assert!(matches!(
            svc.submit(submit(Some("x"), None)).await,
            Err(WishError::Storage(StoreError::Io { .. }))
        ));
        assert!(matches!(svc.list_wishes().await, Err(WishError::Storage(_))));
    }
}
