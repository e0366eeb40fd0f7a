//! Capability-based lookup from session identity to a renderable view.
//!
//! The registry answers one question: what does this identity render? The
//! answer is either the markup generated for it or an explicit `NotFound`,
//! which callers resolve to the fallback factory. No module-path or URL
//! convention leaks out of this module.

use viewsmith_core::UserId;

/// Resolution result: exactly one of the two, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedView {
    /// Markup generated for this identity.
    Generated(String),
    /// No view registered for this identity; render the default factory.
    NotFound,
}

#[derive(Clone)]
pub struct ViewRegistry {
    base_url: String,
}

impl ViewRegistry {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve an identity. Failures of any kind (missing artifact, server
    /// error, transport error) degrade to `NotFound`; resolution is never
    /// surfaced as a user-facing error.
    pub async fn resolve(&self, user_id: UserId) -> ResolvedView {
        let fetched = self.fetch(user_id).await;
        if let Err(reason) = &fetched {
            leptos::logging::warn!("view resolution failed, using fallback: {reason}");
        }
        resolve_outcome(fetched)
    }

    async fn fetch(&self, user_id: UserId) -> Result<Option<String>, String> {
        let url = format!("{}/{user_id}", self.base_url);

        let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(format!("unexpected status {}", response.status()));
        }

        response.text().await.map(Some).map_err(|e| e.to_string())
    }
}

/// Pure resolution rule, separated from the transport so it is testable
/// off-browser.
pub fn resolve_outcome(fetched: Result<Option<String>, String>) -> ResolvedView {
    match fetched {
        Ok(Some(markup)) => ResolvedView::Generated(markup),
        Ok(None) | Err(_) => ResolvedView::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fetched_artifact_resolves_to_the_generated_view() {
        assert_eq!(
            resolve_outcome(Ok(Some("<div>hi</div>".to_string()))),
            ResolvedView::Generated("<div>hi</div>".to_string())
        );
    }

    #[test]
    fn a_missing_artifact_resolves_to_not_found() {
        assert_eq!(resolve_outcome(Ok(None)), ResolvedView::NotFound);
    }

    #[test]
    fn a_transport_failure_resolves_to_not_found() {
        assert_eq!(
            resolve_outcome(Err("connection refused".to_string())),
            ResolvedView::NotFound
        );
    }
}
