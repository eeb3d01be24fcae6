//! Cloud Firestore document-store client.
//!
//! Documents are written through the Firestore REST API with a
//! service-account access token. A `PATCH` without an update mask creates
//! the document or replaces it wholesale, which is exactly the overwrite
//! semantics seeding relies on: re-running a seed leaves one document per
//! key, with no stale fields from earlier runs.

mod credentials;
mod token;
mod wire;

pub use credentials::ServiceAccountKey;
pub use token::TokenProvider;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::document::Fields;
use crate::errors::StoreError;
use crate::store::DocumentStore;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Firestore-backed [`DocumentStore`].
pub struct FirestoreClient {
    http: Client,
    project_id: String,
    tokens: TokenProvider,
}

impl FirestoreClient {
    /// Creates a client for the project named in the service-account key.
    pub fn new(key: ServiceAccountKey) -> Self {
        let project_id = key.project_id.clone();
        Self {
            http: Client::new(),
            project_id,
            tokens: TokenProvider::new(key),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn document_url(&self, collection: &str, key: &str) -> String {
        format!(
            "{FIRESTORE_BASE_URL}/projects/{}/databases/(default)/documents/{collection}/{key}",
            self.project_id
        )
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn set(&self, collection: &str, key: &str, fields: &Fields) -> Result<(), StoreError> {
        let token = self.tokens.access_token(&self.http).await?;
        let url = self.document_url(collection, key);
        let body = json!({ "fields": wire::fields_to_json(fields)? });

        debug!(collection, key, "Writing document");

        let response = self
            .http
            .patch(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Write {
                collection: collection.to_string(),
                key: key.to_string(),
                status,
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> FirestoreClient {
        FirestoreClient::new(ServiceAccountKey {
            key_type: "service_account".to_string(),
            project_id: "bandly-test".to_string(),
            private_key_id: "abc123".to_string(),
            private_key: "not a real key".to_string(),
            client_email: "seeder@bandly-test.iam.gserviceaccount.com".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        })
    }

    #[test]
    fn test_document_url_addresses_default_database() {
        let client = test_client();
        assert_eq!(
            client.document_url("profiles", "test_1"),
            "https://firestore.googleapis.com/v1/projects/bandly-test/databases/(default)/documents/profiles/test_1"
        );
    }
}
