//! OAuth2 access tokens for the service account.
//!
//! Google's token endpoint accepts a signed JWT assertion in exchange for a
//! short-lived access token (the `jwt-bearer` grant). Tokens are cached and
//! reused until shortly before expiry.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;
use tracing::debug;

use super::credentials::ServiceAccountKey;
use crate::errors::StoreError;

/// OAuth scope covering Firestore document access.
const TOKEN_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the assertion; the maximum Google accepts.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens are refreshed this long before their reported expiry.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    token: String,
    expires_at: OffsetDateTime,
}

/// Access-token provider for a service account, with caching.
pub struct TokenProvider {
    key: ServiceAccountKey,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            key,
            cached: RwLock::new(None),
        }
    }

    /// Returns a valid access token, refreshing it if necessary.
    pub async fn access_token(&self, http: &Client) -> Result<String, StoreError> {
        {
            let cache = self.cached.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.expires_at > OffsetDateTime::now_utc() {
                    return Ok(cached.token.clone());
                }
            }
        }

        self.refresh(http).await
    }

    async fn refresh(&self, http: &Client) -> Result<String, StoreError> {
        debug!(client_email = %self.key.client_email, "Requesting new access token");

        let assertion = self.signed_assertion(OffsetDateTime::now_utc())?;
        let response = http
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Token { status, body });
        }

        let token: TokenResponse = response.json().await?;
        let expires_at = OffsetDateTime::now_utc()
            + Duration::seconds(token.expires_in - EXPIRY_MARGIN_SECS);

        let mut cache = self.cached.write().await;
        *cache = Some(CachedToken {
            token: token.access_token.clone(),
            expires_at,
        });

        Ok(token.access_token)
    }

    /// Builds the RS256-signed JWT assertion for the token exchange.
    fn signed_assertion(&self, now: OffsetDateTime) -> Result<String, StoreError> {
        let claims = self.claims(now.unix_timestamp());
        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?)
    }

    fn claims(&self, now: i64) -> AssertionClaims<'_> {
        AssertionClaims {
            iss: &self.key.client_email,
            scope: TOKEN_SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }
}
