use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::AppConfig, error::ApiError};

/// Access tokens are valid for 30 days from issuance. They are never persisted
/// or revoked server-side; expiry is the only end-of-life mechanism.
pub const TOKEN_VALIDITY_DAYS: i64 = 30;

/// Claims
///
/// The payload structure signed into every access token. Claims are signed by
/// the server's secret and validated upon every protected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): The UUID of the admin account. This is the key used by
    /// downstream handlers (e.g. the profile lookup) to fetch the account row.
    pub sub: Uuid,
    /// Expiration Time (exp): Timestamp after which the token must not be
    /// accepted.
    pub exp: usize,
    /// Issued At (iat): Timestamp when the token was issued.
    pub iat: usize,
}

/// issue_token
///
/// Signs a new access token embedding the account's internal id, expiring
/// 30 days from now. Called by the login handler after the credentials have
/// been verified; the signing secret comes from the already-loaded AppConfig,
/// never from an ad-hoc environment lookup.
pub fn issue_token(account_id: Uuid, secret: &str) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: account_id,
        iat: now.timestamp() as usize,
        exp: (now + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.to_string()))
}

/// AuthUser Extractor Result
///
/// The resolved identity of an authenticated request. Handlers receive this
/// struct to know which admin account is acting.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The unique identifier of the admin account, taken from the token's
    /// `sub` claim.
    pub id: Uuid,
}

/// AuthUser Extractor Implementation
///
/// Implements Axum's FromRequestParts trait, making AuthUser usable as a
/// function argument in any protected handler and as the request gate in the
/// router's auth middleware layer.
///
/// The verification state machine per request:
/// 1. Header extraction: a missing `Authorization` header rejects with 401
///    (no token provided).
/// 2. Bearer parsing and signature/expiry validation: any malformed, tampered
///    or expired token rejects with 403 (invalid token).
/// 3. Success: the embedded account id is attached for downstream use.
///
/// The gate is stateless. It performs no database lookup and trusts the
/// signature as proof of a prior successful login within the validity window;
/// handlers that need the account row fetch it themselves.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    // Allows the extractor to pull the AppConfig (for the signing secret).
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);

        // 1. Header extraction. Absence is the only condition reported as
        // "unauthenticated"; everything past this point holds a token and
        // failures are reported as "forbidden".
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthenticated("No token provided".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Forbidden("Invalid token".to_string()))?;

        // 2. Decode and validate signature + expiry.
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::default();
        validation.validate_exp = true;

        // Expired and tampered tokens are deliberately indistinguishable to
        // the caller.
        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|_| ApiError::Forbidden("Invalid token".to_string()))?;

        // 3. Success: expose the resolved identity.
        Ok(AuthUser {
            id: token_data.claims.sub,
        })
    }
}
