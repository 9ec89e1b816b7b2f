use axum::{
    extract::FromRequestParts,
    http::{Method, Request, StatusCode, Uri, header, request::Parts},
    response::IntoResponse,
};
use cms_portal::{
    AppState,
    auth::{AuthUser, Claims, issue_token},
    config::AppConfig,
    error::ApiError,
    repository::MemoryRepository,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use std::{sync::Arc, time::SystemTime};
use uuid::Uuid;

// --- Helper Functions ---

const TEST_JWT_SECRET: &str = "test-secret-value-1234567890";
const TEST_USER_ID: Uuid = Uuid::from_u128(1);

/// Signs a token whose validity window is `iat_offset..exp_offset` seconds
/// relative to now (either may be negative). Mirrors what the login flow
/// produces, but with full control over the clock for expiry tests.
fn create_token_with_window(user_id: Uuid, iat_offset: i64, exp_offset: i64) -> String {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let claims = Claims {
        sub: user_id,
        iat: (now + iat_offset) as usize,
        exp: (now + exp_offset) as usize,
    };

    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes());
    encode(&Header::default(), &claims, &key).unwrap()
}

fn create_token(user_id: Uuid, exp_offset: i64) -> String {
    create_token_with_window(user_id, 0, exp_offset)
}

fn create_app_state(jwt_secret: &str) -> AppState {
    let mut config = AppConfig::default();
    config.jwt_secret = jwt_secret.to_string();

    AppState {
        repo: Arc::new(MemoryRepository::new()),
        config,
    }
}

/// Helper to get the mutable Parts struct from a generated Request.
fn get_request_parts(method: Method, uri: Uri) -> Parts {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let (parts, _) = request.into_parts();
    parts
}

fn parts_with_auth_header(value: &str) -> Parts {
    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(value).unwrap(),
    );
    parts
}

// --- Tests ---

#[tokio::test]
async fn test_gate_accepts_valid_token() {
    let token = create_token(TEST_USER_ID, 3600);
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = parts_with_auth_header(&format!("Bearer {}", token));
    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(auth_user.is_ok());
    assert_eq!(auth_user.unwrap().id, TEST_USER_ID);
}

#[tokio::test]
async fn test_gate_rejects_missing_header_as_unauthenticated() {
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    let err = AuthUser::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthenticated(_)));
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_rejects_expired_token_as_forbidden() {
    // Issued 31 days ago with the standard 30-day validity: one day past
    // expiry, well outside the decoder's leeway.
    let token = create_token_with_window(TEST_USER_ID, -31 * 24 * 3600, -24 * 3600);
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = parts_with_auth_header(&format!("Bearer {}", token));
    let err = AuthUser::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden(_)));
    assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_gate_accepts_token_aged_one_day() {
    // Issued a day ago, 29 days of validity left.
    let token = create_token_with_window(TEST_USER_ID, -24 * 3600, 29 * 24 * 3600);
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = parts_with_auth_header(&format!("Bearer {}", token));
    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state).await;

    assert!(auth_user.is_ok());
}

#[tokio::test]
async fn test_gate_rejects_non_bearer_header_as_forbidden() {
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = parts_with_auth_header("Basic dXNlcjpwYXNz");
    let err = AuthUser::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden(_)));
}

#[tokio::test]
async fn test_gate_rejects_garbage_token_as_forbidden() {
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = parts_with_auth_header("Bearer not.a.token");
    let err = AuthUser::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden(_)));
}

#[tokio::test]
async fn test_gate_rejects_token_signed_with_other_secret() {
    let token = create_token(TEST_USER_ID, 3600);
    // The gate verifies against a different secret than the one the token was
    // signed with.
    let app_state = create_app_state("a-completely-different-secret");

    let mut parts = parts_with_auth_header(&format!("Bearer {}", token));
    let err = AuthUser::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden(_)));
}

#[tokio::test]
async fn test_issued_token_round_trips_through_gate() {
    // The gate must resolve a token minted by the credential service back to
    // the same account id.
    let account_id = Uuid::new_v4();
    let token = issue_token(account_id, TEST_JWT_SECRET).unwrap();
    let app_state = create_app_state(TEST_JWT_SECRET);

    let mut parts = parts_with_auth_header(&format!("Bearer {}", token));
    let auth_user = AuthUser::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap();

    assert_eq!(auth_user.id, account_id);
}
