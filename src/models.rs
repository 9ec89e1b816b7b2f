use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Admin Account Schemas ---

/// AdminUser
///
/// Raw database row (internal use). Maps to the `admin_users` table and is the
/// canonical identity record for the single admin role.
///
/// The password hash never leaves the repository/handler boundary: this struct
/// intentionally does not implement Serialize. Wire responses use
/// `AdminUserInfo` instead.
#[derive(Debug, Clone, FromRow, Default)]
pub struct AdminUser {
    pub id: Uuid,
    /// Unique username, stored trimmed.
    pub username: String,
    /// Salted bcrypt hash of the account secret.
    pub password_hash: String,
}

/// AdminUserInfo
///
/// Public projection of an admin account, safe for JSON responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct AdminUserInfo {
    pub id: Uuid,
    pub username: String,
}

impl From<AdminUser> for AdminUserInfo {
    fn from(user: AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Input payload for POST /login.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Output schema for a successful login: the signed bearer token plus the
/// account summary the dashboard displays.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AdminUserInfo,
}

/// Input payload for POST /register.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Output schema for a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: AdminUserInfo,
}

/// Output schema for GET /profile. The password hash is excluded by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: AdminUserInfo,
}

/// validate_password
///
/// The password policy enforced at the data-model layer, before any write:
/// minimum 8 characters, at least one letter and at least one digit.
///
/// The policy is an explicit predicate rather than a regex; the original
/// lookahead formulation has no equivalent in Rust's regex engine.
pub fn validate_password(password: &str) -> Result<(), String> {
    let long_enough = password.chars().count() >= 8;
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err("Password is too weak. It must be at least 8 characters long and contain at least one letter and one number.".to_string())
    }
}

// --- News Schemas ---

/// News
///
/// A news post from the `news` table. `date` is the editor-facing display
/// date; `created_at`/`updated_at` are record timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct News {
    pub id: Uuid,
    pub title: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    /// URL of the cover image.
    pub image: String,
    pub summary: String,
    pub full_content: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Input payload for submitting a news post (POST /news).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateNewsRequest {
    pub title: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub image: String,
    pub summary: String,
    pub full_content: String,
}

/// Partial update payload for PUT /news/{id}. Only provided fields are
/// written; the rest keep their current values.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateNewsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string")]
    pub date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
}

// --- Event Schemas ---

/// Event
///
/// An event record from the `events` table. Carries the organisation-specific
/// sidebar fields (testimonial, donation appeal, political update) alongside
/// the core listing data.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub testimonial: String,
    pub donation: String,
    pub political_update: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Input payload for POST /events.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateEventRequest {
    pub title: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub testimonial: String,
    pub donation: String,
    pub political_update: String,
}

/// Partial update payload for PUT /events/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string")]
    pub date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub political_update: Option<String>,
}

// --- Blog Schemas ---

/// BlogPost
///
/// A blog post from the `blog_posts` table.
///
/// Maps SQL column "type" to Rust field "blog_type" — `type` is a reserved
/// keyword in Rust. The JSON key stays "type" for API compatibility.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct BlogPost {
    pub id: Uuid,

    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    #[ts(rename = "type")]
    pub blog_type: String,

    pub title: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub location: String,
    pub summary: String,
    pub image: String,
    pub tags: Vec<String>,
    pub content: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Input payload for POST /blogs.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateBlogPostRequest {
    #[serde(rename = "type")]
    #[ts(rename = "type")]
    pub blog_type: String,

    pub title: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub location: String,
    pub summary: String,
    pub image: String,
    pub tags: Vec<String>,
    pub content: String,
}

/// Partial update payload for PUT /blogs/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateBlogPostRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[ts(rename = "type")]
    pub blog_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string")]
    pub date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// BlogCountBucket
///
/// One aggregation bucket of the blog statistics (a type or a location,
/// with its post count).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct BlogCountBucket {
    pub label: String,
    pub count: i64,
}

/// Output schema for the blog statistics endpoint (GET /blogs/stats).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct BlogStats {
    pub total_posts: i64,
    pub by_type: Vec<BlogCountBucket>,
    pub by_location: Vec<BlogCountBucket>,
}

// --- Slider Schemas ---

/// Slide
///
/// A homepage slider entry from the `slides` table.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Slide {
    pub id: Uuid,
    /// URL of the slide image.
    pub src: String,
    pub title: String,
    pub description: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Input payload for POST /slider.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateSlideRequest {
    pub src: String,
    pub title: String,
    pub description: String,
}

/// Partial update payload for PUT /slider/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateSlideRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
