use crate::{
    AppState,
    auth::{self, AuthUser},
    error::ApiError,
    models::{
        self, BlogPost, BlogStats, CreateBlogPostRequest, CreateEventRequest, CreateNewsRequest,
        CreateSlideRequest, Event, LoginRequest, LoginResponse, News, ProfileResponse,
        RegisterRequest, RegisterResponse, Slide, UpdateBlogPostRequest, UpdateEventRequest,
        UpdateNewsRequest, UpdateSlideRequest,
    },
    repository::RepositoryError,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

// --- Filter Structs ---

/// BlogFilter
///
/// Accepted query parameters for the blog listing endpoint (GET /blogs).
/// `search` matches the post title, summary, or any tag, case-insensitively.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct BlogFilter {
    /// Optional filter on the post type.
    #[serde(rename = "type")]
    pub blog_type: Option<String>,
    /// Optional filter on the post location.
    pub location: Option<String>,
    /// Optional case-insensitive search string.
    pub search: Option<String>,
}

// --- Authentication Handlers ---

/// login
///
/// [Public Route] The credential service entry point. Validates the
/// username/password pair against the admin-account store and issues a signed,
/// 30-day access token on success.
///
/// Failure contract: unknown username → 404, wrong password → 401. The stored
/// secret is a salted bcrypt hash, never a plaintext value; `bcrypt::verify`
/// performs the comparison.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 404, description = "User not found"),
        (status = 401, description = "Incorrect password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = payload.username.trim();

    let user = state
        .repo
        .find_admin_by_username(username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if !bcrypt::verify(&payload.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized("Incorrect password".to_string()));
    }

    // The signing secret comes from the AppConfig loaded at startup; a missing
    // secret aborts the process before any request is served.
    let token = auth::issue_token(user.id, &state.config.jwt_secret)?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        user: user.into(),
    }))
}

/// register
///
/// [Public Route] Creates a new admin account.
///
/// The password policy is checked before any write; the username's uniqueness
/// is enforced by the store's constraint, so a concurrent duplicate
/// registration loses the race atomically and is reported as taken.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = RegisterResponse),
        (status = 400, description = "Weak password or username already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let username = payload.username.trim();

    models::validate_password(&payload.password).map_err(ApiError::Validation)?;

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;

    let user = match state.repo.create_admin(username, &password_hash).await {
        Ok(user) => user,
        Err(RepositoryError::Duplicate(_)) => {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Registration successful".to_string(),
            user: user.into(),
        }),
    ))
}

/// get_profile
///
/// [Protected Route] Returns the authenticated admin's account summary.
///
/// The identity comes from the token gate (`AuthUser`); this handler performs
/// the store lookup the stateless gate deliberately skips, so an account
/// deleted after token issuance yields 404. The password hash is excluded by
/// the response type.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn get_profile(
    AuthUser { id }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .repo
        .get_admin(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse {
        success: true,
        user: user.into(),
    }))
}

// --- News Handlers ---

/// get_all_news
///
/// [Public Route] Lists all news posts, newest first.
#[utoipa::path(
    get,
    path = "/news",
    responses((status = 200, description = "All news posts", body = [News]))
)]
pub async fn get_all_news(State(state): State<AppState>) -> Result<Json<Vec<News>>, ApiError> {
    Ok(Json(state.repo.list_news().await?))
}

/// get_news_details
///
/// [Public Route] Retrieves a single news post by ID.
#[utoipa::path(
    get,
    path = "/news/{id}",
    params(("id" = Uuid, Path, description = "News ID")),
    responses(
        (status = 200, description = "Found", body = News),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_news_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<News>, ApiError> {
    state
        .repo
        .get_news(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("News not found".to_string()))
}

/// create_news
///
/// [Protected Route] Publishes a new news post.
#[utoipa::path(
    post,
    path = "/news",
    request_body = CreateNewsRequest,
    responses((status = 201, description = "Created", body = News))
)]
pub async fn create_news(
    State(state): State<AppState>,
    Json(payload): Json<CreateNewsRequest>,
) -> Result<(StatusCode, Json<News>), ApiError> {
    let news = state.repo.create_news(payload).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// update_news
///
/// [Protected Route] Partially updates a news post; only provided fields are
/// written.
#[utoipa::path(
    put,
    path = "/news/{id}",
    request_body = UpdateNewsRequest,
    responses(
        (status = 200, description = "Updated", body = News),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateNewsRequest>,
) -> Result<Json<News>, ApiError> {
    state
        .repo
        .update_news(id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("News not found".to_string()))
}

/// delete_news
///
/// [Protected Route] Removes a news post.
#[utoipa::path(
    delete,
    path = "/news/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.repo.delete_news(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("News not found".to_string()))
    }
}

// --- Event Handlers ---

/// get_all_events
///
/// [Public Route] Lists all events, newest first.
#[utoipa::path(
    get,
    path = "/events",
    responses((status = 200, description = "All events", body = [Event]))
)]
pub async fn get_all_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.repo.list_events().await?))
}

/// get_event_details
///
/// [Public Route] Retrieves a single event by ID.
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Found", body = Event),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_event_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    state
        .repo
        .get_event(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))
}

/// create_event
///
/// [Protected Route] Publishes a new event.
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses((status = 201, description = "Created", body = Event))
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = state.repo.create_event(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// update_event
///
/// [Protected Route] Partially updates an event.
#[utoipa::path(
    put,
    path = "/events/{id}",
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated", body = Event),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    state
        .repo
        .update_event(id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))
}

/// delete_event
///
/// [Protected Route] Removes an event.
#[utoipa::path(
    delete,
    path = "/events/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.repo.delete_event(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Event not found".to_string()))
    }
}

// --- Blog Handlers ---

/// get_blog_posts
///
/// [Public Route] Lists blog posts, newest first, with optional type,
/// location, and search filters.
#[utoipa::path(
    get,
    path = "/blogs",
    params(BlogFilter),
    responses((status = 200, description = "Filtered blog posts", body = [BlogPost]))
)]
pub async fn get_blog_posts(
    State(state): State<AppState>,
    Query(filter): Query<BlogFilter>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state
        .repo
        .list_blog_posts(filter.blog_type, filter.location, filter.search)
        .await?;
    Ok(Json(posts))
}

/// get_recent_blog_posts
///
/// [Public Route] Retrieves the newest blog posts for the landing page.
/// The `limit` (3) is hardcoded in the repository call.
#[utoipa::path(
    get,
    path = "/blogs/recent",
    responses((status = 200, description = "Recent blog posts", body = [BlogPost]))
)]
pub async fn get_recent_blog_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    Ok(Json(state.repo.recent_blog_posts(3).await?))
}

/// get_blog_stats
///
/// [Protected Route] Compiles the blog counters for the admin dashboard.
#[utoipa::path(
    get,
    path = "/blogs/stats",
    responses((status = 200, description = "Stats", body = BlogStats))
)]
pub async fn get_blog_stats(State(state): State<AppState>) -> Result<Json<BlogStats>, ApiError> {
    Ok(Json(state.repo.blog_stats().await?))
}

/// get_blog_post_details
///
/// [Public Route] Retrieves a single blog post by ID.
#[utoipa::path(
    get,
    path = "/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Found", body = BlogPost),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_blog_post_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .repo
        .get_blog_post(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))
}

/// create_blog_post
///
/// [Protected Route] Publishes a new blog post.
#[utoipa::path(
    post,
    path = "/blogs",
    request_body = CreateBlogPostRequest,
    responses((status = 201, description = "Created", body = BlogPost))
)]
pub async fn create_blog_post(
    State(state): State<AppState>,
    Json(payload): Json<CreateBlogPostRequest>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    let post = state.repo.create_blog_post(payload).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// update_blog_post
///
/// [Protected Route] Partially updates a blog post.
#[utoipa::path(
    put,
    path = "/blogs/{id}",
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Updated", body = BlogPost),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_blog_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .repo
        .update_blog_post(id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))
}

/// delete_blog_post
///
/// [Protected Route] Removes a blog post.
#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_blog_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.repo.delete_blog_post(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Blog not found".to_string()))
    }
}

// --- Slider Handlers ---

/// get_slides
///
/// [Public Route] Lists the homepage slider entries in insertion order.
#[utoipa::path(
    get,
    path = "/slider",
    responses((status = 200, description = "All slides", body = [Slide]))
)]
pub async fn get_slides(State(state): State<AppState>) -> Result<Json<Vec<Slide>>, ApiError> {
    Ok(Json(state.repo.list_slides().await?))
}

/// get_slide_details
///
/// [Public Route] Retrieves a single slide by ID.
#[utoipa::path(
    get,
    path = "/slider/{id}",
    params(("id" = Uuid, Path, description = "Slide ID")),
    responses(
        (status = 200, description = "Found", body = Slide),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_slide_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Slide>, ApiError> {
    state
        .repo
        .get_slide(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Slide not found".to_string()))
}

/// create_slide
///
/// [Protected Route] Adds a slide to the homepage slider.
#[utoipa::path(
    post,
    path = "/slider",
    request_body = CreateSlideRequest,
    responses((status = 201, description = "Created", body = Slide))
)]
pub async fn create_slide(
    State(state): State<AppState>,
    Json(payload): Json<CreateSlideRequest>,
) -> Result<(StatusCode, Json<Slide>), ApiError> {
    let slide = state.repo.create_slide(payload).await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

/// update_slide
///
/// [Protected Route] Partially updates a slide.
#[utoipa::path(
    put,
    path = "/slider/{id}",
    request_body = UpdateSlideRequest,
    responses(
        (status = 200, description = "Updated", body = Slide),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSlideRequest>,
) -> Result<Json<Slide>, ApiError> {
    state
        .repo
        .update_slide(id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Slide not found".to_string()))
}

/// delete_slide
///
/// [Protected Route] Removes a slide.
#[utoipa::path(
    delete,
    path = "/slider/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.repo.delete_slide(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Slide not found".to_string()))
    }
}
