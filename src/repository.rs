use crate::models::{
    AdminUser, BlogCountBucket, BlogPost, BlogStats, CreateBlogPostRequest, CreateEventRequest,
    CreateNewsRequest, CreateSlideRequest, Event, News, Slide, UpdateBlogPostRequest,
    UpdateEventRequest, UpdateNewsRequest, UpdateSlideRequest,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, query_builder::QueryBuilder};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// RepositoryError
///
/// Failures surfaced by the persistence layer. `Duplicate` is the translated
/// form of the store's unique-constraint violation: two concurrent inserts of
/// the same username race at the store level, exactly one succeeds, and the
/// loser sees this variant. Everything else is an unexpected database failure.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("duplicate record: {0}")]
    Duplicate(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations, allowing the
/// handlers to interact with the data layer without knowing the concrete
/// implementation (Postgres in production, the in-memory store in tests).
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's asynchronous task
/// boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Admin Accounts ---
    // Exact-match lookup used by the login flow.
    async fn find_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, RepositoryError>;
    // Atomic insert; a unique-constraint violation on the username surfaces
    // as RepositoryError::Duplicate. There is no check-then-insert window.
    async fn create_admin(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUser, RepositoryError>;
    // Lookup by internal id, used by the profile handler after the token
    // gate has resolved the identity.
    async fn get_admin(&self, id: Uuid) -> Result<Option<AdminUser>, RepositoryError>;

    // --- News ---
    async fn list_news(&self) -> Result<Vec<News>, RepositoryError>;
    async fn get_news(&self, id: Uuid) -> Result<Option<News>, RepositoryError>;
    async fn create_news(&self, req: CreateNewsRequest) -> Result<News, RepositoryError>;
    async fn update_news(
        &self,
        id: Uuid,
        req: UpdateNewsRequest,
    ) -> Result<Option<News>, RepositoryError>;
    async fn delete_news(&self, id: Uuid) -> Result<bool, RepositoryError>;

    // --- Events ---
    async fn list_events(&self) -> Result<Vec<Event>, RepositoryError>;
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepositoryError>;
    async fn create_event(&self, req: CreateEventRequest) -> Result<Event, RepositoryError>;
    async fn update_event(
        &self,
        id: Uuid,
        req: UpdateEventRequest,
    ) -> Result<Option<Event>, RepositoryError>;
    async fn delete_event(&self, id: Uuid) -> Result<bool, RepositoryError>;

    // --- Blog Posts ---
    // Listing with optional filters, newest first. `search` matches the
    // title, the summary, or any tag, case-insensitively.
    async fn list_blog_posts(
        &self,
        blog_type: Option<String>,
        location: Option<String>,
        search: Option<String>,
    ) -> Result<Vec<BlogPost>, RepositoryError>;
    async fn recent_blog_posts(&self, limit: i64) -> Result<Vec<BlogPost>, RepositoryError>;
    async fn get_blog_post(&self, id: Uuid) -> Result<Option<BlogPost>, RepositoryError>;
    async fn create_blog_post(
        &self,
        req: CreateBlogPostRequest,
    ) -> Result<BlogPost, RepositoryError>;
    async fn update_blog_post(
        &self,
        id: Uuid,
        req: UpdateBlogPostRequest,
    ) -> Result<Option<BlogPost>, RepositoryError>;
    async fn delete_blog_post(&self, id: Uuid) -> Result<bool, RepositoryError>;
    // Compiles the dashboard counters: total plus per-type and per-location
    // buckets.
    async fn blog_stats(&self) -> Result<BlogStats, RepositoryError>;

    // --- Slides ---
    async fn list_slides(&self) -> Result<Vec<Slide>, RepositoryError>;
    async fn get_slide(&self, id: Uuid) -> Result<Option<Slide>, RepositoryError>;
    async fn create_slide(&self, req: CreateSlideRequest) -> Result<Slide, RepositoryError>;
    async fn update_slide(
        &self,
        id: Uuid,
        req: UpdateSlideRequest,
    ) -> Result<Option<Slide>, RepositoryError>;
    async fn delete_slide(&self, id: Uuid) -> Result<bool, RepositoryError>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the
/// application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the
/// PostgreSQL database. All queries are runtime-bound (`query_as` with
/// `bind`), keeping parameterization safe without a compile-time database.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const NEWS_COLUMNS: &str = "id, title, date, image, summary, full_content, created_at, updated_at";
const EVENT_COLUMNS: &str = "id, title, date, location, description, testimonial, donation, political_update, created_at, updated_at";
const BLOG_COLUMNS: &str =
    "id, type, title, date, location, summary, image, tags, content, created_at, updated_at";
const SLIDE_COLUMNS: &str = "id, src, title, description, created_at, updated_at";

#[async_trait]
impl Repository for PostgresRepository {
    // --- ADMIN ACCOUNTS ---

    async fn find_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(
            "SELECT id, username, password_hash FROM admin_users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// create_admin
    ///
    /// Single atomic insert; uniqueness of the username is enforced by the
    /// table's unique constraint, and the violation is translated into
    /// `RepositoryError::Duplicate` for the handler to map to a Conflict.
    async fn create_admin(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUser, RepositoryError> {
        sqlx::query_as::<_, AdminUser>(
            r#"INSERT INTO admin_users (id, username, password_hash)
               VALUES ($1, $2, $3)
               RETURNING id, username, password_hash"#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return RepositoryError::Duplicate(format!(
                        "username '{username}' already exists"
                    ));
                }
            }
            RepositoryError::Database(e)
        })
    }

    async fn get_admin(&self, id: Uuid) -> Result<Option<AdminUser>, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(
            "SELECT id, username, password_hash FROM admin_users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    // --- NEWS ---

    async fn list_news(&self) -> Result<Vec<News>, RepositoryError> {
        let news = sqlx::query_as::<_, News>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news ORDER BY date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(news)
    }

    async fn get_news(&self, id: Uuid) -> Result<Option<News>, RepositoryError> {
        let news =
            sqlx::query_as::<_, News>(&format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(news)
    }

    async fn create_news(&self, req: CreateNewsRequest) -> Result<News, RepositoryError> {
        let news = sqlx::query_as::<_, News>(&format!(
            r#"INSERT INTO news (id, title, date, image, summary, full_content, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
               RETURNING {NEWS_COLUMNS}"#
        ))
        .bind(Uuid::new_v4())
        .bind(req.title)
        .bind(req.date)
        .bind(req.image)
        .bind(req.summary)
        .bind(req.full_content)
        .fetch_one(&self.pool)
        .await?;
        Ok(news)
    }

    /// update_news
    ///
    /// Uses the PostgreSQL `COALESCE` function to handle `Option<T>` fields,
    /// only updating a column if the corresponding field in `req` is `Some`.
    async fn update_news(
        &self,
        id: Uuid,
        req: UpdateNewsRequest,
    ) -> Result<Option<News>, RepositoryError> {
        let news = sqlx::query_as::<_, News>(&format!(
            r#"UPDATE news
               SET title = COALESCE($2, title),
                   date = COALESCE($3, date),
                   image = COALESCE($4, image),
                   summary = COALESCE($5, summary),
                   full_content = COALESCE($6, full_content),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {NEWS_COLUMNS}"#
        ))
        .bind(id)
        .bind(req.title)
        .bind(req.date)
        .bind(req.image)
        .bind(req.summary)
        .bind(req.full_content)
        .fetch_optional(&self.pool)
        .await?;
        Ok(news)
    }

    async fn delete_news(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- EVENTS ---

    async fn list_events(&self) -> Result<Vec<Event>, RepositoryError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    async fn create_event(&self, req: CreateEventRequest) -> Result<Event, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"INSERT INTO events (id, title, date, location, description, testimonial, donation, political_update, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
               RETURNING {EVENT_COLUMNS}"#
        ))
        .bind(Uuid::new_v4())
        .bind(req.title)
        .bind(req.date)
        .bind(req.location)
        .bind(req.description)
        .bind(req.testimonial)
        .bind(req.donation)
        .bind(req.political_update)
        .fetch_one(&self.pool)
        .await?;
        Ok(event)
    }

    async fn update_event(
        &self,
        id: Uuid,
        req: UpdateEventRequest,
    ) -> Result<Option<Event>, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"UPDATE events
               SET title = COALESCE($2, title),
                   date = COALESCE($3, date),
                   location = COALESCE($4, location),
                   description = COALESCE($5, description),
                   testimonial = COALESCE($6, testimonial),
                   donation = COALESCE($7, donation),
                   political_update = COALESCE($8, political_update),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {EVENT_COLUMNS}"#
        ))
        .bind(id)
        .bind(req.title)
        .bind(req.date)
        .bind(req.location)
        .bind(req.description)
        .bind(req.testimonial)
        .bind(req.donation)
        .bind(req.political_update)
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    async fn delete_event(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- BLOG POSTS ---

    /// list_blog_posts
    ///
    /// Implements flexible filtering and search using QueryBuilder for safe
    /// parameterization. The search term matches the title, the summary, or
    /// any element of the tags array, case-insensitively.
    async fn list_blog_posts(
        &self,
        blog_type: Option<String>,
        location: Option<String>,
        search: Option<String>,
    ) -> Result<Vec<BlogPost>, RepositoryError> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {BLOG_COLUMNS} FROM blog_posts WHERE 1=1"));

        if let Some(t) = blog_type {
            builder.push(" AND type = ");
            builder.push_bind(t);
        }

        if let Some(l) = location {
            builder.push(" AND location = ");
            builder.push_bind(l);
        }

        if let Some(s) = search {
            let search_pattern = format!("%{}%", s);
            builder.push(" AND (title ILIKE ");
            builder.push_bind(search_pattern.clone());
            builder.push(" OR summary ILIKE ");
            builder.push_bind(search_pattern.clone());
            builder.push(" OR EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE tag ILIKE ");
            builder.push_bind(search_pattern);
            builder.push("))");
        }

        builder.push(" ORDER BY date DESC, created_at DESC");

        let posts = builder
            .build_query_as::<BlogPost>()
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn recent_blog_posts(&self, limit: i64) -> Result<Vec<BlogPost>, RepositoryError> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts ORDER BY date DESC, created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn get_blog_post(&self, id: Uuid) -> Result<Option<BlogPost>, RepositoryError> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn create_blog_post(
        &self,
        req: CreateBlogPostRequest,
    ) -> Result<BlogPost, RepositoryError> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            r#"INSERT INTO blog_posts (id, type, title, date, location, summary, image, tags, content, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
               RETURNING {BLOG_COLUMNS}"#
        ))
        .bind(Uuid::new_v4())
        .bind(req.blog_type)
        .bind(req.title)
        .bind(req.date)
        .bind(req.location)
        .bind(req.summary)
        .bind(req.image)
        .bind(req.tags)
        .bind(req.content)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn update_blog_post(
        &self,
        id: Uuid,
        req: UpdateBlogPostRequest,
    ) -> Result<Option<BlogPost>, RepositoryError> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            r#"UPDATE blog_posts
               SET type = COALESCE($2, type),
                   title = COALESCE($3, title),
                   date = COALESCE($4, date),
                   location = COALESCE($5, location),
                   summary = COALESCE($6, summary),
                   image = COALESCE($7, image),
                   tags = COALESCE($8, tags),
                   content = COALESCE($9, content),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {BLOG_COLUMNS}"#
        ))
        .bind(id)
        .bind(req.blog_type)
        .bind(req.title)
        .bind(req.date)
        .bind(req.location)
        .bind(req.summary)
        .bind(req.image)
        .bind(req.tags)
        .bind(req.content)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn delete_blog_post(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn blog_stats(&self) -> Result<BlogStats, RepositoryError> {
        let total_posts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(&self.pool)
            .await?;
        let by_type = sqlx::query_as::<_, BlogCountBucket>(
            "SELECT type AS label, COUNT(*) AS count FROM blog_posts GROUP BY type ORDER BY count DESC, label ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        let by_location = sqlx::query_as::<_, BlogCountBucket>(
            "SELECT location AS label, COUNT(*) AS count FROM blog_posts GROUP BY location ORDER BY count DESC, label ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(BlogStats {
            total_posts,
            by_type,
            by_location,
        })
    }

    // --- SLIDES ---

    async fn list_slides(&self) -> Result<Vec<Slide>, RepositoryError> {
        let slides = sqlx::query_as::<_, Slide>(&format!(
            "SELECT {SLIDE_COLUMNS} FROM slides ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(slides)
    }

    async fn get_slide(&self, id: Uuid) -> Result<Option<Slide>, RepositoryError> {
        let slide = sqlx::query_as::<_, Slide>(&format!(
            "SELECT {SLIDE_COLUMNS} FROM slides WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(slide)
    }

    async fn create_slide(&self, req: CreateSlideRequest) -> Result<Slide, RepositoryError> {
        let slide = sqlx::query_as::<_, Slide>(&format!(
            r#"INSERT INTO slides (id, src, title, description, created_at, updated_at)
               VALUES ($1, $2, $3, $4, NOW(), NOW())
               RETURNING {SLIDE_COLUMNS}"#
        ))
        .bind(Uuid::new_v4())
        .bind(req.src)
        .bind(req.title)
        .bind(req.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(slide)
    }

    async fn update_slide(
        &self,
        id: Uuid,
        req: UpdateSlideRequest,
    ) -> Result<Option<Slide>, RepositoryError> {
        let slide = sqlx::query_as::<_, Slide>(&format!(
            r#"UPDATE slides
               SET src = COALESCE($2, src),
                   title = COALESCE($3, title),
                   description = COALESCE($4, description),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {SLIDE_COLUMNS}"#
        ))
        .bind(id)
        .bind(req.src)
        .bind(req.title)
        .bind(req.description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(slide)
    }

    async fn delete_slide(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM slides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// --- In-Memory Implementation (For Tests) ---

/// MemoryRepository
///
/// An in-memory implementation of `Repository` used exclusively for unit and
/// integration testing. This allows handler and auth-flow tests to run
/// without a network connection to Postgres, isolating the test boundary.
///
/// A single `Mutex` guards the whole store, so `create_admin`'s
/// check-and-insert is atomic and concurrent registrations of the same
/// username resolve exactly like the database's unique constraint: one
/// winner, one `Duplicate`.
#[derive(Default)]
pub struct MemoryRepository {
    store: Mutex<MemoryStore>,
}

#[derive(Default)]
struct MemoryStore {
    admins: HashMap<Uuid, AdminUser>,
    news: HashMap<Uuid, News>,
    events: HashMap<Uuid, Event>,
    blog_posts: HashMap<Uuid, BlogPost>,
    slides: HashMap<Uuid, Slide>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_search(post: &BlogPost, pattern: &str) -> bool {
    let needle = pattern.to_lowercase();
    post.title.to_lowercase().contains(&needle)
        || post.summary.to_lowercase().contains(&needle)
        || post
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn find_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .admins
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_admin(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUser, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        if store.admins.values().any(|u| u.username == username) {
            return Err(RepositoryError::Duplicate(format!(
                "username '{username}' already exists"
            )));
        }
        let user = AdminUser {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        store.admins.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_admin(&self, id: Uuid) -> Result<Option<AdminUser>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.admins.get(&id).cloned())
    }

    async fn list_news(&self) -> Result<Vec<News>, RepositoryError> {
        let store = self.store.lock().unwrap();
        let mut news: Vec<News> = store.news.values().cloned().collect();
        news.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(news)
    }

    async fn get_news(&self, id: Uuid) -> Result<Option<News>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.news.get(&id).cloned())
    }

    async fn create_news(&self, req: CreateNewsRequest) -> Result<News, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();
        let news = News {
            id: Uuid::new_v4(),
            title: req.title,
            date: req.date,
            image: req.image,
            summary: req.summary,
            full_content: req.full_content,
            created_at: now,
            updated_at: now,
        };
        store.news.insert(news.id, news.clone());
        Ok(news)
    }

    async fn update_news(
        &self,
        id: Uuid,
        req: UpdateNewsRequest,
    ) -> Result<Option<News>, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        Ok(store.news.get_mut(&id).map(|news| {
            if let Some(title) = req.title {
                news.title = title;
            }
            if let Some(date) = req.date {
                news.date = date;
            }
            if let Some(image) = req.image {
                news.image = image;
            }
            if let Some(summary) = req.summary {
                news.summary = summary;
            }
            if let Some(full_content) = req.full_content {
                news.full_content = full_content;
            }
            news.updated_at = Utc::now();
            news.clone()
        }))
    }

    async fn delete_news(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        Ok(store.news.remove(&id).is_some())
    }

    async fn list_events(&self) -> Result<Vec<Event>, RepositoryError> {
        let store = self.store.lock().unwrap();
        let mut events: Vec<Event> = store.events.values().cloned().collect();
        events.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(events)
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.events.get(&id).cloned())
    }

    async fn create_event(&self, req: CreateEventRequest) -> Result<Event, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title: req.title,
            date: req.date,
            location: req.location,
            description: req.description,
            testimonial: req.testimonial,
            donation: req.donation,
            political_update: req.political_update,
            created_at: now,
            updated_at: now,
        };
        store.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn update_event(
        &self,
        id: Uuid,
        req: UpdateEventRequest,
    ) -> Result<Option<Event>, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        Ok(store.events.get_mut(&id).map(|event| {
            if let Some(title) = req.title {
                event.title = title;
            }
            if let Some(date) = req.date {
                event.date = date;
            }
            if let Some(location) = req.location {
                event.location = location;
            }
            if let Some(description) = req.description {
                event.description = description;
            }
            if let Some(testimonial) = req.testimonial {
                event.testimonial = testimonial;
            }
            if let Some(donation) = req.donation {
                event.donation = donation;
            }
            if let Some(political_update) = req.political_update {
                event.political_update = political_update;
            }
            event.updated_at = Utc::now();
            event.clone()
        }))
    }

    async fn delete_event(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        Ok(store.events.remove(&id).is_some())
    }

    async fn list_blog_posts(
        &self,
        blog_type: Option<String>,
        location: Option<String>,
        search: Option<String>,
    ) -> Result<Vec<BlogPost>, RepositoryError> {
        let store = self.store.lock().unwrap();
        let mut posts: Vec<BlogPost> = store
            .blog_posts
            .values()
            .filter(|p| blog_type.as_ref().is_none_or(|t| &p.blog_type == t))
            .filter(|p| location.as_ref().is_none_or(|l| &p.location == l))
            .filter(|p| search.as_ref().is_none_or(|s| matches_search(p, s)))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(posts)
    }

    async fn recent_blog_posts(&self, limit: i64) -> Result<Vec<BlogPost>, RepositoryError> {
        let mut posts = self.list_blog_posts(None, None, None).await?;
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn get_blog_post(&self, id: Uuid) -> Result<Option<BlogPost>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.blog_posts.get(&id).cloned())
    }

    async fn create_blog_post(
        &self,
        req: CreateBlogPostRequest,
    ) -> Result<BlogPost, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();
        let post = BlogPost {
            id: Uuid::new_v4(),
            blog_type: req.blog_type,
            title: req.title,
            date: req.date,
            location: req.location,
            summary: req.summary,
            image: req.image,
            tags: req.tags,
            content: req.content,
            created_at: now,
            updated_at: now,
        };
        store.blog_posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_blog_post(
        &self,
        id: Uuid,
        req: UpdateBlogPostRequest,
    ) -> Result<Option<BlogPost>, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        Ok(store.blog_posts.get_mut(&id).map(|post| {
            if let Some(blog_type) = req.blog_type {
                post.blog_type = blog_type;
            }
            if let Some(title) = req.title {
                post.title = title;
            }
            if let Some(date) = req.date {
                post.date = date;
            }
            if let Some(location) = req.location {
                post.location = location;
            }
            if let Some(summary) = req.summary {
                post.summary = summary;
            }
            if let Some(image) = req.image {
                post.image = image;
            }
            if let Some(tags) = req.tags {
                post.tags = tags;
            }
            if let Some(content) = req.content {
                post.content = content;
            }
            post.updated_at = Utc::now();
            post.clone()
        }))
    }

    async fn delete_blog_post(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        Ok(store.blog_posts.remove(&id).is_some())
    }

    async fn blog_stats(&self) -> Result<BlogStats, RepositoryError> {
        let store = self.store.lock().unwrap();
        let total_posts = store.blog_posts.len() as i64;

        let mut type_counts: HashMap<String, i64> = HashMap::new();
        let mut location_counts: HashMap<String, i64> = HashMap::new();
        for post in store.blog_posts.values() {
            *type_counts.entry(post.blog_type.clone()).or_default() += 1;
            *location_counts.entry(post.location.clone()).or_default() += 1;
        }

        let into_buckets = |counts: HashMap<String, i64>| {
            let mut buckets: Vec<BlogCountBucket> = counts
                .into_iter()
                .map(|(label, count)| BlogCountBucket { label, count })
                .collect();
            buckets.sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));
            buckets
        };

        Ok(BlogStats {
            total_posts,
            by_type: into_buckets(type_counts),
            by_location: into_buckets(location_counts),
        })
    }

    async fn list_slides(&self) -> Result<Vec<Slide>, RepositoryError> {
        let store = self.store.lock().unwrap();
        let mut slides: Vec<Slide> = store.slides.values().cloned().collect();
        slides.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(slides)
    }

    async fn get_slide(&self, id: Uuid) -> Result<Option<Slide>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.slides.get(&id).cloned())
    }

    async fn create_slide(&self, req: CreateSlideRequest) -> Result<Slide, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();
        let slide = Slide {
            id: Uuid::new_v4(),
            src: req.src,
            title: req.title,
            description: req.description,
            created_at: now,
            updated_at: now,
        };
        store.slides.insert(slide.id, slide.clone());
        Ok(slide)
    }

    async fn update_slide(
        &self,
        id: Uuid,
        req: UpdateSlideRequest,
    ) -> Result<Option<Slide>, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        Ok(store.slides.get_mut(&id).map(|slide| {
            if let Some(src) = req.src {
                slide.src = src;
            }
            if let Some(title) = req.title {
                slide.title = title;
            }
            if let Some(description) = req.description {
                slide.description = description;
            }
            slide.updated_at = Utc::now();
            slide.clone()
        }))
    }

    async fn delete_slide(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        Ok(store.slides.remove(&id).is_some())
    }
}
