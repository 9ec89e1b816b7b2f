use chrono::NaiveDate;
use cms_portal::{
    models::{CreateBlogPostRequest, CreateNewsRequest, UpdateNewsRequest},
    repository::{MemoryRepository, Repository, RepositoryError},
};
use std::sync::Arc;
use uuid::Uuid;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// --- Admin Accounts ---

#[tokio::test]
async fn test_create_admin_then_find_by_username() {
    let repo = MemoryRepository::new();

    let created = repo.create_admin("alice", "hash-value").await.unwrap();
    let found = repo
        .find_admin_by_username("alice")
        .await
        .unwrap()
        .expect("account must be findable after creation");

    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "hash-value");

    let by_id = repo.get_admin(created.id).await.unwrap();
    assert!(by_id.is_some());
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected_and_store_unchanged() {
    let repo = MemoryRepository::new();

    let first = repo.create_admin("bob", "hash-one").await.unwrap();
    let second = repo.create_admin("bob", "hash-two").await;

    assert!(matches!(second, Err(RepositoryError::Duplicate(_))));

    // The original record is untouched by the failed attempt.
    let found = repo.find_admin_by_username("bob").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert_eq!(found.password_hash, "hash-one");
}

#[tokio::test]
async fn test_concurrent_duplicate_registration_has_single_winner() {
    // Two concurrent registrations of the same username race at the store
    // level: exactly one succeeds, the other sees the uniqueness violation.
    let repo = Arc::new(MemoryRepository::new());

    let (a, b) = {
        let repo_a = repo.clone();
        let repo_b = repo.clone();
        tokio::join!(
            tokio::spawn(async move { repo_a.create_admin("race", "hash-a").await }),
            tokio::spawn(async move { repo_b.create_admin("race", "hash-b").await }),
        )
    };
    let results = [a.unwrap(), b.unwrap()];

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let losers = results
        .iter()
        .filter(|r| matches!(r, Err(RepositoryError::Duplicate(_))))
        .count();
    assert_eq!(winners, 1);
    assert_eq!(losers, 1);

    // No duplicate records exist afterwards.
    assert!(repo.find_admin_by_username("race").await.unwrap().is_some());
}

// --- Entity Semantics ---

#[tokio::test]
async fn test_update_missing_record_returns_none() {
    let repo = MemoryRepository::new();

    let result = repo
        .update_news(
            Uuid::new_v4(),
            UpdateNewsRequest {
                title: Some("nope".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(result.is_none());

    assert!(!repo.delete_news(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_news_partial_update_keeps_unset_fields() {
    let repo = MemoryRepository::new();

    let created = repo
        .create_news(CreateNewsRequest {
            title: "Original".to_string(),
            date: date("2026-01-01"),
            image: "img.jpg".to_string(),
            summary: "Summary".to_string(),
            full_content: "Content".to_string(),
        })
        .await
        .unwrap();

    let updated = repo
        .update_news(
            created.id,
            UpdateNewsRequest {
                summary: Some("Revised".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.summary, "Revised");
    assert_eq!(updated.title, "Original");
    assert_eq!(updated.date, created.date);
    assert!(updated.updated_at >= created.updated_at);
}

fn blog(blog_type: &str, location: &str, title: &str, tags: &[&str], d: &str) -> CreateBlogPostRequest {
    CreateBlogPostRequest {
        blog_type: blog_type.to_string(),
        title: title.to_string(),
        date: date(d),
        location: location.to_string(),
        summary: "summary".to_string(),
        image: "img.jpg".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        content: "content".to_string(),
    }
}

#[tokio::test]
async fn test_blog_listing_filters_and_order() {
    let repo = MemoryRepository::new();
    repo.create_blog_post(blog("analysis", "Dublin", "Old", &["housing"], "2025-11-01"))
        .await
        .unwrap();
    repo.create_blog_post(blog("analysis", "Cork", "New", &["transport"], "2026-02-01"))
        .await
        .unwrap();
    repo.create_blog_post(blog("opinion", "Dublin", "Letter", &["community"], "2026-01-01"))
        .await
        .unwrap();

    // Unfiltered: newest date first.
    let all = repo.list_blog_posts(None, None, None).await.unwrap();
    assert_eq!(
        all.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
        vec!["New", "Letter", "Old"]
    );

    // Type and location filters are exact matches.
    let analysis = repo
        .list_blog_posts(Some("analysis".to_string()), None, None)
        .await
        .unwrap();
    assert_eq!(analysis.len(), 2);

    let dublin = repo
        .list_blog_posts(None, Some("Dublin".to_string()), None)
        .await
        .unwrap();
    assert_eq!(dublin.len(), 2);

    // Search is case-insensitive and covers tags.
    let hits = repo
        .list_blog_posts(None, None, Some("TRANSPORT".to_string()))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "New");

    let recent = repo.recent_blog_posts(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].title, "New");
}

#[tokio::test]
async fn test_blog_stats_buckets() {
    let repo = MemoryRepository::new();
    repo.create_blog_post(blog("analysis", "Dublin", "A", &[], "2026-01-01"))
        .await
        .unwrap();
    repo.create_blog_post(blog("analysis", "Cork", "B", &[], "2026-01-02"))
        .await
        .unwrap();
    repo.create_blog_post(blog("opinion", "Dublin", "C", &[], "2026-01-03"))
        .await
        .unwrap();

    let stats = repo.blog_stats().await.unwrap();
    assert_eq!(stats.total_posts, 3);

    // Buckets are ordered most-populated first.
    assert_eq!(stats.by_type[0].label, "analysis");
    assert_eq!(stats.by_type[0].count, 2);
    assert_eq!(stats.by_location[0].label, "Dublin");
    assert_eq!(stats.by_location[0].count, 2);
}
