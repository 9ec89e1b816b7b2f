use cms_portal::models::{
    AdminUser, AdminUserInfo, BlogPost, UpdateNewsRequest, validate_password,
};

// --- Password Policy ---

#[test]
fn test_password_policy_accepts_compliant_values() {
    for ok in ["secret123", "a1b2c3d4", "longpassword9", "0x0x0x0abc"] {
        assert!(validate_password(ok).is_ok(), "{:?} must pass", ok);
    }
}

#[test]
fn test_password_policy_rejects_violations() {
    // Too short, digits only, letters only.
    for weak in ["short1", "alllettersnodigit", "12345678", "a1b2c3"] {
        assert!(validate_password(weak).is_err(), "{:?} must fail", weak);
    }
}

#[test]
fn test_password_policy_failure_creates_readable_message() {
    let message = validate_password("weak").unwrap_err();
    assert!(message.contains("at least 8 characters"));
}

// --- Serialization Contracts ---

#[test]
fn test_blog_post_json_uses_type_key() {
    // This tests the dual rename for the 'type' field: Rust calls it
    // `blog_type`, the wire and the SQL column both say `type`.
    let post = BlogPost {
        blog_type: "analysis".to_string(),
        ..Default::default()
    };

    let json_output = serde_json::to_string(&post).unwrap();
    assert!(
        json_output.contains(r#""type":"analysis""#),
        "JSON output must use the 'type' key"
    );
    assert!(!json_output.contains("blog_type"));

    // And the rename round-trips on input.
    let parsed: BlogPost = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed.blog_type, "analysis");
}

#[test]
fn test_update_request_optionality() {
    // Confirms the structure supports partial updates (all fields Option<T>,
    // None fields omitted from the payload).
    let partial_update = UpdateNewsRequest {
        title: Some("New Title Only".to_string()),
        ..Default::default()
    };

    let json_output = serde_json::to_string(&partial_update).unwrap();
    assert!(json_output.contains(r#""title":"New Title Only""#));
    assert!(!json_output.contains("summary"));
    assert!(!json_output.contains("full_content"));
}

#[test]
fn test_admin_projection_excludes_secret() {
    let account = AdminUser {
        username: "alice".to_string(),
        password_hash: "$2b$12$something".to_string(),
        ..Default::default()
    };

    let info: AdminUserInfo = account.into();
    let json_output = serde_json::to_string(&info).unwrap();
    assert!(json_output.contains("alice"));
    assert!(!json_output.contains("password"));
    assert!(!json_output.contains("$2b$"));
}
