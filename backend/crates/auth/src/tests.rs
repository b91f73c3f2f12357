//! Router-level tests for the auth crate, run against the in-memory store

#[cfg(test)]
mod support {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::infra::memory::InMemoryAuthRepository;
    use crate::presentation::{AuthAppState, auth_router};

    pub fn app_with(config: AuthConfig) -> (Router, InMemoryAuthRepository) {
        let repo = InMemoryAuthRepository::new();
        let router = auth_router(AuthAppState::new(repo.clone(), config));
        (router, repo)
    }

    pub fn app() -> Router {
        app_with(AuthConfig::with_random_secret()).0
    }

    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn signup(app: &Router, body: Value) -> (StatusCode, Value) {
        send(app, "POST", "/signup", None, Some(body)).await
    }
}

#[cfg(test)]
mod signup_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::application::config::AuthConfig;

    #[tokio::test]
    async fn test_signup_student() {
        let app = app();
        let (status, body) = signup(
            &app,
            json!({"name": "Alice", "email": "Alice@X.io", "password": "pw123456"}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["user"]["email"], "alice@x.io");
        assert_eq!(body["user"]["role"], "Student");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(body["user"].get("password").is_none());
        assert!(body["user"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_signup_teacher_and_unknown_role() {
        let app = app();
        let (_, body) = signup(
            &app,
            json!({"name": "Tina", "email": "t@x.io", "password": "pw123456", "role": "Teacher"}),
        )
        .await;
        assert_eq!(body["user"]["role"], "Teacher");

        let (status, body) = signup(
            &app,
            json!({"name": "Mal", "email": "m@x.io", "password": "pw123456", "role": "Admin"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["role"], "Student");
    }

    #[tokio::test]
    async fn test_signup_non_string_role_defaults_to_student() {
        let app = app();
        for (i, role) in [json!(5), json!(["Teacher"]), json!({"name": "Teacher"}), json!(null)]
            .into_iter()
            .enumerate()
        {
            let (status, body) = signup(
                &app,
                json!({
                    "name": "Alice",
                    "email": format!("alice{i}@x.io"),
                    "password": "pw123456",
                    "role": role
                }),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED, "{body}");
            assert_eq!(body["user"]["role"], "Student");
        }
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let app = app();
        for body in [
            json!({"email": "a@x.io", "password": "pw123456"}),
            json!({"name": "A", "password": "pw123456"}),
            json!({"name": "A", "email": "a@x.io"}),
            json!({"name": "", "email": "a@x.io", "password": "pw123456"}),
            json!({}),
        ] {
            let (status, resp) = signup(&app, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(resp["success"], false);
            assert_eq!(resp["message"], "All fields are required");
        }
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_is_case_insensitive() {
        let app = app();
        let first = json!({"name": "A", "email": "dup@x.io", "password": "pw123456"});
        assert_eq!(signup(&app, first).await.0, StatusCode::CREATED);

        let again = json!({"name": "B", "email": "DUP@x.io", "password": "other"});
        let (status, body) = signup(&app, again).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Email already in use");
    }

    #[tokio::test]
    async fn test_signup_invalid_email() {
        let app = app();
        let (status, body) =
            signup(&app, json!({"name": "A", "email": "nope", "password": "pw123456"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_teacher_signup_can_be_disabled() {
        let config = AuthConfig {
            allow_teacher_signup: false,
            ..AuthConfig::with_random_secret()
        };
        let (app, _) = app_with(config);

        let (status, body) = signup(
            &app,
            json!({"name": "T", "email": "t@x.io", "password": "pw123456", "role": "Teacher"}),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Teacher accounts cannot be self-registered");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let app = app();
        let (status, body) = signup(&app, json!({"name": 42})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body");
    }
}

#[cfg(test)]
mod login_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_success_and_failures_share_message() {
        let app = app();
        signup(
            &app,
            json!({"name": "Alice", "email": "alice@x.io", "password": "pw123456"}),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            "/login",
            None,
            Some(json!({"email": " ALICE@x.io", "password": "pw123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["user"]["name"], "Alice");

        let (wrong_pw_status, wrong_pw) = send(
            &app,
            "POST",
            "/login",
            None,
            Some(json!({"email": "alice@x.io", "password": "wrong"})),
        )
        .await;
        let (unknown_status, unknown) = send(
            &app,
            "POST",
            "/login",
            None,
            Some(json!({"email": "nobody@x.io", "password": "pw123456"})),
        )
        .await;

        assert_eq!(wrong_pw_status, StatusCode::BAD_REQUEST);
        assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
        assert_eq!(wrong_pw["message"], "Invalid credentials");
        assert_eq!(wrong_pw, unknown);
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let app = app();
        let (status, body) =
            send(&app, "POST", "/login", None, Some(json!({"email": "a@x.io"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All fields are required");
    }
}

#[cfg(test)]
mod guard_tests {
    use super::support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::application::config::AuthConfig;
    use crate::domain::value_object::UserId;

    async fn token_for(app: &axum::Router, email: &str, role: &str) -> (String, UserId) {
        let (_, body) = signup(
            app,
            json!({"name": "U", "email": email, "password": "pw123456", "role": role}),
        )
        .await;
        let token = body["token"].as_str().unwrap().to_string();
        let id = UserId::parse_str(body["user"]["id"].as_str().unwrap()).unwrap();
        (token, id)
    }

    #[tokio::test]
    async fn test_role_gates() {
        let app = app();
        let (student, _) = token_for(&app, "s@x.io", "Student").await;
        let (teacher, _) = token_for(&app, "t@x.io", "Teacher").await;

        let (status, body) = send(&app, "GET", "/user-auth", Some(&student), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);

        let (status, body) = send(&app, "GET", "/admin-auth", Some(&student), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Access denied. Teacher role required.");

        let (status, _) = send(&app, "GET", "/admin-auth", Some(&teacher), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", "/user-auth", Some(&teacher), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Access denied. Student role required.");
    }

    #[tokio::test]
    async fn test_missing_and_invalid_tokens() {
        let app = app();

        let (status, body) = send(&app, "GET", "/user-auth", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Access token required");

        let (status, body) = send(&app, "GET", "/user-auth", Some("abc"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let (issuer, _) = app_with(AuthConfig::with_random_secret());
        let (token, _) = token_for(&issuer, "s@x.io", "Student").await;

        let other = app();
        let (status, body) = send(&other, "GET", "/user-auth", Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_deleted_user_rejected() {
        let (app, repo) = app_with(AuthConfig::with_random_secret());
        let (token, id) = token_for(&app, "gone@x.io", "Student").await;

        assert!(repo.remove(&id).await);

        let (status, body) = send(&app, "GET", "/user-auth", Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "User not found");
    }
}
