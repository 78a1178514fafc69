mod common;

use auth::Claims;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;
use todo_service::domain::todo::models::TodoId;

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["username"], "nicola");
    assert_eq!(body["user"]["email"], "nicola@example.com");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("password").is_none());

    let claims = app
        .jwt_handler
        .verify(body["token"].as_str().unwrap())
        .expect("Issued token verifies");
    assert_eq!(claims.user_id, body["user"]["id"].as_str().unwrap());
    assert_eq!(claims.email, "nicola@example.com");
    let expected_exp = Utc::now().timestamp() + 24 * 60 * 60;
    assert!((claims.exp - expected_exp).abs() <= 2);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;
    app.register("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "someone_else",
            "email": "nicola@example.com",
            "password": "another"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "User already exists" }));
    assert_eq!(app.users.len().await, 1);
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid request body" }));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    let registered = app.register("u", "x@example.com", "right").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "x@example.com", "password": "right" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], registered.id.as_str());
    assert_eq!(body["user"]["username"], "u");

    let claims = app.jwt_handler.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.user_id, registered.id);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.register("u", "x@example.com", "right").await;

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({ "email": "x@example.com", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "right" }))
        .send()
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_email: Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password, json!({ "error": "Invalid credentials" }));
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_profile_requires_token() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/auth/profile").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "No authorization header" }));
}

#[tokio::test]
async fn test_profile_returns_public_view() {
    let app = TestApp::spawn().await;
    let registered = app.register("u", "x@example.com", "right").await;

    let response = app
        .get_authenticated("/api/auth/profile", &registered.token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "user": {
                "id": registered.id,
                "username": "u",
                "email": "x@example.com"
            }
        })
    );
}

#[tokio::test]
async fn test_profile_for_unknown_user_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app
        .jwt_handler
        .issue(uuid::Uuid::new_v4(), "ghost@example.com", chrono::Duration::hours(1))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/profile", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::spawn().await;
    let registered = app.register("u", "x@example.com", "right").await;
    let expired = app
        .jwt_handler
        .encode(&Claims::new(
            &registered.id,
            "x@example.com",
            Utc::now().timestamp() - 1,
        ))
        .unwrap();

    let response = app
        .get_authenticated("/api/todos/", &expired)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid token" }));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::spawn().await;
    let forged = auth::JwtHandler::new(b"another-secret-that-is-32-bytes-long!")
        .issue(uuid::Uuid::new_v4(), "x@example.com", chrono::Duration::hours(1))
        .unwrap();

    let response = app
        .get_authenticated("/api/todos/", &forged)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_round_trip() {
    let app = TestApp::spawn().await;
    let user = app.register("u", "x@example.com", "right").await;

    let created = app
        .create_todo(
            &user.token,
            json!({
                "title": "Write report",
                "description": "Quarterly numbers",
                "priority": "high"
            }),
        )
        .await;

    assert_eq!(created["title"], "Write report");
    assert_eq!(created["completed"], false);
    assert_eq!(created["user_id"], user.id.as_str());
    assert!(created["id"].is_string());
    assert_eq!(created["created_at"], created["updated_at"]);

    let todos = app.list_todos(&user.token).await;
    assert_eq!(todos.len(), 1);
    let listed = &todos[0];
    assert_eq!(listed["id"], created["id"]);
    assert_eq!(listed["title"], "Write report");
    assert_eq!(listed["description"], "Quarterly numbers");
    assert_eq!(listed["priority"], "high");
    assert_eq!(listed["completed"], false);
    assert_eq!(listed["user_id"], user.id.as_str());
}

#[tokio::test]
async fn test_create_stores_empty_fields_verbatim() {
    let app = TestApp::spawn().await;
    let user = app.register("u", "x@example.com", "right").await;

    let created = app
        .create_todo(
            &user.token,
            json!({ "title": "", "description": "", "priority": "" }),
        )
        .await;

    assert_eq!(created["title"], "");
    assert_eq!(created["description"], "");
    assert_eq!(created["priority"], "");

    let todos = app.list_todos(&user.token).await;
    assert_eq!(todos[0]["title"], "");
    assert_eq!(todos[0]["priority"], "");
}

#[tokio::test]
async fn test_create_without_trailing_slash() {
    let app = TestApp::spawn().await;
    let user = app.register("u", "x@example.com", "right").await;

    let response = app
        .post_authenticated("/api/todos", &user.token)
        .json(&json!({ "title": "t", "description": "d", "priority": "low" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Todo created successfully");
}

#[tokio::test]
async fn test_list_is_empty_array_without_todos() {
    let app = TestApp::spawn().await;
    let user = app.register("u", "x@example.com", "right").await;

    let response = app
        .get_authenticated("/api/todos/", &user.token)
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "todos": [] }));
}

#[tokio::test]
async fn test_list_is_scoped_to_owner() {
    let app = TestApp::spawn().await;
    let alice = app.register("alice", "alice@example.com", "pw").await;
    let bob = app.register("bob", "bob@example.com", "pw").await;

    let created = app
        .create_todo(
            &alice.token,
            json!({ "title": "alice's", "description": "", "priority": "medium" }),
        )
        .await;

    let alice_todos = app.list_todos(&alice.token).await;
    let bob_todos = app.list_todos(&bob.token).await;

    assert!(alice_todos.iter().any(|todo| todo["id"] == created["id"]));
    assert!(bob_todos.iter().all(|todo| todo["id"] != created["id"]));
    assert!(bob_todos.is_empty());
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let app = TestApp::spawn().await;
    let user = app.register("u", "x@example.com", "right").await;
    let created = app
        .create_todo(
            &user.token,
            json!({ "title": "old", "description": "old", "priority": "low" }),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .put_authenticated(&format!("/api/todos/{}", id), &user.token)
        .json(&json!({
            "title": "new",
            "description": "new description",
            "priority": "high",
            "completed": true
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Todo updated successfully" }));

    let todos = app.list_todos(&user.token).await;
    assert_eq!(todos[0]["title"], "new");
    assert_eq!(todos[0]["description"], "new description");
    assert_eq!(todos[0]["priority"], "high");
    assert_eq!(todos[0]["completed"], true);
    assert_eq!(todos[0]["created_at"], created["created_at"]);
}

/// Updating another user's todo reports success but changes nothing.
#[tokio::test]
async fn test_update_foreign_todo_is_silent_no_op() {
    let app = TestApp::spawn().await;
    let owner = app.register("owner", "owner@example.com", "pw").await;
    let intruder = app.register("intruder", "intruder@example.com", "pw").await;
    let created = app
        .create_todo(
            &owner.token,
            json!({ "title": "mine", "description": "keep", "priority": "low" }),
        )
        .await;
    let id = created["id"].as_str().unwrap();
    let before = app
        .todos
        .get(&TodoId::from_string(id).unwrap())
        .await
        .unwrap();

    let response = app
        .put_authenticated(&format!("/api/todos/{}", id), &intruder.token)
        .json(&json!({
            "title": "hijacked",
            "description": "",
            "priority": "high",
            "completed": true
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let after = app
        .todos
        .get(&TodoId::from_string(id).unwrap())
        .await
        .unwrap();
    assert_eq!(before, after);
}

/// Deleting another user's todo reports success but the todo survives.
#[tokio::test]
async fn test_delete_foreign_todo_is_silent_no_op() {
    let app = TestApp::spawn().await;
    let owner = app.register("owner", "owner@example.com", "pw").await;
    let intruder = app.register("intruder", "intruder@example.com", "pw").await;
    let created = app
        .create_todo(
            &owner.token,
            json!({ "title": "mine", "description": "", "priority": "low" }),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .delete_authenticated(&format!("/api/todos/{}", id), &intruder.token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Todo deleted successfully" }));
    assert_eq!(app.list_todos(&owner.token).await.len(), 1);
}

#[tokio::test]
async fn test_delete_own_todo() {
    let app = TestApp::spawn().await;
    let user = app.register("u", "x@example.com", "right").await;
    let created = app
        .create_todo(
            &user.token,
            json!({ "title": "done", "description": "", "priority": "low" }),
        )
        .await;

    let response = app
        .delete_authenticated(
            &format!("/api/todos/{}", created["id"].as_str().unwrap()),
            &user.token,
        )
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.list_todos(&user.token).await.is_empty());
}

#[tokio::test]
async fn test_nonexistent_todo_id_still_succeeds() {
    let app = TestApp::spawn().await;
    let user = app.register("u", "x@example.com", "right").await;
    let missing = uuid::Uuid::new_v4();

    let update = app
        .put_authenticated(&format!("/api/todos/{}", missing), &user.token)
        .json(&json!({ "title": "t", "description": "d", "priority": "p", "completed": false }))
        .send()
        .await
        .unwrap();
    let delete = app
        .delete_authenticated(&format!("/api/todos/{}", missing), &user.token)
        .send()
        .await
        .unwrap();

    assert_eq!(update.status(), StatusCode::OK);
    assert_eq!(delete.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_todo_id_is_bad_request() {
    let app = TestApp::spawn().await;
    let user = app.register("u", "x@example.com", "right").await;

    let response = app
        .delete_authenticated("/api/todos/not-an-id", &user.token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid todo ID" }));
}

#[tokio::test]
async fn test_reset_password_is_not_implemented() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/reset-password")
        .json(&json!({ "email": "x@example.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

/// Ownership comes from the token alone; the owner need not have an account.
#[tokio::test]
async fn test_create_for_token_without_account() {
    let app = TestApp::spawn().await;
    let owner = uuid::Uuid::new_v4();
    let token = app
        .jwt_handler
        .issue(owner, "ghost@example.com", chrono::Duration::hours(1))
        .unwrap();

    let created = app
        .create_todo(
            &token,
            json!({ "title": "orphan", "description": "", "priority": "low" }),
        )
        .await;

    assert_eq!(created["user_id"], owner.to_string());
    assert_eq!(app.list_todos(&token).await.len(), 1);
}

#[tokio::test]
async fn test_profile_with_malformed_subject_is_bad_request() {
    let app = TestApp::spawn().await;
    let token = app
        .jwt_handler
        .issue("not-a-uuid", "x@example.com", chrono::Duration::hours(1))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/profile", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid user ID" }));
}
