use std::sync::Arc;
use actix_web::http::{header, StatusCode};
use actix_web::{middleware, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use user_api_backend::config::ApiConfig;
use user_api_backend::core::errors::{AppError, AppResult};
use user_api_backend::core::state::AppState;
use user_api_backend::domain::entities::users::User;
use user_api_backend::repositories::users::{MemoryUserStore, UserStore};
use user_api_backend::routes::configure_all_routes;
use user_api_backend::services::users::{BcryptPasswordEncoder, UserService};

const ALICE: &str = r#"{"username":"alice","email":"alice@example.com","plainPassword":"secret123"}"#;

fn state_with(store: Arc<dyn UserStore>, api: ApiConfig) -> AppState {
    AppState::new(
        UserService::new(store, Arc::new(BcryptPasswordEncoder::new(4))),
        api,
    )
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(middleware::NormalizePath::trim())
                .app_data(web::Data::new($state))
                .configure(configure_all_routes),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let response = test::call_service(&$app, $req.to_request()).await;
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = test::read_body(response).await;
        let json: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, location, json)
    }};
}

fn post(body: &str) -> test::TestRequest {
    post_to("/api/users", body)
}

fn post_to(uri: &str, body: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(body.to_string())
}

fn put(id: u64, body: &str) -> test::TestRequest {
    test::TestRequest::put()
        .uri(&format!("/api/users/{}", id))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(body.to_string())
}

fn get(uri: &str) -> test::TestRequest {
    test::TestRequest::get().uri(uri)
}

fn delete(uri: &str) -> test::TestRequest {
    test::TestRequest::delete().uri(uri)
}

#[actix_web::test]
async fn test_create_user_returns_location() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, location, body) = send!(app, post(ALICE));

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/api/users/1"));
    assert_eq!(body, json!({ "success": "User added successfully" }));
}

#[actix_web::test]
async fn test_created_user_is_readable_without_password() {
    let store = Arc::new(MemoryUserStore::new());
    let app = app!(state_with(store.clone(), ApiConfig::default()));
    send!(app, post(ALICE));

    let (status, _, body) = send!(app, get("/api/users/1"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("plainPassword").is_none());

    let stored = store.find_by_id(1).await.unwrap().unwrap();
    assert_ne!(stored.password, "secret123");
    assert!(bcrypt::verify("secret123", &stored.password).unwrap());
}

#[actix_web::test]
async fn test_text_fields_are_trimmed_but_password_is_kept() {
    let store = Arc::new(MemoryUserStore::new());
    let app = app!(state_with(store.clone(), ApiConfig::default()));

    let (status, _, _) = send!(
        app,
        post(r#"{"username":"  alice ","email":" alice@example.com ","plainPassword":" secret123 "}"#)
    );
    assert_eq!(status, StatusCode::CREATED);

    let (_, _, user) = send!(app, get("/api/users/1"));
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@example.com");

    let stored = store.find_by_id(1).await.unwrap().unwrap();
    assert!(bcrypt::verify(" secret123 ", &stored.password).unwrap());
    assert!(!bcrypt::verify("secret123", &stored.password).unwrap());
}

#[actix_web::test]
async fn test_trailing_slash_reaches_the_same_routes() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, location, body) = send!(app, post_to("/api/users/", ALICE));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/api/users/1"));
    assert_eq!(body, json!({ "success": "User added successfully" }));

    let (status, _, body) = send!(app, get("/api/users/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _, body) = send!(app, get("/api/users/1/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");

    let (status, _, body) = send!(app, delete("/api/users/999/"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No user found with id 999" }));
}

#[actix_web::test]
async fn test_non_numeric_id_is_not_found() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(app, get("/api/users/abc"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No user found with id abc" }));

    let (status, _, body) = send!(app, delete("/api/users/abc"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No user found with id abc" }));

    let (status, _, body) = send!(
        app,
        test::TestRequest::put()
            .uri("/api/users/abc")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(ALICE)
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No user found with id abc" }));
}

#[actix_web::test]
async fn test_empty_form_lists_every_required_field() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, location, body) = send!(app, post("{}"));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(location.is_none());
    assert_eq!(body["error"], "There was a validation error");
    assert_eq!(body["notValidFields"]["username"], json!(["This value should not be blank."]));
    assert_eq!(body["notValidFields"]["email"], json!(["This value should not be blank."]));
    assert_eq!(body["notValidFields"]["plainPassword"], json!(["Please enter a password"]));
}

#[actix_web::test]
async fn test_invalid_json_is_treated_as_empty_form() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(app, post("not json"));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["notValidFields"]["username"].is_array());
    assert!(body["notValidFields"]["plainPassword"].is_array());
}

#[actix_web::test]
async fn test_wrongly_typed_field_is_not_valid() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(
        app,
        post(r#"{"username":5,"email":"alice@example.com","plainPassword":"secret123"}"#)
    );

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["notValidFields"], json!({ "username": ["This value is not valid."] }));
}

#[actix_web::test]
async fn test_nested_profile_errors_are_keyed_by_sub_field() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(
        app,
        post(r#"{"username":"alice","email":"alice@example.com","plainPassword":"secret123",
                 "profile":{"profileImageUrl":"not a url"}}"#)
    );

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["notValidFields"],
        json!({ "profile": { "profileImageUrl": ["This value is not a valid URL."] } })
    );
}

#[actix_web::test]
async fn test_wrongly_typed_password_is_reported_once() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(
        app,
        post(r#"{"username":"alice","email":"alice@example.com","plainPassword":123456}"#)
    );

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["notValidFields"], json!({ "plainPassword": ["This value is not valid."] }));
}

#[actix_web::test]
async fn test_nested_wrong_type_keeps_sibling_errors() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(
        app,
        post(r#"{"username":"alice","email":"alice@example.com","plainPassword":"secret123",
                 "profile":{"bio":5,"profileImageUrl":"not a url"}}"#)
    );

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["notValidFields"],
        json!({ "profile": {
            "bio": ["This value is not valid."],
            "profileImageUrl": ["This value is not a valid URL."]
        } })
    );
}

#[actix_web::test]
async fn test_legacy_validation_status() {
    let api = ApiConfig { validation_failure_status: StatusCode::OK };
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), api));

    let (status, _, body) = send!(app, post("{}"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "There was a validation error");
}

#[actix_web::test]
async fn test_duplicate_username_is_rejected() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));
    send!(app, post(ALICE));

    let (status, _, body) = send!(app, post(ALICE));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["notValidFields"]["username"],
        json!(["There is already an account with this username"])
    );
}

#[actix_web::test]
async fn test_unknown_user_is_not_found() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(app, get("/api/users/999"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No user found with id 999" }));

    let (status, _, body) = send!(app, delete("/api/users/999"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No user found with id 999" }));
}

#[actix_web::test]
async fn test_delete_then_get_is_not_found() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));
    send!(app, post(ALICE));

    let (status, _, body) = send!(app, delete("/api/users/1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": "The user has been deleted." }));

    let (status, _, body) = send!(app, get("/api/users/1"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No user found with id 1" }));
}

#[actix_web::test]
async fn test_update_changes_fields_and_keeps_id() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));
    send!(app, post(ALICE));

    let (status, location, body) = send!(
        app,
        put(1, r#"{"username":"alice","email":"alice@new.example.com","displayName":"Alice",
                   "plainPassword":"secret456"}"#)
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(location.as_deref(), Some("/api/users/1"));
    assert_eq!(body, json!({ "success": "User data modified successfully." }));

    let (_, _, user) = send!(app, get("/api/users/1"));
    assert_eq!(user["id"], 1);
    assert_eq!(user["email"], "alice@new.example.com");
    assert_eq!(user["displayName"], "Alice");
}

#[actix_web::test]
async fn test_update_unknown_user_is_not_found() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(app, put(7, "{}"));

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No user found with id 7" }));
}

#[actix_web::test]
async fn test_update_with_missing_fields_fails_validation() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));
    send!(app, post(ALICE));

    let (status, _, body) = send!(app, put(1, r#"{"email":"alice@example.com"}"#));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["notValidFields"]["username"].is_array());
    assert!(body["notValidFields"]["plainPassword"].is_array());
}

#[actix_web::test]
async fn test_list_users() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(app, get("/api/users"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    send!(app, post(ALICE));
    send!(app, post(r#"{"username":"bob","email":"bob@example.com","plainPassword":"secret123"}"#));

    let (_, _, body) = send!(app, get("/api/users"));
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|user| user["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["alice", "bob"]);
}

#[actix_web::test]
async fn test_health_reports_store() {
    let app = app!(state_with(Arc::new(MemoryUserStore::new()), ApiConfig::default()));

    let (status, _, body) = send!(app, get("/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["features"]["store"], "memory");
}

/// 저장은 항상 실패하고 조회는 빈 저장소처럼 동작하는 저장소
struct BrokenStore {
    inner: MemoryUserStore,
}

#[async_trait]
impl UserStore for BrokenStore {
    fn name(&self) -> &str {
        "broken"
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>> {
        if id == 1 {
            let mut user = User::new(
                user_api_backend::domain::entities::users::UserDetails {
                    username: "alice".to_string(),
                    email: "alice@example.com".to_string(),
                    display_name: None,
                    profile: Default::default(),
                },
                "encoded".to_string(),
            );
            user.id = Some(1);
            return Ok(Some(user));
        }
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.inner.find_by_username(username).await
    }

    async fn save(&self, _user: User) -> AppResult<User> {
        Err(AppError::DatabaseError("disk full".to_string()))
    }

    async fn delete(&self, _user: &User) -> AppResult<()> {
        Err(AppError::DatabaseError("disk full".to_string()))
    }
}

fn broken_store() -> Arc<dyn UserStore> {
    Arc::new(BrokenStore { inner: MemoryUserStore::new() })
}

#[actix_web::test]
async fn test_create_failure_hides_cause() {
    let app = app!(state_with(broken_store(), ApiConfig::default()));

    let (status, location, body) = send!(app, post(ALICE));

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(location.is_none());
    assert_eq!(body, json!({ "error": "An error occurred while creating the user" }));
}

#[actix_web::test]
async fn test_update_and_delete_failures_propagate_message() {
    let app = app!(state_with(broken_store(), ApiConfig::default()));

    let (status, _, body) = send!(app, put(1, ALICE));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database error: disk full" }));

    let (status, _, body) = send!(app, delete("/api/users/1"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database error: disk full" }));
}
