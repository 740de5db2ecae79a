// web-client/tests/support/mod.rs
//
// Fake backend + context fixtures shared by the integration tests. The
// backend is a real actix-web server on an ephemeral port, exposing just
// enough of the platform API to drive the session core end to end.
#![allow(dead_code)]

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

use common::utils::AccessClaims;
use common::Config;
use web_client::navigator::MemoryNavigator;
use web_client::SessionContext;

pub fn mint_token(user_id: i64, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = AccessClaims {
        sub: user_id.to_string(),
        roles: vec!["citizen".to_string()],
        exp: (now + exp_offset_secs) as usize,
        iat: now as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"integration-secret"),
    )
    .expect("encode test token")
}

fn bearer_of(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

fn content_type_of(req: &HttpRequest) -> String {
    req.headers()
        .get("Content-Type")
        .and_then(|header| header.to_str().ok())
        .unwrap_or("")
        .to_string()
}

fn ticket_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Broken streetlight",
        "description": "Pole 14 has been dark for a week",
        "category": "streetlight",
        "status": "open",
        "ward": "12",
        "created_at": "2026-08-01T10:00:00Z"
    })
}

async fn login(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if body.get("password").and_then(|v| v.as_str()) != Some("secret") {
        return HttpResponse::Unauthorized().json(json!({ "message": "Invalid credentials" }));
    }

    HttpResponse::Ok().json(json!({
        "data": {
            "token": mint_token(7, 3600),
            "user_id": 7,
            "roles": ["citizen"],
            "saw_bearer": bearer_of(&req).is_some(),
        }
    }))
}

async fn signup(req: HttpRequest, _body: web::Bytes) -> HttpResponse {
    let content_type = content_type_of(&req);
    if !content_type.starts_with("multipart/form-data") {
        return HttpResponse::BadRequest().json(json!({ "message": "multipart payload required" }));
    }

    HttpResponse::Ok().json(json!({
        "data": {
            "message": format!(
                "registered via {}; auth={}",
                content_type,
                bearer_of(&req).is_some()
            )
        }
    }))
}

async fn logout() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": { "message": "ok" } }))
}

async fn profile(req: HttpRequest) -> HttpResponse {
    if bearer_of(&req).is_none() {
        return HttpResponse::Unauthorized().json(json!({ "error": "unauthorized" }));
    }
    HttpResponse::Ok().json(json!({ "data": { "user_id": 7, "roles": ["citizen"] } }))
}

async fn whoami(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": { "bearer": bearer_of(&req) } }))
}

async fn secure() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "error": "unauthorized" }))
}

async fn expired() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "message": "jwt expired" }))
}

async fn boom() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": "database exploded" }))
}

async fn validate(_body: web::Json<Value>) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "message": "title is required" }))
}

async fn list_tickets(req: HttpRequest) -> HttpResponse {
    if bearer_of(&req).is_none() {
        return HttpResponse::Unauthorized().json(json!({ "error": "unauthorized" }));
    }
    HttpResponse::Ok().json(json!({ "data": [ticket_json(1)] }))
}

async fn create_ticket(req: HttpRequest, _body: web::Bytes) -> HttpResponse {
    if !content_type_of(&req).starts_with("multipart/form-data") {
        return HttpResponse::BadRequest().json(json!({ "message": "multipart payload required" }));
    }
    HttpResponse::Ok().json(json!({ "data": ticket_json(42) }))
}

async fn list_workers(req: HttpRequest) -> HttpResponse {
    if bearer_of(&req).is_none() {
        return HttpResponse::Unauthorized().json(json!({ "error": "unauthorized" }));
    }
    HttpResponse::Ok().json(json!({
        "data": [{ "id": 3, "name": "Ram", "mobile": "9000000002", "ward": "12" }]
    }))
}

async fn add_worker(body: web::Json<Value>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "data": {
            "id": 4,
            "name": body.get("name").cloned().unwrap_or(Value::Null),
            "mobile": body.get("mobile").cloned().unwrap_or(Value::Null),
            "ward": null
        }
    }))
}

async fn remove_worker() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": null }))
}

/// Start the fake backend on an ephemeral port; returns its base URL
pub async fn spawn_backend() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/auth/login", web::post().to(login))
            .route("/auth/signup", web::post().to(signup))
            .route("/auth/logout", web::post().to(logout))
            .route("/auth/profile", web::get().to(profile))
            .route("/api/whoami", web::get().to(whoami))
            .route("/api/secure", web::get().to(secure))
            .route("/api/expired", web::get().to(expired))
            .route("/api/boom", web::get().to(boom))
            .route("/api/validate", web::post().to(validate))
            .route("/api/tickets", web::get().to(list_tickets))
            .route("/api/tickets", web::post().to(create_ticket))
            .route("/api/contractor/workers", web::get().to(list_workers))
            .route("/api/contractor/workers", web::post().to(add_worker))
            .route("/api/contractor/workers/{id}", web::delete().to(remove_worker))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test backend");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

pub struct TestContext {
    pub ctx: SessionContext,
    pub navigator: Arc<MemoryNavigator>,
    _session_dir: tempfile::TempDir,
}

/// Bootstrap a session context against the given backend with a fresh
/// session directory
pub fn build_context(base_url: &str) -> TestContext {
    let session_dir = tempfile::tempdir().expect("session dir");
    build_context_in(base_url, session_dir)
}

/// Bootstrap against a prepared session directory (for pre-seeded stores)
pub fn build_context_in(base_url: &str, session_dir: tempfile::TempDir) -> TestContext {
    let navigator = Arc::new(MemoryNavigator::new());
    let config = Config {
        api_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        login_path: "/login/citizen".to_string(),
        session_dir: Some(session_dir.path().to_string_lossy().into_owned()),
    };

    let ctx = SessionContext::bootstrap(&config, navigator.clone()).expect("bootstrap");
    TestContext {
        ctx,
        navigator,
        _session_dir: session_dir,
    }
}

/// Write session files the way a previous run would have left them
pub fn seed_session_dir(dir: &Path, token: &str, identity_json: &str) {
    std::fs::write(dir.join("token"), token).expect("seed token");
    std::fs::write(dir.join("user"), identity_json).expect("seed identity");
}
