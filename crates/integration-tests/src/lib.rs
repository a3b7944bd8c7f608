//! Integration test support for the GreenMind client.
//!
//! Provides [`TestBackend`], an in-process `axum` stand-in for the real
//! GreenMind REST backend. It implements the auth endpoints (fixed
//! verification code, bearer tokens), the content and user CRUD
//! collections with server-assigned ids, and the read-only stats
//! endpoints, using the same JSON shapes and error bodies as the real
//! service.
//!
//! # Fixed test data
//!
//! - Verification code for every registration: `123456`
//! - Seeded admin account: `admin@greenmind.eco` / `admin123x`
//!
//! ```rust,no_run
//! use greenmind_integration_tests::TestBackend;
//!
//! # async fn run() {
//! let backend = TestBackend::spawn().await;
//! let base_url = backend.base_url(); // e.g. http://127.0.0.1:49152/api
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use axum::extract::{Json, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use serde_json::{Value, json};

/// Verification code accepted for every registration.
pub const VERIFICATION_CODE: &str = "123456";

/// Email of the seeded administrator account.
pub const ADMIN_EMAIL: &str = "admin@greenmind.eco";

/// Password of the seeded administrator account.
pub const ADMIN_PASSWORD: &str = "admin123x";

/// Timestamp used for every created user record.
const CREATED_AT: &str = "2024-11-26T10:30:00Z";

#[derive(Clone)]
struct Account {
    name: String,
    password: String,
    verified: bool,
    role: &'static str,
}

#[derive(Default)]
struct Store {
    accounts: HashMap<String, Account>,
    tokens: HashMap<String, String>,
    next_id: i64,
    next_token: u64,
    missions: BTreeMap<i64, Value>,
    quizzes: BTreeMap<i64, Value>,
    tips: BTreeMap<i64, Value>,
    users: BTreeMap<i64, Value>,
}

impl Store {
    fn seeded() -> Self {
        let mut store = Self::default();
        store.accounts.insert(
            ADMIN_EMAIL.to_string(),
            Account {
                name: "Admin".to_string(),
                password: ADMIN_PASSWORD.to_string(),
                verified: true,
                role: "admin",
            },
        );
        store
    }

    fn issue_token(&mut self, email: &str) -> String {
        self.next_token += 1;
        let token = format!("tok-{}", self.next_token);
        self.tokens.insert(token.clone(), email.to_string());
        token
    }

    fn assign_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type SharedStore = Arc<Mutex<Store>>;

/// In-process stand-in for the GreenMind backend.
pub struct TestBackend {
    addr: SocketAddr,
}

impl TestBackend {
    /// Bind a fresh backend on an ephemeral localhost port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let state: SharedStore = Arc::new(Mutex::new(Store::seeded()));
        let app = router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("test backend address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test backend");
        });

        Self { addr }
    }

    /// Base URL including the `/api` prefix, as the client expects.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

fn router(state: SharedStore) -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/verify-email", post(verify_email))
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/profile", get(profile))
        .route("/api/users/points", put(update_points))
        .route("/api/users/stats", get(user_stats))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/missions", get(list_missions).post(create_mission))
        .route(
            "/api/missions/{id}",
            put(update_mission).delete(delete_mission),
        )
        .route("/api/missions/{id}/progress", put(mission_progress))
        .route("/api/missions/{id}/complete", post(mission_complete))
        .route("/api/quizzes", get(list_quizzes).post(create_quiz))
        .route("/api/quizzes/submit", post(submit_quiz))
        .route(
            "/api/quizzes/{id}",
            get(get_quiz).put(update_quiz).delete(delete_quiz),
        )
        .route("/api/tips", get(list_tips).post(create_tip))
        .route("/api/tips/{id}", put(update_tip).delete(delete_tip))
        .route("/api/tips/{id}/like", post(like_tip))
        .route("/api/stats/global-co2", get(global_co2))
        .route("/api/stats/dashboard", get(dashboard_stats))
        .with_state(state)
}

// =============================================================================
// Error helpers
// =============================================================================

fn message_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

/// The backend is inconsistent about its error field; not-found answers
/// use `error` so the client's fallback path gets exercised.
fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{what} not found") })),
    )
        .into_response()
}

fn bearer_email(store: &MutexGuard<'_, Store>, headers: &HeaderMap) -> Option<String> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    store.tokens.get(token).cloned()
}

fn require_auth(store: &MutexGuard<'_, Store>, headers: &HeaderMap) -> Result<String, Response> {
    bearer_email(store, headers)
        .ok_or_else(|| message_error(StatusCode::UNAUTHORIZED, "Unauthorized"))
}

fn lock(state: &SharedStore) -> MutexGuard<'_, Store> {
    state.lock().expect("test store lock")
}

// =============================================================================
// Auth handlers
// =============================================================================

async fn register(State(state): State<SharedStore>, Json(body): Json<Value>) -> Response {
    let mut store = lock(&state);

    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();
    let name = body["name"].as_str().unwrap_or_default().to_string();

    if store.accounts.contains_key(&email) {
        return message_error(StatusCode::BAD_REQUEST, "Email already registered");
    }

    store.accounts.insert(
        email.clone(),
        Account {
            name,
            password,
            verified: false,
            role: "user",
        },
    );

    Json(json!({
        "email": email,
        "emailVerified": false,
        "message": "Verification code sent",
    }))
    .into_response()
}

async fn login(State(state): State<SharedStore>, Json(body): Json<Value>) -> Response {
    let mut store = lock(&state);

    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();

    let Some(account) = store.accounts.get(&email).cloned() else {
        return message_error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    };
    if account.password != password {
        return message_error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    if !account.verified {
        return message_error(StatusCode::UNAUTHORIZED, "Email not verified");
    }

    let token = store.issue_token(&email);
    Json(json!({
        "token": token,
        "email": email,
        "emailVerified": true,
        "role": account.role,
    }))
    .into_response()
}

async fn verify_email(State(state): State<SharedStore>, Json(body): Json<Value>) -> Response {
    let mut store = lock(&state);

    let email = body["email"].as_str().unwrap_or_default().to_string();
    let code = body["code"].as_str().unwrap_or_default();

    let Some(account) = store.accounts.get_mut(&email) else {
        return message_error(StatusCode::BAD_REQUEST, "No registration found");
    };
    if code != VERIFICATION_CODE {
        return message_error(StatusCode::BAD_REQUEST, "Invalid verification code");
    }
    account.verified = true;
    let role = account.role;

    let token = store.issue_token(&email);
    Json(json!({
        "token": token,
        "email": email,
        "emailVerified": true,
        "role": role,
    }))
    .into_response()
}

// =============================================================================
// User handlers
// =============================================================================

fn user_record(id: i64, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "points": 0,
        "level": 1,
        "co2Reduced": 0.0,
        "createdAt": CREATED_AT,
    })
}

async fn list_users(State(state): State<SharedStore>, headers: HeaderMap) -> Response {
    let store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    Json(store.users.values().cloned().collect::<Vec<_>>()).into_response()
}

async fn create_user(
    State(state): State<SharedStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }

    let id = store.assign_id();
    let record = user_record(
        id,
        body["name"].as_str().unwrap_or_default(),
        body["email"].as_str().unwrap_or_default(),
    );
    store.users.insert(id, record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn get_user(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    match store.users.get(&id) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found("User"),
    }
}

async fn update_user(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }

    let Some(record) = store.users.get_mut(&id) else {
        return not_found("User");
    };
    if let Some(name) = body["name"].as_str() {
        record["name"] = json!(name);
    }
    if let Some(email) = body["email"].as_str() {
        record["email"] = json!(email);
    }
    Json(record.clone()).into_response()
}

async fn delete_user(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    if store.users.remove(&id).is_none() {
        return not_found("User");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn profile(State(state): State<SharedStore>, headers: HeaderMap) -> Response {
    let store = lock(&state);
    let email = match require_auth(&store, &headers) {
        Ok(email) => email,
        Err(response) => return response,
    };
    let name = store
        .accounts
        .get(&email)
        .map(|account| account.name.clone())
        .unwrap_or_default();
    Json(user_record(1, &name, &email)).into_response()
}

async fn update_points(
    State(state): State<SharedStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let store = lock(&state);
    let email = match require_auth(&store, &headers) {
        Ok(email) => email,
        Err(response) => return response,
    };
    let points = body["points"].as_i64().unwrap_or_default();
    let mut record = user_record(1, "", &email);
    record["points"] = json!(points);
    Json(record).into_response()
}

async fn user_stats(State(state): State<SharedStore>, headers: HeaderMap) -> Response {
    let store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    Json(json!({
        "missionsCompleted": 2,
        "quizzesCompleted": 5,
        "currentStreak": 3,
        "badges": [],
    }))
    .into_response()
}

// =============================================================================
// Content handlers (shared shape for missions, quizzes, tips)
// =============================================================================

fn list_collection(collection: &BTreeMap<i64, Value>) -> Response {
    Json(collection.values().cloned().collect::<Vec<_>>()).into_response()
}

fn create_item(store: &mut MutexGuard<'_, Store>, mut body: Value, kind: &str) -> Response {
    let id = store.assign_id();
    body["id"] = json!(id);
    let collection = collection_mut(store, kind);
    collection.insert(id, body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

fn update_item(
    store: &mut MutexGuard<'_, Store>,
    id: i64,
    mut body: Value,
    kind: &str,
    what: &str,
) -> Response {
    body["id"] = json!(id);
    let collection = collection_mut(store, kind);
    if !collection.contains_key(&id) {
        return not_found(what);
    }
    collection.insert(id, body.clone());
    Json(body).into_response()
}

fn delete_item(store: &mut MutexGuard<'_, Store>, id: i64, kind: &str, what: &str) -> Response {
    let collection = collection_mut(store, kind);
    if collection.remove(&id).is_none() {
        return not_found(what);
    }
    StatusCode::NO_CONTENT.into_response()
}

fn collection_mut<'a>(
    store: &'a mut MutexGuard<'_, Store>,
    kind: &str,
) -> &'a mut BTreeMap<i64, Value> {
    match kind {
        "missions" => &mut store.missions,
        "quizzes" => &mut store.quizzes,
        _ => &mut store.tips,
    }
}

async fn list_missions(State(state): State<SharedStore>) -> Response {
    list_collection(&lock(&state).missions)
}

async fn create_mission(
    State(state): State<SharedStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    create_item(&mut store, body, "missions")
}

async fn update_mission(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    update_item(&mut store, id, body, "missions", "Mission")
}

async fn delete_mission(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    delete_item(&mut store, id, "missions", "Mission")
}

async fn mission_progress(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    let progress = body["progress"].as_i64().unwrap_or_default();
    let Some(record) = store.missions.get_mut(&id) else {
        return not_found("Mission");
    };
    record["progress"] = json!(progress);
    Json(record.clone()).into_response()
}

async fn mission_complete(State(state): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let store = lock(&state);
    let Some(record) = store.missions.get(&id) else {
        return not_found("Mission");
    };
    Json(json!({
        "success": true,
        "pointsEarned": record["points"].as_i64().unwrap_or_default(),
        "co2Reduced": record["co2Impact"].as_f64().unwrap_or_default(),
    }))
    .into_response()
}

async fn list_quizzes(State(state): State<SharedStore>) -> Response {
    list_collection(&lock(&state).quizzes)
}

async fn create_quiz(
    State(state): State<SharedStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    create_item(&mut store, body, "quizzes")
}

async fn get_quiz(State(state): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let store = lock(&state);
    match store.quizzes.get(&id) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found("Quiz"),
    }
}

async fn update_quiz(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    update_item(&mut store, id, body, "quizzes", "Quiz")
}

async fn delete_quiz(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    delete_item(&mut store, id, "quizzes", "Quiz")
}

async fn submit_quiz(State(state): State<SharedStore>, Json(body): Json<Value>) -> Response {
    let store = lock(&state);
    let quiz_id = body["quizId"].as_i64().unwrap_or_default();
    let Some(record) = store.quizzes.get(&quiz_id) else {
        return not_found("Quiz");
    };
    let answers = body["answers"].as_array().map(Vec::len).unwrap_or_default();
    Json(json!({
        "score": answers,
        "passed": true,
        "pointsEarned": record["points"].as_i64().unwrap_or_default(),
        "co2Reduced": record["co2Impact"].as_f64().unwrap_or_default(),
    }))
    .into_response()
}

async fn list_tips(State(state): State<SharedStore>) -> Response {
    list_collection(&lock(&state).tips)
}

async fn create_tip(
    State(state): State<SharedStore>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    create_item(&mut store, body, "tips")
}

async fn update_tip(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    update_item(&mut store, id, body, "tips", "Tip")
}

async fn delete_tip(
    State(state): State<SharedStore>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    delete_item(&mut store, id, "tips", "Tip")
}

/// Likes answer `204 No Content`, matching the real backend's void
/// response.
async fn like_tip(State(state): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let mut store = lock(&state);
    let Some(record) = store.tips.get_mut(&id) else {
        return not_found("Tip");
    };
    let likes = record["likes"].as_i64().unwrap_or_default() + 1;
    record["likes"] = json!(likes);
    StatusCode::NO_CONTENT.into_response()
}

// =============================================================================
// Stats handlers
// =============================================================================

async fn global_co2() -> Response {
    Json(json!({ "totalCO2Reduced": 12547.0 })).into_response()
}

async fn dashboard_stats(State(state): State<SharedStore>, headers: HeaderMap) -> Response {
    let store = lock(&state);
    if let Err(response) = require_auth(&store, &headers) {
        return response;
    }
    Json(json!({
        "userPoints": 450,
        "globalCO2Reduced": 12547.0,
        "weeklyData": [
            { "day": "Mon", "points": 40, "co2": 1.2 },
            { "day": "Tue", "points": 60, "co2": 2.1 },
        ],
    }))
    .into_response()
}
