#![allow(dead_code, missing_docs, clippy::expect_used)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use rstest::fixture;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use magnet_client::{ApiClient, Configuration, DefaultApi};

pub const USERNAME: &str = "john";
pub const PASSWORD: &str = "s3cret";
pub const TOKEN: &str = "tok-john";

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn failure(status: StatusCode, detail: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({"detail": detail})))
}

#[derive(Debug, Default)]
struct Db {
    users: Vec<Value>,
    scaffolds: Vec<Value>,
}

type SharedDb = Arc<Mutex<Db>>;

fn user(id: usize, email: &str, username: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "username": username,
        "full_name": null,
        "disabled": false,
        "is_active": true,
        "items": []
    })
}

fn authorize(headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    match headers.get("authorization").and_then(|value| value.to_str().ok()) {
        Some(TOKEN) => Ok(()),
        _ => Err(failure(StatusCode::UNAUTHORIZED, "Not authenticated")),
    }
}

async fn root() -> Json<Value> {
    Json(json!("Hello World"))
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(Form(form): Form<LoginForm>) -> ApiResult {
    if form.username == USERNAME && form.password == PASSWORD {
        Ok(Json(json!({"access_token": TOKEN, "token_type": "bearer"})))
    } else {
        Err(failure(
            StatusCode::UNAUTHORIZED,
            "Incorrect username or password",
        ))
    }
}

#[derive(Debug, Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

async fn register(State(db): State<SharedDb>, Json(credentials): Json<Credentials>) -> ApiResult {
    let mut db = db.lock().unwrap_or_else(PoisonError::into_inner);
    let username = credentials.email.split('@').next().unwrap_or_default();
    let created = user(db.users.len() + 1, &credentials.email, username);
    db.users.push(created.clone());
    Ok(Json(created))
}

async fn me(State(db): State<SharedDb>, headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    let db = db.lock().unwrap_or_else(PoisonError::into_inner);
    db.users
        .first()
        .cloned()
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "User not found"))
}

async fn get_user(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> ApiResult {
    authorize(&headers)?;
    let Ok(user_id) = user_id.parse::<usize>() else {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{
                "loc": ["path", "user_id"],
                "msg": "value is not a valid integer",
                "type": "type_error.integer"
            }]})),
        ));
    };
    let db = db.lock().unwrap_or_else(PoisonError::into_inner);
    db.users
        .get(user_id.wrapping_sub(1))
        .cloned()
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "User not found"))
}

async fn index_scaffold(
    State(db): State<SharedDb>,
    Query(query): Query<HashMap<String, usize>>,
) -> Json<Value> {
    let db = db.lock().unwrap_or_else(PoisonError::into_inner);
    let from = query.get("from").copied().unwrap_or(0);
    let limit = query.get("limit").copied().unwrap_or(100);
    let page = db.scaffolds.iter().skip(from).take(limit).cloned();
    Json(Value::Array(page.collect()))
}

async fn create_scaffold(State(db): State<SharedDb>, Json(mut scaffold): Json<Value>) -> Json<Value> {
    let mut db = db.lock().unwrap_or_else(PoisonError::into_inner);
    scaffold["id"] = json!(db.scaffolds.len() + 1);
    db.scaffolds.push(scaffold.clone());
    Json(scaffold)
}

#[derive(Debug, Deserialize)]
struct Switch {
    is_active: bool,
}

async fn switch_bot(Path(profile_id): Path<i64>, Query(switch): Query<Switch>) -> Json<Value> {
    Json(json!({"id": profile_id, "is_active": switch.is_active}))
}

#[derive(Debug, Deserialize)]
struct Requirements {
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    etl: bool,
}

async fn requirement_definition(Query(requirements): Query<Requirements>) -> Json<Value> {
    let timezone = match requirements.timezone.as_deref() {
        None | Some("utc") => 0,
        Some(_) => 50,
    };
    let etl = if requirements.etl { 10 } else { 0 };
    Json(json!({
        "sum": timezone + etl,
        "difficulty": {"timezone": timezone, "etl": etl}
    }))
}

async fn withdraw(headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    Ok(Json(json!(1)))
}

/// In-process stand-in for the magnet server.
#[derive(Debug)]
pub struct MagnetServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MagnetServer {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let db = SharedDb::default();
        let router = Router::new()
            .route("/", get(root))
            .route("/guest/login", post(login))
            .route("/guest/register", post(register))
            .route("/me/", get(me).delete(withdraw))
            .route("/users/{user_id}", get(get_user))
            .route("/scaffold/", get(index_scaffold).post(create_scaffold))
            .route("/bot/profile/{profile_id}/switch", post(switch_bot))
            .route("/system/requirement_definition", get(requirement_definition))
            .fallback(|| async { failure(StatusCode::NOT_FOUND, "Not Found") })
            .with_state(db);

        info!(%addr, "launching magnet server");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server running");
        });

        Ok(Self { addr, handle })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api(&self, token: Option<&str>) -> DefaultApi {
        let mut builder = Configuration::builder().with_base_url(self.base_url());
        if let Some(token) = token {
            builder = builder.with_access_token(token);
        }
        DefaultApi::new(ApiClient::new(builder.build().expect("valid configuration")))
    }
}

impl Drop for MagnetServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[fixture]
pub async fn server() -> MagnetServer {
    init_tracing();
    match MagnetServer::start().await {
        Ok(server) => server,
        Err(error) => {
            panic!("fail to start magnet server: {error:?}");
        }
    }
}
