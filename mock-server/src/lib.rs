use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,
    pub display_name: String,
    pub email_address: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub display_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
}

/// What the echo routes saw, reported back in snake_case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub body: Option<serde_json::Value>,
    pub cache_control: Option<String>,
}

#[derive(Default)]
pub struct Directory {
    next_id: u64,
    users: HashMap<u64, User>,
}

pub type Db = Arc<RwLock<Directory>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Directory {
        next_id: 1,
        users: HashMap::new(),
    }));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/echo", any(echo))
        .route("/echo/{*rest}", any(echo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let dir = db.read().await;
    let mut users: Vec<User> = dir.users.values().cloned().collect();
    users.sort_by_key(|u| u.user_id);
    Json(users)
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<CreateUser>,
) -> (StatusCode, Json<User>) {
    let mut dir = db.write().await;
    let user = User {
        user_id: dir.next_id,
        display_name: input.display_name,
        email_address: input.email_address,
    };
    dir.next_id += 1;
    dir.users.insert(user.user_id, user.clone());
    tracing::debug!(user_id = user.user_id, "created user");
    (StatusCode::CREATED, Json(user))
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<User>, StatusCode> {
    let dir = db.read().await;
    dir.users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<User>, StatusCode> {
    let mut dir = db.write().await;
    let user = dir.users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.display_name {
        user.display_name = name;
    }
    if let Some(email) = input.email_address {
        user.email_address = Some(email);
    }
    Ok(Json(user.clone()))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut dir = db.write().await;
    dir.users.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn echo(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<BTreeMap<String, String>>,
    body: Bytes,
) -> Result<Json<Echo>, (StatusCode, String)> {
    let body = if body.is_empty() {
        None
    } else {
        Some(
            serde_json::from_slice(&body)
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid JSON body: {e}")))?,
        )
    };
    let cache_control = headers
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    Ok(Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        body,
        cache_control,
    }))
}
