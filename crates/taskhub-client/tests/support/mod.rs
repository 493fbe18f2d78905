//! In-process fake of the task REST backend.
//!
//! Mirrors the backend's observable behaviour: trailing-slash routes,
//! 201 on create, 400 on blank title/description, 404 for unknown ids,
//! 204 on delete. Every request is recorded as `(METHOD, path)`.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use taskhub_client::Task;

#[derive(Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: u32,
    requests: Vec<(String, String)>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

impl FakeBackend {
    /// Every request seen so far, oldest first
    pub fn requests(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.inner.lock().unwrap().requests.clear();
    }

    fn record(&self, method: &Method, uri: &Uri) {
        self.inner
            .lock()
            .unwrap()
            .requests
            .push((method.to_string(), uri.path().to_string()));
    }
}

/// Start the fake on an ephemeral port; returns it with its base URL
pub async fn start_backend() -> (FakeBackend, String) {
    let backend = FakeBackend::default();

    let app = Router::new()
        .route("/tasks/", get(list_tasks).post(create_task))
        .route("/tasks/{id}/", axum::routing::put(update_task).delete(delete_task))
        .route("/broken/tasks/", get(not_json))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("fake backend addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (backend, format!("http://{}", addr))
}

/// Base URL nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind spare port");
    let addr = listener.local_addr().expect("spare port addr");
    drop(listener);
    format!("http://{}", addr)
}

fn blank_fields(task: &Task) -> Option<serde_json::Value> {
    let mut errors = serde_json::Map::new();
    if task.title.trim().is_empty() {
        errors.insert("title".into(), json!(["This field may not be blank."]));
    }
    if task.description.trim().is_empty() {
        errors.insert("description".into(), json!(["This field may not be blank."]));
    }
    (!errors.is_empty()).then(|| serde_json::Value::Object(errors))
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response()
}

async fn list_tasks(State(backend): State<FakeBackend>, method: Method, uri: Uri) -> Response {
    backend.record(&method, &uri);
    let tasks = backend.inner.lock().unwrap().tasks.clone();
    Json(tasks).into_response()
}

async fn create_task(
    State(backend): State<FakeBackend>,
    method: Method,
    uri: Uri,
    Json(mut task): Json<Task>,
) -> Response {
    backend.record(&method, &uri);
    if let Some(errors) = blank_fields(&task) {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let mut inner = backend.inner.lock().unwrap();
    inner.next_id += 1;
    task.id = Some(inner.next_id);
    inner.tasks.push(task.clone());
    (StatusCode::CREATED, Json(task)).into_response()
}

async fn update_task(
    State(backend): State<FakeBackend>,
    Path(id): Path<u32>,
    method: Method,
    uri: Uri,
    Json(mut task): Json<Task>,
) -> Response {
    backend.record(&method, &uri);
    if let Some(errors) = blank_fields(&task) {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let mut inner = backend.inner.lock().unwrap();
    match inner.tasks.iter_mut().find(|t| t.id == Some(id)) {
        Some(slot) => {
            task.id = Some(id);
            *slot = task.clone();
            Json(task).into_response()
        }
        None => not_found(),
    }
}

async fn delete_task(
    State(backend): State<FakeBackend>,
    Path(id): Path<u32>,
    method: Method,
    uri: Uri,
) -> Response {
    backend.record(&method, &uri);
    let mut inner = backend.inner.lock().unwrap();
    let before = inner.tasks.len();
    inner.tasks.retain(|t| t.id != Some(id));
    if inner.tasks.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}
