//! Small order service wired through the error pipeline

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, Path, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use faultline_config::Config;
use faultline_errors::{ErrorFactory, FactoryOptions};
use faultline_response::{AxumContext, HttpPayload, RequestValues, ResponseOptions, ResponseWriter};
use http::{Extensions, StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

type Writer = ResponseWriter<AxumContext>;

#[derive(Clone, FromRef)]
pub struct AppState {
    factory: ErrorFactory,
    options: ResponseOptions,
}

impl AppState {
    pub fn new(service_name: &str) -> Self {
        Self {
            factory: ErrorFactory::new(FactoryOptions {
                service_name: service_name.to_owned(),
                ..FactoryOptions::default()
            }),
            options: ResponseOptions {
                service_name: service_name.to_owned(),
                ..ResponseOptions::default()
            },
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            factory: ErrorFactory::from_config(&config.service, None),
            options: ResponseOptions::from(config),
        }
    }
}

#[derive(Debug, Serialize)]
struct Order {
    id: u32,
    item: String,
    quantity: u32,
}

impl HttpPayload for Order {}

#[derive(Debug, Deserialize, Validate)]
struct NewOrder {
    #[validate(length(min = 1, message = "cannot be blank"))]
    item: String,
    #[validate(range(min = 1, message = "must be positive"))]
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct Account {
    id: u32,
    email: String,
    password_hash: String,
}

impl HttpPayload for Account {
    fn http_response(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "id": self.id, "email": self.email }))
    }
}

/// Router exposing every response path of the pipeline
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/accounts/{id}", get(get_account))
        .route("/upstream/rpc", get(upstream_rpc))
        .route("/upstream/plain", get(upstream_plain))
        .route("/upstream/foreign", get(upstream_foreign))
        .route("/vault", get(vault))
        .layer(middleware::from_fn(attach_values))
        .with_state(state)
}

/// Copies `x-request-id` to the response and honours `x-async`
async fn attach_values(mut request: Request, next: Next) -> Response {
    let mut values = RequestValues::new();

    if let Some(id) = header(&request, "x-request-id") {
        values.set_header("x-request-id", id);
    }
    if let Some(flag) = header(&request, "x-async") {
        values.insert("async", flag);
    }
    if values.get::<bool>("async").ok().flatten().unwrap_or(false) {
        values.set_response_code(StatusCode::ACCEPTED);
    }

    request.extensions_mut().insert(values);
    next.run(request).await
}

fn header(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

async fn get_order(Path(id): Path<u32>, State(state): State<AppState>, mut writer: Writer) -> Writer {
    let result = if id == 1 {
        writer.forward_success(&Order {
            id,
            item: "keyboard".to_owned(),
            quantity: 2,
        })
    } else {
        writer.forward_error(&state.factory.not_found().submit(&Extensions::new()))
    };

    result.expect("axum context accepts writes");
    writer
}

async fn create_order(
    State(state): State<AppState>,
    mut writer: Writer,
    body: Result<Json<NewOrder>, JsonRejection>,
) -> Writer {
    let result = match body {
        Err(rejection) => writer.forward_error(&rejection),
        Ok(Json(order)) => match order.validate() {
            Ok(()) => {
                writer.set_response_code(StatusCode::CREATED);
                writer.forward_success(&Order {
                    id: 2,
                    item: order.item,
                    quantity: order.quantity,
                })
            }
            Err(problems) => {
                let err = state.factory.invalid_argument(problems).submit(&Extensions::new());
                writer.forward_error(&err)
            }
        },
    };

    result.expect("axum context accepts writes");
    writer
}

async fn get_account(Path(id): Path<u32>, mut writer: Writer) -> Writer {
    let account = Account {
        id,
        email: "ada@example.com".to_owned(),
        password_hash: "$argon2id$secret".to_owned(),
    };

    writer.forward_success(&account).expect("axum context accepts writes");
    writer
}

async fn upstream_rpc(mut writer: Writer) -> Writer {
    let status = tonic::Status::unavailable("billing backend unavailable");
    writer.forward_error(&status).expect("axum context accepts writes");
    writer
}

async fn upstream_plain(mut writer: Writer) -> Writer {
    let err = std::io::Error::other("connection reset by peer");
    writer.forward_error(&err).expect("axum context accepts writes");
    writer
}

async fn upstream_foreign(mut writer: Writer) -> Writer {
    let err = std::io::Error::other(FOREIGN_ERROR);
    writer.forward_error(&err).expect("axum context accepts writes");
    writer
}

/// Structured error from a peer using a kind this pipeline does not know
pub const FOREIGN_ERROR: &str = r#"{"code":12,"service_name":"billing","message":"quota exceeded","kind":"QuotaError"}"#;

async fn vault(State(state): State<AppState>, mut writer: Writer) -> Writer {
    let err = state.factory.permission_denied().submit(&Extensions::new());
    writer
        .forward_authentication_error(&err)
        .expect("axum context accepts writes");
    writer
}
