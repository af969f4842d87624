use axum::{
	Form, Json, Router,
	extract::{FromRequest, Path, Request, State},
	http::{HeaderValue, Method, StatusCode, header},
	response::{IntoResponse, Response},
	routing::{get, put},
};
use serde::Serialize;
use tower_http::{
	cors::{AllowOrigin, Any, CorsLayer},
	trace::TraceLayer,
};

use crate::state::AppState;
use notes_domain::{MSG_FIELDS_REQUIRED, MSG_STORE_FAILURE};
use notes_service::{DeleteResponse, Error as ServiceError, NoteInput, NoteResponse};

const CODE_INVALID_REQUEST: &str = "INVALID_REQUEST";
const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";

pub fn router(state: AppState, cors_origins: &[String]) -> color_eyre::Result<Router> {
	let router = Router::new()
		.route("/health", get(health))
		.route("/api/notes", get(list_notes).post(create_note))
		.route("/api/notes/{id}", put(update_note).delete(delete_note))
		.layer(cors_layer(cors_origins)?)
		.layer(TraceLayer::new_for_http())
		.with_state(state);

	Ok(router)
}

fn cors_layer(origins: &[String]) -> color_eyre::Result<CorsLayer> {
	let layer = CorsLayer::new()
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
		.allow_headers([header::CONTENT_TYPE]);

	if origins.is_empty() {
		return Ok(layer.allow_origin(Any));
	}

	let origins = origins
		.iter()
		.map(|origin| origin.parse::<HeaderValue>())
		.collect::<Result<Vec<_>, _>>()?;

	Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<NoteResponse>>, ApiError> {
	let notes = state.service.list().await?;
	Ok(Json(notes))
}

async fn create_note(
	State(state): State<AppState>,
	NoteBody(input): NoteBody,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
	let note = state.service.create(input).await?;
	Ok((StatusCode::CREATED, Json(note)))
}

// Answers 201 like create; existing clients check for it.
async fn update_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
	NoteBody(input): NoteBody,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
	let note = state.service.update(&id, input).await?;
	Ok((StatusCode::CREATED, Json(note)))
}

async fn delete_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
	let response = state.service.delete(&id).await?;
	Ok(Json(response))
}

/// `{title, content}` read as JSON, or as a urlencoded form when the request says so.
///
/// A body that cannot be read either way is reported like missing fields.
struct NoteBody(NoteInput);
impl<S> FromRequest<S> for NoteBody
where
	S: Send + Sync,
{
	type Rejection = ApiError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let parsed = if is_form(&req) {
			Form::<NoteInput>::from_request(req, state)
				.await
				.map(|Form(input)| input)
				.map_err(|rejection| rejection.body_text())
		} else {
			Json::<NoteInput>::from_request(req, state)
				.await
				.map(|Json(input)| input)
				.map_err(|rejection| rejection.body_text())
		};

		parsed.map(Self).map_err(|reason| {
			tracing::debug!(%reason, "Rejected note body.");

			json_error(StatusCode::BAD_REQUEST, CODE_INVALID_REQUEST, MSG_FIELDS_REQUIRED)
		})
	}
}

fn is_form(req: &Request) -> bool {
	req.headers()
		.get(header::CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| {
			value.to_ascii_lowercase().starts_with("application/x-www-form-urlencoded")
		})
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError::new(status, code, message)
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				json_error(StatusCode::BAD_REQUEST, CODE_INVALID_REQUEST, message),
			ServiceError::NotFound { message } | ServiceError::Storage { message } => {
				tracing::error!(error = %message, "Note store request failed.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, CODE_INTERNAL_ERROR, MSG_STORE_FAILURE)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };
		(self.status, Json(body)).into_response()
	}
}
