use portal_intake_core::contract::{ApiError, IntakeResponse, INVALID_POST_DATA};
use portal_intake_core::record::{build_storage_item, BuildError};
use portal_intake_core::validation::{validate, ValidationConfig, ValidationProblem};
use serde_json::{json, Map, Value};

use crate::adapters::request_store::RequestStore;
use crate::handlers::response::{error_response, success_response, ApiGatewayResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// Caller-facing abort: bad body or failed validation.
    Api(ApiError),
    /// A required attribute vanished between validation and build. Should
    /// not happen after a full validation pass; propagated, not caught.
    Build(BuildError),
    /// The persistence collaborator failed; propagated unchanged.
    Store(String),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(error) => error.fmt(f),
            Self::Build(error) => error.fmt(f),
            Self::Store(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for IntakeError {}

/// Runs the intake pipeline: extract body, validate, build, persist, shape.
///
/// Each step is a hard dependency on the previous one succeeding; the
/// persistence collaborator is invoked at most once and only after a clean
/// validation pass.
pub fn handle_intake_event(
    event: &Value,
    rules: &ValidationConfig,
    table_name: &str,
    store: &dyn RequestStore,
) -> Result<IntakeResponse, IntakeError> {
    let record = extract_body(event).map_err(IntakeError::Api)?;

    let problems: Vec<ValidationProblem> = validate(rules, &record).collect();
    if !problems.is_empty() {
        for problem in &problems {
            tracing::error!(
                field = %problem.field,
                message = %problem.message,
                "request field failed validation"
            );
        }
        return Err(IntakeError::Api(ApiError::with_problems(
            INVALID_POST_DATA,
            problems,
        )));
    }

    let item = build_storage_item(&record).map_err(IntakeError::Build)?;
    let id = item.id().unwrap_or_default().to_string();

    let outcome = store
        .put_item(table_name, &item)
        .map_err(IntakeError::Store)?;
    tracing::info!(%id, status = outcome.http_status_code, "account request persisted");

    Ok(IntakeResponse {
        id,
        http_status_code: outcome.http_status_code,
    })
}

/// Wraps the intake pipeline in the API Gateway envelope: validation and
/// body failures become 400 responses carrying the problem list, internal
/// failures become 500.
pub fn handle_intake_apigw(
    event: &Value,
    rules: &ValidationConfig,
    table_name: &str,
    store: &dyn RequestStore,
) -> ApiGatewayResponse {
    match handle_intake_event(event, rules, table_name, store) {
        Ok(response) => success_response(200, response),
        Err(IntakeError::Api(error)) => error_response(
            400,
            json!({
                "error": error.message(),
                "problems": error.problems(),
            }),
        ),
        Err(error) => {
            tracing::error!(%error, "intake failed");
            error_response(500, json!({"error": "Internal Server Error"}))
        }
    }
}

fn extract_body(event: &Value) -> Result<Map<String, Value>, ApiError> {
    let Some(body) = event.get("body") else {
        return Err(ApiError::new(INVALID_POST_DATA));
    };

    let parsed = match body {
        Value::Object(record) => record.clone(),
        Value::String(text) => serde_json::from_str::<Value>(text)
            .ok()
            .and_then(|value| value.as_object().cloned())
            .ok_or_else(|| ApiError::new(INVALID_POST_DATA))?,
        _ => return Err(ApiError::new(INVALID_POST_DATA)),
    };
    Ok(parsed)
}
