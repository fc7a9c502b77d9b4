use serde::{Deserialize, Serialize};

use crate::validation::ValidationProblem;

pub const INVALID_POST_DATA: &str = "Invalid post data";

/// The minimal success payload: the echoed record id plus the status code
/// reported by the persistence collaborator. The HTTP envelope around it
/// belongs to the adapter layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntakeResponse {
    pub id: String,
    #[serde(rename = "HTTPStatusCode")]
    pub http_status_code: u16,
}

/// Control-flow error that aborts request handling with a caller-facing
/// message. Carries the full validation problem list so callers are not
/// left with only the generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    message: String,
    problems: Vec<ValidationProblem>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            problems: Vec::new(),
        }
    }

    pub fn with_problems(message: impl Into<String>, problems: Vec<ValidationProblem>) -> Self {
        Self {
            message: message.into(),
            problems,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn problems(&self) -> &[ValidationProblem] {
        &self.problems
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use crate::validation::{ValidationProblem, FIELD_IS_MISSING};

    use super::*;

    #[test]
    fn response_serializes_with_wire_field_names() {
        let response = IntakeResponse {
            id: "acct-0001".to_string(),
            http_status_code: 200,
        };

        let wire = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(
            wire,
            serde_json::json!({"id": "acct-0001", "HTTPStatusCode": 200})
        );
    }

    #[test]
    fn api_error_preserves_its_problem_list() {
        let problems = vec![ValidationProblem::new("lob", FIELD_IS_MISSING)];
        let error = ApiError::with_problems(INVALID_POST_DATA, problems.clone());

        assert_eq!(error.message(), INVALID_POST_DATA);
        assert_eq!(error.problems(), problems.as_slice());
        assert_eq!(error.to_string(), INVALID_POST_DATA);
    }
}
