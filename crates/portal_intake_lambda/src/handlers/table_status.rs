use serde_json::json;

use crate::adapters::table_health::{DescribeError, TableHealth};
use crate::handlers::response::{error_response, success_response, ApiGatewayResponse};

/// Reports the managed table's description as a health check. A missing
/// table is a 404; any other service error is a 500 with the same body.
pub fn handle_table_status(table_name: &str, health: &dyn TableHealth) -> ApiGatewayResponse {
    match health.describe_table(table_name) {
        Ok(description) => success_response(200, description),
        Err(DescribeError::NotFound) => {
            tracing::warn!(table = table_name, "table not found");
            error_response(404, json!({"ErrorMsg": "Table Not Found"}))
        }
        Err(DescribeError::Service(message)) => {
            tracing::error!(table = table_name, %message, "describe table failed");
            error_response(500, json!({"ErrorMsg": "Table Not Found"}))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    struct StaticHealth {
        result: Result<Value, DescribeError>,
    }

    impl TableHealth for StaticHealth {
        fn describe_table(&self, _table_name: &str) -> Result<Value, DescribeError> {
            self.result.clone()
        }
    }

    #[test]
    fn healthy_table_returns_description() {
        let health = StaticHealth {
            result: Ok(json!({"Table": {"TableName": "account-requests", "TableStatus": "ACTIVE"}})),
        };

        let response = handle_table_status("account-requests", &health);
        assert_eq!(response.status_code, 200);
        let payload: Value = serde_json::from_str(&response.body).expect("body should be JSON");
        assert_eq!(payload["Table"]["TableStatus"], "ACTIVE");
    }

    #[test]
    fn missing_table_is_a_404() {
        let health = StaticHealth {
            result: Err(DescribeError::NotFound),
        };

        let response = handle_table_status("account-requests", &health);
        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, r#"{"ErrorMsg":"Table Not Found"}"#);
    }

    #[test]
    fn other_service_errors_are_a_500() {
        let health = StaticHealth {
            result: Err(DescribeError::Service("throttled".to_string())),
        };

        let response = handle_table_status("account-requests", &health);
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, r#"{"ErrorMsg":"Table Not Found"}"#);
    }
}
