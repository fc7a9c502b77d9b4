use lambda_runtime::{service_fn, Error, LambdaEvent};
use portal_intake_lambda::adapters::table_health::{DescribeError, TableHealth};
use portal_intake_lambda::handlers::response::ApiGatewayResponse;
use portal_intake_lambda::handlers::table_status::handle_table_status;
use serde_json::{json, Value};

struct DynamoDbTableHealth {
    client: aws_sdk_dynamodb::Client,
}

impl TableHealth for DynamoDbTableHealth {
    fn describe_table(&self, table_name: &str) -> Result<Value, DescribeError> {
        let client = self.client.clone();
        let table = table_name.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                match client.describe_table().table_name(table).send().await {
                    Ok(output) => {
                        let description = output.table();
                        Ok(json!({
                            "Table": {
                                "TableName": description.and_then(|t| t.table_name()),
                                "TableStatus": description
                                    .and_then(|t| t.table_status())
                                    .map(|status| status.as_str()),
                                "ItemCount": description.and_then(|t| t.item_count()),
                            }
                        }))
                    }
                    Err(error) => {
                        let service_error = error.into_service_error();
                        if service_error.is_resource_not_found_exception() {
                            Err(DescribeError::NotFound)
                        } else {
                            Err(DescribeError::Service(service_error.to_string()))
                        }
                    }
                }
            })
        })
    }
}

async fn handle_request(
    _event: LambdaEvent<Value>,
    table_name: &str,
    health: &DynamoDbTableHealth,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_table_status(table_name, health))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .init();

    let table_name =
        std::env::var("DYNAMODB_TABLE").map_err(|_| Error::from("DYNAMODB_TABLE must be configured"))?;

    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let health = DynamoDbTableHealth {
        client: aws_sdk_dynamodb::Client::new(&config),
    };

    let table_name = table_name.as_str();
    let health = &health;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        handle_request(event, table_name, health)
    }))
    .await
}
