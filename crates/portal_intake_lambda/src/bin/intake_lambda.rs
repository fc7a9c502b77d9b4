use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue as DynamoAttributeValue;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use portal_intake_core::record::{AttributeValue, StorageItem};
use portal_intake_core::validation::{account_request_rules, ValidationConfig};
use portal_intake_lambda::adapters::request_store::{PutOutcome, RequestStore};
use portal_intake_lambda::handlers::intake::handle_intake_apigw;
use portal_intake_lambda::handlers::response::ApiGatewayResponse;
use serde_json::Value;

struct DynamoDbRequestStore {
    client: aws_sdk_dynamodb::Client,
}

impl RequestStore for DynamoDbRequestStore {
    fn put_item(&self, table_name: &str, item: &StorageItem) -> Result<PutOutcome, String> {
        let attributes: HashMap<String, DynamoAttributeValue> = item
            .attributes()
            .iter()
            .map(|(field, value)| {
                let attribute = match value {
                    AttributeValue::S(text) => DynamoAttributeValue::S(text.clone()),
                    AttributeValue::N(number) => DynamoAttributeValue::N(number.clone()),
                };
                (field.clone(), attribute)
            })
            .collect();
        let client = self.client.clone();
        let table = table_name.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table)
                    .set_item(Some(attributes))
                    .send()
                    .await
                    .map(|_| PutOutcome {
                        http_status_code: 200,
                    })
                    .map_err(|error| format!("failed to put item to dynamodb: {error}"))
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<Value>,
    rules: &ValidationConfig,
    table_name: &str,
    store: &DynamoDbRequestStore,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_intake_apigw(&event.payload, rules, table_name, store))
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
    let store = DynamoDbRequestStore {
        client: aws_sdk_dynamodb::Client::new(&config),
    };
    let rules = account_request_rules();

    let rules = &rules;
    let table_name = table_name.as_str();
    let store = &store;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        handle_request(event, rules, table_name, store)
    }))
    .await
}
