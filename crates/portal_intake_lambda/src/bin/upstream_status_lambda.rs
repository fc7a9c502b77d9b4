use lambda_runtime::{service_fn, Error, LambdaEvent};
use portal_intake_lambda::adapters::upstream::{UpstreamReport, UpstreamStatus};
use portal_intake_lambda::handlers::response::ApiGatewayResponse;
use portal_intake_lambda::handlers::upstream_status::handle_upstream_status;
use serde_json::Value;

const UPSTREAM_STATUS_URL: &str = "https://app.terraform.io/api/v2/organizations";

struct TerraformStatusProbe {
    http: reqwest::Client,
    access_token: String,
}

impl UpstreamStatus for TerraformStatusProbe {
    fn fetch_status(&self) -> Result<UpstreamReport, String> {
        let request = self
            .http
            .get(UPSTREAM_STATUS_URL)
            .bearer_auth(&self.access_token)
            .header("Content-Type", "application/vnd.api+json");

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let response = request
                    .send()
                    .await
                    .map_err(|error| format!("upstream status request failed: {error}"))?;
                let status = response.status();
                Ok(UpstreamReport {
                    status_code: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                })
            })
        })
    }
}

async fn handle_request(
    _event: LambdaEvent<Value>,
    probe: &TerraformStatusProbe,
) -> Result<ApiGatewayResponse, Error> {
    handle_upstream_status(probe).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .init();

    let access_token = std::env::var("TFE_ACCESS_TOKEN")
        .map_err(|_| Error::from("TFE_ACCESS_TOKEN must be configured"))?;

    let probe = TerraformStatusProbe {
        http: reqwest::Client::new(),
        access_token,
    };

    let probe = &probe;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        handle_request(event, probe)
    }))
    .await
}
