use crate::adapters::upstream::UpstreamStatus;
use crate::handlers::response::{success_response, ApiGatewayResponse};

/// Proxies the upstream service's status: the upstream's status code
/// becomes the response code and its reason phrase the body. A transport
/// failure propagates to the runtime as an unrecovered error.
pub fn handle_upstream_status(
    probe: &dyn UpstreamStatus,
) -> Result<ApiGatewayResponse, String> {
    let report = probe.fetch_status()?;
    tracing::info!(status = report.status_code, reason = %report.reason, "upstream status");
    Ok(success_response(report.status_code, &report.reason))
}
