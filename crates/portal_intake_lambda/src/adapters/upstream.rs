/// Status reported by the upstream service's organizations endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReport {
    pub status_code: u16,
    pub reason: String,
}

pub trait UpstreamStatus {
    fn fetch_status(&self) -> Result<UpstreamReport, String>;
}
