use portal_intake_core::record::StorageItem;

/// Outcome of a put as reported by the persistence collaborator. Only the
/// status code is read by the intake flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOutcome {
    pub http_status_code: u16,
}

pub trait RequestStore {
    fn put_item(&self, table_name: &str, item: &StorageItem) -> Result<PutOutcome, String>;
}
