use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescribeError {
    NotFound,
    Service(String),
}

pub trait TableHealth {
    fn describe_table(&self, table_name: &str) -> Result<Value, DescribeError>;
}
