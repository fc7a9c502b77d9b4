pub mod intake;
pub mod response;
pub mod table_status;
pub mod upstream_status;
