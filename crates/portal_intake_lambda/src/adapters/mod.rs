pub mod request_store;
pub mod table_health;
pub mod upstream;
