pub mod error;
pub mod weather;
