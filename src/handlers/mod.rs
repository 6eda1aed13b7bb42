pub mod middleware;
pub mod weather;
