pub mod compare;
pub mod error;
pub mod export;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod teams;

pub use error::ErrorResponse;
pub use routes::create_router;
