//! HTTP API module: router, handlers, and request middleware.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::create_router;
pub use server::serve;
