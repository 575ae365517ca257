//! [`ResponseContext`](crate::ResponseContext) implementations for HTTP runtimes

mod axum;
mod buffered;

pub use self::axum::AxumContext;
pub use self::buffered::BufferedContext;
