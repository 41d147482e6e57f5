// Service exports
pub mod cache;
pub mod postgres;
pub mod session;

pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use postgres::{PostgresClient, PostgresError};
pub use session::{SessionClaims, SessionError, SessionValidator};
