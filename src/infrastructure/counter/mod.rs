//! Visit counter store.
//!
//! - [`RedisVisitCounter`] - Redis sorted set keyed by link id

mod redis_counter;

pub use redis_counter::{METRICS_KEY, RedisVisitCounter};
