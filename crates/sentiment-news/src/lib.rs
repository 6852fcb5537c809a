//! News collaborator for stock sentiment analysis
//!
//! Provides the `NewsSource` trait consumed by the orchestrator and a
//! Polygon.io reference-news client implementation. Fetch errors never
//! cross the trait boundary; they are logged and surface as an empty list.

pub mod error;
pub mod polygon;
pub mod source;

pub use error::{NewsError, Result};
pub use polygon::PolygonClient;
pub use source::NewsSource;
