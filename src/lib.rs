// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod auth;
pub mod config;
pub mod error;
pub mod exporter;
pub mod graphql;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use auth::Credentials;
pub use config::{ApiConfig, Config, CreationsConfig, OutputConfig, SearchConfig};
pub use error::{FetchError, Result};
pub use exporter::JsonExporter;
pub use graphql::GraphQlClient;
pub use models::ModelRecord;
pub use pipeline::{FetchOutcome, FetchRunner, RunStats, dedupe_by_link};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert!(dedupe_by_link(Vec::new()).is_empty());
    }
}
