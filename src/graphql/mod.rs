// file: src/graphql/mod.rs
// description: graphql transport, query documents and response payloads
// reference: internal module structure

pub mod client;
pub mod queries;
pub mod response;

pub use client::GraphQlClient;
pub use response::{CreationNode, CreationsData, ProductNode, SearchData};
