// file: src/exporter/mod.rs
// description: output writers module exports

pub mod json;

pub use json::JsonExporter;
