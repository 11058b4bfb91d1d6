// file: src/graphql/response.rs
// description: typed graphql envelopes and node payloads returned by the marketplace api
// reference: every node field is optional so partial items never fail a whole batch

use serde::Deserialize;
use serde_json::Value;

/// Top-level `{data, errors}` wrapper of every GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlEnvelope {
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

impl GraphQlEnvelope {
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|e| e.message.clone())
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchData {
    pub search: Option<SearchConnection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchConnection {
    pub nodes: Option<Vec<Option<ProductNode>>>,
}

impl SearchData {
    /// Product nodes in response order; null entries are skipped.
    pub fn into_products(self) -> Vec<ProductNode> {
        self.search
            .and_then(|s| s.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Option<Vec<TagNode>>,
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagNode {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreationsData {
    pub myself: Option<Myself>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Myself {
    pub creations_batch: Option<CreationsBatch>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreationsBatch {
    pub results: Option<Vec<Option<CreationNode>>>,
}

impl CreationsData {
    pub fn into_creations(self) -> Vec<CreationNode> {
        self.myself
            .and_then(|m| m.creations_batch)
            .and_then(|b| b.results)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationNode {
    pub name: Option<String>,
    pub url: Option<String>,
    pub illustration_image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub downloads_count: Option<u64>,
    pub views_count: Option<u64>,
    pub total_sales_amount: Option<Money>,
    pub blueprints: Option<Vec<Blueprint>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Money {
    pub cents: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub file_url: Option<String>,
    pub image_url: Option<String>,
}
