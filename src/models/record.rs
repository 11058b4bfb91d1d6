// file: src/models/record.rs
// description: flattened model record written to the output file, mapped from api nodes
// reference: internal data structures

use crate::graphql::response::{CreationNode, ProductNode};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};

/// One marketplace listing. `link` is the unique key within an output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub title: String,
    pub image: String,
    pub tags: Vec<String>,
    pub link: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_cents: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stl_file_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stl_image_url: Option<String>,
}

impl ModelRecord {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        tags: Vec<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            tags,
            link: link.into(),
            description: None,
            downloads: None,
            views: None,
            sales_cents: None,
            stl_file_url: None,
            stl_image_url: None,
        }
    }

    /// Maps a search hit. Items without a download URL are dropped.
    pub fn from_product(node: ProductNode) -> Option<Self> {
        let link = Validator::non_blank(node.download_url.as_deref())?.to_string();

        let tags = node
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(|tag| Validator::non_blank(tag.name.as_deref()).map(str::to_string))
            .collect();

        Some(Self::new(
            node.name.unwrap_or_default(),
            node.cover_url.unwrap_or_default(),
            tags,
            link,
        ))
    }

    /// Maps one of the authenticated user's creations. Only a missing page URL drops it;
    /// counters default to zero.
    pub fn from_creation(node: CreationNode) -> Option<Self> {
        let link = Validator::non_blank(node.url.as_deref())?.to_string();

        let tags = node
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter(|tag| !tag.trim().is_empty())
            .collect();

        let first_blueprint = node.blueprints.unwrap_or_default().into_iter().next();
        let (stl_file_url, stl_image_url) = match first_blueprint {
            Some(bp) => (bp.file_url, bp.image_url),
            None => (None, None),
        };

        let mut record = Self::new(
            node.name.unwrap_or_default(),
            node.illustration_image_url.unwrap_or_default(),
            tags,
            link,
        );
        record.description = node.description;
        record.downloads = Some(node.downloads_count.unwrap_or(0));
        record.views = Some(node.views_count.unwrap_or(0));
        record.sales_cents = Some(
            node.total_sales_amount
                .and_then(|amount| amount.cents)
                .unwrap_or(0),
        );
        record.stl_file_url = stl_file_url;
        record.stl_image_url = stl_image_url;

        Some(record)
    }
}
