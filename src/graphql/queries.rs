// file: src/graphql/queries.rs
// description: graphql query documents and variable builders for the marketplace api

use crate::config::SearchConfig;
use serde_json::{Value, json};

pub const SEARCH_QUERY: &str = r#"
query Search($input: SearchInput!) {
  search(input: $input) {
    nodes {
      ... on Product {
        id
        name
        slug
        coverUrl
        tags {
          name
        }
        downloadUrl
      }
    }
  }
}
"#;

pub const CREATIONS_QUERY: &str = r#"
query MyCreations($limit: Int!) {
  myself {
    creationsBatch(limit: $limit) {
      results {
        name(locale: EN)
        url(locale: EN)
        illustrationImageUrl
        tags(locale: EN)
        description(locale: EN)
        downloadsCount
        viewsCount
        totalSalesAmount(currency: EUR) {
          cents
        }
        blueprints {
          fileUrl
          imageUrl
        }
      }
    }
  }
}
"#;

pub fn search_variables(term: &str, search: &SearchConfig) -> Value {
    json!({
        "input": {
            "q": term,
            "types": search.types,
            "sort": search.sort,
        }
    })
}

pub fn creations_variables(limit: usize) -> Value {
    json!({ "limit": limit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_variables_shape() {
        let search = SearchConfig::default();
        assert_eq!(
            search_variables("final fantasy", &search),
            json!({
                "input": {
                    "q": "final fantasy",
                    "types": ["product"],
                    "sort": "LATEST"
                }
            })
        );
    }

    #[test]
    fn test_creations_variables_shape() {
        assert_eq!(creations_variables(25), json!({ "limit": 25 }));
    }

    #[test]
    fn test_query_documents_name_their_variables() {
        assert!(SEARCH_QUERY.contains("$input: SearchInput!"));
        assert!(CREATIONS_QUERY.contains("$limit: Int!"));
    }
}
