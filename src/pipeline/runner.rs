// file: src/pipeline/runner.rs
// description: runs the search and creations queries sequentially and assembles records
// reference: request -> parse -> transform -> deduplicate

use crate::config::SearchConfig;
use crate::error::Result;
use crate::graphql::queries::{CREATIONS_QUERY, SEARCH_QUERY, creations_variables, search_variables};
use crate::graphql::{CreationsData, GraphQlClient, ProductNode, SearchData};
use crate::models::ModelRecord;
use crate::pipeline::dedup::dedupe_by_link;
use crate::pipeline::progress::{ProgressTracker, RunStats};
use crate::utils::logging::format_step;
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub struct FetchOutcome {
    pub records: Vec<ModelRecord>,
    pub stats: RunStats,
}

pub struct FetchRunner {
    client: GraphQlClient,
    search: SearchConfig,
    show_progress: bool,
}

impl FetchRunner {
    pub fn new(client: GraphQlClient, search: SearchConfig) -> Self {
        Self {
            client,
            search,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Queries each term in turn. A term that fails is logged and skipped.
    pub async fn run_search(&self, terms: &[String]) -> Result<FetchOutcome> {
        info!(
            "Searching {} term(s) against {}",
            terms.len(),
            self.client.endpoint()
        );

        let mut tracker = ProgressTracker::new(terms.len(), self.show_progress);
        let mut collected = Vec::new();

        for (idx, term) in terms.iter().enumerate() {
            tracker.set_message(format_step(idx + 1, terms.len(), term));

            match self.search_term(term).await {
                Ok(products) => {
                    let returned = products.len();
                    let records: Vec<ModelRecord> = products
                        .into_iter()
                        .filter_map(ModelRecord::from_product)
                        .collect();
                    let dropped = returned - records.len();

                    info!(
                        "\"{}\": {} result(s), {} without a download URL",
                        term, returned, dropped
                    );
                    tracker.record_success(records.len(), dropped);
                    collected.extend(records);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    error!("Search for \"{}\" failed: {}", term, e);
                    tracker.record_failure();
                }
            }
        }

        Ok(Self::finish(collected, tracker))
    }

    /// Fetches the authenticated user's creations in a single batch. Any failure is returned.
    pub async fn run_creations(&self, limit: usize) -> Result<FetchOutcome> {
        info!("Fetching up to {} creation(s) from {}", limit, self.client.endpoint());

        let mut tracker = ProgressTracker::new(1, self.show_progress);
        tracker.set_message("my creations".to_string());

        let data: CreationsData = self
            .client
            .execute(CREATIONS_QUERY, Some(creations_variables(limit)))
            .await?;

        let creations = data.into_creations();
        let returned = creations.len();
        let records: Vec<ModelRecord> = creations
            .into_iter()
            .filter_map(ModelRecord::from_creation)
            .collect();
        let dropped = returned - records.len();

        if dropped > 0 {
            warn!("{} creation(s) had no page URL and were skipped", dropped);
        }
        tracker.record_success(records.len(), dropped);

        Ok(Self::finish(records, tracker))
    }

    async fn search_term(&self, term: &str) -> Result<Vec<ProductNode>> {
        debug!("Querying search term \"{}\"", term);
        let data: SearchData = self
            .client
            .execute(SEARCH_QUERY, Some(search_variables(term, &self.search)))
            .await?;
        Ok(data.into_products())
    }

    fn finish(collected: Vec<ModelRecord>, mut tracker: ProgressTracker) -> FetchOutcome {
        let total = collected.len();
        let records = dedupe_by_link(collected);
        tracker.record_duplicates(total - records.len());

        let stats = tracker.finish();
        info!(
            "Collected {} record(s), {} duplicate(s) removed in {:.2}s",
            stats.records_collected,
            stats.duplicates_removed,
            stats.duration.as_secs_f64()
        );

        FetchOutcome { records, stats }
    }
}
