use async_trait::async_trait;
use skill_flow::{Context, Result, SpeechletResponse, Task};
use std::sync::Arc;
use tracing::info;

use crate::intents::movie_title;
use crate::omdb::MovieLookup;

use super::utils::respond;

/// Task that counts the titles matching a fuzzy search
pub struct MovieListingsTask {
    lookup: Arc<dyn MovieLookup>,
}

impl MovieListingsTask {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self { lookup }
    }
}

pub fn listings_sentence(title: &str, total: u64) -> String {
    format!("Found {} movie listings with title {} in it.", total, title)
}

#[async_trait]
impl Task for MovieListingsTask {
    async fn run(&self, context: Context) -> Result<SpeechletResponse> {
        let title = movie_title(&context);
        info!(request_id = %context.request_id(), title = %title, "running task: {}", self.id());

        let sentences = self
            .lookup
            .search(&title)
            .await
            .map(|total| vec![listings_sentence(&title, total)]);

        Ok(respond(
            &title,
            format!("Total Listings for movie {}", title),
            sentences,
        ))
    }
}
