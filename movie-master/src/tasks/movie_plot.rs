use async_trait::async_trait;
use skill_flow::{Context, Result, SpeechletResponse, Task};
use std::sync::Arc;
use tracing::info;

use crate::intents::movie_title;
use crate::omdb::{MovieLookup, MovieRecord};

use super::utils::respond;

/// Task that reads out the plot of a movie
pub struct MoviePlotTask {
    lookup: Arc<dyn MovieLookup>,
}

impl MoviePlotTask {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self { lookup }
    }
}

pub fn plot_sentences(record: &MovieRecord) -> Vec<String> {
    match &record.plot {
        Some(plot) => vec![format!("Plot for the movie is, {}", plot)],
        None => vec!["There is no movie plot listed for this particular title.".to_string()],
    }
}

#[async_trait]
impl Task for MoviePlotTask {
    async fn run(&self, context: Context) -> Result<SpeechletResponse> {
        let title = movie_title(&context);
        info!(request_id = %context.request_id(), title = %title, "running task: {}", self.id());

        let sentences = self
            .lookup
            .find_by_title(&title, false)
            .await
            .map(|record| plot_sentences(&record));

        Ok(respond(&title, format!("Story for movie {}", title), sentences))
    }
}
