use async_trait::async_trait;
use skill_flow::{Context, Result, SpeechletResponse, Task};
use std::sync::Arc;
use tracing::info;

use crate::intents::movie_title;
use crate::omdb::{MovieLookup, MovieRecord};

use super::utils::respond;

/// Task that names the director of a movie
pub struct MovieDirectorTask {
    lookup: Arc<dyn MovieLookup>,
}

impl MovieDirectorTask {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self { lookup }
    }
}

pub fn director_sentences(record: &MovieRecord) -> Vec<String> {
    match &record.director {
        Some(director) => vec![format!("{} directed this movie.", director)],
        None => vec!["There are no directors listed for this particular title.".to_string()],
    }
}

#[async_trait]
impl Task for MovieDirectorTask {
    async fn run(&self, context: Context) -> Result<SpeechletResponse> {
        let title = movie_title(&context);
        info!(request_id = %context.request_id(), title = %title, "running task: {}", self.id());

        let sentences = self
            .lookup
            .find_by_title(&title, false)
            .await
            .map(|record| director_sentences(&record));

        Ok(respond(&title, format!("Director for movie {}", title), sentences))
    }
}
