use async_trait::async_trait;
use skill_flow::{Context, Result, SpeechletResponse, Task};
use std::sync::Arc;
use tracing::info;

use crate::intents::movie_title;
use crate::omdb::{MovieLookup, MovieRecord};

use super::utils::respond;

/// Task that summarizes plot, cast, director and rating in one answer
pub struct MovieInfoTask {
    lookup: Arc<dyn MovieLookup>,
}

impl MovieInfoTask {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self { lookup }
    }
}

pub fn info_sentences(title: &str, record: &MovieRecord) -> Vec<String> {
    let mut sentences = vec![format!("For movie {}, ", title)];

    if let Some(plot) = &record.plot {
        sentences.push(format!("Plot for the movie is, {}", plot));
    }
    if let Some(actors) = &record.actors {
        sentences.push(format!("{} acted in this movie.", actors));
    }
    if let Some(director) = &record.director {
        sentences.push(format!("{} directed this movie.", director));
    }
    if let Some(rating) = record.imdb_rating.value() {
        sentences.push(format!("This movie is rated {} on IMDB.", rating));
    }

    // Only the prefix: the service knew the title but had nothing to say
    if sentences.len() == 1 {
        sentences.push(format!("No movies were found under the title {}", title));
    }

    sentences
}

#[async_trait]
impl Task for MovieInfoTask {
    async fn run(&self, context: Context) -> Result<SpeechletResponse> {
        let title = movie_title(&context);
        info!(request_id = %context.request_id(), title = %title, "running task: {}", self.id());

        let sentences = self
            .lookup
            .find_by_title(&title, false)
            .await
            .map(|record| info_sentences(&title, &record));

        Ok(respond(
            &title,
            format!("Information for movie {}", title),
            sentences,
        ))
    }
}
