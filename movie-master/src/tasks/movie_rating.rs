use async_trait::async_trait;
use skill_flow::{Context, Result, SpeechletResponse, Task};
use std::sync::Arc;
use tracing::info;

use crate::intents::movie_title;
use crate::omdb::{LookupError, MovieLookup, MovieRecord};

use super::types::{GOOD_COMBINED_RATING, POOR_IMDB_RATING};
use super::utils::{parse_rating, respond};

/// Task that reports critic and IMDB ratings with a verdict
pub struct MovieRatingTask {
    lookup: Arc<dyn MovieLookup>,
}

impl MovieRatingTask {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self { lookup }
    }
}

/// The verdict sentences are not mutually exclusive. "No ratings" is said when
/// both ratings were left blank or IMDB explicitly marked its rating "N/A", so
/// it can follow a critic rating.
pub fn rating_sentences(
    title: &str,
    record: &MovieRecord,
) -> std::result::Result<Vec<String>, LookupError> {
    let mut sentences = vec![format!("For movie {}, ", title)];
    let mut combined = 0.0_f32;

    if let Some(tomato) = record.tomato_rating.value() {
        combined += parse_rating("Rotten Tomatoes", tomato)?;
        sentences.push(format!("Rating on Rotten Tomatoes is {}", tomato));
    }

    if let Some(imdb) = record.imdb_rating.value() {
        let rating = parse_rating("IMDB", imdb)?;
        combined += rating;
        sentences.push(format!("IMDB rating is {}", imdb));
        if rating <= POOR_IMDB_RATING {
            sentences.push(
                "If you are planning on watching this, going to a coffee shop would be a better option."
                    .to_string(),
            );
        }
    }

    if combined > GOOD_COMBINED_RATING {
        sentences.push("Well, it sure does look like a good movie.".to_string());
    }

    if (record.imdb_rating.is_blank() && record.tomato_rating.is_blank())
        || record.imdb_rating.is_not_available()
    {
        sentences.push("No Movie ratings were available for this particular title.".to_string());
    }

    Ok(sentences)
}

#[async_trait]
impl Task for MovieRatingTask {
    async fn run(&self, context: Context) -> Result<SpeechletResponse> {
        let title = movie_title(&context);
        info!(request_id = %context.request_id(), title = %title, "running task: {}", self.id());

        let sentences = self
            .lookup
            .find_by_title(&title, true)
            .await
            .and_then(|record| rating_sentences(&title, &record));

        Ok(respond(&title, format!("Rating for movie {}", title), sentences))
    }
}
