use async_trait::async_trait;
use skill_flow::{Context, Result, SpeechletResponse, Task};
use std::sync::Arc;
use tracing::info;

use crate::intents::movie_title;
use crate::omdb::{MovieLookup, MovieRecord};

use super::types::MAX_LISTED_ACTORS;
use super::utils::respond;

/// Task that lists the leading cast of a movie
pub struct MovieActorsTask {
    lookup: Arc<dyn MovieLookup>,
}

impl MovieActorsTask {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self { lookup }
    }
}

/// Up to [`MAX_LISTED_ACTORS`] names in billing order, then the closing sentence
pub fn actor_sentences(record: &MovieRecord) -> Vec<String> {
    let names: Vec<&str> = record
        .actors
        .as_deref()
        .map(|actors| {
            actors
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .take(MAX_LISTED_ACTORS)
                .collect()
        })
        .unwrap_or_default();

    if names.is_empty() {
        return vec!["There are no actors listed for this particular title.".to_string()];
    }

    names
        .into_iter()
        .map(|name| format!("{}, ", name))
        .chain(std::iter::once(
            "are the prominent casting crew in this movie.".to_string(),
        ))
        .collect()
}

#[async_trait]
impl Task for MovieActorsTask {
    async fn run(&self, context: Context) -> Result<SpeechletResponse> {
        let title = movie_title(&context);
        info!(request_id = %context.request_id(), title = %title, "running task: {}", self.id());

        let sentences = self
            .lookup
            .find_by_title(&title, false)
            .await
            .map(|record| actor_sentences(&record));

        Ok(respond(&title, format!("Actors in movie {}", title), sentences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{StubLookup, card, title_context};

    fn with_actors(actors: &str) -> MovieRecord {
        MovieRecord {
            actors: Some(actors.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn lists_only_the_first_five() {
        let sentences = actor_sentences(&with_actors("A, B, C, D, E, F, G"));
        assert_eq!(
            sentences,
            vec![
                "A, ",
                "B, ",
                "C, ",
                "D, ",
                "E, ",
                "are the prominent casting crew in this movie."
            ]
        );
    }

    #[test]
    fn trims_names_around_commas() {
        let sentences = actor_sentences(&with_actors("Marlon Brando ,Al Pacino,  James Caan"));
        assert_eq!(sentences[0], "Marlon Brando, ");
        assert_eq!(sentences[1], "Al Pacino, ");
        assert_eq!(sentences[2], "James Caan, ");
        assert_eq!(sentences.len(), 4);
    }

    #[test]
    fn no_names_means_no_actors() {
        let expected = vec!["There are no actors listed for this particular title."];
        assert_eq!(actor_sentences(&with_actors(" , ,")), expected);
        assert_eq!(actor_sentences(&MovieRecord::default()), expected);
    }

    #[tokio::test]
    async fn card_carries_the_cast() {
        let task = MovieActorsTask::new(Arc::new(StubLookup::with_record(with_actors(
            "Keanu Reeves, Laurence Fishburne",
        ))));

        let response = task
            .run(title_context("GetMovieActorsIntent", "The Matrix"))
            .await
            .unwrap();

        assert_eq!(
            card(&response),
            (
                "Actors in movie The Matrix",
                "Keanu Reeves,  Laurence Fishburne,  are the prominent casting crew in this movie. "
            )
        );
    }
}
