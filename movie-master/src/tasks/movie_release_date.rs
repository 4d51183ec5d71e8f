use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use skill_flow::{Context, Result, SpeechletResponse, Task};
use std::sync::Arc;
use tracing::info;

use crate::intents::movie_title;
use crate::omdb::{LookupError, MovieLookup, MovieRecord};

use super::types::{OLD_MOVIE_YEARS, RELEASE_DATE_FORMAT};
use super::utils::respond;

/// Task that tells when a movie came out, or when it is due
pub struct MovieReleaseDateTask {
    lookup: Arc<dyn MovieLookup>,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl MovieReleaseDateTask {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self {
            lookup,
            today: local_today,
        }
    }

    /// Replace the clock used to decide between past and upcoming releases
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

pub fn parse_release_date(released: &str) -> std::result::Result<NaiveDate, LookupError> {
    NaiveDate::parse_from_str(released.trim(), RELEASE_DATE_FORMAT)
        .map_err(|_| LookupError::InvalidDate(released.to_string()))
}

/// Whole years from `from` to `to`, not counting a partial final year
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

pub fn release_date_sentences(
    record: &MovieRecord,
    today: NaiveDate,
) -> std::result::Result<Vec<String>, LookupError> {
    let Some(released) = record.released.as_deref() else {
        return Ok(vec!["Release date for the movie is not available.".to_string()]);
    };

    let release_date = parse_release_date(released)?;

    if release_date > today {
        return Ok(vec![
            format!("This movie is supposed to be released on {}", release_date),
            "Hope it does well!".to_string(),
        ]);
    }

    let mut sentences = vec![format!("This movie was released on {}", release_date)];
    let years = whole_years_between(release_date, today);
    if years > OLD_MOVIE_YEARS {
        sentences.push("Good lord! This movie is really old.".to_string());
        sentences.push(format!("It's been already {} years.", years));
    }
    Ok(sentences)
}

#[async_trait]
impl Task for MovieReleaseDateTask {
    async fn run(&self, context: Context) -> Result<SpeechletResponse> {
        let title = movie_title(&context);
        info!(request_id = %context.request_id(), title = %title, "running task: {}", self.id());

        let today = (self.today)();
        let sentences = self
            .lookup
            .find_by_title(&title, false)
            .await
            .and_then(|record| release_date_sentences(&record, today));

        Ok(respond(
            &title,
            format!("Release date information for movie {}", title),
            sentences,
        ))
    }
}
