use skill_flow::{Narration, OutputSpeech, SpeechletResponse, escape_ssml};
use tracing::warn;

use crate::omdb::LookupError;

use super::types::SPEECH_REPROMPT_TEXT;

/// Package the sentences of a successful lookup: SSML speech, plain card and
/// the standard reprompt. The conversation stays open.
pub fn movie_answer<I, S>(card_title: String, sentences: I) -> SpeechletResponse
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut narration = Narration::new();
    narration.say_all(sentences);

    SpeechletResponse::ask(
        OutputSpeech::ssml(narration.ssml()),
        OutputSpeech::plain(SPEECH_REPROMPT_TEXT),
    )
    .with_card(card_title, narration.card_text())
}

/// Terminating answer used whenever a lookup fails, whatever the cause
pub fn no_movies_found(title: &str) -> SpeechletResponse {
    SpeechletResponse::tell(OutputSpeech::ssml(format!(
        "<speak><p>No movies were found under the title {}. Try again with a different name.</p></speak>",
        escape_ssml(title)
    )))
}

/// Collapse the outcome of a lookup into the response the user hears.
/// Partial output is never spoken: any error yields [`no_movies_found`].
pub fn respond(
    title: &str,
    card_title: String,
    sentences: Result<Vec<String>, LookupError>,
) -> SpeechletResponse {
    match sentences {
        Ok(sentences) => movie_answer(card_title, sentences),
        Err(e) => {
            warn!(title = %title, error = %e, "Movie lookup failed");
            no_movies_found(title)
        }
    }
}

/// Parse a rating the movie service sent as text
pub fn parse_rating(field: &'static str, value: &str) -> Result<f32, LookupError> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|_| LookupError::InvalidRating {
            field,
            value: value.to_string(),
        })
}
