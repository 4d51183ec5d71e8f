use skill_flow::Context;
use tracing::error;

/// Name of the slot carrying the spoken movie title
pub const TITLE_SLOT: &str = "name";

/// Every intent the skill answers. Matching on this enum is exhaustive, so a
/// new intent cannot be added without deciding how it is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieIntent {
    Info,
    Listings,
    Rating,
    Director,
    Actors,
    Plot,
    ReleaseDate,
    Help,
    Stop,
    Cancel,
}

impl MovieIntent {
    pub const ALL: [MovieIntent; 10] = [
        MovieIntent::Info,
        MovieIntent::Listings,
        MovieIntent::Rating,
        MovieIntent::Director,
        MovieIntent::Actors,
        MovieIntent::Plot,
        MovieIntent::ReleaseDate,
        MovieIntent::Help,
        MovieIntent::Stop,
        MovieIntent::Cancel,
    ];

    /// Exact, case-sensitive match on the platform intent name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|intent| intent.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            MovieIntent::Info => "GetMovieInfoIntent",
            MovieIntent::Listings => "GetMovieListingsIntent",
            MovieIntent::Rating => "GetMovieRatingIntent",
            MovieIntent::Director => "GetMovieDirectorIntent",
            MovieIntent::Actors => "GetMovieActorsIntent",
            MovieIntent::Plot => "GetMoviePlotIntent",
            MovieIntent::ReleaseDate => "GetMovieReleaseDateIntent",
            MovieIntent::Help => "AMAZON.HelpIntent",
            MovieIntent::Stop => "AMAZON.StopIntent",
            MovieIntent::Cancel => "AMAZON.CancelIntent",
        }
    }
}

/// Movie title spoken by the user. Periods are dropped because the platform
/// sometimes transcribes them into titles; a missing slot becomes "".
pub fn movie_title(context: &Context) -> String {
    match context.slot(TITLE_SLOT) {
        Some(value) => value.replace('.', ""),
        None => {
            error!(
                request_id = %context.request_id(),
                intent = %context.intent_name(),
                "slot value for intent is empty"
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_name_is_recognized() {
        for intent in MovieIntent::ALL {
            assert_eq!(MovieIntent::from_name(intent.name()), Some(intent));
        }
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(MovieIntent::from_name("getmovieinfointent"), None);
        assert_eq!(MovieIntent::from_name("GetMovieInfoIntent "), None);
        assert_eq!(MovieIntent::from_name("HelpIntent"), None);
        assert_eq!(MovieIntent::from_name(""), None);
    }

    #[test]
    fn title_drops_periods() {
        let context =
            Context::new("r", "s", "GetMoviePlotIntent").with_slot(TITLE_SLOT, "mr. smith.");
        assert_eq!(movie_title(&context), "mr smith");
    }

    #[test]
    fn missing_title_is_empty() {
        let context = Context::new("r", "s", "GetMoviePlotIntent");
        assert_eq!(movie_title(&context), "");
    }
}
