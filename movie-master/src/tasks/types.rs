/// Instructions read on help and used as the reprompt after every answer
pub const SPEECH_REPROMPT_TEXT: &str = "With Movie Master, you can get any information related to a movie. \
For example, you could say what do you know about the god father movie, who acted in the god father, \
What's the rating for the god father movie, Who directed the god father, or In which year did the god father movie came out. \
Now, What would you like to know?";

pub const HELP_REPROMPT_TEXT: &str = "What information do you need?";

pub const WELCOME_TEXT: &str = "Welcome to Movie Master. What would you like to know about?";

pub const GOODBYE_TEXT: &str = "Goodbye";

/// Highest IMDB rating that still earns the coffee shop advice
pub const POOR_IMDB_RATING: f32 = 5.0;

/// Combined critic and IMDB rating above which a movie is called good
pub const GOOD_COMBINED_RATING: f32 = 16.0;

/// Release dates further back than this many whole years get commented on
pub const OLD_MOVIE_YEARS: i32 = 30;

pub const MAX_LISTED_ACTORS: usize = 5;

/// Format the movie service uses for release dates, e.g. "24 Mar 1972"
pub const RELEASE_DATE_FORMAT: &str = "%d %b %Y";
