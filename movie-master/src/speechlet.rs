use async_trait::async_trait;
use skill_flow::{
    Context, IntentRequest, LaunchRequest, OutputSpeech, Result, Session, SessionEndedRequest,
    SkillError, Speechlet, SpeechletResponse, Task,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::intents::MovieIntent;
use crate::omdb::MovieLookup;
use crate::tasks::types::{GOODBYE_TEXT, HELP_REPROMPT_TEXT, SPEECH_REPROMPT_TEXT, WELCOME_TEXT};
use crate::tasks::{
    MovieActorsTask, MovieDirectorTask, MovieInfoTask, MovieListingsTask, MoviePlotTask,
    MovieRatingTask, MovieReleaseDateTask,
};

/// Routes every turn of the Movie Master skill to the matching task
pub struct MovieMasterSpeechlet {
    info: MovieInfoTask,
    listings: MovieListingsTask,
    rating: MovieRatingTask,
    director: MovieDirectorTask,
    actors: MovieActorsTask,
    plot: MoviePlotTask,
    release_date: MovieReleaseDateTask,
}

impl MovieMasterSpeechlet {
    /// All tasks share the one lookup client
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        Self {
            info: MovieInfoTask::new(lookup.clone()),
            listings: MovieListingsTask::new(lookup.clone()),
            rating: MovieRatingTask::new(lookup.clone()),
            director: MovieDirectorTask::new(lookup.clone()),
            actors: MovieActorsTask::new(lookup.clone()),
            plot: MoviePlotTask::new(lookup.clone()),
            release_date: MovieReleaseDateTask::new(lookup),
        }
    }

    pub async fn handle(&self, intent: MovieIntent, context: Context) -> Result<SpeechletResponse> {
        match intent {
            MovieIntent::Info => self.info.run(context).await,
            MovieIntent::Listings => self.listings.run(context).await,
            MovieIntent::Rating => self.rating.run(context).await,
            MovieIntent::Director => self.director.run(context).await,
            MovieIntent::Actors => self.actors.run(context).await,
            MovieIntent::Plot => self.plot.run(context).await,
            MovieIntent::ReleaseDate => self.release_date.run(context).await,
            MovieIntent::Help => Ok(help_response()),
            MovieIntent::Stop | MovieIntent::Cancel => Ok(goodbye_response()),
        }
    }
}

pub fn welcome_response() -> SpeechletResponse {
    SpeechletResponse::ask(
        OutputSpeech::plain(WELCOME_TEXT),
        OutputSpeech::plain(SPEECH_REPROMPT_TEXT),
    )
}

pub fn help_response() -> SpeechletResponse {
    SpeechletResponse::ask(
        OutputSpeech::plain(SPEECH_REPROMPT_TEXT),
        OutputSpeech::plain(HELP_REPROMPT_TEXT),
    )
}

pub fn goodbye_response() -> SpeechletResponse {
    SpeechletResponse::tell(OutputSpeech::plain(GOODBYE_TEXT))
}

#[async_trait]
impl Speechlet for MovieMasterSpeechlet {
    async fn on_session_started(&self, request_id: &str, session: &Session) -> Result<()> {
        info!(request_id = %request_id, session_id = %session.session_id, "onSessionStarted");
        Ok(())
    }

    async fn on_launch(
        &self,
        request: &LaunchRequest,
        session: &Session,
    ) -> Result<SpeechletResponse> {
        info!(request_id = %request.request_id, session_id = %session.session_id, "onLaunch");
        Ok(welcome_response())
    }

    async fn on_intent(
        &self,
        request: &IntentRequest,
        session: &Session,
    ) -> Result<SpeechletResponse> {
        info!(request_id = %request.request_id, session_id = %session.session_id, "onIntent");

        let intent_name = request.intent.as_ref().map(|i| i.name.clone());
        let Some(intent) = intent_name.as_deref().and_then(MovieIntent::from_name) else {
            error!(request_id = %request.request_id, intent = ?intent_name, "Invalid Intent");
            return Err(SkillError::InvalidIntent(intent_name));
        };

        self.handle(intent, Context::from_request(request, session))
            .await
    }

    async fn on_session_ended(
        &self,
        request: &SessionEndedRequest,
        session: &Session,
    ) -> Result<()> {
        info!(request_id = %request.request_id, session_id = %session.session_id, "onSessionEnded");
        Ok(())
    }
}
