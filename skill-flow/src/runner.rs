//! SpeechletRunner – takes one platform envelope, checks who sent it, and hands the turn to
//! the right [`Speechlet`] callback.
//!
//! The runner is built once at startup and shared by every request:
//! ```rust,ignore
//! let allow_list = AllowList::new(["amzn1.ask.skill.x"]);
//! let runner = SpeechletRunner::new(Arc::new(MySkill::new()), allow_list);
//!
//! // In request handler
//! let envelope = runner.run(request_envelope).await?;
//! ```
//!
//! Order of work for a turn:
//! 1. Reject callers whose application id is not on the [`AllowList`]
//! 2. Call `on_session_started` if the session is marked new
//! 3. Dispatch on the request type and wrap the answer in a [`ResponseEnvelope`]
//!
//! Lifecycle hooks never fail a turn: their errors are logged and dropped.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    envelope::{RequestEnvelope, Session, SpeechletRequest},
    error::{Result, SkillError},
    response::{ResponseEnvelope, SpeechletResponse},
    speechlet::Speechlet,
};

/// Application ids allowed to call the skill. An empty list accepts everyone.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    ids: HashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn permits(&self, application_id: Option<&str>) -> bool {
        if self.ids.is_empty() {
            return true;
        }
        application_id.is_some_and(|id| self.ids.contains(id))
    }
}

#[derive(Clone)]
pub struct SpeechletRunner {
    speechlet: Arc<dyn Speechlet>,
    allow_list: AllowList,
}

impl SpeechletRunner {
    pub fn new(speechlet: Arc<dyn Speechlet>, allow_list: AllowList) -> Self {
        if allow_list.is_empty() {
            warn!("Application id allow list is empty, every caller will be accepted");
        }
        Self {
            speechlet,
            allow_list,
        }
    }

    /// Handle exactly one turn.
    pub async fn run(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope> {
        let application_id = envelope.application_id().map(str::to_string);
        if !self.allow_list.permits(application_id.as_deref()) {
            warn!(
                application_id = ?application_id,
                "Rejecting request from unsupported application"
            );
            return Err(SkillError::UnsupportedApplication(application_id));
        }

        let session = envelope.session.unwrap_or_default();
        let request_id = envelope.request.request_id().to_string();

        if session.new {
            if let Err(e) = self.speechlet.on_session_started(&request_id, &session).await {
                warn!(request_id = %request_id, error = %e, "onSessionStarted hook failed");
            }
        }

        let response = self.dispatch(envelope.request, &session).await?;
        Ok(ResponseEnvelope::new(response))
    }

    async fn dispatch(
        &self,
        request: SpeechletRequest,
        session: &Session,
    ) -> Result<SpeechletResponse> {
        match request {
            SpeechletRequest::LaunchRequest(launch) => {
                self.speechlet.on_launch(&launch, session).await
            }
            SpeechletRequest::IntentRequest(intent) => {
                self.speechlet.on_intent(&intent, session).await
            }
            SpeechletRequest::SessionEndedRequest(ended) => {
                info!(
                    request_id = %ended.request_id,
                    reason = ?ended.reason,
                    "Session ended by platform"
                );
                if let Err(e) = self.speechlet.on_session_ended(&ended, session).await {
                    warn!(request_id = %ended.request_id, error = %e, "onSessionEnded hook failed");
                }
                Ok(SpeechletResponse::empty())
            }
            SpeechletRequest::Unsupported => Err(SkillError::InvalidRequest(
                "unsupported request type".to_string(),
            )),
        }
    }
}
