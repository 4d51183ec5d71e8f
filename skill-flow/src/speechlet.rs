use async_trait::async_trait;

use crate::{
    envelope::{IntentRequest, LaunchRequest, Session, SessionEndedRequest},
    error::Result,
    response::SpeechletResponse,
};

/// Lifecycle callbacks a skill implements. [`crate::SpeechletRunner`] calls
/// exactly one of `on_launch`, `on_intent` or `on_session_ended` per turn,
/// preceded by `on_session_started` when the platform opens a new session.
/// Errors from the two session hooks are logged by the runner and do not
/// change the response.
#[async_trait]
pub trait Speechlet: Send + Sync {
    async fn on_session_started(&self, _request_id: &str, _session: &Session) -> Result<()> {
        Ok(())
    }

    async fn on_launch(&self, request: &LaunchRequest, session: &Session)
    -> Result<SpeechletResponse>;

    async fn on_intent(&self, request: &IntentRequest, session: &Session)
    -> Result<SpeechletResponse>;

    async fn on_session_ended(
        &self,
        _request: &SessionEndedRequest,
        _session: &Session,
    ) -> Result<()> {
        Ok(())
    }
}
