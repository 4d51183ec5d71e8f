use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Top level JSON document the voice platform posts for every turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    pub session: Option<Session>,
    pub context: Option<PlatformContext>,
    pub request: SpeechletRequest,
}

impl RequestEnvelope {
    /// Application id of the caller, taken from the session and falling back
    /// to the device context when the session does not carry one.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .map(|a| a.application_id.as_str())
            .or_else(|| {
                self.context
                    .as_ref()
                    .and_then(|c| c.system.as_ref())
                    .and_then(|s| s.application.as_ref())
                    .map(|a| a.application_id.as_str())
            })
    }
}

/// Conversation context owned by the platform. The skill only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Option<Application>,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformContext {
    #[serde(rename = "System")]
    pub system: Option<SystemState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemState {
    pub application: Option<Application>,
}

/// The kind of turn the platform is delivering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpeechletRequest {
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    /// Any request type this framework does not handle (audio player events, etc.)
    #[serde(other)]
    Unsupported,
}

impl SpeechletRequest {
    pub fn request_id(&self) -> &str {
        match self {
            SpeechletRequest::LaunchRequest(r) => &r.request_id,
            SpeechletRequest::IntentRequest(r) => &r.request_id,
            SpeechletRequest::SessionEndedRequest(r) => &r.request_id,
            SpeechletRequest::Unsupported => "",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub request_id: String,
    pub timestamp: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub request_id: String,
    pub timestamp: Option<String>,
    pub locale: Option<String>,
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    pub request_id: String,
    pub timestamp: Option<String>,
    pub locale: Option<String>,
    pub reason: Option<String>,
}

/// A named user request with the slot values the platform extracted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    pub fn slot_value(&self, slot_name: &str) -> Option<&str> {
        self.slots.get(slot_name).and_then(|s| s.value.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_intent_request_with_slots() {
        let raw = json!({
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "session-1",
                "application": { "applicationId": "app-1" },
                "attributes": {},
                "user": { "userId": "user-1" }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "req-1",
                "timestamp": "2016-10-27T18:21:44Z",
                "locale": "en-US",
                "intent": {
                    "name": "GetMoviePlotIntent",
                    "slots": { "name": { "name": "name", "value": "the godfather" } }
                }
            }
        });

        let envelope: RequestEnvelope = serde_json::from_value(raw).unwrap();
        assert_eq!(envelope.application_id(), Some("app-1"));

        let SpeechletRequest::IntentRequest(request) = envelope.request else {
            panic!("expected an intent request");
        };
        let intent = request.intent.unwrap();
        assert_eq!(intent.name, "GetMoviePlotIntent");
        assert_eq!(intent.slot_value("name"), Some("the godfather"));
        assert_eq!(intent.slot_value("year"), None);
    }

    #[test]
    fn falls_back_to_context_application_id() {
        let raw = json!({
            "context": { "System": { "application": { "applicationId": "app-2" } } },
            "request": { "type": "LaunchRequest", "requestId": "req-2" }
        });

        let envelope: RequestEnvelope = serde_json::from_value(raw).unwrap();
        assert_eq!(envelope.application_id(), Some("app-2"));
        assert!(matches!(envelope.request, SpeechletRequest::LaunchRequest(_)));
    }

    #[test]
    fn unknown_request_type_is_unsupported() {
        let raw = json!({
            "request": { "type": "AudioPlayer.PlaybackStarted", "requestId": "req-3" }
        });

        let envelope: RequestEnvelope = serde_json::from_value(raw).unwrap();
        assert!(matches!(envelope.request, SpeechletRequest::Unsupported));
    }
}
