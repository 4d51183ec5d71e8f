use std::collections::HashMap;

use crate::envelope::{IntentRequest, Session};

/// Read-only view of a single intent turn handed to a [`crate::Task`]
#[derive(Clone, Debug, Default)]
pub struct Context {
    request_id: String,
    session_id: String,
    intent_name: String,
    slots: HashMap<String, String>,
}

impl Context {
    pub fn new(
        request_id: impl Into<String>,
        session_id: impl Into<String>,
        intent_name: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            session_id: session_id.into(),
            intent_name: intent_name.into(),
            slots: HashMap::new(),
        }
    }

    /// Build the context for an intent request. Slots without a value are
    /// left out, so they read the same as slots that were never sent.
    pub fn from_request(request: &IntentRequest, session: &Session) -> Self {
        let mut context = Self::new(&request.request_id, &session.session_id, "");
        if let Some(intent) = &request.intent {
            context.intent_name = intent.name.clone();
            context.slots = intent
                .slots
                .iter()
                .filter_map(|(name, slot)| slot.value.clone().map(|v| (name.clone(), v)))
                .collect();
        }
        context
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn intent_name(&self) -> &str {
        &self.intent_name
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }
}
