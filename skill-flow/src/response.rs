use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Text the device speaks, either plain or SSML marked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        OutputSpeech::PlainText { text: text.into() }
    }

    pub fn ssml(ssml: impl Into<String>) -> Self {
        OutputSpeech::Ssml { ssml: ssml.into() }
    }

    /// The raw text regardless of the speech type
    pub fn text(&self) -> &str {
        match self {
            OutputSpeech::PlainText { text } => text,
            OutputSpeech::Ssml { ssml } => ssml,
        }
    }
}

/// Visual summary shown in the companion app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// What a skill answers for a single turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

impl SpeechletResponse {
    /// Terminating response: speaks and ends the conversation
    pub fn tell(speech: OutputSpeech) -> Self {
        Self {
            output_speech: Some(speech),
            card: None,
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Non-terminating response: speaks and waits for the user, repeating
    /// `reprompt` if they stay silent
    pub fn ask(speech: OutputSpeech, reprompt: OutputSpeech) -> Self {
        Self {
            output_speech: Some(speech),
            card: None,
            reprompt: Some(Reprompt {
                output_speech: reprompt,
            }),
            should_end_session: false,
        }
    }

    /// Terminating response without any speech
    pub fn empty() -> Self {
        Self {
            output_speech: None,
            card: None,
            reprompt: None,
            should_end_session: true,
        }
    }

    pub fn with_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card = Some(Card::Simple {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(OutputSpeech::text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: HashMap<String, Value>,
    pub response: SpeechletResponse,
}

impl ResponseEnvelope {
    pub fn new(response: SpeechletResponse) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes: HashMap::new(),
            response,
        }
    }
}

/// Escape the characters SSML treats as markup
pub fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Accumulates the same sentences twice: as SSML paragraphs for speech and
/// as plain text for the card. Only the speech copy is escaped.
#[derive(Debug, Clone, Default)]
pub struct Narration {
    speech: String,
    card: String,
}

impl Narration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, sentence: impl AsRef<str>) -> &mut Self {
        let sentence = sentence.as_ref();
        self.speech.push_str("<p>");
        self.speech.push_str(&escape_ssml(sentence));
        self.speech.push_str("</p> ");
        self.card.push_str(sentence);
        self.card.push(' ');
        self
    }

    pub fn say_all<I, S>(&mut self, sentences: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sentence in sentences {
            self.say(sentence);
        }
        self
    }

    pub fn ssml(&self) -> String {
        format!("<speak>{}</speak>", self.speech)
    }

    pub fn card_text(&self) -> &str {
        &self.card
    }
}
