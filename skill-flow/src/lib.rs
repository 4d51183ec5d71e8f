pub mod context;
pub mod envelope;
pub mod error;
pub mod response;
pub mod runner;
pub mod speechlet;
pub mod task;

// Re-export commonly used types
pub use context::Context;
pub use envelope::{
    Intent, IntentRequest, LaunchRequest, RequestEnvelope, Session, SessionEndedRequest, Slot,
    SpeechletRequest,
};
pub use error::{Result, SkillError};
pub use response::{
    Card, Narration, OutputSpeech, Reprompt, ResponseEnvelope, SpeechletResponse, escape_ssml,
};
pub use runner::{AllowList, SpeechletRunner};
pub use speechlet::Speechlet;
pub use task::Task;
