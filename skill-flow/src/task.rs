use async_trait::async_trait;

use crate::{context::Context, error::Result, response::SpeechletResponse};

/// Core trait that every intent handler implements
#[async_trait]
pub trait Task: Send + Sync {
    /// Unique identifier for this task
    fn id(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Answer the turn described by `context`
    async fn run(&self, context: Context) -> Result<SpeechletResponse>;
}
