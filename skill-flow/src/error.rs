use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Invalid Intent: {}", .0.as_deref().unwrap_or("<none>"))]
    InvalidIntent(Option<String>),

    #[error("Unsupported application id: {}", .0.as_deref().unwrap_or("<none>"))]
    UnsupportedApplication(Option<String>),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, SkillError>;
