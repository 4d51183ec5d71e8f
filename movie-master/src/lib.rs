pub mod config;
pub mod intents;
pub mod omdb;
pub mod service;
pub mod speechlet;
pub mod tasks;

pub use config::{ConfigError, LogFormat, ServiceConfig};
pub use intents::MovieIntent;
pub use omdb::{LookupError, MovieLookup, MovieRecord, OmdbClient, Rating};
pub use service::{AppState, build_router, create_app, create_app_state};
pub use speechlet::MovieMasterSpeechlet;
