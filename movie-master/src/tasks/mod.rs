// Query tasks, one per movie intent
pub mod movie_actors;
pub mod movie_director;
pub mod movie_info;
pub mod movie_listings;
pub mod movie_plot;
pub mod movie_rating;
pub mod movie_release_date;

// Shared modules
pub mod types;
pub mod utils;

// Re-export task implementations
pub use movie_actors::MovieActorsTask;
pub use movie_director::MovieDirectorTask;
pub use movie_info::MovieInfoTask;
pub use movie_listings::MovieListingsTask;
pub use movie_plot::MoviePlotTask;
pub use movie_rating::MovieRatingTask;
pub use movie_release_date::MovieReleaseDateTask;
