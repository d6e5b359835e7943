use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostsError {
    #[error("Configuration error: {0}")]
    Config(String),
}
