/// Why the dataset could not be loaded.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Cannot fetch movie data: {0}")]
    Network(String),
    #[error("Unexpected response `{0}` while fetching movie data")]
    Status(u16),
    #[error("Invalid movie data: {0}")]
    Parse(String),
}
