use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing query")]
    EmptyQuery,
    #[error("missing prompt")]
    EmptyPrompt,
    #[error(transparent)]
    Gateway(#[from] anyhow::Error),
}
