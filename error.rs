use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a lowercase ASCII letter: {0:?}")]
    NotALetter(char),
}

pub type Result<T> = std::result::Result<T, Error>;
