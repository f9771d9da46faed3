mod find;
mod index;
mod open;

pub use find::FindError;
pub use index::IndexError;
pub use open::OpenError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Find(#[from] FindError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Open(#[from] OpenError),
}

pub type Result<T> = std::result::Result<T, Error>;
