/// Errors produced by the similarity pipeline
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("corpus is empty, no reference document")]
    EmptyCorpus,

    #[error("word '{0}' was never observed in any document")]
    UnobservedWord(String),

    #[error("corpus has no document besides the reference document")]
    NoCandidateDocuments,
}

pub type Result<T> = core::result::Result<T, Error>;
