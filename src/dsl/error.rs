use crate::engine::CatalogueError;
use thiserror::Error;

/// Errors raised while running a command line
#[derive(Error, Debug)]
pub enum DslError {
    #[error("[line {line}] Parse error: {msg}")]
    Parse { line: usize, msg: String },

    #[error("[line {line}] Catalogue error: {source}")]
    Catalogue {
        line: usize,
        #[source]
        source: CatalogueError,
    },
}

impl DslError {
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        DslError::Parse {
            line,
            msg: msg.into(),
        }
    }

    pub fn catalogue(line: usize, source: CatalogueError) -> Self {
        DslError::Catalogue { line, source }
    }
}
