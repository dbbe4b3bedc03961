//! Solidity syntax checking
//!
//! Two stages: a textual heuristic that needs no toolchain, and an optional
//! compiler pass that shells out to `solc` when it is installed.

mod types;
mod heuristic;
mod compiler;
mod validator;

pub use types::ValidationResult;
pub use heuristic::{basic_syntax_validation, REQUIRED_ELEMENTS};
pub use compiler::{Compiler, CompileOutcome, NoCompiler, Solc, DEFAULT_AST_FLAG};
pub use validator::{ContractValidator, DEGRADED_MESSAGE};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("compiler could not be started: {0}")]
    Unavailable(std::io::Error),

    #[error("temporary source file: {0}")]
    TempFile(std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompilerError>;
