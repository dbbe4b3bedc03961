use std::sync::Arc;

use tracing::{debug, warn};

use crate::compiler::{CompileOutcome, Compiler};
use crate::heuristic::basic_syntax_validation;
use crate::types::ValidationResult;
use crate::CompilerError;

pub const DEGRADED_MESSAGE: &str =
    "Basic validation passed (solc compiler not available for thorough validation)";

/// Heuristic check first, compiler check only for code that survives it.
#[derive(Clone)]
pub struct ContractValidator {
    compiler: Arc<dyn Compiler>,
}

impl ContractValidator {
    pub fn new(compiler: Arc<dyn Compiler>) -> Self {
        Self { compiler }
    }

    pub fn validate(&self, code: &str) -> ValidationResult {
        let basic = basic_syntax_validation(code);
        if !basic.is_valid {
            return basic;
        }

        if !self.compiler.probe() {
            debug!("compiler unavailable, heuristic result only");
            return ValidationResult::valid(DEGRADED_MESSAGE);
        }

        match self.compiler.compile(code) {
            Ok(CompileOutcome::Accepted) => ValidationResult::valid("Syntax is valid"),
            Ok(CompileOutcome::Rejected { diagnostic }) => ValidationResult::invalid(diagnostic),
            Err(CompilerError::Unavailable(e)) => {
                warn!("compiler passed probe but failed to start: {e}");
                ValidationResult::valid(DEGRADED_MESSAGE)
            }
            Err(e @ CompilerError::TempFile(_)) => {
                ValidationResult::invalid(format!("Validation error: {e}"))
            }
        }
    }
}

impl std::fmt::Debug for ContractValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractValidator").finish_non_exhaustive()
    }
}
