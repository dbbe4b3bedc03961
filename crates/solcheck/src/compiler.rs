use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::{CompilerError, Result};

/// `solc` >= 0.8 dropped the bare `--ast` flag.
pub const DEFAULT_AST_FLAG: &str = "--ast-compact-json";

/// Outcome of a compiler run that actually started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileOutcome {
    Accepted,
    Rejected { diagnostic: String },
}

pub trait Compiler: Send + Sync {
    /// Whether the toolchain is installed and answers a version probe.
    fn probe(&self) -> bool;

    fn compile(&self, source: &str) -> Result<CompileOutcome>;
}

/// External `solc` binary.
#[derive(Clone, Debug)]
pub struct Solc {
    program: PathBuf,
    ast_flag: String,
}

impl Solc {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ast_flag: DEFAULT_AST_FLAG.to_string(),
        }
    }

    pub fn with_ast_flag(mut self, flag: impl Into<String>) -> Self {
        self.ast_flag = flag.into();
        self
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

impl Default for Solc {
    fn default() -> Self {
        Self::new("solc")
    }
}

impl Compiler for Solc {
    fn probe(&self) -> bool {
        let status = Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(s) => s.success(),
            Err(e) => {
                debug!(program = %self.program.display(), "solc probe failed: {e}");
                false
            }
        }
    }

    fn compile(&self, source: &str) -> Result<CompileOutcome> {
        // Removed on drop, whatever happens below.
        let mut file = tempfile::Builder::new()
            .prefix("contract-")
            .suffix(".sol")
            .tempfile()
            .map_err(CompilerError::TempFile)?;
        file.write_all(source.as_bytes()).map_err(CompilerError::TempFile)?;
        file.flush().map_err(CompilerError::TempFile)?;

        let output = Command::new(&self.program)
            .arg(&self.ast_flag)
            .arg(file.path())
            .output()
            .map_err(CompilerError::Unavailable)?;

        if output.status.success() {
            Ok(CompileOutcome::Accepted)
        } else {
            Ok(CompileOutcome::Rejected {
                diagnostic: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

/// Stand-in used when the compiler stage is switched off.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCompiler;

impl Compiler for NoCompiler {
    fn probe(&self) -> bool {
        false
    }

    fn compile(&self, _source: &str) -> Result<CompileOutcome> {
        Err(CompilerError::Unavailable(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "compiler stage disabled",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_unavailable() {
        let solc = Solc::new("/nonexistent/solc-for-tests");
        assert!(!solc.probe());

        let err = solc.compile("pragma solidity ^0.8.0;").unwrap_err();
        assert!(matches!(err, CompilerError::Unavailable(_)));
    }

    #[test]
    fn test_default_flag() {
        let solc = Solc::default().with_ast_flag("--ast");
        assert_eq!(solc.ast_flag, "--ast");
        assert_eq!(solc.program(), std::path::Path::new("solc"));
    }

    #[test]
    fn test_no_compiler() {
        assert!(!NoCompiler.probe());
        assert!(NoCompiler.compile("").is_err());
    }
}
