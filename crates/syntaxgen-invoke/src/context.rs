//! Default execution context backed by a temporary scratch directory.

use std::io;
use std::path::Path;

use crate::generator::ExecutionContext;

/// Execution context for one build step.
///
/// The scratch directory is created lazily on first use and serves as the
/// working directory of the generator subprocess, keeping stray tool files
/// out of the build tree. [`release`](ExecutionContext::release) drops it.
#[derive(Debug, Default)]
pub struct StepContext {
    scratch: Option<tempfile::TempDir>,
    released: bool,
}

impl StepContext {
    /// Creates a fresh context with no scratch directory yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once `release` has run.
    pub fn released(&self) -> bool {
        self.released
    }
}

impl ExecutionContext for StepContext {
    fn workdir(&mut self) -> io::Result<&Path> {
        if self.scratch.is_none() {
            let dir = tempfile::Builder::new()
                .prefix("syntaxgen_step_")
                .tempdir()?;
            self.scratch = Some(dir);
        }
        Ok(self
            .scratch
            .as_ref()
            .expect("scratch directory was just created")
            .path())
    }

    fn release(&mut self) {
        // Dropping the TempDir removes the scratch directory.
        self.scratch.take();
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workdir_is_created_lazily() {
        let mut ctx = StepContext::new();
        assert!(ctx.scratch.is_none());

        let dir = ctx.workdir().unwrap().to_path_buf();
        assert!(dir.exists());

        // Second call reuses the same directory.
        assert_eq!(ctx.workdir().unwrap(), dir);
    }

    #[test]
    fn test_release_removes_scratch_directory() {
        let mut ctx = StepContext::new();
        let dir = ctx.workdir().unwrap().to_path_buf();
        assert!(dir.exists());

        ctx.release();
        assert!(ctx.released());
        assert!(!dir.exists());
    }

    #[test]
    fn test_release_without_workdir_is_safe() {
        let mut ctx = StepContext::new();
        ctx.release();
        assert!(ctx.released());
    }
}
