use crate::app::error::AuditError;
use anyhow::Context;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Raised once the user asks to stop. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// Replaces the default Ctrl-C behaviour with a flag the inspector polls.
    pub fn install() -> Result<Self, AuditError> {
        let flag = Self::default();
        let handler_flag = flag.clone();
        ctrlc::set_handler(move || handler_flag.raise())
            .context("Failed to install the Ctrl-C handler")?;
        Ok(flag)
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn check(&self) -> Result<(), AuditError> {
        if self.0.load(Ordering::SeqCst) {
            return Err(AuditError::Interrupted);
        }
        Ok(())
    }
}
