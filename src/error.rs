//! Process-level error type.
//!
//! Exit codes used across the tool:
//!
//! - `2`: configuration/store problems (bad env values, unreadable or
//!   corrupt JSON files, missing store directory)
//! - `3`: usage problems (unknown milestone/source id, store not seeded)
//! - `4`: network problems (SCB request failed outright)
//!
//! Parsing and projection never produce an `AppError`: a PX text without a
//! recognizable DATA block decodes to an empty series, and a progress that
//! cannot be computed is simply `None`.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
