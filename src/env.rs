//! Runtime environment detection.
//!
//! Single source of truth for determining the runtime environment based
//! on the `CAMPUSWATCH_ENV` environment variable.
//!
//! # Environment Variable
//!
//! Set `CAMPUSWATCH_ENV` to one of:
//! - `test` - Test mode (config redirected into the repo's tmp/)
//! - `development` or `dev` - Development mode
//! - (anything else or unset) - Production mode

// Rust guideline compliant 2026-02

/// Runtime environment for the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment (default).
    Production,
    /// Development environment.
    Development,
    /// Test environment - config is kept inside the repo tree.
    Test,
}

impl Environment {
    /// Detect current environment from `CAMPUSWATCH_ENV`.
    #[must_use]
    pub fn current() -> Self {
        match std::env::var("CAMPUSWATCH_ENV").as_deref() {
            Ok("test") => Self::Test,
            Ok("development") | Ok("dev") => Self::Development,
            _ => Self::Production,
        }
    }

    /// Returns `true` if this is the test environment.
    #[must_use]
    pub fn is_test(self) -> bool {
        self == Self::Test
    }

    /// Returns `true` if this is the production environment.
    #[must_use]
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
            Self::Test => write!(f, "test"),
        }
    }
}

/// Convenience function to check if running in test mode.
#[must_use]
pub fn is_test_mode() -> bool {
    Environment::current().is_test()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Test.to_string(), "test");
    }

    #[test]
    fn test_environment_is_methods() {
        assert!(Environment::Test.is_test());
        assert!(!Environment::Test.is_production());

        assert!(Environment::Production.is_production());
        assert!(!Environment::Production.is_test());
    }
}
