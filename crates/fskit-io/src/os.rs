//! Operating system detection
//!
//! The logical operating system drives separator choice and host path
//! rewriting. It is resolved on every call so an override takes effect
//! immediately.

use std::str::FromStr;

/// Environment variable that overrides host platform detection.
pub const OS_OVERRIDE_ENV: &str = "TEST_OS_OVERRIDE";

/// Logical operating system used for path conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Windows,
    Linux,
    Mac,
    Unknown,
}

impl OperatingSystem {
    /// Map a platform name to an operating system, ignoring case.
    ///
    /// Only `linux`, `windows` and `darwin` are recognized.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            "darwin" => Self::Mac,
            _ => Self::Unknown,
        }
    }

    /// The platform this binary was compiled for.
    pub fn host() -> Self {
        // Rust names the platform `macos` where overrides use `darwin`.
        match std::env::consts::OS {
            "macos" => Self::Mac,
            other => Self::from_name(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Mac => "darwin",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for OperatingSystem {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl std::fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the resolver looks for an operating system override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OsOverride {
    /// Read [`OS_OVERRIDE_ENV`] on every detection.
    #[default]
    Environment,
    /// Use this value as if it had been set in the environment.
    Fixed(String),
    /// Ignore overrides and always report the host platform.
    Host,
}

impl OsOverride {
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::Fixed(name.into())
    }

    /// Resolve the logical operating system.
    ///
    /// An empty override value counts as unset.
    pub fn detect(&self) -> OperatingSystem {
        let value = match self {
            Self::Environment => std::env::var(OS_OVERRIDE_ENV).ok(),
            Self::Fixed(value) => Some(value.clone()),
            Self::Host => None,
        };

        match value.filter(|v| !v.is_empty()) {
            Some(name) => {
                tracing::trace!(override_value = %name, "Operating system overridden");
                OperatingSystem::from_name(&name)
            }
            None => OperatingSystem::host(),
        }
    }
}

/// Resolve the logical operating system honoring [`OS_OVERRIDE_ENV`].
pub fn detect_operating_system() -> OperatingSystem {
    OsOverride::Environment.detect()
}
