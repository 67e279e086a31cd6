//! Engine configuration.
//!
//! Settings come from three layers, later ones winning: defaults (or builder
//! methods), environment variables, then command-line flags.
//!
//! | Setting | Environment | Flag |
//! |---|---|---|
//! | entry script | `SCRIPTBIND_ENTRY` | `--script <path>` |
//! | decode policy | `SCRIPTBIND_DECODE=strict\|lenient` | `--strict-decode` |

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use scriptbind_core::DecodePolicy;

/// Entry script used when nothing overrides it.
pub const DEFAULT_ENTRY_SCRIPT: &str = "scripts/main.lua";

pub const ENV_ENTRY: &str = "SCRIPTBIND_ENTRY";
pub const ENV_DECODE: &str = "SCRIPTBIND_DECODE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Applied to every adapter bound through a `Context`.
    pub decode_policy: DecodePolicy,
    /// Script the embedding application should run first. Nothing in this
    /// crate loads it.
    pub entry_script: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decode_policy: DecodePolicy::default(),
            entry_script: PathBuf::from(DEFAULT_ENTRY_SCRIPT),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    pub fn with_entry_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.entry_script = path.into();
        self
    }

    pub fn entry_script(&self) -> &Path {
        &self.entry_script
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by command-line flags.
    ///
    /// `argv` is a full argument vector, program name first, as returned by
    /// `std::env::args()`.
    pub fn from_args<I, T>(argv: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(argv)?;
        Ok(Self::default().apply_args(&cli.engine))
    }

    /// Layer environment variables, read through `lookup`, over `self`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_ENTRY).filter(|p| !p.is_empty()) {
            tracing::debug!(path = %path, "entry script from environment");
            self.entry_script = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_DECODE) {
            self.decode_policy = parse_policy(&value)?;
        }
        Ok(self)
    }

    /// Layer parsed command-line flags over `self`.
    pub fn apply_args(mut self, args: &EngineArgs) -> Self {
        if let Some(path) = &args.script {
            self.entry_script = path.clone();
        }
        if args.strict_decode {
            self.decode_policy = DecodePolicy::Strict;
        }
        self
    }
}

/// Engine flags, for flattening into an application's own clap parser.
///
/// ```ignore
/// #[derive(clap::Parser)]
/// struct Cli {
///     #[command(flatten)]
///     engine: scriptbind::EngineArgs,
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct EngineArgs {
    /// Entry script to run
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Fail calls with missing or mistyped arguments instead of using zero values
    #[arg(long)]
    pub strict_decode: bool,
}

#[derive(Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,
}

fn parse_policy(value: &str) -> Result<DecodePolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(DecodePolicy::Strict),
        "lenient" => Ok(DecodePolicy::Lenient),
        _ => Err(ConfigError::InvalidPolicy {
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid decode policy `{value}` (expected `strict` or `lenient`)")]
    InvalidPolicy { value: String },

    #[error("invalid arguments: {0}")]
    Args(#[from] clap::Error),
}
