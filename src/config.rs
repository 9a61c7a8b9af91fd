//! Configuration module for mulcheck
//!
//! Implements the input-location hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variable (MULCHECK_DIR)
//! 3. Directory config (mulcheck.toml in the input directory)
//! 4. Built-in defaults (lowest priority)
//!
//! Defaults exist for the three file *names* only. The directory itself must
//! always be supplied by the caller; there is deliberately no fallback.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MulcheckError, MulcheckResult};

/// Default name of the first operand file
pub const DEFAULT_NUM1: &str = "num1.txt";
/// Default name of the second operand file
pub const DEFAULT_NUM2: &str = "num2.txt";
/// Default name of the recorded-product file
pub const DEFAULT_RESULT: &str = "result.txt";

/// Name of the optional per-directory config file
pub const CONFIG_FILE: &str = "mulcheck.toml";

/// Environment variable naming the input directory
pub const DIR_ENV: &str = "MULCHECK_DIR";

/// File name overrides (`[files]` section of mulcheck.toml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNames {
    #[serde(default = "default_num1")]
    pub num1: String,

    #[serde(default = "default_num2")]
    pub num2: String,

    #[serde(default = "default_result")]
    pub result: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            num1: default_num1(),
            num2: default_num2(),
            result: default_result(),
        }
    }
}

fn default_num1() -> String {
    DEFAULT_NUM1.to_string()
}

fn default_num2() -> String {
    DEFAULT_NUM2.to_string()
}

fn default_result() -> String {
    DEFAULT_RESULT.to_string()
}

/// Generation defaults (`[generate]` section of mulcheck.toml)
///
/// Each field mirrors a `generate` flag; a flag on the command line always
/// wins over the config value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerateConfig {
    #[serde(default)]
    pub digits: Option<usize>,

    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub threads: Option<usize>,
}

/// Parsed mulcheck.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FileNames,

    #[serde(default)]
    pub generate: GenerateConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MulcheckResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| MulcheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| MulcheckError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `mulcheck.toml` from a directory if present.
    ///
    /// A missing file yields the defaults; a present-but-malformed file is a
    /// hard error, since silently ignoring it could point verification at
    /// the wrong files.
    pub fn load_or_default(dir: &Path) -> MulcheckResult<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Resolved locations of the three input files.
///
/// This is the unit the verifier and generator operate on; once built, no
/// further path lookup happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// First operand
    pub num1: PathBuf,
    /// Second operand
    pub num2: PathBuf,
    /// Recorded product to check against num1 * num2
    pub result: PathBuf,
}

impl InputPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_names(dir, &FileNames::default())
    }

    /// Configured file names inside `dir`
    pub fn with_names(dir: &Path, names: &FileNames) -> Self {
        Self {
            num1: dir.join(&names.num1),
            num2: dir.join(&names.num2),
            result: dir.join(&names.result),
        }
    }
}

/// Unresolved path selection collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct PathArgs {
    pub dir: Option<PathBuf>,
    pub num1: Option<PathBuf>,
    pub num2: Option<PathBuf>,
    pub result: Option<PathBuf>,
}

impl PathArgs {
    /// Resolve the three input paths and the directory config.
    ///
    /// The directory comes from `--dir` or `MULCHECK_DIR`. When a directory
    /// is known, `mulcheck.toml` in it may rename the files, and explicit
    /// `--num1/--num2/--result` flags override individual entries. Without a
    /// directory, all three paths must be explicit.
    pub fn resolve(&self) -> MulcheckResult<(InputPaths, Config)> {
        let dir = self.dir.clone().or_else(env_dir);

        let (mut paths, config) = match dir {
            Some(dir) => {
                let config = Config::load_or_default(&dir)?;
                let paths = InputPaths::with_names(&dir, &config.files);
                (paths, config)
            }
            None => match (&self.num1, &self.num2, &self.result) {
                (Some(num1), Some(num2), Some(result)) => (
                    InputPaths {
                        num1: num1.clone(),
                        num2: num2.clone(),
                        result: result.clone(),
                    },
                    Config::default(),
                ),
                _ => return Err(MulcheckError::NoInputDir),
            },
        };

        if let Some(num1) = &self.num1 {
            paths.num1 = num1.clone();
        }
        if let Some(num2) = &self.num2 {
            paths.num2 = num2.clone();
        }
        if let Some(result) = &self.result {
            paths.result = result.clone();
        }

        Ok((paths, config))
    }
}

/// Read MULCHECK_DIR, treating empty as unset
fn env_dir() -> Option<PathBuf> {
    std::env::var(DIR_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
