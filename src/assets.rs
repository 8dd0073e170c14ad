//! Configuration asset with an embedded fallback
//!
//! - If no config path is given: use the embedded `config.yaml`
//! - If a path is given and exists: read it from the filesystem
//! - If a path is given but missing: fail, so typos are not silently ignored

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Config loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from --config or CONFIG_FILE)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if the user pointed at a file.
    /// If `None`, the embedded config is used.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Where the config comes from, for status output and logs
    pub fn config_source(&self) -> String {
        match &self.config_file {
            Some(path) => path.display().to_string(),
            None => "embedded".to_string(),
        }
    }

    /// The embedded default config
    pub fn embedded_config() -> Cow<'static, [u8]> {
        EmbeddedConfig::get(CONFIG_NAME)
            .map(|f| f.data)
            .unwrap_or(Cow::Borrowed(&[]))
    }

    /// Read config.yaml
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            tracing::debug!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(path)?));
        }

        tracing::debug!("Loading embedded config");
        Ok(Self::embedded_config())
    }

    /// Read config.yaml as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded config to `target`
    ///
    /// Existing files are skipped unless `force` is set.
    pub fn init(target: &Path, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let name = target.display().to_string();

        if target.exists() && !force {
            report.skipped.push(name);
            return Ok(report);
        }

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(target, Self::embedded_config())?;
        tracing::info!(path = %name, "Wrote default config");
        report.written.push(name);

        Ok(report)
    }
}
