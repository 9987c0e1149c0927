use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Numeric representation used for coordinates and edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Float,
    #[default]
    Fixed,
}

/// Render a single frame to a PNG instead of opening a window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    pub path: PathBuf,
    #[serde(default)]
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// Radians per second.
    pub angular_velocity: f32,
    pub precision: Precision,
    /// Spread scanlines over the rayon pool.
    pub parallel: bool,
    /// Worker threads; defaults to the number of logical cores.
    pub threads: Option<usize>,
    pub snapshot: Option<Snapshot>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 800,
            height: 600,
            target_fps: 60,
            angular_velocity: 0.2,
            precision: Precision::Fixed,
            parallel: false,
            threads: None,
            snapshot: None,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("resolution must be non-zero, got {}x{}", self.width, self.height);
        }
        if self.target_fps == 0 {
            bail!("target_fps must be non-zero");
        }
        if !self.angular_velocity.is_finite() {
            bail!("angular_velocity must be finite");
        }
        if self.threads == Some(0) {
            bail!("threads must be at least 1");
        }
        Ok(())
    }

    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let c = Config::from_json(
            r#"{ "width": 320, "precision": "float", "snapshot": { "path": "out.png" } }"#,
        )
        .unwrap();
        assert_eq!(c.width, 320);
        assert_eq!(c.height, 600);
        assert_eq!(c.precision, Precision::Float);
        assert_eq!(c.snapshot.unwrap().elapsed_ms, 0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_json(r#"{ "width": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "target_fps": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "threads": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "precision": "double" }"#).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
