use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tool configuration: where presets live, where fixtures are published,
/// and how to run the genesis-block renderer.
///
/// Path fields may be relative; `resolve` anchors them to `dir`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory all relative paths resolve against.
    pub dir: PathBuf,
    /// Where published presets (and staging directories) go.
    pub tmp: PathBuf,
    /// Test fixture root.
    pub test: PathBuf,
    /// Directory of `<name>.json` preset specs.
    pub presets: PathBuf,
    /// Renderer command and its arguments.
    pub renderer_command: String,
    pub renderer_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            tmp: env_or("TMP_PATH", "tmp"),
            test: env_or("TEST_PATH", "test"),
            presets: env_or("PRESET_PATH", "test/preset"),
            renderer_command: "node".into(),
            renderer_args: vec!["./genesisBlock.js".into()],
        }
    }
}

fn env_or(var: &str, fallback: &str) -> PathBuf {
    env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fallback))
}

impl Config {
    /// Load from a JSON file (missing fields fall back to defaults), or the
    /// defaults when no file is given. Paths come back resolved.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => {
                let body = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&body)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => Self::default(),
        };
        Ok(config.resolve())
    }

    fn resolve(mut self) -> Self {
        self.tmp = resolve_against(&self.dir, self.tmp);
        self.test = resolve_against(&self.dir, self.test);
        self.presets = resolve_against(&self.dir, self.presets);
        self
    }
}

fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
