use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use centra_core::error::CentraError;

use crate::preset::PresetSpec;
use crate::schema::{build_schema, GenesisSchema};

/// Passphrase handed to the renderer as the genesis-block signer.
const GENERATOR_SECRET: &str = "account1";

// ── Renderer seam ────────────────────────────────────────────────────────────

/// Parameters for one genesis-block render.
#[derive(Clone, Debug)]
pub struct RenderJob {
    /// Generating secret for the genesis block signature.
    pub secret: String,
    /// Where the schema document was staged.
    pub schema_path: PathBuf,
    /// Where the rendered genesis block must be written.
    pub output_path: PathBuf,
}

/// The external genesis-block renderer.
pub trait GenesisRenderer: Send + Sync {
    fn render(&self, job: &RenderJob) -> Result<(), CentraError>;
}

/// Runs the renderer as a child process, passing the job through the
/// `SECRET` / `OUTPUT` / `FILE` environment variables.
pub struct ProcessRenderer {
    pub command: String,
    pub args: Vec<String>,
}

impl GenesisRenderer for ProcessRenderer {
    fn render(&self, job: &RenderJob) -> Result<(), CentraError> {
        debug!(command = %self.command, schema = %job.schema_path.display(),
            "invoking genesis renderer");
        let output = Command::new(&self.command)
            .args(&self.args)
            .env("SECRET", &job.secret)
            .env("OUTPUT", &job.output_path)
            .env("FILE", &job.schema_path)
            .output()?;
        debug!(stdout = %String::from_utf8_lossy(&output.stdout));
        if !output.stderr.is_empty() {
            debug!(stderr = %String::from_utf8_lossy(&output.stderr));
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CentraError::Renderer(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

// ── Publisher ────────────────────────────────────────────────────────────────

/// Forging config written next to the schema, one per delegate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgingConfig {
    pub forging: ForgingSecret,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgingSecret {
    pub secret: String,
}

/// Builds a preset's schema, stages everything in a fresh temporary
/// directory, renders the genesis block, and atomically publishes the
/// directory under its final name.
pub struct PresetPublisher<R: GenesisRenderer> {
    tmp_root: PathBuf,
    renderer: R,
}

impl<R: GenesisRenderer> PresetPublisher<R> {
    pub fn new(tmp_root: impl Into<PathBuf>, renderer: R) -> Self {
        Self {
            tmp_root: tmp_root.into(),
            renderer,
        }
    }

    /// Publish `spec` under `name`. Returns the final directory.
    ///
    /// Refuses before doing any work if the final directory already exists.
    /// On renderer or filesystem failure the staging directory is left in
    /// place for inspection; the final name is only ever created by the
    /// terminal rename, which either fully succeeds or changes nothing.
    pub fn publish(
        &self,
        spec: &PresetSpec,
        name: &str,
        rng: &mut impl Rng,
    ) -> Result<PathBuf, CentraError> {
        let final_dir = self.tmp_root.join(name);
        if final_dir.exists() {
            return Err(CentraError::PresetAlreadyExists(name.to_string()));
        }

        let staging = self.tmp_root.join(staging_name(rng));
        fs::create_dir_all(&staging)?;
        debug!(dir = %staging.display(), "staging directory created");

        let schema = build_schema(spec, rng);
        let schema_path = staging.join("scheme.json");
        write_json(&schema_path, &schema)?;
        debug!(path = %schema_path.display(), "schema saved");

        self.write_forging_configs(&staging, &schema)?;

        let job = RenderJob {
            secret: GENERATOR_SECRET.to_string(),
            schema_path,
            output_path: staging.join("genesisBlock.json"),
        };
        if let Err(err) = self.renderer.render(&job) {
            warn!(dir = %staging.display(), "render failed; staging directory kept");
            return Err(err);
        }

        fs::rename(&staging, &final_dir)?;
        info!(preset = name, dir = %final_dir.display(), "preset published");
        Ok(final_dir)
    }

    fn write_forging_configs(
        &self,
        staging: &Path,
        schema: &GenesisSchema,
    ) -> Result<(), CentraError> {
        for i in 0..schema.delegates.len() {
            let config = ForgingConfig {
                forging: ForgingSecret {
                    secret: format!("delegate{i}"),
                },
            };
            write_json(&staging.join(format!("delegate{i}.json")), &config)?;
        }
        debug!(count = schema.delegates.len(), "forging configs saved");
        Ok(())
    }
}

/// `preset-<8 hex chars>`, randomized so concurrent invocations never share
/// a staging directory.
fn staging_name(rng: &mut impl Rng) -> String {
    let bytes: [u8; 4] = rng.gen();
    format!("preset-{}", hex::encode(bytes))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CentraError> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| CentraError::Serialization(e.to_string()))?;
    fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn staging_names_are_randomized() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = staging_name(&mut rng);
        let b = staging_name(&mut rng);
        assert!(a.starts_with("preset-") && a.len() == "preset-".len() + 8);
        assert_ne!(a, b);
    }

    #[test]
    fn forging_config_shape() {
        let config = ForgingConfig {
            forging: ForgingSecret {
                secret: "delegate3".into(),
            },
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["forging"]["secret"], "delegate3");
    }
}
