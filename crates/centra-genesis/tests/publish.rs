//! End-to-end publish flow against a real filesystem with a stubbed
//! renderer.
//!
//! Run with:
//!   cargo test -p centra-genesis --test publish

use std::fs;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use centra_core::error::{CentraError, ErrorKind};
use centra_genesis::{
    EntrySpec, GenesisRenderer, GenesisSchema, PresetPublisher, PresetSpec, RenderJob,
};

// ── Fixtures ──────────────────────────────────────────────────────────────────

struct TmpRoot(PathBuf);

impl TmpRoot {
    fn new(tag: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("centra_publish_{tag}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Drop for TmpRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// Writes a stand-in genesis block where the real renderer would.
struct StubRenderer;

impl GenesisRenderer for StubRenderer {
    fn render(&self, job: &RenderJob) -> Result<(), CentraError> {
        assert_eq!(job.secret, "account1");
        assert!(job.schema_path.exists(), "schema must be staged before render");
        fs::write(&job.output_path, b"{\"genesis\": true}")?;
        Ok(())
    }
}

struct FailingRenderer;

impl GenesisRenderer for FailingRenderer {
    fn render(&self, _job: &RenderJob) -> Result<(), CentraError> {
        Err(CentraError::Renderer("renderer exploded".into()))
    }
}

fn spec() -> PresetSpec {
    PresetSpec {
        delegates: EntrySpec::Count(3),
        accounts: EntrySpec::Count(2),
        balance: 5_000,
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn publish_creates_schema_forging_configs_and_genesis_block() {
    let root = TmpRoot::new("ok");
    let publisher = PresetPublisher::new(&root.0, StubRenderer);

    let final_dir = publisher.publish(&spec(), "alpha", &mut rng()).unwrap();
    assert_eq!(final_dir, root.0.join("alpha"));

    let schema_json = fs::read_to_string(final_dir.join("scheme.json")).unwrap();
    let schema: GenesisSchema = serde_json::from_str(&schema_json).unwrap();
    assert_eq!(schema.delegates.len(), 3);
    assert_eq!(schema.accounts.len(), 2);
    assert_eq!(schema.votes.votes.len(), 3);

    for i in 0..3 {
        let config = fs::read_to_string(final_dir.join(format!("delegate{i}.json"))).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&config).unwrap();
        assert_eq!(parsed["forging"]["secret"], format!("delegate{i}"));
    }

    assert!(final_dir.join("genesisBlock.json").exists());

    // The staging directory was renamed away, not copied.
    let leftovers: Vec<_> = fs::read_dir(&root.0)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("preset-"))
        .collect();
    assert!(leftovers.is_empty(), "no staging directory may remain");
}

#[test]
fn second_publish_of_same_name_fails_fast_and_leaves_first_intact() {
    let root = TmpRoot::new("dup");
    let publisher = PresetPublisher::new(&root.0, StubRenderer);

    let first = publisher.publish(&spec(), "alpha", &mut rng()).unwrap();
    let schema_before = fs::read_to_string(first.join("scheme.json")).unwrap();

    let err = publisher
        .publish(&spec(), "alpha", &mut StdRng::seed_from_u64(9))
        .unwrap_err();
    assert!(matches!(err, CentraError::PresetAlreadyExists(_)));
    assert_eq!(err.kind(), ErrorKind::State);

    // The failed attempt refused before any work: first publish untouched,
    // no staging dir created.
    assert_eq!(
        fs::read_to_string(first.join("scheme.json")).unwrap(),
        schema_before
    );
    let staged: Vec<_> = fs::read_dir(&root.0)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("preset-"))
        .collect();
    assert!(staged.is_empty());
}

#[test]
fn renderer_failure_propagates_and_keeps_staging_dir() {
    let root = TmpRoot::new("fail");
    let publisher = PresetPublisher::new(&root.0, FailingRenderer);

    let err = publisher.publish(&spec(), "alpha", &mut rng()).unwrap_err();
    match err {
        CentraError::Renderer(msg) => assert_eq!(msg, "renderer exploded"),
        other => panic!("expected renderer error, got {other}"),
    }

    // No final directory; staging left on disk for inspection.
    assert!(!root.0.join("alpha").exists());
    let staged: Vec<_> = fs::read_dir(&root.0)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("preset-"))
        .collect();
    assert_eq!(staged.len(), 1);
    // The schema made it to the staging dir before the render failed.
    assert!(staged[0].path().join("scheme.json").exists());
}
