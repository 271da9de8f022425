use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a projection run records next to its output.
pub struct Payload {
    pub params: Value,
    pub vk: Option<String>,
}

impl Payload {
    pub fn new(params: Value, vk: Option<String>) -> Self {
        Self { params, vk }
    }
}

/// Provenance block shared by sidecars and `cli report`.
pub fn block(vk: Option<&str>, params: Value, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "polyproj_version": polyproj::VERSION,
        "vk": vk,
        "params": params,
        "outputs": outputs,
    })
}

/// Write `<artifact>.provenance.json` with the git commit, callsite, params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = block(
        payload.vk.as_deref(),
        payload.params,
        &[artifact.to_string_lossy().into_owned()],
    );
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let base = Path::new("/tmp/output/reduced.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/reduced.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_and_ticket() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("out.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"eliminate": ["x0"]}), Some("vk-1".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["vk"], "vk-1");
        assert_eq!(parsed["params"]["eliminate"][0], "x0");
        assert_eq!(parsed["polyproj_version"], polyproj::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
