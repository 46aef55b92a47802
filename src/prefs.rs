// src/prefs.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// UI preferences persisted across runs. Restoring the bar at startup is done
/// by dispatching `SetVisibility`; the store itself never touches disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    pub org_bar_visible: bool,
    pub dark: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            org_bar_visible: false,
            dark: true,
        }
    }
}

fn prefs_dir() -> Result<PathBuf> {
    // org/qualifier can be anything stable for the app. Keep it constant.
    let pd = ProjectDirs::from("com", "OrgBar", "orgbar")
        .context("Failed to resolve platform app data directory (ProjectDirs::from)")?;
    Ok(pd.data_dir().to_path_buf())
}

fn prefs_file(dir: &Path) -> PathBuf {
    dir.join("prefs.json")
}

pub fn load() -> Option<Prefs> {
    load_from(&prefs_dir().ok()?)
}

/// Missing or unreadable files mean "no saved prefs", never an error.
pub fn load_from(dir: &Path) -> Option<Prefs> {
    let bytes = std::fs::read(prefs_file(dir)).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn save(prefs: &Prefs) -> Result<()> {
    save_to(&prefs_dir()?, prefs)
}

pub fn save_to(dir: &Path, prefs: &Prefs) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = prefs_file(dir);
    let text = serde_json::to_string_pretty(prefs).context("Failed to serialize prefs")?;

    // Write-then-rename so a crash mid-write never truncates the real file.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, text).with_context(|| format!("Failed to write {}", tmp.display()))?;
    if path.exists() {
        let _ = std::fs::remove_file(&path);
    }
    std::fs::rename(&tmp, &path)
        .with_context(|| format!("Failed to move prefs into {}", path.display()))?;
    Ok(())
}
