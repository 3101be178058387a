//! Launcher columns, dock order and the resume asset, generated from `desktop.manifest.toml`.

use crate::model::{AssetLink, DockEntry, LauncherEntry, LauncherTarget, WindowId};

include!(concat!(env!("OUT_DIR"), "/desktop_manifest_generated.rs"));

/// Every launcher on the desktop, left column first.
pub fn all_launchers() -> impl Iterator<Item = &'static LauncherEntry> {
    LEFT_LAUNCHERS.iter().chain(RIGHT_LAUNCHERS.iter())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    #[test]
    fn generated_tables_match_manifest_snapshot() {
        let snapshot: Value =
            serde_json::from_str(DESKTOP_MANIFEST_JSON).expect("manifest snapshot is json");

        let dock = snapshot["dock"].as_array().expect("dock array");
        assert_eq!(dock.len(), DOCK_ENTRIES.len());
        for (raw, entry) in dock.iter().zip(DOCK_ENTRIES) {
            assert_eq!(raw["window"].as_str(), Some(entry.window_id.token()));
            assert_eq!(raw["label"].as_str(), Some(entry.label));
        }

        assert_eq!(
            snapshot["launchers"]["left"].as_array().map(Vec::len),
            Some(LEFT_LAUNCHERS.len())
        );
        assert_eq!(
            snapshot["resume"]["download_name"].as_str(),
            Some(RESUME_ASSET.download_name)
        );
    }

    #[test]
    fn every_window_is_reachable_from_the_dock() {
        for window_id in WindowId::ALL {
            assert!(
                DOCK_ENTRIES.iter().any(|entry| entry.window_id == window_id),
                "{} missing from dock",
                window_id.token()
            );
        }
    }

    #[test]
    fn exactly_one_launcher_downloads_the_resume() {
        let downloads: Vec<_> = all_launchers()
            .filter(|launcher| matches!(launcher.target, LauncherTarget::Download(_)))
            .collect();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].target, LauncherTarget::Download(RESUME_ASSET));
        assert_eq!(RESUME_ASSET.href, "/Resume.pdf");
    }
}
