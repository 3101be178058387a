use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MANIFEST_FILE: &str = "desktop.manifest.toml";
const SCHEMA_VERSION: u32 = 1;
const DOWNLOAD_RESUME_ACTION: &str = "download-resume";

/// Window tokens and the `WindowId` variants they generate.
const KNOWN_WINDOWS: [(&str, &str); 6] = [
    ("about", "About"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("contact", "Contact"),
    ("pet", "Pet"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ResumeAsset {
    href: String,
    download_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Launcher {
    label: String,
    #[serde(default)]
    window: Option<String>,
    #[serde(default)]
    action: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LauncherColumns {
    left: Vec<Launcher>,
    right: Vec<Launcher>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DockItem {
    label: String,
    window: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    resume: ResumeAsset,
    launchers: LauncherColumns,
    dock: Vec<DockItem>,
}

fn window_variant(token: &str, context: &str) -> &'static str {
    KNOWN_WINDOWS
        .iter()
        .find(|(known, _)| *known == token)
        .map(|(_, variant)| *variant)
        .unwrap_or_else(|| panic!("unknown window token `{token}` in {context}"))
}

fn launcher_target(launcher: &Launcher, context: &str) -> String {
    match (launcher.window.as_deref(), launcher.action.as_deref()) {
        (Some(window), None) => format!(
            "LauncherTarget::OpenWindow(WindowId::{})",
            window_variant(window, context)
        ),
        (None, Some(DOWNLOAD_RESUME_ACTION)) => "LauncherTarget::Download(RESUME_ASSET)".to_string(),
        (None, Some(action)) => panic!("unknown launcher action `{action}` in {context}"),
        _ => panic!(
            "launcher `{}` in {context} must set exactly one of `window` or `action`",
            launcher.label
        ),
    }
}

fn validate(manifest: &DesktopManifest) {
    if manifest.schema_version != SCHEMA_VERSION {
        panic!(
            "desktop manifest schema mismatch: expected {SCHEMA_VERSION} found {}",
            manifest.schema_version
        );
    }
    if manifest.resume.href.is_empty() || manifest.resume.download_name.is_empty() {
        panic!("desktop manifest resume asset needs both `href` and `download_name`");
    }

    let resume_launchers = manifest
        .launchers
        .left
        .iter()
        .chain(&manifest.launchers.right)
        .filter(|launcher| launcher.action.as_deref() == Some(DOWNLOAD_RESUME_ACTION))
        .count();
    if resume_launchers != 1 {
        panic!("desktop manifest must declare exactly one resume launcher, found {resume_launchers}");
    }

    let mut seen = BTreeSet::new();
    for item in &manifest.dock {
        window_variant(&item.window, "dock");
        if !seen.insert(item.window.as_str()) {
            panic!("duplicate dock entry `{}`", item.window);
        }
    }
}

fn render_launchers(out: &mut String, name: &str, launchers: &[Launcher], context: &str) {
    writeln!(out, "pub static {name}: &[LauncherEntry] = &[").expect("write launchers");
    for launcher in launchers {
        writeln!(
            out,
            "    LauncherEntry {{ label: {:?}, target: {} }},",
            launcher.label,
            launcher_target(launcher, context)
        )
        .expect("write launcher");
    }
    out.push_str("];\n\n");
}

fn render(manifest: &DesktopManifest) -> String {
    let mut out = String::new();
    let json = serde_json::to_string_pretty(manifest).expect("serialize desktop manifest");
    writeln!(
        out,
        "/// Build-time snapshot of the validated desktop manifest.\npub const DESKTOP_MANIFEST_JSON: &str = r##\"{json}\"##;\n"
    )
    .expect("write manifest json");
    writeln!(
        out,
        "pub const RESUME_ASSET: AssetLink = AssetLink {{ href: {:?}, download_name: {:?} }};\n",
        manifest.resume.href, manifest.resume.download_name
    )
    .expect("write resume asset");
    render_launchers(&mut out, "LEFT_LAUNCHERS", &manifest.launchers.left, "launchers.left");
    render_launchers(
        &mut out,
        "RIGHT_LAUNCHERS",
        &manifest.launchers.right,
        "launchers.right",
    );
    out.push_str("pub static DOCK_ENTRIES: &[DockEntry] = &[\n");
    for item in &manifest.dock {
        writeln!(
            out,
            "    DockEntry {{ label: {:?}, window_id: WindowId::{} }},",
            item.label,
            window_variant(&item.window, "dock")
        )
        .expect("write dock entry");
    }
    out.push_str("];\n");
    out
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join(MANIFEST_FILE);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_manifest_generated.rs");
    fs::write(&out_file, render(&manifest))
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
