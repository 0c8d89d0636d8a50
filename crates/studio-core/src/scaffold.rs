use crate::error::Result;
use crate::io::{atomic_write, ensure_dir};
use crate::paths;
use crate::types::EngineKind;
use serde_json::json;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory tables
// ---------------------------------------------------------------------------

const GODOT_DIRS: &[&str] = &[
    "source/scenes",
    "source/scripts",
    "source/assets/sprites",
    "source/assets/models",
    "source/assets/audio",
    "source/assets/ui",
    "source/assets/shaders",
    "source/assets/fonts",
    "source/autoload",
    "source/addons",
];

const UNITY_DIRS: &[&str] = &[
    "source/Assets/Scripts",
    "source/Assets/Scenes",
    "source/Assets/Prefabs",
    "source/Assets/Materials",
    "source/Assets/Textures",
    "source/Assets/Models",
    "source/Assets/Audio",
    "source/Assets/Animations",
    "source/Assets/Shaders",
    "source/Assets/StreamingAssets",
    "source/Assets/Editor",
    "source/Assets/Resources",
    "source/Assets/Plugins",
    "source/Packages",
    "source/ProjectSettings",
];

const UNREAL_DIRS: &[&str] = &[
    "source/Content/Blueprints",
    "source/Content/Maps",
    "source/Content/Materials",
    "source/Content/Meshes",
    "source/Content/Textures",
    "source/Content/Audio",
    "source/Content/Animations",
    "source/Content/UI",
    "source/Content/Particles",
    "source/Content/Characters",
    "source/Source/Public",
    "source/Source/Private",
    "source/Plugins",
    "source/Config",
];

pub const COMMON_DIRS: &[&str] = &[
    "documentation/design/systems",
    "documentation/design/mechanics",
    "documentation/design/content",
    "documentation/art/concepts",
    "documentation/art/assets",
    "documentation/art/style-guides",
    "documentation/technical/architecture",
    "documentation/technical/api-docs",
    "documentation/technical/performance",
    "documentation/production/milestones",
    "documentation/production/retrospectives",
    "documentation/production/reports",
    "resources/references",
    "resources/market-research",
    "resources/competitor-analysis",
    "qa/test-plans",
    "qa/bug-reports",
    "qa/playtesting",
    "qa/performance-logs",
    "builds/alpha",
    "builds/beta",
    "builds/release",
];

/// Engine subtree for `engine`. Anything that is not Unity or Unreal gets
/// the Godot layout.
pub fn engine_dirs(engine: &str) -> &'static [&'static str] {
    match EngineKind::from_name(engine) {
        Some(EngineKind::Unity) => UNITY_DIRS,
        Some(EngineKind::Unreal) => UNREAL_DIRS,
        Some(EngineKind::Godot) | None => GODOT_DIRS,
    }
}

/// Every relative directory a project on `engine` gets, engine subtree first.
pub fn directory_layout(engine: &str) -> Vec<&'static str> {
    engine_dirs(engine)
        .iter()
        .chain(COMMON_DIRS)
        .copied()
        .collect()
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Create the directory tree for `project_name` under `projects_dir` and
/// return the project root. Existing directories are left alone, so running
/// this twice is a no-op.
pub fn generate(projects_dir: &Path, project_name: &str, engine: &str) -> Result<PathBuf> {
    paths::validate_project_name(project_name)?;
    let root = paths::project_dir(projects_dir, project_name);
    ensure_dir(projects_dir)?;

    let layout = directory_layout(engine);
    for dir in &layout {
        ensure_dir(&root.join(dir))?;
    }
    tracing::debug!(root = %root.display(), dirs = layout.len(), "scaffold generated");
    Ok(root)
}

/// Write the engine's project file into `source/`. Unknown engines get
/// nothing. Returns the paths written.
pub fn write_seed_files(project_root: &Path, engine: &str) -> Result<Vec<PathBuf>> {
    let Some(kind) = EngineKind::from_name(engine) else {
        tracing::debug!(engine, "no seed files for engine");
        return Ok(Vec::new());
    };

    let folder = folder_name(project_root);
    let source = project_root.join(paths::SOURCE_DIR);
    ensure_dir(&source)?;

    let written = match kind {
        EngineKind::Godot => {
            let path = source.join("project.godot");
            atomic_write(&path, godot_project(&folder).as_bytes())?;
            vec![path]
        }
        EngineKind::Unity => {
            ensure_dir(&source.join("ProjectSettings"))?;
            let path = source.join("Packages").join("manifest.json");
            let manifest = serde_json::to_string_pretty(&unity_manifest())?;
            atomic_write(&path, manifest.as_bytes())?;
            vec![path]
        }
        EngineKind::Unreal => {
            let path = source.join(format!("{folder}.uproject"));
            let uproject = serde_json::to_string_pretty(&unreal_project(&folder))?;
            atomic_write(&path, uproject.as_bytes())?;
            vec![path]
        }
    };
    Ok(written)
}

fn folder_name(project_root: &Path) -> String {
    project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Seed file bodies
// ---------------------------------------------------------------------------

fn godot_project(folder: &str) -> String {
    format!(
        "[application]\n\n\
         config/name=\"{folder}\"\n\
         config/features=PackedStringArray(\"4.2\", \"Forward Plus\")\n\
         config/icon=\"res://icon.svg\"\n\n\
         [rendering]\n\n\
         renderer/rendering_method=\"forward_plus\"\n"
    )
}

const UNITY_PACKAGES: &[(&str, &str)] = &[
    ("com.unity.collab-proxy", "2.0.5"),
    ("com.unity.feature.development", "1.0.1"),
    ("com.unity.ide.rider", "3.0.24"),
    ("com.unity.ide.visualstudio", "2.0.18"),
    ("com.unity.ide.vscode", "1.2.5"),
    ("com.unity.inputsystem", "1.7.0"),
    ("com.unity.test-framework", "1.1.33"),
    ("com.unity.textmeshpro", "3.0.6"),
    ("com.unity.timeline", "1.7.5"),
    ("com.unity.ugui", "1.0.0"),
    ("com.unity.visualscripting", "1.9.0"),
];

const UNITY_MODULES: &[&str] = &[
    "ai",
    "androidjni",
    "animation",
    "assetbundle",
    "audio",
    "cloth",
    "director",
    "imageconversion",
    "imgui",
    "jsonserialize",
    "particlesystem",
    "physics",
    "physics2d",
    "screencapture",
    "terrain",
    "terrainphysics",
    "tilemap",
    "ui",
    "uielements",
    "umbra",
    "unityanalytics",
    "unitywebrequest",
    "unitywebrequestassetbundle",
    "unitywebrequestaudio",
    "unitywebrequesttexture",
    "unitywebrequestwww",
    "vehicles",
    "video",
    "vr",
    "wind",
    "xr",
];

fn unity_manifest() -> serde_json::Value {
    let mut deps = serde_json::Map::new();
    for (name, version) in UNITY_PACKAGES {
        deps.insert((*name).to_string(), json!(version));
    }
    for module in UNITY_MODULES {
        deps.insert(format!("com.unity.modules.{module}"), json!("1.0.0"));
    }
    json!({ "dependencies": deps })
}

fn unreal_project(folder: &str) -> serde_json::Value {
    json!({
        "FileVersion": 3,
        "EngineAssociation": "5.3",
        "Category": "",
        "Description": "",
        "Modules": [
            { "Name": folder, "Type": "Runtime", "LoadingPhase": "Default" }
        ],
        "Plugins": [
            {
                "Name": "ModelingToolsEditorMode",
                "Enabled": true,
                "TargetAllowList": ["Editor"]
            }
        ]
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
