pub mod create;
pub mod customize;
pub mod freeze;
pub mod resume;
pub mod start_over;
pub mod status;

use anyhow::Context;
use std::path::Path;
use studio_core::settings::StudioSettings;

pub(crate) fn load_settings(root: &Path) -> anyhow::Result<StudioSettings> {
    StudioSettings::load(root)
        .with_context(|| format!("failed to load studio settings from {}", root.display()))
}
