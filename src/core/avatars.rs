//! Avatar icons offered by the add form.
//!
//! The table is loaded from `config/avatars.json` (embedded at compile time, checked by build.rs).

use std::sync::OnceLock;

use serde::Deserialize;

/// Icon ids plus the path prefix they are stored under.
#[derive(Debug, Deserialize)]
pub struct AvatarTable {
    pub prefix: String,
    pub default: String,
    pub icons: Vec<String>,
}

fn load_table() -> AvatarTable {
    let json = include_str!("../../config/avatars.json");
    serde_json::from_str(json).expect("avatars.json must be valid")
}

static TABLE: OnceLock<AvatarTable> = OnceLock::new();

/// Returns the avatar table, loading from config on first access.
pub fn table() -> &'static AvatarTable {
    TABLE.get_or_init(load_table)
}

/// All selectable icon ids, in display order.
pub fn icons() -> &'static [String] {
    &table().icons
}

/// Icon preselected in a fresh form.
pub fn default_icon() -> &'static str {
    &table().default
}

/// Index of [`default_icon`] in [`icons`].
pub fn default_index() -> usize {
    icons()
        .iter()
        .position(|i| i == default_icon())
        .unwrap_or(0)
}

/// Stored avatar path for an icon id, e.g. `openai.svg` -> `/imgs/model/openai.svg`.
pub fn resolve(icon_id: &str) -> String {
    format!("{}{}", table().prefix, icon_id)
}

/// Reverse of [`resolve`]: index of the icon a stored avatar path points at.
pub fn icon_for_path(avatar: &str) -> Option<usize> {
    let id = avatar.strip_prefix(table().prefix.as_str())?;
    icons().iter().position(|i| i == id)
}
