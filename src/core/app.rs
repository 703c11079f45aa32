//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Icon shipped next to the launcher workflow, used when none is configured.
pub const DEFAULT_ICON: &str = "icon.png";
