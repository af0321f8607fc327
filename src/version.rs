// Build-time version from Cargo.toml

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Header title, e.g. "dockprism v0.1.0".
pub fn title() -> String {
    format!("{} v{}", NAME, VERSION)
}
