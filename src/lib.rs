pub mod app;
pub mod core;
pub mod scanner;
pub mod spdx;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Version string shown by `--version`, with build metadata
pub fn long_version() -> String {
    format!(
        "{} (git {}, built {})",
        env!("CARGO_PKG_VERSION"),
        GIT_HASH,
        BUILD_TIME
    )
}
