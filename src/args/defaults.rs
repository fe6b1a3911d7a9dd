pub(crate) const DEFAULT_USER_AGENT: &str = concat!("sites-checker/", env!("CARGO_PKG_VERSION"));

/// Config filenames checked in the working directory when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["sites-checker.toml", "sites-checker.json"];
