use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "malformed pull request descriptor {descriptor:?}: expected 6 colon-separated fields, got {fields}"
    )]
    MalformedDescriptor { descriptor: String, fields: usize },

    // ── CMake build-variable extraction ──
    #[error("failed to read {path}")]
    CmakeRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid assignment pattern for variable {name:?}")]
    VarPattern { name: String, source: regex::Error },

    #[error("required variable {name} not found in {path}")]
    VarMissing { name: String, path: PathBuf },
}
