#[derive(Debug, thiserror::Error)]
pub enum OscError {
    #[error("osc CLI not found — install the build service client (zypper in osc)")]
    NotFound { source: std::io::Error },

    #[error("osc command failed: {args:?}\n{stderr}")]
    CommandFailed { args: Vec<String>, stderr: String },

    #[error("osc output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}
