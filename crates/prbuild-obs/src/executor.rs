use crate::osc::OscError;
use std::path::Path;

/// Abstraction over osc CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait OscExecutor: Send + Sync {
    /// Execute an osc command and capture stdout.
    async fn exec(&self, args: &[String]) -> Result<String, OscError>;

    /// Execute an osc command in `dir` with extra environment variables,
    /// streaming output to the terminal.
    async fn exec_streaming(
        &self,
        dir: &Path,
        args: &[String],
        envs: &[(String, String)],
    ) -> Result<(), OscError>;
}

/// Real osc CLI executor.
pub struct RealExecutor;

impl OscExecutor for RealExecutor {
    async fn exec(&self, args: &[String]) -> Result<String, OscError> {
        use std::process::Stdio;

        let output = tokio::process::Command::new("osc")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| OscError::NotFound { source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| OscError::InvalidUtf8 { source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(OscError::CommandFailed {
                args: args.to_vec(),
                stderr,
            })
        }
    }

    async fn exec_streaming(
        &self,
        dir: &Path,
        args: &[String],
        envs: &[(String, String)],
    ) -> Result<(), OscError> {
        use std::process::Stdio;

        let mut command = tokio::process::Command::new("osc");
        command
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        for (key, value) in envs {
            command.env(key, value);
        }

        let status = command
            .status()
            .await
            .map_err(|e| OscError::NotFound { source: e })?;

        if status.success() {
            Ok(())
        } else {
            Err(OscError::CommandFailed {
                args: args.to_vec(),
                stderr: format!("exit code: {status}"),
            })
        }
    }
}
