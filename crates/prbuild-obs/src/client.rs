use crate::executor::{OscExecutor, RealExecutor};
use crate::osc::OscError;
use std::path::Path;

/// Build service operations client, parameterized over the executor for
/// testability.
pub struct OscClient<E: OscExecutor = RealExecutor> {
    executor: E,
    apiurl: String,
}

impl OscClient<RealExecutor> {
    pub fn new(apiurl: &str) -> Self {
        Self {
            executor: RealExecutor,
            apiurl: apiurl.to_owned(),
        }
    }
}

impl<E: OscExecutor> OscClient<E> {
    pub fn with_executor(executor: E, apiurl: &str) -> Self {
        Self {
            executor,
            apiurl: apiurl.to_owned(),
        }
    }

    // ── Checkout ──

    /// Check out the package's metadata working copy into `out_dir`,
    /// relative to `workdir`.
    pub async fn checkout(
        &self,
        workdir: &Path,
        project: &str,
        package: &str,
        out_dir: &str,
    ) -> Result<(), CheckoutError> {
        self.executor
            .exec_streaming(
                workdir,
                &self.args(&["co", &format!("{project}/{package}"), "-o", out_dir]),
                &[],
            )
            .await
            .map_err(|e| CheckoutError::Checkout { source: e })
    }

    // ── Build ──

    /// Trigger the virtualized package build inside `pkg_dir`.
    ///
    /// The build root and package cache are redirected into the run's
    /// workspace through the environment overrides osc honors.
    pub async fn build(&self, pkg_dir: &Path, opts: &BuildOptions<'_>) -> Result<(), BuildError> {
        let envs = [
            (
                "OSC_BUILD_ROOT".to_owned(),
                opts.build_root.display().to_string(),
            ),
            (
                "OSC_PACKAGECACHEDIR".to_owned(),
                opts.pkg_cache.display().to_string(),
            ),
        ];

        let vm_type = format!("--vm-type={}", opts.vm_type);
        let vm_memory = format!("--vm-memory={}", opts.vm_memory);

        self.executor
            .exec_streaming(
                pkg_dir,
                &self.args(&[
                    "build",
                    &vm_type,
                    &vm_memory,
                    "--clean",
                    "--trust-all-projects",
                    opts.repository,
                ]),
                &envs,
            )
            .await
            .map_err(|e| BuildError::Build { source: e })
    }

    // ── Diagnostics ──

    /// osc client version, for the doctor report.
    pub async fn version(&self) -> Result<String, OscError> {
        let output = self.executor.exec(&["version".to_owned()]).await?;
        Ok(output.trim().to_owned())
    }

    fn args(&self, rest: &[&str]) -> Vec<String> {
        let mut args = vec!["-A".to_owned(), self.apiurl.clone()];
        args.extend(rest.iter().map(|s| (*s).to_owned()));
        args
    }
}

/// Parameters of a remote build invocation.
#[derive(Debug)]
pub struct BuildOptions<'a> {
    /// Target distribution, e.g. `openSUSE_Tumbleweed`
    pub repository: &'a str,
    /// Virtualization backend, e.g. `kvm`
    pub vm_type: &'a str,
    /// Build VM memory in MB
    pub vm_memory: u32,
    /// OSC_BUILD_ROOT override
    pub build_root: &'a Path,
    /// OSC_PACKAGECACHEDIR override
    pub pkg_cache: &'a Path,
}

// ── Doctor types ──

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub git: CheckResult,
    pub tar: CheckResult,
    pub rpmspec: CheckResult,
    pub osc: CheckResult,
    pub config_file: CheckResult,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.git.passed
            && self.tar.passed
            && self.rpmspec.passed
            && self.osc.passed
            && self.config_file.passed
    }
}

impl std::fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, check) in [
            ("git", &self.git),
            ("tar", &self.tar),
            ("rpmspec", &self.rpmspec),
            ("osc", &self.osc),
            ("prbuild.toml", &self.config_file),
        ] {
            writeln!(f, "[{}] {:<13} {}", check.icon(), name, check.detail)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("package metadata checkout failed")]
    Checkout { source: OscError },
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("remote package build failed")]
    Build { source: OscError },
}
