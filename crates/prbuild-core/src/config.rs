use serde::{Deserialize, Serialize};

/// prbuild.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrbuildConfig {
    #[serde(default)]
    pub obs: ObsConfig,
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObsConfig {
    /// Build service API endpoint
    #[serde(default = "default_apiurl")]
    pub apiurl: String,
    /// OBS project holding the package metadata
    #[serde(default = "default_project")]
    pub project: String,
    /// Target distribution the remote build runs against
    #[serde(default = "default_repository")]
    pub repository: String,
    /// Virtualization backend for `osc build`
    #[serde(default = "default_vm_type")]
    pub vm_type: String,
    /// Build VM memory in MB
    #[serde(default = "default_vm_memory")]
    pub vm_memory: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// URL prefix for the upstream clone and the PR remote
    #[serde(default = "default_git_base_url")]
    pub base_url: String,
    /// Name of the remote added for the pull request's repository
    #[serde(default = "default_pr_remote")]
    pub pr_remote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Source checkout directory, relative to the working directory
    #[serde(default = "default_git_dir")]
    pub git_dir: String,
    /// Package metadata checkout directory
    #[serde(default = "default_obs_dir")]
    pub obs_dir: String,
    /// Base of the OSC_BUILD_ROOT override
    #[serde(default = "default_build_root")]
    pub build_root: String,
    /// OSC_PACKAGECACHEDIR override
    #[serde(default = "default_pkg_cache")]
    pub pkg_cache: String,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            apiurl: default_apiurl(),
            project: default_project(),
            repository: default_repository(),
            vm_type: default_vm_type(),
            vm_memory: default_vm_memory(),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            base_url: default_git_base_url(),
            pr_remote: default_pr_remote(),
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            git_dir: default_git_dir(),
            obs_dir: default_obs_dir(),
            build_root: default_build_root(),
            pkg_cache: default_pkg_cache(),
        }
    }
}

impl PrbuildConfig {
    /// Load from prbuild.toml at the given path, or return defaults if not found.
    pub fn load(workdir: &std::path::Path) -> crate::Result<Self> {
        let config_path = workdir.join("prbuild.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_apiurl() -> String {
    "https://api.opensuse.org".to_owned()
}

fn default_project() -> String {
    "zypp:Head".to_owned()
}

fn default_repository() -> String {
    "openSUSE_Tumbleweed".to_owned()
}

fn default_vm_type() -> String {
    "kvm".to_owned()
}

fn default_vm_memory() -> u32 {
    4000
}

fn default_git_base_url() -> String {
    "git://github.com".to_owned()
}

fn default_pr_remote() -> String {
    "PR".to_owned()
}

fn default_git_dir() -> String {
    "git_src".to_owned()
}

fn default_obs_dir() -> String {
    "obs_src".to_owned()
}

fn default_build_root() -> String {
    "build-root".to_owned()
}

fn default_pkg_cache() -> String {
    "pkg-cache".to_owned()
}
