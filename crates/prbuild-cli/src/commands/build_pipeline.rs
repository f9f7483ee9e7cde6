use prbuild_build::tarball::RpmspecQuery;
use prbuild_build::{archive, source, specfile, tarball};
use prbuild_core::{PrDescriptor, PrbuildConfig, cmake, version};
use prbuild_obs::{BuildOptions, OscClient};
use std::path::Path;

/// Result of a successful pipeline run.
pub(crate) struct BuildOutcome {
    pub steps: Vec<String>,
}

/// Run the full PR build pipeline: workspace reset → metadata checkout →
/// source merge → spec generation → source archive → remote build.
///
/// Strictly sequential; the first failing step aborts the run. Partial
/// workspace state is deliberately left in place for post-mortem
/// inspection.
pub(crate) async fn run(workdir: &Path, pr: &PrDescriptor) -> anyhow::Result<BuildOutcome> {
    let config = PrbuildConfig::load(workdir)?;
    let client = OscClient::new(&config.obs.apiurl);
    let query = RpmspecQuery;
    let mut steps = Vec::new();

    let git_dir = workdir.join(&config.workspace.git_dir);
    let obs_dir = workdir.join(&config.workspace.obs_dir);

    // Leftovers from a previous run would taint the merge and the archive
    println!("Resetting workspace...");
    source::clean_workspace(
        workdir,
        &[&config.workspace.git_dir, &config.workspace.obs_dir],
    )?;
    steps.push("Workspace reset".to_owned());

    // Package metadata working copy
    println!(
        "Checking out {}/{} from {}...",
        config.obs.project, pr.base_project, config.obs.apiurl
    );
    client
        .checkout(
            workdir,
            &config.obs.project,
            &pr.base_project,
            &config.workspace.obs_dir,
        )
        .await?;
    steps.push(format!(
        "Checked out {}/{}",
        config.obs.project, pr.base_project
    ));

    // Upstream source with the PR's commit merged onto the base branch
    println!("Cloning {}/{}...", pr.base_org, pr.base_project);
    let clone_url = format!(
        "{}/{}/{}",
        config.git.base_url, pr.base_org, pr.base_project
    );
    source::clone(workdir, &clone_url, &config.workspace.git_dir)?;
    source::checkout(&git_dir, &pr.base_branch)?;

    println!("Merging {} from {}...", pr.pr_commit, pr.pr_repo);
    let pr_url = format!("{}/{}", config.git.base_url, pr.pr_repo);
    source::add_remote(&git_dir, &config.git.pr_remote, &pr_url)?;
    source::fetch(&git_dir, &config.git.pr_remote)?;
    source::merge(&git_dir, &pr.pr_commit)?;
    steps.push(format!("Merged {} onto {}", pr.pr_commit, pr.base_branch));

    // Package name and version from the project's build files
    let cmake_file = git_dir.join("CMakeLists.txt");
    let package = cmake::read_required_var(&cmake_file, "PACKAGE")?;
    let version_template = cmake::read_required_var(&cmake_file, "VERSION")?;
    let version = version::resolve_template(&version_template, &git_dir.join("VERSION.cmake"))?;
    println!("Package: {package} {version}");
    steps.push(format!("Resolved {package} {version}"));

    // Spec file from its cmake template
    let spec_template = git_dir.join(format!("{package}.spec.cmake"));
    let spec = obs_dir.join(format!("{package}.spec"));
    specfile::materialize(
        &spec_template,
        &spec,
        &[("PACKAGE", package.as_str()), ("VERSION", version.as_str())],
    )?;
    steps.push(format!("Generated {}", spec.display()));

    // Archive named after the spec's Source declaration, rooted at name-version
    let tarfile = tarball::source_archive_name(&spec, &query)?.ok_or_else(|| {
        anyhow::anyhow!(
            "no Source line in {} — cannot name the source archive",
            spec.display()
        )
    })?;
    let root_dir = tarball::source_root_dir(&spec, &query)?;

    println!("Archiving sources as {tarfile}...");
    archive::create_source_archive(&git_dir, &obs_dir.join(&tarfile), &root_dir)?;
    steps.push(format!("Archived sources as {tarfile}"));

    // Remote build, with build root and package cache kept inside the workspace
    println!("Building against {}...", config.obs.repository);
    let build_root = workdir
        .join(&config.workspace.build_root)
        .join("%(repo)s-%(arch)s");
    let pkg_cache = workdir.join(&config.workspace.pkg_cache);
    client
        .build(
            &obs_dir,
            &BuildOptions {
                repository: &config.obs.repository,
                vm_type: &config.obs.vm_type,
                vm_memory: config.obs.vm_memory,
                build_root: &build_root,
                pkg_cache: &pkg_cache,
            },
        )
        .await?;
    steps.push(format!("Built against {}", config.obs.repository));

    Ok(BuildOutcome { steps })
}
