use super::build_pipeline;
use prbuild_core::PrDescriptor;
use std::path::Path;

/// Execute the full PR build pipeline in the current directory.
pub async fn build(descriptor: &str) -> anyhow::Result<()> {
    let pr = PrDescriptor::parse(descriptor)?;

    println!(
        "Building {}/{} pull request commit {}",
        pr.base_org, pr.base_project, pr.pr_commit
    );

    let outcome = build_pipeline::run(Path::new("."), &pr).await?;

    println!();
    for step in &outcome.steps {
        println!("  {step}");
    }
    println!("Build finished");

    Ok(())
}
