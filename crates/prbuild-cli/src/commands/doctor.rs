use prbuild_core::PrbuildConfig;
use prbuild_obs::{CheckResult, DoctorReport, OscClient};
use std::path::Path;
use std::process::Command;

/// Report availability of the external tools the pipeline drives.
pub async fn doctor() -> anyhow::Result<()> {
    // A broken config must not prevent diagnostics; fall back to defaults
    let config = PrbuildConfig::load(Path::new(".")).unwrap_or_default();

    let mut report = DoctorReport {
        git: probe("git", &["--version"]),
        tar: probe("tar", &["--version"]),
        rpmspec: probe("rpmspec", &["--version"]),
        ..Default::default()
    };

    let client = OscClient::new(&config.obs.apiurl);
    report.osc = match client.version().await {
        Ok(version) => CheckResult::ok(&version),
        Err(e) => CheckResult::fail(&e.to_string()),
    };

    report.config_file = if Path::new("prbuild.toml").exists() {
        CheckResult::ok("Found")
    } else {
        CheckResult::ok("Not found (defaults in effect)")
    };

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}

fn probe(tool: &str, args: &[&str]) -> CheckResult {
    match Command::new(tool).args(args).output() {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            CheckResult::ok(stdout.lines().next().unwrap_or("").trim())
        }
        Ok(output) => CheckResult::fail(&format!("exited with {}", output.status)),
        Err(e) => CheckResult::fail(&format!("not found: {e}")),
    }
}
