//! Pull request descriptor parsing.
//!
//! The trigger job hands the pipeline a single colon-delimited argument of
//! the form `base_org:base_project:base_branch:pr_number:pr_repo:pr_commit`.

/// The pull request to merge and build, as named by the trigger descriptor.
///
/// # Examples
///
/// ```
/// use prbuild_core::PrDescriptor;
///
/// let pr = PrDescriptor::parse("openSUSE:libzypp:master:42:contributor/libzypp:abcdef1").unwrap();
/// assert_eq!(pr.base_project, "libzypp");
/// assert_eq!(pr.pr_commit, "abcdef1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrDescriptor {
    /// GitHub organization owning the upstream repository
    pub base_org: String,
    /// Upstream repository name, also the OBS package name
    pub base_project: String,
    /// Branch the pull request targets
    pub base_branch: String,
    /// Full name (`owner/repo`) of the repository the pull request comes from
    pub pr_repo: String,
    /// Commit to merge onto the base branch
    pub pr_commit: String,
}

impl PrDescriptor {
    /// Parse the six-field wire form.
    ///
    /// The fourth field is the PR number; it is part of the trigger format
    /// but unused by the build pipeline and is discarded. Validation is a
    /// field-count check only.
    pub fn parse(descriptor: &str) -> crate::Result<Self> {
        let fields: Vec<&str> = descriptor.split(':').collect();
        if fields.len() != 6 {
            return Err(crate::Error::MalformedDescriptor {
                descriptor: descriptor.to_owned(),
                fields: fields.len(),
            });
        }

        Ok(Self {
            base_org: fields[0].to_owned(),
            base_project: fields[1].to_owned(),
            base_branch: fields[2].to_owned(),
            pr_repo: fields[4].to_owned(),
            pr_commit: fields[5].to_owned(),
        })
    }
}
