//! Local build steps of the PR pipeline: git source assembly, spec file
//! generation, tarball naming, and source archive creation. The external
//! tools involved (`git`, `rpmspec`, `tar`) run as blocking subprocesses.

pub mod archive;
pub mod source;
pub mod specfile;
pub mod tarball;

pub use archive::ArchiveError;
pub use source::SourceError;
pub use specfile::SpecfileError;
pub use tarball::{QueryError, RpmspecQuery, SpecQuery, TarballError};
