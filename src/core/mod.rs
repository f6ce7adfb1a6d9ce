//! Core engine for cap-release operations
//!
//! - **error**: typed error hierarchy with exit codes and help messages
//! - **native**: version/build injection into iOS and Android projects
//! - **preconditions**: branch and working-tree releasability checks
//! - **record**: the persisted release record (version + build)
//! - **run**: blocking external command execution boundary
//! - **version**: lenient parsing and bump arithmetic

pub mod error;
pub mod native;
pub mod preconditions;
pub mod record;
pub mod run;
pub mod version;
