//! CLI commands for cap-release
//!
//! - **release**: the full release workflow (checks, bump, build, sync,
//!   native injection, IDE, tag)
//! - **sync**: re-apply the recorded version/build to the native projects

pub mod release;
pub mod sync;

pub use release::{ReleaseContext, ReleaseOptions, run_release};
pub use sync::{SyncOptions, run_sync};
