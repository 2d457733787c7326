pub mod archive;
pub mod index;
pub mod materializer;
pub mod source;

pub use archive::extract_archive;
pub use index::{EnvRequirement, FileEnv, ModFile, ModrinthIndex, PackDependencies};
pub use materializer::{materialize_mods, should_install};
pub use source::{resolve_pack_version, ModrinthVersion, ModrinthVersionFile};
