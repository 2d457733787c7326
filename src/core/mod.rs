// ─── mrpack-server Core ───
// Turns a Modrinth modpack into a runnable dedicated server directory.
//
// Architecture:
//   core/
//     modpack/    — Pack source lookup, archive extraction, index, mod download
//     loaders/    — Loader selection + Vanilla, Fabric, Forge, Quilt, NeoForge
//     version/    — Mojang manifest + server download metadata
//     launch/     — start.sh synthesis
//     java/       — Installer subprocesses + recommended runtime package
//     downloader/ — HTTP fetch capability
//     state/      — Environment config, working directory, shared collaborators

pub mod downloader;
pub mod error;
pub mod files;
pub mod http;
pub mod java;
pub mod launch;
pub mod loaders;
pub mod maven;
pub mod modpack;
pub mod state;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;
