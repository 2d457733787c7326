pub mod advisor;
pub mod process;

pub use advisor::{
    java_package_for, minor_version, recommended_package, write_java_version, JAVA_VERSION_FILE,
};
pub use process::{JavaProcess, ProcessCommand, ProcessRunner};
