pub mod script;

pub use script::{render_start_script, write_start_script, START_SCRIPT};
