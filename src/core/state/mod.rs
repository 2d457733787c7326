mod app_state;
mod server_config;
mod work_dir;

pub use app_state::AppState;
pub use server_config::{
    ServerConfig, DEFAULT_JAVA_BIN, DEFAULT_MAX_RAM, DEFAULT_MIN_RAM, DEFAULT_TYPICAL_START_ARGS,
};
pub use work_dir::WorkDir;
