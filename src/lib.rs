pub mod commands;
pub mod core;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::commands::Action;
use crate::core::error::ProvisionResult;
use crate::core::state::{AppState, ServerConfig, WorkDir};

/// Initialize structured logging; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mrpack_server_lib=debug")),
        )
        .init();
}

/// Run one CLI action against `work_dir` with configuration from the environment.
pub async fn run(work_dir: &Path, action: &str, args: &[String]) -> ProvisionResult<String> {
    let action = Action::parse(action, args)?;
    let state = AppState::new(WorkDir::open(work_dir)?, ServerConfig::from_env())?;
    tracing::info!("Running {:?} in {:?}", action, state.work_dir.root());
    commands::execute(&state, action).await
}
