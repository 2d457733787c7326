use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Provision a Minecraft server directory from a Modrinth modpack.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Action to run: mrpack, mods or server
    action: String,
    /// Action arguments (`mrpack` takes a Modrinth project or version id)
    args: Vec<String>,
    /// Working directory shared by every action
    #[arg(long, default_value = ".")]
    work_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    mrpack_server_lib::init_tracing();
    let args = Args::parse();

    match mrpack_server_lib::run(&args.work_dir, &args.action, &args.args).await {
        Ok(summary) => {
            tracing::info!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), "{}", e);
            ExitCode::FAILURE
        }
    }
}
