use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_LOG_FILTER: &str = "activities_server=debug,activities_core=info,tower_http=debug";

#[derive(Debug, Clone, Parser)]
#[command(name = "activities-server")]
#[command(about = "Sign-up registry for extracurricular activities", long_about = None)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8000")]
    pub bind_address: String,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Print a colored log of registry changes
    #[arg(long, env = "MONITORING")]
    pub monitoring: bool,
}
