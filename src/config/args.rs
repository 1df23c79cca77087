//! Command-line argument parsing

use clap::Parser;

use super::StaticConfig;

/// In-memory URL shortener service
#[derive(Debug, Clone, Parser, Default)]
#[command(name = "shorturl", version, about)]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// Override the listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub generate_config: bool,
}

impl Args {
    /// 命令行参数优先级最高，覆盖配置文件与环境变量
    pub fn apply_overrides(&self, config: &mut StaticConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
