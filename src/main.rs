use clap::Parser;
use colored::Colorize;

use shorturl::config::{Args, StaticConfig, set_config};
use shorturl::runtime::run_server;
use shorturl::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.generate_config {
        println!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    }

    dotenvy::dotenv().ok();

    // 优先级：命令行 > ENV > 配置文件 > 默认值
    let mut config = StaticConfig::load(args.config.as_deref());
    args.apply_overrides(&mut config);
    let config = set_config(config);

    // guard 必须存活到程序退出，保证日志全部刷盘
    let _guard = init_logging(&config.logging)?;

    if let Err(e) = run_server().await {
        tracing::error!("Server error: {:#}", e);
        eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
        return Err(e);
    }

    Ok(())
}
