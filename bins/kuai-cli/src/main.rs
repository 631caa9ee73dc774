//! kuai-cli - 块视频编码算法命令行工具
//!
//! 对原始平面数据运行运动估计和矢量量化, 或打印变长码表.

mod logging;
mod motion;
mod vlc_table;
mod vq;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kuai-cli", version, about = "Kuai 块视频编码算法工具")]
struct Cli {
    /// 日志级别 (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// 并行线程数 (默认为 CPU 核数)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 对两帧原始 8 位亮度数据做块运动估计
    Motion(motion::MotionArgs),
    /// 用 16 维码本量化矢量文件
    Vq(vq::VqArgs),
    /// 打印 CAVLC 变长码表
    VlcTable(vlc_table::VlcTableArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init("kuai-cli", cli.verbose)?;

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("初始化线程池失败")?;
    }

    info!("kuai-cli v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Motion(args) => motion::run(args),
        Command::Vq(args) => vq::run(args),
        Command::VlcTable(args) => vlc_table::run(args),
    }
}
