//! `motion` 子命令: 读取两帧原始亮度数据, 估计运动并导出向量表.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, ensure};
use clap::Args;
use kuai_codec::{MotionConfig, MotionEstimator};
use kuai_core::{Plane, Sample};
use tracing::info;

#[derive(Args, Debug)]
pub struct MotionArgs {
    /// 图像宽度 (像素)
    #[arg(long)]
    width: usize,

    /// 图像高度 (像素)
    #[arg(long)]
    height: usize,

    /// 当前帧 (8 位平面亮度)
    #[arg(long)]
    current: PathBuf,

    /// 参考帧 (8 位平面亮度)
    #[arg(long)]
    reference: PathBuf,

    /// 全像素搜索范围
    #[arg(long, default_value_t = 16)]
    range: i32,

    /// 块尺寸 (正方形)
    #[arg(long, default_value_t = 16)]
    block: usize,

    /// 使用并行搜索
    #[arg(long)]
    parallel: bool,
}

pub fn run(args: &MotionArgs) -> anyhow::Result<()> {
    let current = read_luma(&args.current, args.width, args.height)?;
    let reference = read_luma(&args.reference, args.width, args.height)?;
    let current = Plane::new(&current, args.width, args.height)?;
    let reference = Plane::new(&reference, args.width, args.height)?;

    let config = MotionConfig {
        block_width: args.block,
        block_height: args.block,
        motion_range: args.range,
        ..MotionConfig::default()
    };
    let mut estimator =
        MotionEstimator::new(args.width, args.height, config).context("创建运动估计器失败")?;

    let start = Instant::now();
    let avg = if args.parallel {
        estimator.estimate_parallel(&current, &reference)?
    } else {
        estimator.estimate(&current, &reference)?
    };
    info!(
        "运动估计: {} 块, 平均失真 {}, 耗时 {:.2?}",
        estimator.block_count(),
        avg,
        start.elapsed(),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "平均失真,{}", avg)?;
    estimator.vectors().dump(&mut out, "运动向量")?;
    Ok(())
}

/// 读取 `width x height` 个 8 位采样, 多余的数据忽略
fn read_luma(path: &Path, width: usize, height: usize) -> anyhow::Result<Vec<Sample>> {
    let bytes = std::fs::read(path).with_context(|| format!("读取 {} 失败", path.display()))?;
    let needed = width * height;
    ensure!(
        bytes.len() >= needed,
        "{} 只有 {} 字节, {}x{} 平面需要 {} 字节",
        path.display(),
        bytes.len(),
        width,
        height,
        needed,
    );
    Ok(bytes[..needed].iter().map(|&b| Sample::from(b)).collect())
}
