//! `vq` 子命令: 每 16 个有符号字节为一个矢量, 输出码字下标与失真.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, ensure};
use clap::Args;
use kuai_codec::{CodebookQuantiser16, VectorQuantiser};
use tracing::info;

#[derive(Args, Debug)]
pub struct VqArgs {
    /// 输入文件 (i8 矢量, 每 16 字节一个)
    #[arg(long)]
    input: PathBuf,
}

pub fn run(args: &VqArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("读取 {} 失败", args.input.display()))?;

    let vq = CodebookQuantiser16::new();
    let dim = vq.dimension();
    ensure!(
        bytes.len() % dim == 0,
        "输入长度 {} 不是 {} 的整数倍",
        bytes.len(),
        dim,
    );

    let samples: Vec<i16> = bytes.iter().map(|&b| i16::from(b as i8)).collect();
    let results = vq.quantise_batch(&samples)?;
    let total: i64 = results.iter().map(|q| q.distortion).sum();
    info!("量化 {} 个矢量, 总失真 {}", results.len(), total);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "index,distortion")?;
    for q in &results {
        writeln!(out, "{},{}", q.index, q.distortion)?;
    }
    Ok(())
}
