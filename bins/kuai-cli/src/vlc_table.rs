//! `vlc-table` 子命令: 打印 total_zeros 或 run_before 码表.

use std::io::{self, Write};

use clap::{Args, ValueEnum};
use kuai_codec::vlc::run_before::MAX_ZEROS_LEFT;
use kuai_codec::{RunBeforeEncoder, TotalZerosEncoder, VlcCode, VlcEncoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    /// total_zeros, 上下文 total_coeffs
    TotalZeros,
    /// run_before, 上下文 zeros_left
    RunBefore,
}

#[derive(Args, Debug)]
pub struct VlcTableArgs {
    /// 码表族
    #[arg(long, value_enum)]
    family: Family,
}

pub fn run(args: &VlcTableArgs) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.family {
        Family::TotalZeros => {
            let enc = TotalZerosEncoder::new();
            writeln!(out, "total_coeffs,total_zeros,bits,code")?;
            for total_coeffs in 1..16u8 {
                for total_zeros in 0..=(16 - total_coeffs) {
                    let code = enc.encode2(total_zeros, total_coeffs);
                    write_row(&mut out, total_coeffs, total_zeros, code)?;
                }
            }
        }
        Family::RunBefore => {
            let enc = RunBeforeEncoder::new();
            writeln!(out, "zeros_left,run_before,bits,code")?;
            // zeros_left > 6 共用一行, 用最大值列出整行
            for zeros_left in (1..=6u8).chain([MAX_ZEROS_LEFT]) {
                for run_before in 0..=zeros_left.min(14) {
                    let code = enc.encode2(run_before, zeros_left);
                    write_row(&mut out, zeros_left, run_before, code)?;
                }
            }
        }
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, context: u8, symbol: u8, code: VlcCode) -> io::Result<()> {
    writeln!(
        out,
        "{},{},{},{:0width$b}",
        context,
        symbol,
        code.num_bits,
        code.code_word,
        width = code.num_bits as usize,
    )
}
