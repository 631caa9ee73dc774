//! run_before 变长码 (H.264 表 9-10).
//!
//! 符号 1 为 run_before, 符号 2 为 zeros_left. zeros_left 选择码表行,
//! zeros_left > 6 共用同一行; run_before 不能超过 zeros_left.

use kuai_core::{BitReader, KuaiError, KuaiResult};

use super::tables::RUN_BEFORE;
use super::{Decoded2, VlcCode, VlcDecoder, VlcEncoder, decode_prefix};

/// zeros_left 的最大取值 (4x4 块共 16 个系数, 至少一个非零)
pub const MAX_ZEROS_LEFT: u8 = 15;

/// zeros_left 对应的码表行
fn table_row(zeros_left: u8) -> Option<&'static [(u8, u16); 15]> {
    if zeros_left == 0 || zeros_left > MAX_ZEROS_LEFT {
        return None;
    }
    RUN_BEFORE.get(zeros_left.min(7) as usize - 1)
}

/// run_before 编码器
#[derive(Debug, Clone, Copy, Default)]
pub struct RunBeforeEncoder;

impl RunBeforeEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl VlcEncoder for RunBeforeEncoder {
    fn encode2(&self, run_before: u8, zeros_left: u8) -> VlcCode {
        if run_before > zeros_left {
            return VlcCode::INVALID;
        }
        table_row(zeros_left)
            .and_then(|row| row.get(run_before as usize))
            .map_or(VlcCode::INVALID, |&entry| VlcCode::from_entry(entry))
    }
}

/// run_before 解码器
#[derive(Debug, Clone, Default)]
pub struct RunBeforeDecoder {
    num_code_bits: u32,
}

impl RunBeforeDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VlcDecoder for RunBeforeDecoder {
    fn decode(&mut self, _reader: &mut BitReader<'_>) -> KuaiResult<u8> {
        self.num_code_bits = 0;
        Ok(0)
    }

    fn decode2(&mut self, reader: &mut BitReader<'_>, zeros_left: u8) -> KuaiResult<Decoded2> {
        self.num_code_bits = 0;
        let row = table_row(zeros_left).ok_or_else(|| {
            KuaiError::InvalidArgument(format!("zeros_left={} 没有 run_before 码表", zeros_left))
        })?;

        // run_before <= zeros_left 之外的码字视为非法
        let limit = (zeros_left as usize + 1).min(row.len());
        let mut codes = [VlcCode::INVALID; 15];
        for (code, &entry) in codes.iter_mut().zip(row.iter()).take(limit) {
            *code = VlcCode::from_entry(entry);
        }

        let (run_before, num_bits) = decode_prefix(reader, &codes[..limit])?;
        self.num_code_bits = num_bits;

        Ok(Decoded2 {
            symbol1: run_before,
            symbol2: zeros_left,
            num_bits,
        })
    }

    fn num_decoded_bits(&self) -> u32 {
        self.num_code_bits
    }
}
