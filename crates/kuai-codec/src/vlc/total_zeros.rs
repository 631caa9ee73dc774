//! total_zeros 变长码 (4x4 块, H.264 表 9-7).
//!
//! 符号 1 为 total_zeros, 符号 2 为 total_coeffs. total_coeffs 选择码表列.

use kuai_core::{BitReader, KuaiError, KuaiResult};

use super::tables::TOTAL_ZEROS_4X4;
use super::{Decoded2, VlcCode, VlcDecoder, VlcEncoder, decode_prefix};

/// total_zeros 编码器
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalZerosEncoder;

impl TotalZerosEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl VlcEncoder for TotalZerosEncoder {
    fn encode2(&self, total_zeros: u8, total_coeffs: u8) -> VlcCode {
        TOTAL_ZEROS_4X4
            .get(total_zeros as usize)
            .and_then(|row| row.get(total_coeffs as usize))
            .map_or(VlcCode::INVALID, |&entry| VlcCode::from_entry(entry))
    }
}

/// total_zeros 解码器
#[derive(Debug, Clone, Default)]
pub struct TotalZerosDecoder {
    num_code_bits: u32,
}

impl TotalZerosDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VlcDecoder for TotalZerosDecoder {
    fn decode(&mut self, _reader: &mut BitReader<'_>) -> KuaiResult<u8> {
        self.num_code_bits = 0;
        Ok(0)
    }

    fn decode2(&mut self, reader: &mut BitReader<'_>, total_coeffs: u8) -> KuaiResult<Decoded2> {
        self.num_code_bits = 0;
        if total_coeffs == 0 || total_coeffs as usize >= TOTAL_ZEROS_4X4[0].len() {
            return Err(KuaiError::InvalidArgument(format!(
                "total_coeffs={} 没有 total_zeros 码表",
                total_coeffs,
            )));
        }

        let column: [VlcCode; 16] = std::array::from_fn(|total_zeros| {
            VlcCode::from_entry(TOTAL_ZEROS_4X4[total_zeros][total_coeffs as usize])
        });
        let (total_zeros, num_bits) = decode_prefix(reader, &column)?;
        self.num_code_bits = num_bits;

        Ok(Decoded2 {
            symbol1: total_zeros,
            symbol2: total_coeffs,
            num_bits,
        })
    }

    fn num_decoded_bits(&self) -> u32 {
        self.num_code_bits
    }
}
