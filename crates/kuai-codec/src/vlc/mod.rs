//! CAVLC 变长码 (VLC) 编解码.
//!
//! 两族组合符号码共用同一形态的接口:
//! - total_zeros: 上下文为 total_coeffs, 见 [`total_zeros`]
//! - run_before: 上下文为 zeros_left, 见 [`run_before`]
//!
//! 编码方向只是查表. 解码方向按上下文选出码表列, 用前瞻逐位做前缀匹配,
//! 识别出唯一码字后才提交游标; 无法识别的位模式返回 [`KuaiError::InvalidData`],
//! 游标保持不变.

pub mod run_before;
pub mod tables;
pub mod total_zeros;

use kuai_core::{BitReader, KuaiError, KuaiResult};
use log::warn;

pub use run_before::{RunBeforeDecoder, RunBeforeEncoder};
pub use total_zeros::{TotalZerosDecoder, TotalZerosEncoder};

/// 变长码字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VlcCode {
    /// 码长, 0 表示无效符号组合
    pub num_bits: u8,
    /// 码字 (低 `num_bits` 位有效)
    pub code_word: u16,
}

impl VlcCode {
    /// 无效码字
    pub const INVALID: VlcCode = VlcCode {
        num_bits: 0,
        code_word: 0,
    };

    pub const fn new(num_bits: u8, code_word: u16) -> Self {
        Self {
            num_bits,
            code_word,
        }
    }

    pub(crate) const fn from_entry(entry: (u8, u16)) -> Self {
        Self::new(entry.0, entry.1)
    }

    pub fn is_valid(&self) -> bool {
        self.num_bits > 0
    }
}

/// 组合符号的解码结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded2 {
    /// 解码出的符号
    pub symbol1: u8,
    /// 上下文符号 (原样返回)
    pub symbol2: u8,
    /// 消耗的位数
    pub num_bits: u32,
}

/// VLC 编码器
pub trait VlcEncoder {
    /// 单符号编码
    ///
    /// 组合符号码没有单符号含义, 默认返回 [`VlcCode::INVALID`].
    fn encode(&self, _symbol: u8) -> VlcCode {
        VlcCode::INVALID
    }

    /// 组合符号编码, 无效组合返回位数为 0 的码字
    fn encode2(&self, symbol1: u8, symbol2: u8) -> VlcCode;
}

/// VLC 解码器
pub trait VlcDecoder {
    /// 单符号解码
    ///
    /// 组合符号码不能一次只解一个符号: 消耗位数清零, 返回 0, 不读取输入.
    fn decode(&mut self, reader: &mut BitReader<'_>) -> KuaiResult<u8>;

    /// 在上下文 `symbol2` 下解码一个组合符号
    fn decode2(&mut self, reader: &mut BitReader<'_>, symbol2: u8) -> KuaiResult<Decoded2>;

    /// 最近一次解码消耗的位数
    fn num_decoded_bits(&self) -> u32;

    /// 是否遇到标记码 (这两族码表没有标记码)
    fn marker(&self) -> bool {
        false
    }
}

/// 在 `codes` (下标即符号) 中前缀匹配下一个码字
///
/// 成功时游标前进码长并返回 (符号, 码长); 失败时游标不变.
pub(crate) fn decode_prefix(reader: &mut BitReader<'_>, codes: &[VlcCode]) -> KuaiResult<(u8, u32)> {
    let max_len = codes.iter().map(|c| c.num_bits).max().unwrap_or(0);
    let start = reader.bits_read();
    let mut code = 0u16;

    for len in 1..=max_len {
        let bit = reader.peek_bits(start + len as usize - 1, 1)?;
        code = (code << 1) | bit as u16;
        if let Some(symbol) = codes
            .iter()
            .position(|c| c.num_bits == len && c.code_word == code)
        {
            reader.skip_bits(len as usize)?;
            return Ok((symbol as u8, u32::from(len)));
        }
    }

    warn!(
        "无法识别的变长码: 位置 {}, 已读 {} 位 {:0width$b}",
        start,
        max_len,
        code,
        width = max_len as usize,
    );
    Err(KuaiError::InvalidData(format!(
        "位置 {} 处没有匹配的变长码",
        start
    )))
}
