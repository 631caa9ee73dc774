//! 比特流读取器.
//!
//! 提供从字节缓冲区中按位读取数据的能力, 是 CAVLC 变长码解码的基础设施.
//!
//! 按小端位序读取 (LSB first): 字节内从第 0 位向第 7 位推进, 多位读取时
//! 先读到的位放在结果的低位. 越过第 7 位时字节位置加一, 位位置归零.

use crate::{KuaiError, KuaiResult};

/// 比特流读取器
///
/// 游标只借用缓冲区, 所有读取都做边界检查, 越界返回 [`KuaiError::Eof`].
///
/// # 示例
/// ```
/// use kuai_core::bitreader::BitReader;
///
/// let data = [0b1000_1101, 0b0000_0001];
/// let mut br = BitReader::new(&data);
/// assert_eq!(br.read_bits(4).unwrap(), 0b1101);
/// assert_eq!(br.read_bits(4).unwrap(), 0b1000);
/// assert_eq!(br.read_bit().unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// 源数据
    data: &'a [u8],
    /// 当前字节索引
    byte_pos: usize,
    /// 当前字节中的位位置 (0-7, 0 表示最低位)
    bit_pos: u8,
}

impl<'a> BitReader<'a> {
    /// 创建新的比特流读取器
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// 缓冲区总位数
    pub fn total_bits(&self) -> usize {
        self.data.len() * 8
    }

    /// 获取已读取的总位数, 即当前绝对位偏移
    pub fn bits_read(&self) -> usize {
        self.byte_pos * 8 + self.bit_pos as usize
    }

    /// 获取剩余可读位数
    pub fn bits_left(&self) -> usize {
        self.total_bits().saturating_sub(self.bits_read())
    }

    /// 是否已到达末尾
    pub fn is_eof(&self) -> bool {
        self.bits_left() == 0
    }

    /// 读取 1 个位
    pub fn read_bit(&mut self) -> KuaiResult<u32> {
        if self.byte_pos >= self.data.len() {
            return Err(KuaiError::Eof);
        }

        let bit = (self.data[self.byte_pos] >> self.bit_pos) & 1;
        if self.bit_pos < 7 {
            self.bit_pos += 1;
        } else {
            self.bit_pos = 0;
            self.byte_pos += 1;
        }

        Ok(u32::from(bit))
    }

    /// 读取 N 个位 (最多 32 位)
    ///
    /// 第一个读到的位是结果的第 0 位.
    pub fn read_bits(&mut self, n: u32) -> KuaiResult<u32> {
        let value = gather_bits(self.data, self.bits_read(), n)?;
        self.advance(n as usize);
        Ok(value)
    }

    /// 从任意绝对位偏移窥视 N 个位
    ///
    /// 组装规则与 [`read_bits`](Self::read_bits) 相同, 但不改变游标,
    /// 可在确定码长之前做变长码前瞻.
    pub fn peek_bits(&self, bit_offset: usize, n: u32) -> KuaiResult<u32> {
        gather_bits(self.data, bit_offset, n)
    }

    /// 跳过 N 个位
    pub fn skip_bits(&mut self, n: usize) -> KuaiResult<()> {
        if n > self.bits_left() {
            return Err(KuaiError::Eof);
        }
        self.advance(n);
        Ok(())
    }

    /// 移动到绝对位偏移 (允许等于总位数, 即末尾)
    pub fn seek(&mut self, bit_offset: usize) -> KuaiResult<()> {
        if bit_offset > self.total_bits() {
            return Err(KuaiError::Eof);
        }
        self.byte_pos = bit_offset / 8;
        self.bit_pos = (bit_offset % 8) as u8;
        Ok(())
    }

    /// 获取当前字节位置
    pub fn byte_position(&self) -> usize {
        self.byte_pos
    }

    /// 获取当前字节中的位位置
    pub fn bit_position(&self) -> u8 {
        self.bit_pos
    }

    /// 获取底层数据的引用
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    fn advance(&mut self, n: usize) {
        let total = self.bit_pos as usize + n;
        self.byte_pos += total / 8;
        self.bit_pos = (total % 8) as u8;
    }
}

/// 从 `bit_offset` 起按 LSB first 组装 `n` 个位
fn gather_bits(data: &[u8], bit_offset: usize, n: u32) -> KuaiResult<u32> {
    if n > 32 {
        return Err(KuaiError::InvalidArgument(format!(
            "read_bits: n={} 超过 32 位",
            n,
        )));
    }
    let end = bit_offset.checked_add(n as usize).ok_or(KuaiError::Eof)?;
    if end > data.len() * 8 {
        return Err(KuaiError::Eof);
    }

    let mut byte_pos = bit_offset / 8;
    let mut bit_pos = (bit_offset % 8) as u32;
    let mut result: u32 = 0;
    let mut filled = 0u32;

    while filled < n {
        let available = 8 - bit_pos;
        let to_read = (n - filled).min(available);
        let mask = (1u32 << to_read) - 1;
        let bits = (u32::from(data[byte_pos]) >> bit_pos) & mask;
        result |= bits << filled;

        filled += to_read;
        bit_pos += to_read;
        if bit_pos >= 8 {
            bit_pos = 0;
            byte_pos += 1;
        }
    }

    Ok(result)
}
