//! 比特流写入器.
//!
//! 提供向字节缓冲区按位写入数据的能力, 是变长码编码输出的基础设施.
//!
//! 按小端位序写入 (LSB first), 与 [`BitReader`](crate::bitreader::BitReader) 对应.

/// 比特流写入器
///
/// # 示例
/// ```
/// use kuai_core::bitwriter::BitWriter;
/// use kuai_core::bitreader::BitReader;
///
/// let mut bw = BitWriter::new();
/// bw.write_bits(0b1101, 4);
/// bw.write_bits(0b1000, 4);
/// let data = bw.finish();
/// assert_eq!(data, vec![0b1000_1101]);
///
/// let mut br = BitReader::new(&data);
/// assert_eq!(br.read_bits(8).unwrap(), 0b1000_1101);
/// ```
#[derive(Debug, Default)]
pub struct BitWriter {
    /// 输出缓冲区
    data: Vec<u8>,
    /// 当前字节 (正在填充)
    current_byte: u8,
    /// 当前字节中已填充的位数 (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// 创建新的比特流写入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 以指定容量创建比特流写入器
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            current_byte: 0,
            bit_count: 0,
        }
    }

    /// 获取已写入的总位数
    pub fn bits_written(&self) -> usize {
        self.data.len() * 8 + self.bit_count as usize
    }

    /// 写入 1 个位
    pub fn write_bit(&mut self, bit: u32) {
        self.current_byte |= ((bit & 1) as u8) << self.bit_count;
        self.bit_count += 1;
        if self.bit_count >= 8 {
            self.data.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    /// 写入 N 个位 (最多 32 位)
    ///
    /// 值的第 0 位最先写入, 与 `BitReader::read_bits` 的组装顺序一致.
    pub fn write_bits(&mut self, value: u32, n: u32) {
        debug_assert!(n <= 32, "write_bits: n={} 超过 32 位", n);

        let mut remaining = n;
        let mut value = value;
        while remaining > 0 {
            let available = 8 - self.bit_count as u32;
            let to_write = remaining.min(available);
            let mask = (1u32 << to_write) - 1;

            self.current_byte |= ((value & mask) as u8) << self.bit_count;
            self.bit_count += to_write as u8;
            if self.bit_count >= 8 {
                self.data.push(self.current_byte);
                self.current_byte = 0;
                self.bit_count = 0;
            }

            value = value.checked_shr(to_write).unwrap_or(0);
            remaining -= to_write;
        }
    }

    /// 写入变长码字
    ///
    /// 码字的最高有效位最先进入比特流, 这是变长码解码器逐位做前缀匹配的顺序.
    pub fn write_code(&mut self, code_word: u32, num_bits: u32) {
        for i in (0..num_bits).rev() {
            self.write_bit((code_word >> i) & 1);
        }
    }

    /// 补零对齐到字节边界
    pub fn align_to_byte(&mut self) {
        if self.bit_count > 0 {
            self.data.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    /// 结束写入, 返回字节数据 (末尾不足一字节的部分以零填充)
    pub fn finish(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitreader::BitReader;

    #[test]
    fn test_write_bit_lsb_first() {
        let mut bw = BitWriter::new();
        bw.write_bit(1);
        bw.write_bit(0);
        bw.write_bit(1);
        assert_eq!(bw.bits_written(), 3);
        assert_eq!(bw.finish(), vec![0b0000_0101]);
    }

    #[test]
    fn test_write_bits_across_bytes() {
        let mut bw = BitWriter::new();
        bw.write_bits(0, 4);
        bw.write_bits(0xBA, 8);
        assert_eq!(bw.finish(), vec![0xA0, 0x0B]);
    }

    #[test]
    fn test_write_bits_32() {
        let mut bw = BitWriter::with_capacity(4);
        bw.write_bits(0x1234_5678, 32);
        assert_eq!(bw.finish(), vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_write_code_msb_first() {
        // 码字 011 (3 位): 流中依次为 0, 1, 1
        let mut bw = BitWriter::new();
        bw.write_code(0b011, 3);
        let data = bw.finish();

        let mut br = BitReader::new(&data);
        assert_eq!(br.read_bit().unwrap(), 0);
        assert_eq!(br.read_bit().unwrap(), 1);
        assert_eq!(br.read_bit().unwrap(), 1);
    }

    #[test]
    fn test_reader_roundtrip_mixed_widths() {
        let fields = [(5u32, 3u32), (0x1FF, 9), (0, 1), (0xABCD, 16), (1, 1)];
        let mut bw = BitWriter::new();
        for &(value, n) in &fields {
            bw.write_bits(value, n);
        }
        let data = bw.finish();

        let mut br = BitReader::new(&data);
        for &(value, n) in &fields {
            assert_eq!(br.read_bits(n).unwrap(), value);
        }
    }
}
