//! CAVLC 码表常量.
//!
//! 码字按 (位数, 码字) 存放, 码字的最高有效位最先出现在比特流中.
//! 位数为 0 的项表示不可达的符号组合, 正确的编码器不会产生它们.

/// total_zeros 码表 (4x4 块, H.264 表 9-7)
///
/// 索引: `[total_zeros][total_coeffs]`, 按 total_coeffs 列构成前缀码.
#[rustfmt::skip]
pub const TOTAL_ZEROS_4X4: [[(u8, u16); 16]; 16] = [
    // 列为 total_coeffs 0..=15, 行尾注释为 total_zeros
    [(0, 0), (1, 1), (3, 7), (4, 5), (5, 3), (4, 5), (6, 1), (6, 1), (6, 1), (6, 1), (5, 1), (4, 0), (4, 0), (3, 0), (2, 0), (1, 0)], // 0
    [(0, 0), (3, 3), (3, 6), (3, 7), (3, 7), (4, 4), (5, 1), (5, 1), (4, 1), (6, 0), (5, 0), (4, 1), (4, 1), (3, 1), (2, 1), (1, 1)], // 1
    [(0, 0), (3, 2), (3, 5), (3, 6), (4, 5), (4, 3), (3, 7), (3, 5), (5, 1), (4, 1), (3, 1), (3, 1), (2, 1), (1, 1), (1, 1), (0, 0)], // 2
    [(0, 0), (4, 3), (3, 4), (3, 5), (4, 4), (3, 7), (3, 6), (3, 4), (3, 3), (2, 3), (2, 3), (3, 2), (1, 1), (2, 1), (0, 0), (0, 0)], // 3
    [(0, 0), (4, 2), (3, 3), (4, 4), (3, 6), (3, 6), (3, 5), (3, 3), (2, 3), (2, 2), (2, 2), (1, 1), (3, 1), (0, 0), (0, 0), (0, 0)], // 4
    [(0, 0), (5, 3), (4, 5), (4, 3), (3, 5), (3, 5), (3, 4), (2, 3), (2, 2), (3, 1), (2, 1), (3, 3), (0, 0), (0, 0), (0, 0), (0, 0)], // 5
    [(0, 0), (5, 2), (4, 4), (3, 4), (3, 4), (3, 4), (3, 3), (3, 2), (3, 2), (2, 1), (4, 1), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 6
    [(0, 0), (6, 3), (4, 3), (3, 3), (4, 3), (3, 3), (3, 2), (4, 1), (3, 1), (5, 1), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 7
    [(0, 0), (6, 2), (4, 2), (4, 2), (3, 3), (4, 2), (4, 1), (3, 1), (6, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 8
    [(0, 0), (7, 3), (5, 3), (5, 3), (4, 2), (5, 1), (3, 1), (6, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 9
    [(0, 0), (7, 2), (5, 2), (5, 2), (5, 2), (4, 1), (6, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 10
    [(0, 0), (8, 3), (6, 3), (6, 1), (5, 1), (5, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 11
    [(0, 0), (8, 2), (6, 2), (5, 1), (5, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 12
    [(0, 0), (9, 3), (6, 1), (6, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 13
    [(0, 0), (9, 2), (6, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 14
    [(0, 0), (9, 1), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // 15
];

/// run_before 码表 (H.264 表 9-10)
///
/// 索引: `[min(zeros_left, 7) - 1][run_before]`, zeros_left > 6 共用最后一行.
#[rustfmt::skip]
pub const RUN_BEFORE: [[(u8, u16); 15]; 7] = [
    // zeros_left = 1
    [(1, 0b1), (1, 0b0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // zeros_left = 2
    [(1, 0b1), (2, 0b01), (2, 0b00), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // zeros_left = 3
    [(2, 0b11), (2, 0b10), (2, 0b01), (2, 0b00), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // zeros_left = 4
    [(2, 0b11), (2, 0b10), (2, 0b01), (3, 0b001), (3, 0b000), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // zeros_left = 5
    [(2, 0b11), (2, 0b10), (3, 0b011), (3, 0b010), (3, 0b001), (3, 0b000), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // zeros_left = 6
    [(2, 0b11), (3, 0b000), (3, 0b001), (3, 0b011), (3, 0b010), (3, 0b101), (3, 0b100), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    // zeros_left > 6
    [(3, 0b111), (3, 0b110), (3, 0b101), (3, 0b100), (3, 0b011), (3, 0b010), (3, 0b001), (4, 0b0001), (5, 0b00001), (6, 0b000001), (7, 0b0000001), (8, 0b00000001), (9, 0b000000001), (10, 0b0000000001), (11, 0b00000000001)],
];
