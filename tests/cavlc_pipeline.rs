//! 端到端集成测试: CAVLC 残差尾部的 total_zeros / run_before 编解码.
//!
//! 测试流程: 4x4 块扫描序列 → 计算 total_zeros 与每个非零系数前的 run_before
//! → 用 BitWriter 写码字 → 用 BitReader 逐个解码 → 还原零的分布

use kuai::codec::{
    RunBeforeDecoder, RunBeforeEncoder, TotalZerosDecoder, TotalZerosEncoder, VlcCode,
    VlcDecoder, VlcEncoder,
};
use kuai::core::{BitReader, BitWriter, KuaiError};

/// 从高频到低频的非零系数之前的零游程
struct Residual {
    total_coeffs: u8,
    total_zeros: u8,
    runs: Vec<u8>,
}

/// 按 H.264 的方式分析扫描序列: total_zeros 只计最后一个非零系数之前的零
fn analyse(scan: &[i16; 16]) -> Residual {
    let last = scan.iter().rposition(|&c| c != 0).unwrap();
    let total_coeffs = scan.iter().filter(|&&c| c != 0).count() as u8;
    let total_zeros = scan[..last].iter().filter(|&&c| c == 0).count() as u8;

    let mut runs = Vec::new();
    let mut run = 0u8;
    for &c in scan[..=last].iter().rev().skip(1) {
        if c == 0 {
            run += 1;
        } else {
            runs.push(run);
            run = 0;
        }
    }
    // 最低频系数前的游程由剩余零推出, 不编码
    Residual {
        total_coeffs,
        total_zeros,
        runs,
    }
}

fn put(bw: &mut BitWriter, code: VlcCode) {
    assert!(code.is_valid());
    bw.write_code(u32::from(code.code_word), u32::from(code.num_bits));
}

fn encode(res: &Residual) -> Vec<u8> {
    let mut bw = BitWriter::new();
    put(&mut bw, TotalZerosEncoder::new().encode2(res.total_zeros, res.total_coeffs));

    let rb = RunBeforeEncoder::new();
    let mut zeros_left = res.total_zeros;
    for &run in &res.runs {
        if zeros_left == 0 {
            break;
        }
        put(&mut bw, rb.encode2(run, zeros_left));
        zeros_left -= run;
    }
    bw.finish()
}

fn decode(data: &[u8], total_coeffs: u8) -> (u8, Vec<u8>) {
    let mut br = BitReader::new(data);
    let total_zeros = TotalZerosDecoder::new()
        .decode2(&mut br, total_coeffs)
        .unwrap()
        .symbol1;

    let mut dec = RunBeforeDecoder::new();
    let mut runs = Vec::new();
    let mut zeros_left = total_zeros;
    for _ in 0..total_coeffs - 1 {
        if zeros_left == 0 {
            runs.push(0);
            continue;
        }
        let run = dec.decode2(&mut br, zeros_left).unwrap().symbol1;
        runs.push(run);
        zeros_left -= run;
    }
    (total_zeros, runs)
}

#[test]
fn test_total_zeros_single_bit() {
    let code = TotalZerosEncoder::new().encode2(0, 1);
    assert_eq!((code.num_bits, code.code_word), (1, 1));

    let mut bw = BitWriter::new();
    put(&mut bw, code);
    let data = bw.finish();
    let mut br = BitReader::new(&data);
    let out = TotalZerosDecoder::new().decode2(&mut br, 1).unwrap();
    assert_eq!((out.symbol1, out.symbol2, out.num_bits), (0, 1, 1));
}

#[test]
fn test_residual_tail_roundtrip() {
    let scans: [[i16; 16]; 4] = [
        [0, 3, -1, 0, 0, -1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0],
        [7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5],
    ];

    for scan in &scans {
        let res = analyse(scan);
        let data = encode(&res);
        let (total_zeros, runs) = decode(&data, res.total_coeffs);
        assert_eq!(total_zeros, res.total_zeros, "{:?}", scan);

        // 解码到 zeros_left 为 0 之后其余游程都是 0
        let expected: Vec<u8> = res
            .runs
            .iter()
            .scan(res.total_zeros, |left, &r| {
                let out = if *left == 0 { 0 } else { r };
                *left -= out;
                Some(out)
            })
            .collect();
        assert_eq!(runs, expected, "{:?}", scan);
    }
}

#[test]
fn test_corrupted_stream_is_reported() {
    // total_coeffs = 1 时 9 个 0 没有对应码字
    let data = [0u8, 0u8];
    let mut br = BitReader::new(&data);
    let err = TotalZerosDecoder::new().decode2(&mut br, 1).unwrap_err();
    assert!(matches!(err, KuaiError::InvalidData(_)));
    assert_eq!(br.bits_read(), 0);
}

#[test]
fn test_truncated_stream_is_eof() {
    // run_before 在 zeros_left = 15 时最长 11 位, 只给 8 个 0
    let data = [0u8];
    let mut br = BitReader::new(&data);
    let err = RunBeforeDecoder::new().decode2(&mut br, 15).unwrap_err();
    assert!(matches!(err, KuaiError::Eof));
}
