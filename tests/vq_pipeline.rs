//! 端到端集成测试: 4x4 残差块的矢量量化.
//!
//! 测试流程: 构造残差块 → 批量量化 → 按下标反量化重建 → 核对失真

use kuai::codec::vq::codebook::CODEBOOK;
use kuai::codec::{CodebookQuantiser16, Quantised, VectorQuantiser};
use kuai::core::KuaiError;

/// 平方欧氏距离
fn ssd(a: &[i16], b: &[i16]) -> i64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = i64::from(x) - i64::from(y);
            d * d
        })
        .sum()
}

/// 以码字为中心做 ±1 扰动的残差块
fn perturbed_blocks() -> Vec<i16> {
    let mut out = Vec::with_capacity(CODEBOOK.len() * 16);
    for (i, entry) in CODEBOOK.iter().enumerate() {
        for (j, &v) in entry.iter().enumerate() {
            let delta = if j == i % 16 { 1 } else { 0 };
            out.push(v + delta);
        }
    }
    out
}

#[test]
fn test_exact_block() {
    let _ = env_logger::builder().is_test(true).try_init();

    let vq = CodebookQuantiser16::new();
    let block = [-4, -5, -4, -3, 2, 2, 1, 1, 8, 7, 8, 7, 10, 10, 10, 9];
    assert_eq!(
        vq.quantise(&block).unwrap(),
        Quantised {
            index: 37,
            distortion: 0,
        }
    );
}

#[test]
fn test_batch_reconstruction() {
    let vq = CodebookQuantiser16::new();
    let blocks = perturbed_blocks();
    let results = vq.quantise_batch(&blocks).unwrap();
    assert_eq!(results.len(), CODEBOOK.len());

    for (block, q) in blocks.chunks_exact(16).zip(&results) {
        let rebuilt = vq.inverse_quantise(q.index).unwrap();
        assert_eq!(ssd(block, rebuilt), q.distortion);
        // 扰动前的码字本身距离为 1, 最优解不会更差
        assert!(q.distortion <= 1, "{:?}", q);
    }
}

#[test]
fn test_batch_rejects_partial_block() {
    let vq = CodebookQuantiser16::new();
    let err = vq.quantise_batch(&[0; 17]).unwrap_err();
    assert!(matches!(err, KuaiError::InvalidArgument(_)));
}
