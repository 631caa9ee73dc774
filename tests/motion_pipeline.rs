//! 端到端集成测试: 运动估计管线.
//!
//! 测试流程: 生成两帧亮度平面 → 创建估计器 → 估计 → 检查向量容器与平均失真 → 导出表格

use kuai::codec::{MotionConfig, MotionEstimator};
use kuai::core::{MotionVector, Plane, Sample};

const W: usize = 32;
const H: usize = 32;

/// 在黑底上画一个 16x16 的亮块, 左上角在 (x0, 0)
fn frame_with_block(x0: usize) -> Vec<Sample> {
    let mut data = vec![0; W * H];
    for y in 0..16 {
        for x in x0..x0 + 16 {
            data[y * W + x] = 200;
        }
    }
    data
}

#[test]
fn test_block_shifted_two_pixels() {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = frame_with_block(0);
    let reference = frame_with_block(2);
    let src = Plane::new(&source, W, H).unwrap();
    let refp = Plane::new(&reference, W, H).unwrap();

    let mut me = MotionEstimator::new(W, H, MotionConfig::default()).unwrap();
    me.estimate(&src, &refp).unwrap();

    let vectors = me.vectors();
    assert_eq!(vectors.len(), 4);
    // 2 个全像素 = 4 个半像素单位
    let mv = vectors.simple(0).unwrap();
    assert_eq!(mv, MotionVector::new(4, 0));

    // 按向量取参考块, 残差应为零
    let (ox, oy) = ((mv.x / 2) as usize, (mv.y / 2) as usize);
    let residual: i64 = (0..16)
        .flat_map(|y| (0..16).map(move |x| (x, y)))
        .map(|(x, y)| {
            let d = i64::from(source[y * W + x]) - i64::from(reference[(y + oy) * W + x + ox]);
            d * d
        })
        .sum();
    assert_eq!(residual, 0);
}

/// 按半像素规则把每个像素与右侧邻点取平均, 最右一列取自身
fn horizontal_half_pel(src: &[Sample], width: usize, height: usize) -> Vec<Sample> {
    let mut out = vec![0; width * height];
    for y in 0..height {
        for x in 0..width {
            let a = i32::from(src[y * width + x]);
            let b = i32::from(src[y * width + (x + 1).min(width - 1)]);
            out[y * width + x] = ((a + b + 1) >> 1) as Sample;
        }
    }
    out
}

#[test]
fn test_half_pel_vector_for_interior_block() {
    const N: usize = 64;
    // 亮块左缘落在第 18 列, 当前帧取相邻两列的平均
    let mut reference = vec![0; N * N];
    for y in 16..32 {
        for x in 18..34 {
            reference[y * N + x] = 200;
        }
    }
    let current = horizontal_half_pel(&reference, N, N);
    let cur = Plane::new(&current, N, N).unwrap();
    let refp = Plane::new(&reference, N, N).unwrap();

    let mut seq = MotionEstimator::new(N, N, MotionConfig::default()).unwrap();
    let mut par = MotionEstimator::new(N, N, MotionConfig::default()).unwrap();
    seq.estimate(&cur, &refp).unwrap();
    par.estimate_parallel(&cur, &refp).unwrap();

    // 第 1 行第 1 列的块: 全像素 (0, 0) 加右半像素
    assert_eq!(seq.vectors().simple(5).unwrap(), MotionVector::new(1, 0));
    assert_eq!(par.vectors().simple(5).unwrap(), MotionVector::new(1, 0));
}

#[test]
fn test_identical_frames() {
    let frame = frame_with_block(5);
    let plane = Plane::new(&frame, W, H).unwrap();

    let mut me = MotionEstimator::new(W, H, MotionConfig::default()).unwrap();
    let avg = me.estimate(&plane, &plane).unwrap();
    assert_eq!(avg, 0);
    assert!(
        me.vectors()
            .simple_vectors()
            .unwrap()
            .iter()
            .all(|mv| *mv == MotionVector::ZERO)
    );

    let avg = me.estimate_parallel(&plane, &plane).unwrap();
    assert_eq!(avg, 0);
}

#[test]
fn test_parallel_and_sequential_agree_on_shift() {
    let source = frame_with_block(0);
    let reference = frame_with_block(2);
    let src = Plane::new(&source, W, H).unwrap();
    let refp = Plane::new(&reference, W, H).unwrap();

    let mut a = MotionEstimator::new(W, H, MotionConfig::default()).unwrap();
    let mut b = MotionEstimator::new(W, H, MotionConfig::default()).unwrap();
    let avg_a = a.estimate(&src, &refp).unwrap();
    let avg_b = b.estimate_parallel(&src, &refp).unwrap();
    assert_eq!(avg_a, avg_b);
    assert_eq!(
        a.vectors().simple_vectors().unwrap(),
        b.vectors().simple_vectors().unwrap()
    );
}

#[test]
fn test_smaller_blocks_and_range() {
    let source = frame_with_block(0);
    let reference = frame_with_block(2);
    let src = Plane::new(&source, W, H).unwrap();
    let refp = Plane::new(&reference, W, H).unwrap();

    let config = MotionConfig {
        block_width: 8,
        block_height: 8,
        motion_range: 4,
        ..MotionConfig::default()
    };
    let mut me = MotionEstimator::new(W, H, config).unwrap();
    me.estimate(&src, &refp).unwrap();

    assert_eq!(me.block_count(), 16);
    for mv in me.vectors().simple_vectors().unwrap() {
        assert!((-8..=7).contains(&mv.x), "{:?} 超出范围", mv);
        assert!((-8..=7).contains(&mv.y), "{:?} 超出范围", mv);
    }
}

#[test]
fn test_dump_after_estimate() {
    let frame = frame_with_block(0);
    let plane = Plane::new(&frame, W, H).unwrap();
    let mut me = MotionEstimator::new(W, H, MotionConfig::default()).unwrap();
    me.estimate(&plane, &plane).unwrap();

    let mut out = Vec::new();
    me.vectors().dump(&mut out, "运动向量").unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 + 4);
    assert_eq!(lines[0], "运动向量");
    assert_eq!(lines[1], "mv x,mv y");
    assert!(lines[2..].iter().all(|l| *l == "0,0"));
}
