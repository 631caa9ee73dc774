//! Kuai 视频编码构件性能基准测试.
//!
//! 覆盖运动估计 (串行与并行)、矢量量化、CAVLC 尾部码解码等热点路径.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kuai::codec::{
    CodebookQuantiser16, MotionConfig, MotionEstimator, RunBeforeDecoder, RunBeforeEncoder,
    TotalZerosDecoder, TotalZerosEncoder, VectorQuantiser, VlcDecoder, VlcEncoder,
};
use kuai::core::{BitReader, BitWriter, Plane, Sample};

/// 生成伪随机纹理亮度平面
fn make_texture(width: usize, height: usize, seed: u32) -> Vec<Sample> {
    let mut state = seed;
    (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((state >> 16) & 0xFF) as Sample
        })
        .collect()
}

/// 整幅平移 (dx, dy), 越界处重复边缘
fn make_shifted(src: &[Sample], width: usize, height: usize, dx: isize, dy: isize) -> Vec<Sample> {
    let mut out = vec![0; width * height];
    for y in 0..height {
        for x in 0..width {
            let sx = (x as isize - dx).clamp(0, width as isize - 1) as usize;
            let sy = (y as isize - dy).clamp(0, height as isize - 1) as usize;
            out[y * width + x] = src[sy * width + sx];
        }
    }
    out
}

fn bench_motion_estimate(c: &mut Criterion) {
    const W: usize = 176;
    const H: usize = 144;
    let current = make_texture(W, H, 7);
    let reference = make_shifted(&current, W, H, 3, -2);
    let cur = Plane::new(&current, W, H).unwrap();
    let refp = Plane::new(&reference, W, H).unwrap();

    c.bench_function("motion_estimate_qcif", |b| {
        let mut me = MotionEstimator::new(W, H, MotionConfig::default()).unwrap();
        b.iter(|| {
            let avg = me.estimate(black_box(&cur), black_box(&refp)).unwrap();
            black_box(avg);
        });
    });

    c.bench_function("motion_estimate_parallel_qcif", |b| {
        let mut me = MotionEstimator::new(W, H, MotionConfig::default()).unwrap();
        b.iter(|| {
            let avg = me
                .estimate_parallel(black_box(&cur), black_box(&refp))
                .unwrap();
            black_box(avg);
        });
    });
}

fn bench_vq(c: &mut Criterion) {
    let blocks: Vec<i16> = make_texture(16, 396, 11)
        .into_iter()
        .map(|v| (v - 128) / 4)
        .collect();
    let vq = CodebookQuantiser16::new();

    c.bench_function("vq_quantise_396_blocks", |b| {
        b.iter(|| {
            for block in black_box(&blocks).chunks_exact(16) {
                black_box(vq.quantise(block).unwrap());
            }
        });
    });

    c.bench_function("vq_quantise_batch_396_blocks", |b| {
        b.iter(|| {
            black_box(vq.quantise_batch(black_box(&blocks)).unwrap());
        });
    });
}

fn bench_cavlc_tail_decode(c: &mut Criterion) {
    // 每块: total_coeffs = 5, total_zeros = 4, run_before = 1, 0, 2, 0
    let tz = TotalZerosEncoder::new();
    let rb = RunBeforeEncoder::new();
    let mut bw = BitWriter::new();
    for _ in 0..1024 {
        for code in [
            tz.encode2(4, 5),
            rb.encode2(1, 4),
            rb.encode2(0, 3),
            rb.encode2(2, 3),
            rb.encode2(0, 1),
        ] {
            bw.write_code(u32::from(code.code_word), u32::from(code.num_bits));
        }
    }
    let data = bw.finish();

    c.bench_function("cavlc_tail_decode_1024_blocks", |b| {
        let mut tz_dec = TotalZerosDecoder::new();
        let mut rb_dec = RunBeforeDecoder::new();
        b.iter(|| {
            let mut br = BitReader::new(black_box(&data));
            for _ in 0..1024 {
                let mut zeros_left = tz_dec.decode2(&mut br, 5).unwrap().symbol1;
                for _ in 0..4 {
                    if zeros_left == 0 {
                        break;
                    }
                    zeros_left -= rb_dec.decode2(&mut br, zeros_left).unwrap().symbol1;
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_motion_estimate,
    bench_vq,
    bench_cavlc_tail_decode,
);
criterion_main!(benches);
