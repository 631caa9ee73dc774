//! 码本矢量量化.
//!
//! 在固定码本中为输入矢量寻找平方欧氏距离最小的码字. 两级剪枝:
//! 1. 分量和不等式: `||v - c||^2 >= (S_v - S_c)^2 / 16`, 取整后的下界已超过当前最优时跳过整个码字
//! 2. 逐维累加距离, 部分和达到当前最优即提前退出
//!
//! 两者都只剔除不可能胜出的码字, 结果与穷举一致; 同距离时先出现的码字胜出.

pub mod codebook;

use std::sync::OnceLock;

use kuai_core::{KuaiError, KuaiResult};
use rayon::prelude::*;

use codebook::{CODEBOOK, CODEBOOK_LEN, DIMENSION};

/// 量化结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantised {
    /// 码字下标
    pub index: usize,
    /// 与码字的平方欧氏距离
    pub distortion: i64,
}

/// 矢量量化器
pub trait VectorQuantiser {
    /// 矢量维度
    fn dimension(&self) -> usize;

    /// 码本长度
    fn codebook_len(&self) -> usize;

    /// 量化一个矢量, 长度必须等于 [`dimension`](Self::dimension)
    fn quantise(&self, vector: &[i16]) -> KuaiResult<Quantised>;

    /// 取回码字 (只读), 下标越界返回 `None`
    fn inverse_quantise(&self, index: usize) -> Option<&'static [i16]>;
}

/// 各码字分量和
static CODEBOOK_SUMS: OnceLock<[i32; CODEBOOK_LEN]> = OnceLock::new();

fn codebook_sums() -> &'static [i32; CODEBOOK_LEN] {
    CODEBOOK_SUMS.get_or_init(|| {
        let mut sums = [0i32; CODEBOOK_LEN];
        for (sum, entry) in sums.iter_mut().zip(CODEBOOK.iter()) {
            *sum = entry.iter().map(|&v| i32::from(v)).sum();
        }
        sums
    })
}

/// 16 维 (4x4) 残差码本量化器
#[derive(Debug, Clone, Copy, Default)]
pub struct CodebookQuantiser16;

impl CodebookQuantiser16 {
    pub fn new() -> Self {
        Self
    }

    /// 批量量化, `vectors` 按 16 个一组连续存放, 各组并行处理
    pub fn quantise_batch(&self, vectors: &[i16]) -> KuaiResult<Vec<Quantised>> {
        if vectors.len() % DIMENSION != 0 {
            return Err(KuaiError::InvalidArgument(format!(
                "批量输入长度 {} 不是维度 {} 的整数倍",
                vectors.len(),
                DIMENSION,
            )));
        }
        vectors
            .par_chunks_exact(DIMENSION)
            .map(|v| self.quantise(v))
            .collect()
    }
}

impl VectorQuantiser for CodebookQuantiser16 {
    fn dimension(&self) -> usize {
        DIMENSION
    }

    fn codebook_len(&self) -> usize {
        CODEBOOK_LEN
    }

    fn quantise(&self, vector: &[i16]) -> KuaiResult<Quantised> {
        if vector.len() != DIMENSION {
            return Err(KuaiError::InvalidArgument(format!(
                "矢量维度 {} 不等于 {}",
                vector.len(),
                DIMENSION,
            )));
        }

        let sums = codebook_sums();
        let vec_sum: i64 = vector.iter().map(|&v| i64::from(v)).sum();
        let mut best = Quantised {
            index: 0,
            distortion: i64::MAX,
        };

        'book: for (index, (entry, &entry_sum)) in CODEBOOK.iter().zip(sums.iter()).enumerate() {
            let d = vec_sum - i64::from(entry_sum);
            let bound = (8 + d * d) >> 4;
            if bound > best.distortion {
                continue;
            }

            let mut dist = 0i64;
            for (&v, &c) in vector.iter().zip(entry.iter()) {
                let e = i64::from(v) - i64::from(c);
                dist += e * e;
                if dist >= best.distortion {
                    continue 'book;
                }
            }

            best = Quantised {
                index,
                distortion: dist,
            };
        }

        Ok(best)
    }

    fn inverse_quantise(&self, index: usize) -> Option<&'static [i16]> {
        CODEBOOK.get(index).map(|entry| entry.as_slice())
    }
}
