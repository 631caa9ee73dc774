//! 块运动估计.
//!
//! 按光栅顺序 (块尺寸步长) 遍历整幅图像, 对每个块做全像素穷举搜索和半像素细化,
//! 每块输出一个半像素单位的运动向量. 结果写入按块数精确分配的 [`VectorList`],
//! 估计函数返回平均失真.
//!
//! 各块互不依赖, 因此另提供基于 rayon 的并行版本; 顺序版本可在块之间检查取消标志.

mod half_pel;
mod search;

use std::sync::atomic::{AtomicBool, Ordering};

use kuai_core::{BlockBuf, KuaiError, KuaiResult, MotionVector, Plane, VectorList};
use log::debug;
use rayon::prelude::*;

pub use half_pel::{HalfPelFreedom, HalfPelOffset, candidates as half_pel_candidates};
pub use search::{BlockEstimate, SearchGeometry, SearchWindow};

/// 运动估计配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionConfig {
    /// 块宽度
    pub block_width: usize,
    /// 块高度
    pub block_height: usize,
    /// 全像素搜索范围, 向量取值 [-range, range - 1]
    pub motion_range: i32,
    /// 噪声门限
    pub noise_floor: i64,
}

impl Default for MotionConfig {
    /// H.263 的 16x16 宏块, 范围 16
    fn default() -> Self {
        Self {
            block_width: 16,
            block_height: 16,
            motion_range: 16,
            noise_floor: 512,
        }
    }
}

impl MotionConfig {
    /// 检查配置自身是否合法
    pub fn validate(&self) -> KuaiResult<()> {
        if self.block_width == 0 || self.block_height == 0 {
            return Err(KuaiError::InvalidArgument(format!(
                "块尺寸无效: {}x{}",
                self.block_width, self.block_height,
            )));
        }
        // 半像素向量 2 * range 必须能放进 i16
        if self.motion_range < 1 || self.motion_range > i32::from(i16::MAX) / 2 {
            return Err(KuaiError::InvalidArgument(format!(
                "搜索范围无效: {}",
                self.motion_range,
            )));
        }
        if self.noise_floor < 0 {
            return Err(KuaiError::InvalidArgument(format!(
                "噪声门限不能为负: {}",
                self.noise_floor,
            )));
        }
        Ok(())
    }
}

/// 块运动估计器
///
/// 图像尺寸在创建时确定, 必须是块尺寸的整数倍; 结果容器恰好每块一个位置.
#[derive(Debug)]
pub struct MotionEstimator {
    geometry: SearchGeometry,
    mode: i32,
    vectors: VectorList,
    scratch: BlockBuf,
}

impl MotionEstimator {
    /// 创建 `width x height` 图像的估计器
    pub fn new(width: usize, height: usize, config: MotionConfig) -> KuaiResult<Self> {
        config.validate()?;
        if width == 0
            || height == 0
            || width % config.block_width != 0
            || height % config.block_height != 0
        {
            return Err(KuaiError::InvalidArgument(format!(
                "图像尺寸 {}x{} 不是块尺寸 {}x{} 的整数倍",
                width, height, config.block_width, config.block_height,
            )));
        }

        let block_count = (width / config.block_width) * (height / config.block_height);
        let mut vectors = VectorList::new_simple();
        vectors.set_length(block_count)?;
        let scratch = BlockBuf::new(config.block_width, config.block_height)?;

        debug!(
            "创建运动估计器: {}x{}, 块 {}x{}, 范围 {}, 共 {} 块",
            width, height, config.block_width, config.block_height, config.motion_range, block_count,
        );

        Ok(Self {
            geometry: SearchGeometry {
                width,
                height,
                block_width: config.block_width,
                block_height: config.block_height,
                range: config.motion_range,
                noise_floor: config.noise_floor,
            },
            mode: 0,
            vectors,
            scratch,
        })
    }

    pub fn width(&self) -> usize {
        self.geometry.width
    }

    pub fn height(&self) -> usize {
        self.geometry.height
    }

    /// 搜索几何参数
    pub fn geometry(&self) -> &SearchGeometry {
        &self.geometry
    }

    /// 每行块数
    pub fn blocks_per_row(&self) -> usize {
        self.geometry.width / self.geometry.block_width
    }

    /// 总块数 (结果容器长度)
    pub fn block_count(&self) -> usize {
        self.vectors.len()
    }

    /// 设置模式 (只保存, 由调用方解释)
    pub fn set_mode(&mut self, mode: i32) {
        self.mode = mode;
    }

    pub fn mode(&self) -> i32 {
        self.mode
    }

    /// 结果向量清零
    pub fn reset(&mut self) {
        if let Ok(slots) = self.vectors.simple_vectors_mut() {
            slots.fill(MotionVector::ZERO);
        }
    }

    /// 最近一次估计的结果
    pub fn vectors(&self) -> &VectorList {
        &self.vectors
    }

    /// 顺序估计整幅图像, 返回平均失真
    pub fn estimate(&mut self, current: &Plane<'_>, reference: &Plane<'_>) -> KuaiResult<i64> {
        self.run_sequential(current, reference, None)
    }

    /// 顺序估计, 每块开始前检查 `cancel`
    ///
    /// 取消时返回 [`KuaiError::Cancelled`], 结果向量清零.
    pub fn estimate_with_cancel(
        &mut self,
        current: &Plane<'_>,
        reference: &Plane<'_>,
        cancel: &AtomicBool,
    ) -> KuaiResult<i64> {
        self.run_sequential(current, reference, Some(cancel))
    }

    /// 并行估计整幅图像, 结果与顺序版本一致
    pub fn estimate_parallel(
        &mut self,
        current: &Plane<'_>,
        reference: &Plane<'_>,
    ) -> KuaiResult<i64> {
        self.check_planes(current, reference)?;
        let geom = self.geometry;
        let per_row = self.blocks_per_row();
        let (current, reference) = (*current, *reference);

        let slots = self.vectors.simple_vectors_mut()?;
        let result = slots
            .par_iter_mut()
            .enumerate()
            .map_init(
                || BlockBuf::new(geom.block_width, geom.block_height),
                |scratch, (index, slot)| -> KuaiResult<i64> {
                    let scratch = scratch
                        .as_mut()
                        .map_err(|e| KuaiError::OutOfMemory(e.to_string()))?;
                    let x = (index % per_row) * geom.block_width;
                    let y = (index / per_row) * geom.block_height;
                    let est = search::estimate_block(&geom, current, reference, x, y, scratch)?;
                    *slot = est.vector;
                    Ok(est.energy)
                },
            )
            .try_reduce(|| 0i64, |a, b| Ok(a + b));

        self.finish(result)
    }

    fn run_sequential(
        &mut self,
        current: &Plane<'_>,
        reference: &Plane<'_>,
        cancel: Option<&AtomicBool>,
    ) -> KuaiResult<i64> {
        self.check_planes(current, reference)?;
        let geom = self.geometry;
        let per_row = self.blocks_per_row();
        let slots = self.vectors.simple_vectors_mut()?;
        let result = estimate_blocks(
            &geom,
            per_row,
            (*current, *reference),
            slots,
            &mut self.scratch,
            cancel,
        );

        self.finish(result)
    }

    /// 由总能量得出平均失真; 失败时清零结果, 不留下半成品
    fn finish(&mut self, total: KuaiResult<i64>) -> KuaiResult<i64> {
        match total {
            Ok(total) => {
                let avg = total / self.block_count() as i64;
                debug!(
                    "运动估计完成: {} 块, 总失真 {}, 平均失真 {}",
                    self.block_count(),
                    total,
                    avg,
                );
                Ok(avg)
            }
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    fn check_planes(&self, current: &Plane<'_>, reference: &Plane<'_>) -> KuaiResult<()> {
        for (name, plane) in [("当前帧", current), ("参考帧", reference)] {
            if plane.width() != self.geometry.width || plane.height() != self.geometry.height {
                return Err(KuaiError::InvalidArgument(format!(
                    "{}尺寸 {}x{} 与估计器 {}x{} 不一致",
                    name,
                    plane.width(),
                    plane.height(),
                    self.geometry.width,
                    self.geometry.height,
                )));
            }
        }
        Ok(())
    }
}

/// 按光栅顺序逐块估计, 返回总能量
fn estimate_blocks(
    geom: &SearchGeometry,
    per_row: usize,
    (current, reference): (Plane<'_>, Plane<'_>),
    slots: &mut [MotionVector],
    scratch: &mut BlockBuf,
    cancel: Option<&AtomicBool>,
) -> KuaiResult<i64> {
    let mut total = 0i64;
    for (index, slot) in slots.iter_mut().enumerate() {
        if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
            debug!("运动估计在第 {} 块前被取消", index);
            return Err(KuaiError::Cancelled);
        }
        let x = (index % per_row) * geom.block_width;
        let y = (index / per_row) * geom.block_height;
        let est = search::estimate_block(geom, current, reference, x, y, scratch)?;
        *slot = est.vector;
        total += est.energy;
    }
    Ok(total)
}
