//! 单个块的两级搜索: 全像素穷举后做半像素细化, 最后按能量权重决定是否退回零向量.

use kuai_core::{BlockBuf, KuaiResult, MotionVector, Overlay, Plane};
use log::{debug, trace};

use super::half_pel::{self, HalfPelFreedom};

/// 搜索几何参数 (图像尺寸、块尺寸与搜索范围)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchGeometry {
    pub width: usize,
    pub height: usize,
    pub block_width: usize,
    pub block_height: usize,
    /// 全像素搜索范围, 向量取值 [-range, range - 1]
    pub range: i32,
    /// 噪声门限 (零向量失真低于此值时倾向于零向量)
    pub noise_floor: i64,
}

/// 全像素搜索窗口, 相对块原点的闭区间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub x_left: i32,
    pub x_right: i32,
    pub y_up: i32,
    pub y_down: i32,
}

/// 单个块的搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEstimate {
    /// 选中的向量 (半像素单位)
    pub vector: MotionVector,
    /// 计入平均失真的能量
    pub energy: i64,
}

impl SearchGeometry {
    /// 块原点 (x, y) 处的全像素搜索窗口
    ///
    /// 每个方向要么取满范围, 要么为 0: 负向要求 `coord - range >= 0`,
    /// 正向要求 `coord + range` 仍在图像内且补偿块不越出图像.
    pub fn motion_range(&self, x: usize, y: usize) -> SearchWindow {
        let (x_left, x_right) = axis_range(x, self.width, self.block_width, self.range);
        let (y_up, y_down) = axis_range(y, self.height, self.block_height, self.range);
        SearchWindow {
            x_left,
            x_right,
            y_up,
            y_down,
        }
    }

    /// 全像素最优点处的半像素可用方向
    ///
    /// `(comp_x, comp_y)` 为补偿块左上角, `(vec_x, vec_y)` 为全像素向量.
    /// 补偿块贴住图像边界, 或向量已到负端时清除对应方向.
    /// 正端之外总还有一个像素可用.
    pub fn half_pel_freedom(
        &self,
        comp_x: i32,
        comp_y: i32,
        vec_x: i32,
        vec_y: i32,
    ) -> HalfPelFreedom {
        let mut freedom = HalfPelFreedom::all();
        let max_x = self.width as i32 - self.block_width as i32;
        let max_y = self.height as i32 - self.block_height as i32;

        if comp_x <= 0 || vec_x == -self.range {
            freedom.remove(HalfPelFreedom::LEFT);
        }
        if comp_x >= max_x {
            freedom.remove(HalfPelFreedom::RIGHT);
        }
        if comp_y <= 0 || vec_y == -self.range {
            freedom.remove(HalfPelFreedom::UP);
        }
        if comp_y >= max_y {
            freedom.remove(HalfPelFreedom::DOWN);
        }
        freedom
    }

    /// 把半像素分量限制在 [-2 * range, 2 * range - 1]
    pub fn clamp_component(&self, v: i32) -> i16 {
        v.clamp(-2 * self.range, 2 * self.range - 1) as i16
    }
}

fn axis_range(coord: usize, extent: usize, block: usize, range: i32) -> (i32, i32) {
    let coord = coord as i64;
    let extent = extent as i64;
    let block = block as i64;
    let r = i64::from(range);

    let neg = if coord - r >= 0 { -range } else { 0 };
    let pos = if coord + r < extent && coord + block + r - 1 <= extent {
        range - 1
    } else {
        0
    };
    (neg, pos)
}

/// 对原点 (x, y) 处的块做完整搜索
///
/// `scratch` 为块尺寸的临时缓冲区, 用于半像素插值.
pub(crate) fn estimate_block(
    geom: &SearchGeometry,
    current: Plane<'_>,
    reference: Plane<'_>,
    x: usize,
    y: usize,
    scratch: &mut BlockBuf,
) -> KuaiResult<BlockEstimate> {
    let (bx, by) = (x as i32, y as i32);
    let mut cur = Overlay::new(current, geom.block_width, geom.block_height)?;
    let mut refo = Overlay::new(reference, geom.block_width, geom.block_height)?;
    cur.set_origin(bx, by)?;
    refo.set_origin(bx, by)?;

    // 零向量失真: 需要超越的基准, 也是退回时的能量
    let zero_energy = cur.ssd(&refo)?;
    let mut min_energy = zero_energy;

    // 全像素穷举, 严格小于才替换, 同值保留先扫描到的
    let window = geom.motion_range(x, y);
    let (mut mx, mut my) = (0i32, 0i32);
    for vy in window.y_up..=window.y_down {
        for vx in window.x_left..=window.x_right {
            refo.set_origin(bx + vx, by + vy)?;
            let energy = cur.ssd_bounded(&refo, min_energy)?;
            if energy < min_energy {
                min_energy = energy;
                mx = vx;
                my = vy;
            }
        }
    }

    // 半像素细化
    refo.set_origin(bx + mx, by + my)?;
    let freedom = geom.half_pel_freedom(bx + mx, by + my, mx, my);
    let offsets = half_pel::candidates(freedom);
    if offsets.is_empty() {
        debug!("块 ({}, {}) 无可用的半像素方向, 跳过细化", x, y);
    }
    let (mut hmx, mut hmy) = (0i32, 0i32);
    for &(dx, dy) in offsets {
        refo.half_pel_read(scratch, dx, dy)?;
        let energy = cur.ssd_bounded(scratch, min_energy)?;
        if energy < min_energy {
            min_energy = energy;
            hmx = dx;
            hmy = dy;
        }
    }

    let mvx = geom.clamp_component(2 * mx + hmx);
    let mvy = geom.clamp_component(2 * my + hmy);

    // 小向量、低于噪声、与零向量相近: 满足两项及以上时退回零向量
    let diff = zero_energy - min_energy;
    let mag_sqr = i64::from(mvx) * i64::from(mvx) + i64::from(mvy) * i64::from(mvy);
    let mut weight = 0;
    if (diff >> 2) < mag_sqr {
        weight += 1;
    }
    if zero_energy < geom.noise_floor {
        weight += 1;
    }
    if diff * 10 < min_energy {
        weight += 1;
    }

    let estimate = if min_energy < zero_energy && weight < 2 {
        BlockEstimate {
            vector: MotionVector::new(mvx, mvy),
            energy: min_energy,
        }
    } else {
        BlockEstimate {
            vector: MotionVector::ZERO,
            energy: zero_energy,
        }
    };

    trace!(
        "块 ({}, {}): 全像素 ({}, {}), 半像素 ({}, {}), 权重 {}, 输出 {:?}",
        x, y, mx, my, hmx, hmy, weight, estimate
    );
    Ok(estimate)
}
