//! 像素平面与块覆盖窗口.
//!
//! [`Plane`] 借用外部拥有的单平面采样缓冲区 (按行连续, 行跨度等于宽度).
//! [`Overlay`] 是平面上一个可移动的矩形窗口: 搜索过程中只改原点, 不重新分配.
//! 窗口越界在 [`Overlay::set_origin`] 时检查, 此后的逐像素访问都落在已验证的范围内.
//!
//! 失真度量为差值平方和 (SSD), 另提供带上限的提前退出版本和半像素插值读取.

use crate::{KuaiError, KuaiResult};

/// 采样类型 (与运动补偿残差同一精度)
pub type Sample = i16;

/// 可参与失真计算的块视图
pub trait BlockView {
    /// 块宽度
    fn block_width(&self) -> usize;
    /// 块高度
    fn block_height(&self) -> usize;
    /// 第 `y` 行的采样 (长度等于块宽度)
    fn block_row(&self, y: usize) -> &[Sample];
}

/// 借用的单平面采样缓冲区
#[derive(Debug, Clone, Copy)]
pub struct Plane<'a> {
    data: &'a [Sample],
    width: usize,
    height: usize,
}

impl<'a> Plane<'a> {
    /// 在 `data` 上建立 `width x height` 的平面视图
    pub fn new(data: &'a [Sample], width: usize, height: usize) -> KuaiResult<Self> {
        if width == 0 || height == 0 {
            return Err(KuaiError::InvalidArgument(format!(
                "平面尺寸无效: {}x{}",
                width, height,
            )));
        }
        let needed = width
            .checked_mul(height)
            .ok_or_else(|| KuaiError::InvalidArgument("平面尺寸溢出".into()))?;
        if data.len() < needed {
            return Err(KuaiError::InvalidArgument(format!(
                "平面数据不足: 需要 {} 个采样, 实际 {}",
                needed,
                data.len(),
            )));
        }
        Ok(Self {
            data: &data[..needed],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// 第 `y` 行从 `x` 开始的 `len` 个采样
    fn span(&self, x: usize, y: usize, len: usize) -> &'a [Sample] {
        let start = y * self.width + x;
        &self.data[start..start + len]
    }

    /// 全部采样
    pub fn samples(&self) -> &'a [Sample] {
        self.data
    }
}

/// 平面上的可移动矩形窗口
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    plane: Plane<'a>,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl<'a> Overlay<'a> {
    /// 创建原点在 (0, 0) 的 `width x height` 窗口
    pub fn new(plane: Plane<'a>, width: usize, height: usize) -> KuaiResult<Self> {
        if width == 0 || height == 0 || width > plane.width || height > plane.height {
            return Err(KuaiError::InvalidArgument(format!(
                "窗口 {}x{} 不在平面 {}x{} 内",
                width, height, plane.width, plane.height,
            )));
        }
        Ok(Self {
            plane,
            x: 0,
            y: 0,
            width,
            height,
        })
    }

    /// 移动窗口原点, 整个窗口必须落在平面内
    pub fn set_origin(&mut self, x: i32, y: i32) -> KuaiResult<()> {
        if !self.window_fits(x, y) {
            return Err(KuaiError::InvalidArgument(format!(
                "窗口原点 ({}, {}) 越出平面 {}x{}",
                x, y, self.plane.width, self.plane.height,
            )));
        }
        self.x = x as usize;
        self.y = y as usize;
        Ok(())
    }

    /// 当前原点
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn window_fits(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && x as usize + self.width <= self.plane.width
            && y as usize + self.height <= self.plane.height
    }

    /// 与另一同尺寸块的差值平方和
    pub fn ssd<V: BlockView>(&self, other: &V) -> KuaiResult<i64> {
        self.ssd_bounded(other, i64::MAX)
    }

    /// 带上限的差值平方和
    ///
    /// 部分和一旦达到 `limit` 即返回 (返回值 >= `limit`, 不一定是精确和);
    /// 若总和小于 `limit`, 返回值精确.
    pub fn ssd_bounded<V: BlockView>(&self, other: &V, limit: i64) -> KuaiResult<i64> {
        self.check_same_shape(other)?;

        let mut acc = 0i64;
        for row in 0..self.height {
            let a = self.block_row(row);
            let b = other.block_row(row);
            acc += a
                .iter()
                .zip(b)
                .map(|(&p, &q)| {
                    let d = i64::from(p) - i64::from(q);
                    d * d
                })
                .sum::<i64>();
            if acc >= limit {
                return Ok(acc);
            }
        }
        Ok(acc)
    }

    /// 半像素插值读取
    ///
    /// 将窗口与偏移 `(dx, dy)` 的相邻窗口做平均, 写入 `dest`.
    /// 水平或垂直半像素取两点平均 `(a + b + 1) >> 1`, 对角取四点平均 `(a + b + c + d + 2) >> 2`.
    pub fn half_pel_read(&self, dest: &mut BlockBuf, dx: i32, dy: i32) -> KuaiResult<()> {
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) {
            return Err(KuaiError::InvalidArgument(format!(
                "半像素偏移 ({}, {}) 超出 [-1, 1]",
                dx, dy,
            )));
        }
        self.check_same_shape(dest)?;
        let (x, y) = (self.x as i32, self.y as i32);
        if !self.window_fits(x + dx, y + dy)
            || !self.window_fits(x + dx, y)
            || !self.window_fits(x, y + dy)
        {
            return Err(KuaiError::InvalidArgument(format!(
                "半像素偏移 ({}, {}) 在原点 ({}, {}) 处越出平面",
                dx, dy, x, y,
            )));
        }

        let sx = (x + dx) as usize;
        let sy = (y + dy) as usize;
        let w = self.width;
        for row in 0..self.height {
            let a = self.plane.span(self.x, self.y + row, w);
            let out = dest.row_mut(row);
            match (dx, dy) {
                (0, 0) => out.copy_from_slice(a),
                (_, 0) | (0, _) => {
                    let b = self.plane.span(sx, sy + row, w);
                    for ((o, &p), &q) in out.iter_mut().zip(a).zip(b) {
                        *o = ((i32::from(p) + i32::from(q) + 1) >> 1) as Sample;
                    }
                }
                _ => {
                    let b = self.plane.span(sx, self.y + row, w);
                    let c = self.plane.span(self.x, sy + row, w);
                    let d = self.plane.span(sx, sy + row, w);
                    for i in 0..w {
                        let sum = i32::from(a[i])
                            + i32::from(b[i])
                            + i32::from(c[i])
                            + i32::from(d[i]);
                        out[i] = ((sum + 2) >> 2) as Sample;
                    }
                }
            }
        }
        Ok(())
    }

    fn check_same_shape<V: BlockView>(&self, other: &V) -> KuaiResult<()> {
        if other.block_width() != self.width || other.block_height() != self.height {
            return Err(KuaiError::InvalidArgument(format!(
                "块尺寸不一致: {}x{} vs {}x{}",
                self.width,
                self.height,
                other.block_width(),
                other.block_height(),
            )));
        }
        Ok(())
    }
}

impl BlockView for Overlay<'_> {
    fn block_width(&self) -> usize {
        self.width
    }

    fn block_height(&self) -> usize {
        self.height
    }

    fn block_row(&self, y: usize) -> &[Sample] {
        self.plane.span(self.x, self.y + y, self.width)
    }
}

/// 自有的块缓冲区 (半像素插值的临时工作块)
#[derive(Debug, Clone)]
pub struct BlockBuf {
    data: Vec<Sample>,
    width: usize,
    height: usize,
}

impl BlockBuf {
    /// 分配 `width x height` 的零值块, 分配失败返回 [`KuaiError::OutOfMemory`]
    pub fn new(width: usize, height: usize) -> KuaiResult<Self> {
        let len = width * height;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| KuaiError::OutOfMemory(format!("块缓冲区 {}x{}: {}", width, height, e)))?;
        data.resize(len, 0);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// 全部采样 (按行连续)
    pub fn samples(&self) -> &[Sample] {
        &self.data
    }

    fn row_mut(&mut self, y: usize) -> &mut [Sample] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

impl BlockView for BlockBuf {
    fn block_width(&self) -> usize {
        self.width
    }

    fn block_height(&self) -> usize {
        self.height
    }

    fn block_row(&self, y: usize) -> &[Sample] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 生成 x + y * 10 的渐变平面
    fn ramp(width: usize, height: usize) -> Vec<Sample> {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x + y * 10) as Sample))
            .collect()
    }

    #[test]
    fn test_plane_rejects_short_buffer() {
        let data = vec![0; 15];
        assert!(Plane::new(&data, 4, 4).is_err());
        assert!(Plane::new(&data, 0, 4).is_err());
    }

    #[test]
    fn test_set_origin_bounds() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let mut ov = Overlay::new(plane, 4, 4).unwrap();

        assert!(ov.set_origin(4, 4).is_ok());
        assert_eq!(ov.origin(), (4, 4));
        assert!(ov.set_origin(5, 0).is_err());
        assert!(ov.set_origin(-1, 0).is_err());
        assert_eq!(ov.origin(), (4, 4), "失败的移动不应改变原点");
    }

    #[test]
    fn test_ssd_identical_is_zero() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let a = Overlay::new(plane, 4, 4).unwrap();
        let b = Overlay::new(plane, 4, 4).unwrap();
        assert_eq!(a.ssd(&b).unwrap(), 0);
    }

    #[test]
    fn test_ssd_shifted_ramp() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let a = Overlay::new(plane, 4, 4).unwrap();
        let mut b = Overlay::new(plane, 4, 4).unwrap();
        b.set_origin(1, 0).unwrap();
        // 每个像素差 1, 共 16 个
        assert_eq!(a.ssd(&b).unwrap(), 16);
        b.set_origin(0, 1).unwrap();
        // 每个像素差 10
        assert_eq!(a.ssd(&b).unwrap(), 1600);
    }

    #[test]
    fn test_ssd_bounded_early_exit() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let a = Overlay::new(plane, 4, 4).unwrap();
        let mut b = Overlay::new(plane, 4, 4).unwrap();
        b.set_origin(0, 1).unwrap();

        let exact = a.ssd(&b).unwrap();
        let bounded = a.ssd_bounded(&b, 500).unwrap();
        assert!(bounded >= 500);
        assert!(bounded <= exact);
        // 上限高于精确值时返回精确值
        assert_eq!(a.ssd_bounded(&b, exact + 1).unwrap(), exact);
    }

    #[test]
    fn test_ssd_shape_mismatch() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let a = Overlay::new(plane, 4, 4).unwrap();
        let b = Overlay::new(plane, 4, 2).unwrap();
        assert!(a.ssd(&b).is_err());
    }

    #[test]
    fn test_half_pel_read_horizontal() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let mut ov = Overlay::new(plane, 2, 2).unwrap();
        ov.set_origin(2, 2).unwrap();
        let mut dest = BlockBuf::new(2, 2).unwrap();

        ov.half_pel_read(&mut dest, 1, 0).unwrap();
        // (22 + 23 + 1) >> 1 = 23
        assert_eq!(dest.samples(), &[23, 24, 33, 34]);

        ov.half_pel_read(&mut dest, -1, 0).unwrap();
        // (22 + 21 + 1) >> 1 = 22
        assert_eq!(dest.samples(), &[22, 23, 32, 33]);
    }

    #[test]
    fn test_half_pel_read_diagonal() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let mut ov = Overlay::new(plane, 2, 2).unwrap();
        ov.set_origin(2, 2).unwrap();
        let mut dest = BlockBuf::new(2, 2).unwrap();

        ov.half_pel_read(&mut dest, 1, 1).unwrap();
        // (22 + 23 + 32 + 33 + 2) >> 2 = 28
        assert_eq!(dest.samples(), &[28, 29, 38, 39]);
    }

    #[test]
    fn test_half_pel_read_zero_offset_copies() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let mut ov = Overlay::new(plane, 2, 2).unwrap();
        ov.set_origin(1, 1).unwrap();
        let mut dest = BlockBuf::new(2, 2).unwrap();

        ov.half_pel_read(&mut dest, 0, 0).unwrap();
        assert_eq!(dest.samples(), &[11, 12, 21, 22]);
        assert_eq!(ov.ssd(&dest).unwrap(), 0);
    }

    #[test]
    fn test_half_pel_read_rejects_out_of_plane() {
        let data = ramp(8, 8);
        let plane = Plane::new(&data, 8, 8).unwrap();
        let mut ov = Overlay::new(plane, 4, 4).unwrap();
        let mut dest = BlockBuf::new(4, 4).unwrap();

        assert!(ov.half_pel_read(&mut dest, -1, 0).is_err());
        assert!(ov.half_pel_read(&mut dest, 0, -1).is_err());
        ov.set_origin(4, 4).unwrap();
        assert!(ov.half_pel_read(&mut dest, 1, 0).is_err());
        assert!(ov.half_pel_read(&mut dest, 0, 2).is_err());
    }
}
