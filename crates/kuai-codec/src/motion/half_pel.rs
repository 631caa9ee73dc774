//! 半像素细化的候选偏移表.
//!
//! 全像素最优点周围的 8 个半像素位置并不总是可用: 补偿块贴近图像边界,
//! 或全像素向量已到搜索范围的负端时, 对应方向的候选会被剔除.
//! 四个方向的可用性组合映射到 14 张固定候选表之一.

use bitflags::bitflags;

bitflags! {
    /// 半像素细化允许的方向
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HalfPelFreedom: u8 {
        /// 允许向左 (dx = -1)
        const LEFT  = 1 << 0;
        /// 允许向右 (dx = +1)
        const RIGHT = 1 << 1;
        /// 允许向上 (dy = -1)
        const UP    = 1 << 2;
        /// 允许向下 (dy = +1)
        const DOWN  = 1 << 3;
    }
}

/// 半像素偏移 (dx, dy)
pub type HalfPelOffset = (i32, i32);

#[rustfmt::skip]
const ALL: [HalfPelOffset; 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

const TOP_LEFT: [HalfPelOffset; 3] = [(1, 0), (0, 1), (1, 1)];
const TOP_RIGHT: [HalfPelOffset; 3] = [(-1, 0), (-1, 1), (0, 1)];
const BOTTOM_LEFT: [HalfPelOffset; 3] = [(0, -1), (1, -1), (1, 0)];
const BOTTOM_RIGHT: [HalfPelOffset; 3] = [(-1, -1), (0, -1), (-1, 0)];

const LEFT_EDGE: [HalfPelOffset; 5] = [(0, -1), (1, -1), (1, 0), (0, 1), (1, 1)];
const RIGHT_EDGE: [HalfPelOffset; 5] = [(-1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];
const TOP_EDGE: [HalfPelOffset; 5] = [(-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];
const BOTTOM_EDGE: [HalfPelOffset; 5] = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0)];

const LEFT_RIGHT: [HalfPelOffset; 2] = [(-1, 0), (1, 0)];
const UP_DOWN: [HalfPelOffset; 2] = [(0, -1), (0, 1)];

const LEFT_ONLY: [HalfPelOffset; 1] = [(-1, 0)];
const RIGHT_ONLY: [HalfPelOffset; 1] = [(1, 0)];
const UP_ONLY: [HalfPelOffset; 1] = [(0, -1)];
const DOWN_ONLY: [HalfPelOffset; 1] = [(0, 1)];

/// 按可用方向选出候选偏移表 (按表中顺序评估)
///
/// 四个方向全部不可用时返回空表, 即不做半像素细化.
pub fn candidates(freedom: HalfPelFreedom) -> &'static [HalfPelOffset] {
    let l = freedom.contains(HalfPelFreedom::LEFT);
    let r = freedom.contains(HalfPelFreedom::RIGHT);
    let u = freedom.contains(HalfPelFreedom::UP);
    let d = freedom.contains(HalfPelFreedom::DOWN);

    match (l, r, u, d) {
        (true, true, true, true) => &ALL,
        (true, true, false, true) => &TOP_EDGE,
        (true, true, true, false) => &BOTTOM_EDGE,
        (false, true, true, true) => &LEFT_EDGE,
        (true, false, true, true) => &RIGHT_EDGE,
        (false, true, false, true) => &TOP_LEFT,
        (true, false, false, true) => &TOP_RIGHT,
        (false, true, true, false) => &BOTTOM_LEFT,
        (true, false, true, false) => &BOTTOM_RIGHT,
        (true, true, false, false) => &LEFT_RIGHT,
        (false, false, true, true) => &UP_DOWN,
        (true, false, false, false) => &LEFT_ONLY,
        (false, true, false, false) => &RIGHT_ONLY,
        (false, false, true, false) => &UP_ONLY,
        (false, false, false, true) => &DOWN_ONLY,
        (false, false, false, false) => &[],
    }
}
