//! 运动向量结果容器.
//!
//! 按块位置顺序保存结果, 长度在 [`VectorList::set_length`] 时确定, 之后只能整体重建.
//! 两种形态:
//! - 简单: 每个位置一个二维向量
//! - 复合: 每个位置一个模式号, 一个向量计数, 以及固定容量的向量数组
//!
//! 所有按位置访问都做越界检查, 越界返回 [`KuaiError::OutOfRange`].

use std::io::Write;

use log::warn;

use crate::{KuaiError, KuaiResult};

/// 二维运动向量 (半像素单位)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MotionVector {
    pub x: i16,
    pub y: i16,
}

impl MotionVector {
    pub const ZERO: MotionVector = MotionVector { x: 0, y: 0 };

    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// 读取一个分量
    pub fn get(&self, axis: Axis) -> i16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// 设置一个分量
    pub fn set(&mut self, axis: Axis, value: i16) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }
}

/// 向量分量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// 复合形态的单个位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorPattern {
    /// 模式号 (由调用方解释)
    pub pattern: i32,
    /// 有效向量个数
    pub num_vectors: usize,
    /// 固定容量的向量数组
    pub vectors: Box<[MotionVector]>,
}

/// 容器形态, 构造时选定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorListKind {
    /// 每个位置一个向量
    Simple,
    /// 每个位置最多 `max_vecs_per_struct` 个向量加模式号
    Complex { max_vecs_per_struct: usize },
}

#[derive(Debug, Clone)]
enum Storage {
    Simple(Vec<MotionVector>),
    Complex(Vec<VectorPattern>),
}

/// 运动向量结果容器
#[derive(Debug, Clone)]
pub struct VectorList {
    kind: VectorListKind,
    storage: Storage,
}

impl VectorList {
    /// 创建空容器 (长度为 0)
    pub fn new(kind: VectorListKind) -> Self {
        let storage = match kind {
            VectorListKind::Simple => Storage::Simple(Vec::new()),
            VectorListKind::Complex { .. } => Storage::Complex(Vec::new()),
        };
        Self { kind, storage }
    }

    /// 创建简单形态容器
    pub fn new_simple() -> Self {
        Self::new(VectorListKind::Simple)
    }

    /// 创建复合形态容器
    pub fn new_complex(max_vecs_per_struct: usize) -> Self {
        Self::new(VectorListKind::Complex {
            max_vecs_per_struct,
        })
    }

    pub fn kind(&self) -> VectorListKind {
        self.kind
    }

    /// 当前长度
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Simple(v) => v.len(),
            Storage::Complex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 每个位置的向量容量 (简单形态固定为 1)
    pub fn max_vecs_per_struct(&self) -> usize {
        match self.kind {
            VectorListKind::Simple => 1,
            VectorListKind::Complex {
                max_vecs_per_struct,
            } => max_vecs_per_struct,
        }
    }

    /// 重新分配为恰好 `length` 个位置
    ///
    /// 先释放旧存储; 分配失败时返回 [`KuaiError::OutOfMemory`] 且容器保持为空.
    pub fn set_length(&mut self, length: usize) -> KuaiResult<()> {
        self.clear();

        let storage = match self.kind {
            VectorListKind::Simple => {
                let mut v = Vec::new();
                try_reserve(&mut v, length)?;
                v.resize(length, MotionVector::ZERO);
                Storage::Simple(v)
            }
            VectorListKind::Complex {
                max_vecs_per_struct,
            } => {
                let mut v = Vec::new();
                try_reserve(&mut v, length)?;
                for _ in 0..length {
                    let mut vectors = Vec::new();
                    try_reserve(&mut vectors, max_vecs_per_struct)?;
                    vectors.resize(max_vecs_per_struct, MotionVector::ZERO);
                    v.push(VectorPattern {
                        pattern: 0,
                        num_vectors: 0,
                        vectors: vectors.into_boxed_slice(),
                    });
                }
                Storage::Complex(v)
            }
        };

        self.storage = storage;
        Ok(())
    }

    /// 释放全部存储, 长度归零
    pub fn clear(&mut self) {
        self.storage = match self.kind {
            VectorListKind::Simple => Storage::Simple(Vec::new()),
            VectorListKind::Complex { .. } => Storage::Complex(Vec::new()),
        };
    }

    /// 简单形态的全部向量
    pub fn simple_vectors(&self) -> KuaiResult<&[MotionVector]> {
        match &self.storage {
            Storage::Simple(v) => Ok(v),
            Storage::Complex(_) => Err(not_simple()),
        }
    }

    /// 简单形态的向量可变切片, 各位置互不重叠, 可分块并行写入
    pub fn simple_vectors_mut(&mut self) -> KuaiResult<&mut [MotionVector]> {
        match &mut self.storage {
            Storage::Simple(v) => Ok(v),
            Storage::Complex(_) => Err(not_simple()),
        }
    }

    /// 读取简单形态 `pos` 处的向量
    pub fn simple(&self, pos: usize) -> KuaiResult<MotionVector> {
        let v = self.simple_vectors()?;
        v.get(pos).copied().ok_or(KuaiError::OutOfRange {
            index: pos,
            len: v.len(),
        })
    }

    /// 写入简单形态 `pos` 处的向量
    pub fn set_simple(&mut self, pos: usize, mv: MotionVector) -> KuaiResult<()> {
        let v = self.simple_vectors_mut()?;
        let len = v.len();
        let slot = v
            .get_mut(pos)
            .ok_or(KuaiError::OutOfRange { index: pos, len })?;
        *slot = mv;
        Ok(())
    }

    /// 读取简单形态 `pos` 处向量的一个分量
    pub fn get_simple_element(&self, pos: usize, axis: Axis) -> KuaiResult<i32> {
        Ok(i32::from(self.simple(pos)?.get(axis)))
    }

    /// 设置简单形态 `pos` 处向量的一个分量
    pub fn set_simple_element(&mut self, pos: usize, axis: Axis, value: i32) -> KuaiResult<()> {
        let value = to_component(value)?;
        let mut mv = self.simple(pos)?;
        mv.set(axis, value);
        self.set_simple(pos, mv)
    }

    /// 复合形态 `pos` 处的结构
    pub fn complex(&self, pos: usize) -> KuaiResult<&VectorPattern> {
        match &self.storage {
            Storage::Complex(v) => v.get(pos).ok_or(KuaiError::OutOfRange {
                index: pos,
                len: v.len(),
            }),
            Storage::Simple(_) => Err(not_complex()),
        }
    }

    fn complex_mut(&mut self, pos: usize) -> KuaiResult<&mut VectorPattern> {
        match &mut self.storage {
            Storage::Complex(v) => {
                let len = v.len();
                v.get_mut(pos)
                    .ok_or(KuaiError::OutOfRange { index: pos, len })
            }
            Storage::Simple(_) => Err(not_complex()),
        }
    }

    /// 设置复合形态 `pos` 处的模式号与有效向量个数
    pub fn set_pattern(&mut self, pos: usize, pattern: i32, num_vectors: usize) -> KuaiResult<()> {
        let entry = self.complex_mut(pos)?;
        if num_vectors > entry.vectors.len() {
            return Err(KuaiError::OutOfRange {
                index: num_vectors,
                len: entry.vectors.len(),
            });
        }
        entry.pattern = pattern;
        entry.num_vectors = num_vectors;
        Ok(())
    }

    /// 读取复合形态 `pos` 处第 `vec` 个向量的一个分量
    pub fn get_complex_element(&self, pos: usize, vec: usize, axis: Axis) -> KuaiResult<i32> {
        let entry = self.complex(pos)?;
        let mv = entry.vectors.get(vec).ok_or(KuaiError::OutOfRange {
            index: vec,
            len: entry.vectors.len(),
        })?;
        Ok(i32::from(mv.get(axis)))
    }

    /// 设置复合形态 `pos` 处第 `vec` 个向量的一个分量
    pub fn set_complex_element(
        &mut self,
        pos: usize,
        vec: usize,
        axis: Axis,
        value: i32,
    ) -> KuaiResult<()> {
        let value = to_component(value)?;
        let entry = self.complex_mut(pos)?;
        let len = entry.vectors.len();
        let mv = entry
            .vectors
            .get_mut(vec)
            .ok_or(KuaiError::OutOfRange { index: vec, len })?;
        mv.set(axis, value);
        Ok(())
    }

    /// 以逗号分隔的表格导出简单形态内容
    ///
    /// 第一行为标题, 第二行为列名 `mv x,mv y`, 之后每个位置一行.
    pub fn dump<W: Write>(&self, out: &mut W, title: &str) -> KuaiResult<()> {
        let vectors = match &self.storage {
            Storage::Simple(v) => v,
            Storage::Complex(_) => {
                return Err(KuaiError::Unsupported("仅支持导出简单形态的向量表".into()));
            }
        };

        writeln!(out, "{}", title)?;
        writeln!(out, "mv x,mv y")?;
        for mv in vectors {
            writeln!(out, "{},{}", mv.x, mv.y)?;
        }
        Ok(())
    }
}

fn try_reserve<T>(v: &mut Vec<T>, additional: usize) -> KuaiResult<()> {
    v.try_reserve_exact(additional).map_err(|e| {
        warn!("向量容器分配 {} 项失败: {}", additional, e);
        KuaiError::OutOfMemory(format!("向量容器分配 {} 项失败: {}", additional, e))
    })
}

fn to_component(value: i32) -> KuaiResult<i16> {
    i16::try_from(value)
        .map_err(|_| KuaiError::InvalidArgument(format!("向量分量 {} 超出 i16 范围", value)))
}

fn not_simple() -> KuaiError {
    KuaiError::Unsupported("容器不是简单形态".into())
}

fn not_complex() -> KuaiError {
    KuaiError::Unsupported("容器不是复合形态".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_set_length_and_access() {
        let mut list = VectorList::new_simple();
        assert!(list.is_empty());
        list.set_length(4).unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list.max_vecs_per_struct(), 1);

        list.set_simple_element(2, Axis::X, -7).unwrap();
        list.set_simple_element(2, Axis::Y, 5).unwrap();
        assert_eq!(list.get_simple_element(2, Axis::X).unwrap(), -7);
        assert_eq!(list.get_simple_element(2, Axis::Y).unwrap(), 5);
        assert_eq!(list.simple(2).unwrap(), MotionVector::new(-7, 5));
        assert_eq!(list.simple(0).unwrap(), MotionVector::ZERO);
    }

    #[test]
    fn test_simple_out_of_range() {
        let mut list = VectorList::new_simple();
        list.set_length(2).unwrap();

        assert!(matches!(
            list.get_simple_element(2, Axis::X),
            Err(KuaiError::OutOfRange { index: 2, len: 2 })
        ));
        assert!(list.set_simple(5, MotionVector::ZERO).is_err());
    }

    #[test]
    fn test_component_must_fit_i16() {
        let mut list = VectorList::new_simple();
        list.set_length(1).unwrap();
        assert!(list.set_simple_element(0, Axis::X, 40_000).is_err());
        assert_eq!(list.get_simple_element(0, Axis::X).unwrap(), 0);
    }

    #[test]
    fn test_set_length_rebuilds() {
        let mut list = VectorList::new_simple();
        list.set_length(3).unwrap();
        list.set_simple(1, MotionVector::new(3, 3)).unwrap();

        list.set_length(5).unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list.simple(1).unwrap(), MotionVector::ZERO, "重建后内容应清零");

        list.set_length(0).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_complex_access() {
        let mut list = VectorList::new_complex(4);
        list.set_length(2).unwrap();
        assert_eq!(list.max_vecs_per_struct(), 4);

        list.set_pattern(1, 9, 2).unwrap();
        list.set_complex_element(1, 0, Axis::X, 1).unwrap();
        list.set_complex_element(1, 1, Axis::Y, -2).unwrap();

        let entry = list.complex(1).unwrap();
        assert_eq!(entry.pattern, 9);
        assert_eq!(entry.num_vectors, 2);
        assert_eq!(entry.vectors.len(), 4);
        assert_eq!(list.get_complex_element(1, 0, Axis::X).unwrap(), 1);
        assert_eq!(list.get_complex_element(1, 1, Axis::Y).unwrap(), -2);

        assert!(list.get_complex_element(1, 4, Axis::X).is_err());
        assert!(list.get_complex_element(2, 0, Axis::X).is_err());
        assert!(list.set_pattern(0, 1, 5).is_err());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let mut simple = VectorList::new_simple();
        simple.set_length(1).unwrap();
        assert!(simple.complex(0).is_err());

        let mut complex = VectorList::new_complex(2);
        complex.set_length(1).unwrap();
        assert!(complex.simple(0).is_err());
    }

    #[test]
    fn test_dump_simple() {
        let mut list = VectorList::new_simple();
        list.set_length(2).unwrap();
        list.set_simple(0, MotionVector::new(4, 0)).unwrap();
        list.set_simple(1, MotionVector::new(-1, 3)).unwrap();

        let mut out = Vec::new();
        list.dump(&mut out, "运动向量").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "运动向量\nmv x,mv y\n4,0\n-1,3\n");
    }

    #[test]
    fn test_dump_complex_unsupported() {
        let mut list = VectorList::new_complex(2);
        list.set_length(1).unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            list.dump(&mut out, "x"),
            Err(KuaiError::Unsupported(_))
        ));
        assert!(out.is_empty());
    }
}
