//! 带平面坐标的节点数据
//!
//! 坐标参与最短路径计算（边权 = 两端点欧氏距离四舍五入），
//! 颜色只属于展示层，算法不会读取。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 节点显示颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeColor {
    /// 初始颜色
    #[default]
    Cyan,
    /// 被遍历访问过
    Red,
}

impl fmt::Display for NodeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeColor::Cyan => write!(f, "cyan"),
            NodeColor::Red => write!(f, "red"),
        }
    }
}

/// 内层数据 + 二维整数坐标 + 显示颜色
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedData<T> {
    data: T,
    x: i32,
    y: i32,
    color: NodeColor,
}

impl<T> PlacedData<T> {
    pub fn new(data: T, x: i32, y: i32) -> Self {
        Self {
            data,
            x,
            y,
            color: NodeColor::default(),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn color(&self) -> NodeColor {
        self.color
    }

    pub fn set_color(&mut self, color: NodeColor) {
        self.color = color;
    }

    /// 到另一个节点的欧氏距离，四舍五入为整数
    pub fn distance_to<U>(&self, other: &PlacedData<U>) -> u64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        // i32 平面上的斜边最大约 6.07e9，超出 u32 但远小于 u64::MAX
        dx.hypot(dy).round() as u64
    }
}

impl<T: fmt::Display> fmt::Display for PlacedData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@({},{})", self.data, self.x, self.y)
    }
}
