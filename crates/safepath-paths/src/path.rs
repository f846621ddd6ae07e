use safepath_core::Cell;

use crate::traits::BottleneckPather;

/// A minimax path: the smallest achievable maximum value between two cells,
/// together with one path that achieves it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BottleneckPath {
    /// Largest cell value on `path`; no path between the endpoints does better.
    pub bottleneck: u32,
    /// Cells from start to goal inclusive, each one orthogonal step apart.
    pub path: Vec<Cell>,
}

impl BottleneckPath {
    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path holds no cells. Never true for a solver result.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// First cell of the path.
    pub fn start(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    /// Last cell of the path.
    pub fn goal(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Whether `c` lies on the path.
    pub fn contains(&self, c: Cell) -> bool {
        self.path.contains(&c)
    }

    /// Values along the path, in path order.
    pub fn values<P: BottleneckPather>(&self, pather: &P) -> Vec<u32> {
        self.path.iter().map(|&c| pather.value(c)).collect()
    }

    /// Path cells whose value equals the bottleneck.
    pub fn peaks<P: BottleneckPather>(&self, pather: &P) -> Vec<Cell> {
        self.path
            .iter()
            .copied()
            .filter(|&c| pather.value(c) == self.bottleneck)
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn bottleneck_path_round_trip() {
        let p = BottleneckPath {
            bottleneck: 10,
            path: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)],
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: BottleneckPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
