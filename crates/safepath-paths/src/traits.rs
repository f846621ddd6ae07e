use safepath_core::{Cell, RadiationGrid};

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather whose cells carry a value; the cost of a path is the largest value
/// it passes through.
pub trait BottleneckPather: Pather {
    /// Value of the cell `c`. Only called for cells the pather itself yields
    /// (plus the search origin).
    fn value(&self, c: Cell) -> u32;
}

impl Pather for RadiationGrid {
    /// In-bounds orthogonal neighbours, in the order right, down, left, up.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.contains(n)));
    }
}

impl BottleneckPather for RadiationGrid {
    fn value(&self, c: Cell) -> u32 {
        RadiationGrid::value(self, c).unwrap_or(u32::MAX)
    }
}
