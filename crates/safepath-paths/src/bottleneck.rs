use std::collections::BinaryHeap;

use log::{debug, trace};
use safepath_core::{Cell, GridError, RadiationGrid};

use crate::PathRange;
use crate::error::SolveError;
use crate::path::BottleneckPath;
use crate::pathrange::{NO_PARENT, NodeRef};
use crate::traits::BottleneckPather;

impl PathRange {
    /// Find a path from `from` to `to` that minimizes the largest cell value
    /// passed through, endpoints included.
    ///
    /// This is Dijkstra's algorithm with `max` in place of `+`: the frontier
    /// always yields the cell with the smallest bottleneck so far, so the
    /// first time a cell is taken from it that bottleneck is final. Cheaper
    /// routes found later leave stale frontier entries behind, which are
    /// skipped when popped. Equal bottlenecks pop in insertion order, which
    /// makes the returned path deterministic.
    ///
    /// Returns `None` if either endpoint lies outside the range, or if `to`
    /// cannot be reached from `from`.
    pub fn bottleneck_path<P: BottleneckPather>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Option<BottleneckPath> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        let cur_gen = self.next_generation();
        let start_value = pather.value(from);

        {
            let node = &mut self.nodes[start_idx];
            node.best = Some(start_value);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.visited = false;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            bottleneck: start_value,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;
        let mut stale = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            let ci = current.idx;
            if self.nodes[ci].visited {
                stale += 1;
                continue;
            }
            self.nodes[ci].visited = true;
            expanded += 1;

            if ci == goal_idx {
                break 'search Some(current.bottleneck);
            }

            let current_cell = self.cell(ci);
            trace!("expand {current_cell} at bottleneck {}", current.bottleneck);

            nbuf.clear();
            pather.neighbors(current_cell, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };

                let n = &mut self.nodes[ni];
                if n.generation != cur_gen {
                    n.generation = cur_gen;
                    n.best = None;
                    n.parent = NO_PARENT;
                    n.visited = false;
                } else if n.visited {
                    continue;
                }

                let candidate = current.bottleneck.max(pather.value(nc));
                if n.best.is_some_and(|best| candidate >= best) {
                    continue;
                }

                n.best = Some(candidate);
                n.parent = ci;
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    bottleneck: candidate,
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        let Some(bottleneck) = found else {
            debug!("no path from {from} to {to} after expanding {expanded} cells");
            return None;
        };

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.cell(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        debug!(
            "bottleneck {bottleneck} from {from} to {to}: {} cells, {expanded} expanded, {stale} stale",
            path.len()
        );

        Some(BottleneckPath { bottleneck, path })
    }

    /// Solve from the top-left to the bottom-right cell of the current range.
    ///
    /// An empty range is reported as [`SolveError::InvalidDimensions`].
    pub fn solve<P: BottleneckPather>(&mut self, pather: &P) -> Result<BottleneckPath, SolveError> {
        let Some(target) = self.rng.last() else {
            return Err(GridError::Empty {
                rows: self.rng.rows().max(0) as usize,
                cols: self.rng.cols().max(0) as usize,
            }
            .into());
        };
        let origin = self.rng.min;
        self.bottleneck_path(pather, origin, target)
            .ok_or(SolveError::Unreachable { origin, target })
    }
}

/// Solve a grid from (0, 0) to (N-1, M-1).
///
/// Uses a fresh [`PathRange`]; to amortize allocations across many grids,
/// keep a `PathRange` and call [`PathRange::solve`] instead.
pub fn solve(grid: &RadiationGrid) -> Result<BottleneckPath, SolveError> {
    PathRange::new(grid.bounds()).solve(grid)
}

/// Check the shape of a nested matrix, then [`solve`] it.
pub fn solve_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<BottleneckPath, SolveError> {
    let grid = RadiationGrid::from_rows(rows)?;
    solve(&grid)
}
