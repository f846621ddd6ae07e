//! Text report of a solve: the coloured grid followed by the result summary.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use safepath_core::{Cell, RadiationGrid};
use safepath_paths::BottleneckPath;

/// How a cell is highlighted in the grid view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Plain,
    Path,
    Start,
    End,
    /// On the path with a value equal to the bottleneck.
    Peak,
}

impl CellRole {
    fn color(self) -> Option<Color> {
        match self {
            CellRole::Plain => None,
            CellRole::Path => Some(Color::Blue),
            CellRole::Start => Some(Color::Green),
            CellRole::End => Some(Color::Red),
            CellRole::Peak => Some(Color::Yellow),
        }
    }
}

/// Role of `c` given the solve outcome. Later rules win: path, then start,
/// then end (only when a path exists), then peak.
pub fn cell_role(grid: &RadiationGrid, result: Option<&BottleneckPath>, c: Cell) -> CellRole {
    let on_path = result.is_some_and(|r| r.contains(c));
    let mut role = CellRole::Plain;
    if on_path {
        role = CellRole::Path;
    }
    if c == grid.origin() {
        role = CellRole::Start;
    }
    if c == grid.target() && result.is_some_and(|r| !r.is_empty()) {
        role = CellRole::End;
    }
    if let Some(r) = result {
        if on_path && grid.value(c) == Some(r.bottleneck) {
            role = CellRole::Peak;
        }
    }
    role
}

/// Write the grid, one row per line, values right-aligned.
pub fn write_grid<W: Write>(
    out: &mut W,
    grid: &RadiationGrid,
    result: Option<&BottleneckPath>,
    color: bool,
) -> io::Result<()> {
    let width = grid.max_value().to_string().len();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Cell::new(row as i32, col as i32);
            let v = grid.value(c).unwrap_or_default();
            if col > 0 {
                write!(out, " ")?;
            }
            let text = format!("{v:>width$}");
            match cell_role(grid, result, c).color().filter(|_| color) {
                Some(fg) => queue!(
                    out,
                    SetForegroundColor(fg),
                    SetAttribute(Attribute::Bold),
                    Print(text),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?,
                None => write!(out, "{text}")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Write the full report for a solve.
///
/// `None` means the target is unreachable and is reported as `-1`.
pub fn write_report<W: Write>(
    out: &mut W,
    grid: &RadiationGrid,
    result: Option<&BottleneckPath>,
    color: bool,
) -> io::Result<()> {
    write_grid(out, grid, result, color)?;
    writeln!(out)?;

    let Some(res) = result else {
        writeln!(out, "Minimum possible maximum radiation: -1")?;
        return out.flush();
    };

    writeln!(out, "Minimum possible maximum radiation: {}", res.bottleneck)?;
    writeln!(out, "Path length: {} cells", res.len())?;
    writeln!(out, "Path coordinates (row, col): {}", join(&res.path))?;
    writeln!(out, "Radiation levels along path: {}", join(res.values(grid)))?;
    out.flush()
}
