use gridpath_core::Coordinate;

/// Cost of one step along a row or a column.
pub const AXIAL_COST: u32 = 10;

/// Cost of one diagonal step, 10·√2 rounded down.
pub const DIAGONAL_COST: u32 = 14;

/// Manhattan (L1) distance between two coordinates, saturating at
/// `u32::MAX`.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> u32 {
    a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
}

/// Cost of moving between two adjacent coordinates.
#[inline]
pub fn step_cost(from: Coordinate, to: Coordinate) -> u32 {
    if from.is_diagonal_step(to) {
        DIAGONAL_COST
    } else {
        AXIAL_COST
    }
}
