//! Moore-neighborhood adjacency table
//!
//! For each cell of a `width * height` board, the up-to-eight neighboring
//! cell indices under 8-directional adjacency, clipped at the boundary.
//! The table depends only on geometry, never on letters, so one table is
//! computed per solver and reused across every solve call.

use smallvec::SmallVec;

/// Neighbor list for one cell. At most eight entries, kept inline.
pub type Neighbors = SmallVec<[usize; 8]>;

/// Compute the adjacency table for a board of the given dimensions.
///
/// Neighbors are listed in a fixed order: upper-left, up, upper-right,
/// left, right, lower-left, down, lower-right, skipping any that fall off
/// the board. Corner cells get 3 neighbors, non-corner edge cells 5,
/// interior cells 8.
#[must_use]
pub fn compute_adjacency(width: usize, height: usize) -> Vec<Neighbors> {
    let mut table = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let mut neighbors = Neighbors::new();
            let row = y * width;

            // Row above the current cell.
            if y > 0 {
                let above = row - width;
                if x > 0 {
                    neighbors.push(above + x - 1);
                }
                neighbors.push(above + x);
                if x + 1 < width {
                    neighbors.push(above + x + 1);
                }
            }
            // Same row.
            if x > 0 {
                neighbors.push(row + x - 1);
            }
            if x + 1 < width {
                neighbors.push(row + x + 1);
            }
            // Row below.
            if y + 1 < height {
                let below = row + width;
                if x > 0 {
                    neighbors.push(below + x - 1);
                }
                neighbors.push(below + x);
                if x + 1 < width {
                    neighbors.push(below + x + 1);
                }
            }

            table.push(neighbors);
        }
    }

    table
}
