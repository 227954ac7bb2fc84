//! Text snapshot of a lot.
//!
//! Each grid row is a lane. Vehicles U-turn at the end of a lane, so odd
//! lanes are drawn right-to-left:
//!
//! ```text
//!   0  1  2      row 0 ->
//!   5  4  3      row 1 <-
//!   6  7  8      row 2 ->
//! ```

use std::fmt;

use crate::lot::Parking;

/// Bay indices of lane `row` in the order they are drawn
pub fn lane_order(size: usize, row: usize) -> Vec<usize> {
    let lane = row * size..(row + 1) * size;
    if row % 2 == 0 {
        lane.collect()
    } else {
        lane.rev().collect()
    }
}

impl Parking {
    /// Character shown for a single bay
    pub fn glyph(&self, index: usize) -> char {
        let kind = self.bay_kind(index);
        if !kind.is_parkable() {
            return kind.free_glyph();
        }
        self.occupant(index).unwrap_or_else(|| kind.free_glyph())
    }

    /// One line per lane, `size` glyphs each, joined with `'\n'`.
    ///
    /// * `=` pedestrian exit
    /// * `@` free disabled bay
    /// * `U` free ordinary bay
    /// * the parked tag for an occupied bay (`D` for a disabled driver)
    pub fn render(&self) -> String {
        let size = self.size();
        (0..size)
            .map(|row| {
                lane_order(size, row)
                    .into_iter()
                    .map(|index| self.glyph(index))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Parking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
