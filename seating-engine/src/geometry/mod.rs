//! Seat geometry
//!
//! Pure mapping from (shape, capacity, seat index) to an offset from the
//! table center. Shared by the live canvas and the static preview so both
//! place chairs identically.

use serde::{Deserialize, Serialize};
use shared::models::{Table, TableShape};

/// Geometry constants for seat placement (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatLayout {
    /// Radius of the chair circle around a round table
    pub round_radius: f64,
    /// Horizontal distance between neighbouring chairs on a rectangle
    pub seat_pitch: f64,
    /// Vertical distance from a rectangle's center to each chair row
    pub row_offset: f64,
}

impl Default for SeatLayout {
    fn default() -> Self {
        Self {
            round_radius: 80.0,
            seat_pitch: 50.0,
            row_offset: 55.0,
        }
    }
}

/// Offset of a seat from its table's center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatOffset {
    pub dx: f64,
    pub dy: f64,
}

/// A chair slot ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub index: usize,
    pub offset: SeatOffset,
    /// Positional: `index < guest_ids.len()`
    pub occupied: bool,
}

impl SeatLayout {
    /// Offset of `seat_index` from the table center.
    ///
    /// Returns `None` when the index is not a chair slot of a table with
    /// `capacity` seats.
    pub fn seat_offset(
        &self,
        shape: TableShape,
        capacity: u32,
        seat_index: usize,
    ) -> Option<SeatOffset> {
        let capacity = capacity as usize;
        if seat_index >= capacity {
            return None;
        }
        let offset = match shape {
            TableShape::Round => self.round_offset(capacity, seat_index),
            TableShape::Rectangle => self.rectangle_offset(capacity, seat_index),
        };
        Some(offset)
    }

    /// Chairs evenly spaced on a circle, seat 0 at the top
    fn round_offset(&self, capacity: usize, seat_index: usize) -> SeatOffset {
        let angle_deg = seat_index as f64 * 360.0 / capacity as f64 - 90.0;
        let angle = angle_deg.to_radians();
        SeatOffset {
            dx: self.round_radius * angle.cos(),
            dy: self.round_radius * angle.sin(),
        }
    }

    /// Two rows: the first `ceil(capacity / 2)` chairs on top, the rest below,
    /// each row centered on the table
    fn rectangle_offset(&self, capacity: usize, seat_index: usize) -> SeatOffset {
        let top_len = capacity.div_ceil(2);
        let (column, row_len, dy) = if seat_index < top_len {
            (seat_index, top_len, -self.row_offset)
        } else {
            (seat_index - top_len, capacity - top_len, self.row_offset)
        };
        let center = (row_len as f64 - 1.0) / 2.0;
        SeatOffset {
            dx: (column as f64 - center) * self.seat_pitch,
            dy,
        }
    }

    /// All chair slots of a table, in seat order
    pub fn seats(&self, table: &Table) -> Vec<Seat> {
        (0..table.capacity as usize)
            .filter_map(|index| {
                self.seat_offset(table.shape, table.capacity, index)
                    .map(|offset| Seat {
                        index,
                        offset,
                        occupied: table.is_seat_occupied(index),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{} != {}", a, b);
    }

    #[test]
    fn test_round_seat_zero_is_at_top() {
        let layout = SeatLayout::default();
        let seat = layout.seat_offset(TableShape::Round, 8, 0).unwrap();
        assert_close(seat.dx, 0.0);
        assert_close(seat.dy, -80.0);

        // Quarter turn clockwise lands on the right
        let seat = layout.seat_offset(TableShape::Round, 8, 2).unwrap();
        assert_close(seat.dx, 80.0);
        assert_close(seat.dy, 0.0);
    }

    #[test]
    fn test_round_even_capacity_is_diametrically_symmetric() {
        let layout = SeatLayout::default();
        for capacity in [2u32, 4, 6, 8, 10, 12] {
            let half = capacity as usize / 2;
            for i in 0..half {
                let a = layout.seat_offset(TableShape::Round, capacity, i).unwrap();
                let b = layout
                    .seat_offset(TableShape::Round, capacity, i + half)
                    .unwrap();
                assert_close(a.dx, -b.dx);
                assert_close(a.dy, -b.dy);
            }
        }
    }

    #[test]
    fn test_round_seats_lie_on_radius() {
        let layout = SeatLayout::default();
        for i in 0..7 {
            let seat = layout.seat_offset(TableShape::Round, 7, i).unwrap();
            assert_close((seat.dx * seat.dx + seat.dy * seat.dy).sqrt(), 80.0);
        }
    }

    #[test]
    fn test_rectangle_capacity_eight_has_four_per_row() {
        let layout = SeatLayout::default();
        let dx: Vec<f64> = (0..4)
            .map(|i| layout.seat_offset(TableShape::Rectangle, 8, i).unwrap().dx)
            .collect();
        assert_eq!(dx, vec![-75.0, -25.0, 25.0, 75.0]);

        for i in 0..4 {
            let top = layout.seat_offset(TableShape::Rectangle, 8, i).unwrap();
            let bottom = layout
                .seat_offset(TableShape::Rectangle, 8, i + 4)
                .unwrap();
            assert_close(top.dy, -55.0);
            assert_close(bottom.dy, 55.0);
            assert_close(top.dx, bottom.dx);
        }
    }

    #[test]
    fn test_rectangle_odd_capacity_centers_each_row() {
        let layout = SeatLayout::default();
        // 5 seats: 3 on top, 2 below
        let top: Vec<f64> = (0..3)
            .map(|i| layout.seat_offset(TableShape::Rectangle, 5, i).unwrap().dx)
            .collect();
        assert_eq!(top, vec![-50.0, 0.0, 50.0]);
        let bottom: Vec<f64> = (3..5)
            .map(|i| layout.seat_offset(TableShape::Rectangle, 5, i).unwrap().dx)
            .collect();
        assert_eq!(bottom, vec![-25.0, 25.0]);
    }

    #[test]
    fn test_rectangle_single_seat_is_centered_on_top() {
        let layout = SeatLayout::default();
        let seat = layout.seat_offset(TableShape::Rectangle, 1, 0).unwrap();
        assert_close(seat.dx, 0.0);
        assert_close(seat.dy, -55.0);
    }

    #[test]
    fn test_out_of_range_index_has_no_offset() {
        let layout = SeatLayout::default();
        assert!(layout.seat_offset(TableShape::Round, 8, 8).is_none());
        assert!(layout.seat_offset(TableShape::Rectangle, 0, 0).is_none());
    }

    #[test]
    fn test_seats_marks_occupancy_positionally() {
        let table = Table {
            id: "t1".to_string(),
            name: "Friends".to_string(),
            shape: TableShape::Round,
            capacity: 6,
            guest_ids: vec!["g9".to_string(), "g3".to_string()],
            x: 0.0,
            y: 0.0,
            conflicts: vec![],
        };
        let seats = SeatLayout::default().seats(&table);
        assert_eq!(seats.len(), 6);
        let occupied: Vec<bool> = seats.iter().map(|s| s.occupied).collect();
        assert_eq!(occupied, vec![true, true, false, false, false, false]);
    }
}
