//! Pointer-driven bubble sort in two scan directions.
//!
//! Both variants share one control skeleton: an outer cursor `i` that shrinks
//! the unsorted region by one slot per pass, and an inner cursor `j` that
//! walks the remaining region swapping adjacent out-of-order pairs. A cursor
//! reports exhaustion by returning the sentinel `-1`. The direction decides
//! where the cursors start, which way they move and which pair `j` names.

use super::SortingAlgorithm;

const EXHAUSTED: isize = -1;

/// Which end of the array each pass settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Scan upward; each pass bubbles the maximum to the top of the region.
    Up,
    /// Scan downward; each pass sinks the minimum to the bottom of the region.
    Down,
}

pub struct BubbleSort {
    direction: Direction,
}

impl BubbleSort {
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub const fn up() -> Self {
        Self::new(Direction::Up)
    }

    pub const fn down() -> Self {
        Self::new(Direction::Down)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl SortingAlgorithm for BubbleSort {
    fn name(&self) -> &'static str {
        match self.direction {
            Direction::Up => "BubbleUp",
            Direction::Down => "BubbleDown",
        }
    }

    fn sort_vec(&self, mut data: Vec<i32>) -> Vec<i32> {
        let mut cursors = Cursors::new(self.direction, data.len());
        let mut i = cursors.next_i();
        while i != EXHAUSTED {
            let mut j = cursors.next_j();
            while j != EXHAUSTED {
                let (a, b) = cursors.pair();
                if data[a] > data[b] {
                    data.swap(a, b);
                }
                j = cursors.next_j();
            }
            i = cursors.next_i();
        }
        data
    }
}

/// The two nested cursors of one sort call.
struct Cursors {
    direction: Direction,
    len: isize,
    i: isize,
    j: isize,
}

impl Cursors {
    fn new(direction: Direction, len: usize) -> Self {
        let len = len as isize;
        let (i, j) = match direction {
            Direction::Up => (len, EXHAUSTED),
            Direction::Down => (EXHAUSTED, len),
        };
        Self { direction, len, i, j }
    }

    /// Advances the outer cursor. `Up` walks `len - 1 ..= 0`, `Down` walks
    /// `0 ..= len - 2`.
    fn next_i(&mut self) -> isize {
        match self.direction {
            Direction::Up => {
                self.i -= 1;
                self.i.max(EXHAUSTED)
            }
            Direction::Down => {
                if self.i + 1 < self.len - 1 {
                    self.i += 1;
                } else {
                    self.i = EXHAUSTED;
                }
                self.i
            }
        }
    }

    /// Advances the inner cursor across the unsorted region, resetting it for
    /// the next pass once the region is exhausted.
    fn next_j(&mut self) -> isize {
        match self.direction {
            Direction::Up => {
                if self.j + 1 < self.i {
                    self.j += 1;
                } else {
                    self.j = EXHAUSTED;
                }
                self.j
            }
            Direction::Down => {
                if self.j - 1 > self.i {
                    self.j -= 1;
                    self.j
                } else {
                    self.j = self.len;
                    EXHAUSTED
                }
            }
        }
    }

    /// The adjacent pair the inner cursor currently points at.
    fn pair(&self) -> (usize, usize) {
        let j = self.j as usize;
        match self.direction {
            Direction::Up => (j, j + 1),
            Direction::Down => (j - 1, j),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outer_positions(direction: Direction, len: usize) -> Vec<isize> {
        let mut cursors = Cursors::new(direction, len);
        let mut seen = Vec::new();
        let mut i = cursors.next_i();
        while i != EXHAUSTED {
            seen.push(i);
            while cursors.next_j() != EXHAUSTED {}
            i = cursors.next_i();
        }
        seen
    }

    #[test]
    fn test_up_outer_cursor_shrinks_from_the_top() {
        assert_eq!(outer_positions(Direction::Up, 4), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_down_outer_cursor_shrinks_from_the_bottom() {
        assert_eq!(outer_positions(Direction::Down, 4), vec![0, 1, 2]);
    }

    #[test]
    fn test_cursors_on_empty_and_single_arrays() {
        assert!(outer_positions(Direction::Up, 0).is_empty());
        assert!(outer_positions(Direction::Down, 0).is_empty());
        assert!(outer_positions(Direction::Down, 1).is_empty());
    }

    #[test]
    fn test_up_pass_moves_maximum_to_top() {
        let mut cursors = Cursors::new(Direction::Up, 5);
        let mut data = vec![5, 1, 4, 2, 3];
        cursors.next_i();
        while cursors.next_j() != EXHAUSTED {
            let (a, b) = cursors.pair();
            if data[a] > data[b] {
                data.swap(a, b);
            }
        }
        assert_eq!(data[4], 5);
    }

    #[test]
    fn test_down_pass_moves_minimum_to_bottom() {
        let mut cursors = Cursors::new(Direction::Down, 5);
        let mut data = vec![5, 4, 3, 2, 1];
        cursors.next_i();
        while cursors.next_j() != EXHAUSTED {
            let (a, b) = cursors.pair();
            if data[a] > data[b] {
                data.swap(a, b);
            }
        }
        assert_eq!(data[0], 1);
    }

    #[test]
    fn test_names_follow_direction() {
        assert_eq!(BubbleSort::up().name(), "BubbleUp");
        assert_eq!(BubbleSort::down().name(), "BubbleDown");
        assert_eq!(BubbleSort::down().direction(), Direction::Down);
    }
}
