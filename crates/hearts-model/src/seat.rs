use core::fmt;
use serde::{Deserialize, Serialize};

/// The four players around the table. `Us` is the acting agent; the
/// opponents are named by play order after us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    Us = 0,
    Left = 1,
    Across = 2,
    Right = 3,
}

impl Seat {
    pub const LOOP: [Seat; 4] = [Seat::Us, Seat::Left, Seat::Across, Seat::Right];

    pub const OPPONENTS: [Seat; 3] = [Seat::Left, Seat::Across, Seat::Right];

    /// Seat sitting `offset` places after us, wrapping around the table.
    pub const fn from_offset(offset: usize) -> Seat {
        match offset % 4 {
            0 => Seat::Us,
            1 => Seat::Left,
            2 => Seat::Across,
            _ => Seat::Right,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Seat {
        Seat::from_offset(self.index() + 1)
    }

    pub const fn is_us(self) -> bool {
        matches!(self, Seat::Us)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::Us => "Us",
            Seat::Left => "Left",
            Seat::Across => "Across",
            Seat::Right => "Right",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::Seat;

    #[test]
    fn from_offset_wraps_around() {
        assert_eq!(Seat::from_offset(0), Seat::Us);
        assert_eq!(Seat::from_offset(3), Seat::Right);
        assert_eq!(Seat::from_offset(4), Seat::Us);
        assert_eq!(Seat::from_offset(7), Seat::Right);
    }

    #[test]
    fn next_follows_play_order() {
        assert_eq!(Seat::Us.next(), Seat::Left);
        assert_eq!(Seat::Right.next(), Seat::Us);
    }

    #[test]
    fn index_round_trip() {
        for (i, seat) in Seat::LOOP.iter().enumerate() {
            assert_eq!(Seat::from_offset(i), *seat);
            assert_eq!(seat.index(), i);
        }
    }
}
