//! The [`Cell`] type, the occupancy state of one grid square.

/// Occupancy of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Wall,
}

impl Cell {
    /// Decode the wire value: `0` is free, `1` is a wall, anything else is
    /// rejected.
    #[inline]
    pub const fn from_value(v: i64) -> Option<Self> {
        match v {
            0 => Some(Self::Free),
            1 => Some(Self::Wall),
            _ => None,
        }
    }

    /// Decode an ASCII map character: `.`/`0` free, `#`/`1` wall.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '0' => Some(Self::Free),
            '#' | '1' => Some(Self::Wall),
            _ => None,
        }
    }

    /// The wire value of this cell.
    #[inline]
    pub const fn value(self) -> i64 {
        match self {
            Self::Free => 0,
            Self::Wall => 1,
        }
    }

    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }

    /// ASCII rendering used by [`Grid`](crate::Grid)'s `Display`.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values() {
        assert_eq!(Cell::from_value(0), Some(Cell::Free));
        assert_eq!(Cell::from_value(1), Some(Cell::Wall));
        assert_eq!(Cell::from_value(2), None);
        assert_eq!(Cell::from_value(-1), None);
        assert_eq!(Cell::Wall.value(), 1);
    }

    #[test]
    fn ascii_chars() {
        assert_eq!(Cell::from_char('.'), Some(Cell::Free));
        assert_eq!(Cell::from_char('#'), Some(Cell::Wall));
        assert_eq!(Cell::from_char('x'), None);
        assert_eq!(Cell::Wall.as_char(), '#');
    }
}
