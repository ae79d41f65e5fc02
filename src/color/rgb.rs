use std::fmt;
use std::ops::Index;

/// One of the three color channels, doubling as a k-d tree split axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    Red,
    Green,
    Blue,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Red, Axis::Green, Axis::Blue];

    /// Axes cycle red, green, blue as the tree gets deeper.
    pub fn from_depth(depth: usize) -> Self {
        Self::ALL[depth % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A 24-bit color. Channels are addressable by name or by [`Axis`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    #[inline(always)]
    pub fn channel(self, axis: Axis) -> u8 {
        match axis {
            Axis::Red => self.red,
            Axis::Green => self.green,
            Axis::Blue => self.blue,
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Index<Axis> for Rgb {
    type Output = u8;

    fn index(&self, axis: Axis) -> &u8 {
        match axis {
            Axis::Red => &self.red,
            Axis::Green => &self.green,
            Axis::Blue => &self.blue,
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// A reference color and the code the output formatter embeds for it.
///
/// `id` is opaque here: for the 8-color table it is the SGR digit, for the
/// 256-color table the xterm palette index.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct PaletteEntry {
    pub id: u8,
    pub color: Rgb,
}

impl PaletteEntry {
    pub const fn new(id: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            id,
            color: Rgb::new(red, green, blue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_cycle_with_depth() {
        assert_eq!(Axis::from_depth(0), Axis::Red);
        assert_eq!(Axis::from_depth(1), Axis::Green);
        assert_eq!(Axis::from_depth(2), Axis::Blue);
        assert_eq!(Axis::from_depth(3), Axis::Red);
        assert_eq!(Axis::from_depth(7), Axis::Green);
    }

    #[test]
    fn channels_by_name_and_axis_agree() {
        let c = Rgb::new(1, 2, 3);
        for axis in Axis::ALL {
            assert_eq!(c[axis], c.channel(axis));
            assert_eq!(c.to_array()[axis.index()], c.channel(axis));
        }
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(63, 223, 191).to_string(), "#3FDFBF");
    }
}
