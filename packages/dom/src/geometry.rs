use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;
/// English Metric Units per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// Length in English Metric Units, the document's native unit.
///
/// All geometry is stored in EMU; the normalizer converts to inches
/// when producing the canonical snapshot.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    pub const ZERO: Emu = Emu(0);

    pub fn from_inches(value: f64) -> Self {
        Emu((value * EMU_PER_INCH as f64).round() as i64)
    }

    pub fn from_points(value: f64) -> Self {
        Emu((value * EMU_PER_POINT as f64).round() as i64)
    }

    pub fn inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }

    pub fn points(self) -> f64 {
        self.0 as f64 / EMU_PER_POINT as f64
    }

    /// Scale by a factor, truncating toward zero like integer geometry.
    pub fn scaled(self, factor: f64) -> Self {
        Emu((self.0 as f64 * factor) as i64)
    }
}

impl Add for Emu {
    type Output = Emu;
    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl AddAssign for Emu {
    fn add_assign(&mut self, rhs: Emu) {
        self.0 += rhs.0;
    }
}

impl Sub for Emu {
    type Output = Emu;
    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

/// Axis-aligned bounding frame of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Frame {
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: Emu::from_inches(left),
            top: Emu::from_inches(top),
            width: Emu::from_inches(width),
            height: Emu::from_inches(height),
        }
    }

    pub fn right(&self) -> Emu {
        self.left + self.width
    }

    pub fn bottom(&self) -> Emu {
        self.top + self.height
    }

    pub fn center_x(&self) -> Emu {
        Emu(self.left.0 + self.width.0 / 2)
    }

    pub fn center_y(&self) -> Emu {
        Emu(self.top.0 + self.height.0 / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_inch_round_trip() {
        let one_inch = Emu::from_inches(1.0);
        assert_eq!(one_inch, Emu(EMU_PER_INCH));
        assert_eq!(one_inch.inches(), 1.0);
    }

    #[test]
    fn test_point_conversion() {
        assert_eq!(Emu::from_points(72.0), Emu::from_inches(1.0));
    }

    #[test]
    fn test_frame_center() {
        let frame = Frame::from_inches(1.0, 2.0, 4.0, 2.0);
        assert_eq!(frame.center_x(), Emu::from_inches(3.0));
        assert_eq!(frame.center_y(), Emu::from_inches(3.0));
    }
}
