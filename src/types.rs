//! Shared types used across quadsplit.
//! Includes `Quadrant`, the four regions of a 2x2 composite, and `CropBox`,
//! a pixel rectangle in `(left, top, right, bottom)` form.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    /// All quadrants in output order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperLeft,
        Quadrant::UpperRight,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// File name suffix inserted between the base name and the extension.
    pub fn suffix(self) -> &'static str {
        match self {
            Quadrant::UpperLeft => "_ul",
            Quadrant::UpperRight => "_ur",
            Quadrant::LowerLeft => "_ll",
            Quadrant::LowerRight => "_lr",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quadrant::UpperLeft => write!(f, "UpperLeft"),
            Quadrant::UpperRight => write!(f, "UpperRight"),
            Quadrant::LowerLeft => write!(f, "LowerLeft"),
            Quadrant::LowerRight => write!(f, "LowerRight"),
        }
    }
}

/// Integer pixel rectangle; `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

impl From<CropBox> for (u32, u32, u32, u32) {
    fn from(b: CropBox) -> Self {
        (b.left, b.top, b.right, b.bottom)
    }
}
