use crate::types::{CropBox, Quadrant};

/// Compute the four quadrant boxes of a `width` x `height` image.
///
/// The midlines are `width / 2` and `height / 2` rounded down, so an odd extra
/// column or row always lands in the right or bottom quadrants. Boxes come back
/// in `Quadrant::ALL` order.
pub fn quadrant_boxes(width: u32, height: u32) -> [(Quadrant, CropBox); 4] {
    let half_w = width / 2;
    let half_h = height / 2;

    [
        (Quadrant::UpperLeft, CropBox::new(0, 0, half_w, half_h)),
        (Quadrant::UpperRight, CropBox::new(half_w, 0, width, half_h)),
        (Quadrant::LowerLeft, CropBox::new(0, half_h, half_w, height)),
        (
            Quadrant::LowerRight,
            CropBox::new(half_w, half_h, width, height),
        ),
    ]
}
