use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};
use tracing::debug;

use crate::core::quadrants::quadrant_boxes;
use crate::error::{Error, Result};
use crate::types::Quadrant;

/// Output file name for one quadrant of `input`: `{stem}{suffix}{.ext}`.
///
/// The extension keeps its original case, so `photo.JPG` yields
/// `photo_ul.JPG`. A name without an extension gets none.
pub fn quadrant_file_name(input: &Path, quadrant: Quadrant) -> OsString {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(quadrant.suffix());
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Decode the image at `path`, detecting the container from its content.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| Error::ImageOpen {
            path: path.to_path_buf(),
            source,
        })?;
    reader.decode().map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Split one composite image into four quadrant files inside `output_dir`.
///
/// Existing files with the same names are overwritten. The output encoder is
/// chosen from the extension, which matches the input's. Returns the written
/// paths in `Quadrant::ALL` order; any failure is returned as-is.
pub fn split_image(input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let img = load_image(input)?;
    let (width, height) = img.dimensions();
    debug!("Loaded {:?}: {}x{}", input, width, height);

    let mut written = Vec::with_capacity(4);
    for (quadrant, crop) in quadrant_boxes(width, height) {
        let out = img.crop_imm(crop.left, crop.top, crop.width(), crop.height());
        let out_path = output_dir.join(quadrant_file_name(input, quadrant));
        out.save(&out_path).map_err(|source| Error::ImageSave {
            path: out_path.clone(),
            source,
        })?;
        debug!("Saved {} quadrant {:?}", quadrant, out_path);
        written.push(out_path);
    }

    Ok(written)
}
