//! PNG export of the growth field

use image::{ImageBuffer, Rgba};

use crate::color::ColorCube;
use crate::io::error::GrowthError;
use crate::spatial::{Cell, Coord, GrowthField};

/// Export the growth field as an RGBA PNG
///
/// Committed cells are scaled from cube coordinates onto the full display
/// range; uncommitted cells render transparent, so partial exports show the
/// growth front against a transparent background.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_field_as_png(
    field: &GrowthField,
    cube: &ColorCube,
    output_path: &str,
) -> crate::io::error::Result<()> {
    let mut img = ImageBuffer::new(field.width(), field.height());

    for x in 0..field.width() {
        for y in 0..field.height() {
            let pixel = match field.cell(Coord::new(x as i32, y as i32)) {
                Some(Cell::Set(color)) => Rgba(cube.display_rgba(color)),
                _ => Rgba([0, 0, 0, 0]),
            };
            img.put_pixel(x, y, pixel);
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GrowthError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GrowthError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
