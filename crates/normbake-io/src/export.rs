//! Normal map export.

use std::path::Path;

use normbake_bake::NormalMapBuffer;
use normbake_types::{BakeError, BakeResult};

/// Writes the buffer as an RGBA8 PNG.
pub fn write_png(buffer: &NormalMapBuffer, path: &Path) -> BakeResult<()> {
    let size = buffer.size();
    let image = image::RgbaImage::from_raw(size, size, buffer.as_bytes().to_vec()).ok_or_else(|| {
        BakeError::Serialization(format!("buffer does not hold {size}x{size} RGBA texels"))
    })?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => BakeError::Io(io),
            other => BakeError::Serialization(format!("{}: {other}", path.display())),
        })?;
    tracing::info!(path = %path.display(), size, "wrote normal map");
    Ok(())
}

/// Writes the raw row-major RGBA bytes, no header.
pub fn write_raw(buffer: &NormalMapBuffer, path: &Path) -> BakeResult<()> {
    std::fs::write(path, buffer.as_bytes())?;
    tracing::info!(path = %path.display(), size = buffer.size(), "wrote raw normal map");
    Ok(())
}

/// Writes PNG for `.png` paths, raw bytes otherwise.
pub fn write_normal_map(buffer: &NormalMapBuffer, path: &Path) -> BakeResult<()> {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        write_png(buffer, path)
    } else {
        write_raw(buffer, path)
    }
}
