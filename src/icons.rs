use anyhow::{bail, Context, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load `input`, scale it to exactly `size`x`size` pixels and write it to
/// `output` as a PNG, replacing any existing file.
///
/// The aspect ratio of the source is not preserved; both edges are forced to
/// `size`.
pub fn render_icon(input: &Path, output: &Path, size: u32) -> Result<()> {
    if size == 0 {
        bail!("icon size must be positive");
    }

    let img = ImageReader::open(input)
        .with_context(|| format!("open source image {}", input.display()))?
        .with_guessed_format()
        .with_context(|| format!("read source image {}", input.display()))?
        .decode()
        .with_context(|| format!("decode source image {}", input.display()))?;

    let resized = img.resize_exact(size, size, FilterType::Lanczos3);
    write_png(&resized, output)
}

fn write_png(img: &DynamicImage, output: &Path) -> Result<()> {
    // The PNG encoder has no float layouts.
    let converted;
    let img = match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            converted = DynamicImage::ImageRgba8(img.to_rgba8());
            &converted
        }
        other => other,
    };

    let file =
        File::create(output).with_context(|| format!("create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(
        &mut writer,
        CompressionType::Best,
        PngFilter::Adaptive,
    );
    encoder
        .write_image(img.as_bytes(), img.width(), img.height(), img.color())
        .with_context(|| format!("encode png {}", output.display()))?;
    // Small icons sit entirely in the buffer; errors surface only here.
    writer
        .flush()
        .with_context(|| format!("write png {}", output.display()))?;
    Ok(())
}

/// Render one icon and report the result on the console.
///
/// Returns `false` instead of an error so callers can keep going with the
/// remaining sizes.
pub fn resize_icon(input: &Path, output: &Path, size: u32) -> bool {
    match render_icon(input, output, size) {
        Ok(()) => {
            tracing::debug!(output = %output.display(), size, "icon written");
            println!("Created {} ({size}x{size})", output.display());
            true
        }
        Err(e) => {
            let detail = format!("{e:#}");
            tracing::warn!(output = %output.display(), size, error = %detail, "icon failed");
            println!("Error creating {}: {detail}", output.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render_icon, resize_icon};
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_source(path: &std::path::Path, width: u32, height: u32) {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 7 % 256) as u8, (y * 3 % 256) as u8, 120, 255])
        });
        img.save(path).expect("write source image");
    }

    #[test]
    fn non_square_source_is_forced_square() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("wide.png");
        let out = dir.path().join("out.png");
        write_source(&src, 300, 100);

        render_icon(&src, &out, 48).expect("render");

        let img = image::open(&out).expect("open output");
        assert_eq!((img.width(), img.height()), (48, 48));
    }

    #[test]
    fn upscaling_small_source_works() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("tiny.png");
        let out = dir.path().join("big.png");
        write_source(&src, 5, 9);

        assert!(resize_icon(&src, &out, 128));
        let img = image::open(&out).expect("open output");
        assert_eq!((img.width(), img.height()), (128, 128));
    }

    #[test]
    fn format_is_detected_from_content() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("source.png");
        let renamed = dir.path().join("source.bin");
        let out = dir.path().join("out.png");
        write_source(&src, 20, 20);
        fs::rename(&src, &renamed).expect("rename");

        render_icon(&renamed, &out, 16).expect("render");
    }

    #[test]
    fn corrupt_source_reports_failure() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("broken.png");
        let out = dir.path().join("out.png");
        fs::write(&src, b"definitely not a png").expect("write");

        let err = render_icon(&src, &out, 16).unwrap_err();
        assert!(format!("{err:#}").contains("broken.png"));
        assert!(!resize_icon(&src, &out, 16));
        assert!(!out.exists());
    }

    #[test]
    fn unwritable_destination_reports_failure() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("source.png");
        let out = dir.path().join("taken");
        write_source(&src, 32, 32);
        fs::create_dir(&out).expect("create dir in the way");

        assert!(!resize_icon(&src, &out, 16));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_final_write_reports_failure() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("source.png");
        write_source(&src, 32, 32);

        let err = render_icon(&src, std::path::Path::new("/dev/full"), 16).unwrap_err();
        assert!(format!("{err:#}").contains("/dev/full"));
        assert!(!resize_icon(&src, std::path::Path::new("/dev/full"), 16));
    }

    #[test]
    fn zero_size_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("source.png");
        let out = dir.path().join("out.png");
        write_source(&src, 32, 32);

        assert!(render_icon(&src, &out, 0).is_err());
        assert!(!out.exists());
    }
}
