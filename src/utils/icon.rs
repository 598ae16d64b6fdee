use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    fs,
    path::{Path, PathBuf},
};

use error_stack::{IntoReport, Result, ResultExt};
use image::{
    imageops::{self, FilterType},
    Rgba, RgbaImage,
};
use log::{debug, info};

use crate::ICON_FILENAME;

pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];
const SOURCE_SIZE: u32 = 512;

const BACKGROUND: Rgba<u8> = Rgba([180, 30, 30, 255]);
const PIPE: Rgba<u8> = Rgba([255, 255, 255, 240]);
const BRANCH: Rgba<u8> = Rgba([180, 210, 255, 230]);
const HEAD: Rgba<u8> = Rgba([80, 170, 255, 255]);
const DROP: Rgba<u8> = Rgba([60, 150, 255, 210]);
const OUTER_FLAME: Rgba<u8> = Rgba([255, 150, 20, 240]);
const INNER_FLAME: Rgba<u8> = Rgba([255, 220, 70, 240]);

const SPRINKLER_X: [f32; 4] = [64.0, 94.0, 164.0, 194.0];
const BRANCH_X: [f32; 4] = [60.0, 90.0, 160.0, 190.0];

#[derive(Debug)]
pub struct IconError;

impl Display for IconError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        fmt.write_str("Icon error")
    }
}

impl Error for IconError {}

/// Writes `fiplsim.ico` into `install_dir` unless one is already there.
/// Returns the path when a new file was written.
pub fn write_icon(install_dir: impl AsRef<Path>) -> Result<Option<PathBuf>, IconError> {
    let icon = install_dir.as_ref().join(ICON_FILENAME);
    if icon.exists() {
        debug!("Icon already exists {}", icon.display());
        return Ok(None);
    }

    let data = encode_icon(&draw_icon(SOURCE_SIZE))?;
    fs::write(&icon, data)
        .report()
        .change_context(IconError)
        .attach_printable_lazy(|| format!("Could not write {}", icon.display()))?;
    info!("Icon written {}", icon.display());
    Ok(Some(icon))
}

/// Packs the image into an ico holding every size of `ICON_SIZES`.
pub fn encode_icon(source: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let largest = imageops::resize(source, 256, 256, FilterType::Lanczos3);
    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ICON_SIZES {
        let frame = match size {
            256 => largest.clone(),
            _ => imageops::resize(&largest, size, size, FilterType::Lanczos3),
        };
        let entry = ico::IconDirEntry::encode(&ico::IconImage::from_rgba_data(
            size,
            size,
            frame.into_raw(),
        ))
        .report()
        .change_context(IconError)
        .attach_printable_lazy(|| format!("Could not encode {}x{}", size, size))?;
        dir.add_entry(entry);
    }

    let mut data = Vec::new();
    dir.write(&mut data).report().change_context(IconError)?;
    Ok(data)
}

/// Sprinkler pipe work with a flame on a red rounded square.
/// Coordinates are laid out on a 256 grid and scaled to `size`.
pub fn draw_icon(size: u32) -> RgbaImage {
    let s = size as f32 / 256.0;
    let mut img = RgbaImage::new(size, size);

    let margin = 8.0 * s;
    let far = size as f32 - margin;
    fill_rounded_rect(&mut img, (margin, margin), (far, far), 48.0 * s, BACKGROUND);
    fill_glow(&mut img, s);

    let pw = 18.0 * s;
    fill_rect(&mut img, (40.0 * s, 115.0 * s), (216.0 * s, 115.0 * s + pw), PIPE);
    fill_rect(&mut img, (118.0 * s, 45.0 * s), (118.0 * s + pw, 200.0 * s), PIPE);

    let bw = 8.0 * s;
    for x in BRANCH_X {
        fill_rect(&mut img, (x * s, 78.0 * s), (x * s + bw, 115.0 * s), BRANCH);
    }

    let dr = 4.0 * s;
    let top = 58.0 * s;
    for x in SPRINKLER_X {
        let cx = x * s;
        fill_circle(&mut img, (cx, 72.0 * s), 6.0 * s, HEAD);
        fill_polygon(
            &mut img,
            &[(cx, top - dr * 2.0), (cx - dr, top), (cx + dr, top)],
            DROP,
        );
    }

    let fy = 168.0;
    let outer = [
        (128.0, fy - 22.0),
        (113.0, fy + 12.0),
        (120.0, fy + 6.0),
        (116.0, fy + 22.0),
        (128.0, fy + 12.0),
        (140.0, fy + 22.0),
        (136.0, fy + 6.0),
        (143.0, fy + 12.0),
    ];
    let inner = [
        (128.0, fy - 10.0),
        (121.0, fy + 6.0),
        (124.0, fy + 3.0),
        (122.0, fy + 14.0),
        (128.0, fy + 6.0),
        (134.0, fy + 14.0),
        (132.0, fy + 3.0),
        (135.0, fy + 6.0),
    ];
    fill_polygon(&mut img, &scale(&outer, s), OUTER_FLAME);
    fill_polygon(&mut img, &scale(&inner, s), INNER_FLAME);

    img
}

fn scale(points: &[(f32, f32)], s: f32) -> Vec<(f32, f32)> {
    points.iter().map(|(x, y)| (x * s, y * s)).collect()
}

/// Concentric discs brightening towards the center.
fn fill_glow(img: &mut RgbaImage, s: f32) {
    let center = (img.width() / 2) as f32;
    let max_radius = (110.0 * s) as u32;
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let distance = ((x as f32 - center).powi(2) + (y as f32 - center).powi(2)).sqrt();
        let ring = (distance.ceil() as u32).max(1);
        if ring > max_radius {
            continue;
        }
        let i = ring as f32 / s;
        let channel = |base: f32, falloff: f32| (base - i * falloff).clamp(0.0, 255.0) as u8;
        *pixel = Rgba([channel(220.0, 0.8), channel(50.0, 0.15), channel(40.0, 0.15), 255]);
    }
}

fn fill_where(img: &mut RgbaImage, color: Rgba<u8>, inside: impl Fn(f32, f32) -> bool) {
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if inside(x as f32, y as f32) {
            *pixel = color;
        }
    }
}

fn fill_rect(img: &mut RgbaImage, from: (f32, f32), to: (f32, f32), color: Rgba<u8>) {
    fill_where(img, color, |x, y| {
        x >= from.0.floor() && x <= to.0.floor() && y >= from.1.floor() && y <= to.1.floor()
    });
}

fn fill_circle(img: &mut RgbaImage, center: (f32, f32), radius: f32, color: Rgba<u8>) {
    fill_where(img, color, |x, y| {
        (x - center.0).powi(2) + (y - center.1).powi(2) <= radius * radius
    });
}

fn fill_rounded_rect(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    radius: f32,
    color: Rgba<u8>,
) {
    fill_where(img, color, |x, y| {
        if x < from.0 || x > to.0 || y < from.1 || y > to.1 {
            return false;
        }
        let cx = x.clamp(from.0 + radius, to.0 - radius);
        let cy = y.clamp(from.1 + radius, to.1 - radius);
        (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius
    });
}

/// Even-odd fill sampled at pixel centers.
fn fill_polygon(img: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    fill_where(img, color, |x, y| {
        let (px, py) = (x + 0.5, y + 0.5);
        let mut inside = false;
        let mut j = points.len() - 1;
        for i in 0..points.len() {
            let (xi, yi) = points[i];
            let (xj, yj) = points[j];
            if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    });
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use image::Rgba;

    use super::{draw_icon, write_icon, ICON_SIZES};
    use crate::ICON_FILENAME;

    #[test]
    fn writes_every_icon_size_when_missing() {
        let dir = tempfile::tempdir().unwrap();

        let written = write_icon(dir.path()).unwrap();

        let icon = dir.path().join(ICON_FILENAME);
        assert_eq!(written, Some(icon.clone()));
        let icon_dir = ico::IconDir::read(File::open(icon).unwrap()).unwrap();
        let sizes = icon_dir
            .entries()
            .iter()
            .map(|entry| entry.width())
            .collect::<Vec<_>>();
        assert_eq!(sizes, ICON_SIZES.to_vec());
    }

    #[test]
    fn keeps_existing_icon() {
        let dir = tempfile::tempdir().unwrap();
        let icon = dir.path().join(ICON_FILENAME);
        fs::write(&icon, [1u8, 2, 3]).unwrap();

        assert_eq!(write_icon(dir.path()).unwrap(), None);
        assert_eq!(fs::read(icon).unwrap(), vec![1u8, 2, 3]);
    }

    #[test]
    fn drawing_has_transparent_corners_and_pipe_in_the_middle() {
        let img = draw_icon(512);

        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(511, 511), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(256, 256), &Rgba([255, 255, 255, 240]));
        assert_eq!(img.get_pixel(30, 256), &Rgba([180, 30, 30, 255]));
    }
}
