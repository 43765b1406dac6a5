//! Offset-distance intensity map.
//!
//! The fringe system rendered as a false-colour image: each row holds one
//! propagation distance, each column one lateral grating offset.

use crate::PhaseGrating;
use image::{Rgb, RgbImage};
use ndarray::{Array2, ArrayView2};
use palette::{Lch, Srgb};
use std::error::Error;
use std::path::Path;

/// Intensity over an offset x distance grid.
///
/// Rows sweep the distance span, columns sweep the offset span, both ends
/// inclusive.
///
/// * `offset_span` - lateral offset range (m)
/// * `distance_span` - propagation distance range (m)
/// * `shape` - output shape, `[distances, offsets]`
pub fn intensity_map(
    grating: &PhaseGrating,
    offset_span: (f64, f64),
    distance_span: (f64, f64),
    shape: [usize; 2],
) -> Array2<f64> {
    let (a0, a1) = offset_span;
    let (z0, z1) = distance_span;

    Array2::from_shape_fn(shape, |(i, j)| {
        let z = z0 + (z1 - z0) * i as f64 / (shape[0] - 1) as f64;
        let a = a0 + (a1 - a0) * j as f64 / (shape[1] - 1) as f64;
        grating.intensity(z, a)
    })
}

/// Write a false-colour rendering of a real-valued map.
///
/// * `amp` - gain applied after normalisation
/// * `normalise` - scale the map by its maximum before applying `amp`
pub fn save_intensity_image<T: AsRef<Path> + std::fmt::Debug>(
    file_name: T,
    arr: ArrayView2<f64>,
    amp: f64,
    normalise: bool,
) -> Result<(), Box<dyn Error>> {
    if let &[h, w, ..] = arr.shape() {
        let mut max: f64 = arr.iter().fold(0.0, |max, val| val.max(max));
        let sum = arr.iter().fold(0.0, |sum, val| val + sum);
        println!("h:{} w:{} max:{} sum:{} - {:?}", h, w, max, sum, file_name);

        let mut img = RgbImage::new(w as u32, h as u32);
        if !normalise {
            max = 1.0;
        }

        for (x, y, p) in img.enumerate_pixels_mut() {
            let value = arr[[y as usize, x as usize]] / max;
            let value = (value * amp).min(1.0).max(0.0);

            let colour = Srgb::from(Lch::new(value * 70.0, value * 128.0, 280.0 - 245.0 * value));
            *p = Rgb([
                (colour.red * 255.0) as u8,
                (colour.green * 255.0) as u8,
                (colour.blue * 255.0) as u8,
            ]);
        }

        img.save(file_name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::NamedTempFile;

    #[test]
    fn map_samples_the_grid_corners() {
        let grating = PhaseGrating::bragg(633e-9, 3.3e-6);
        let map = intensity_map(&grating, (-2e-6, 2e-6), (0.01, 0.1), [20, 50]);
        assert_eq!(map.shape(), &[20, 50]);
        assert_relative_eq!(map[[0, 0]], grating.intensity(0.01, -2e-6), max_relative = 1e-12);
        assert_relative_eq!(map[[19, 49]], grating.intensity(0.1, 2e-6), max_relative = 1e-12);
        for &v in map.iter() {
            assert!(v >= 0.0);
        }
    }

    #[test]
    fn writes_the_map_image() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let grating = PhaseGrating::bragg(633e-9, 3.3e-6);
        let map = intensity_map(&grating, (-2e-6, 2e-6), (0.01, 0.1), [40, 100]);
        save_intensity_image(&path, map.view(), 1.0, true).unwrap();
        assert!(path.exists());
        assert!(path.metadata().unwrap().len() > 0);
    }
}
