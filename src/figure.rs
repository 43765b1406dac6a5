//! Four-panel diagnostic figure.
//!
//! One offset sweep at the reference distance and one distance sweep at each
//! of the two feature offsets, rendered to a single image. The backend is
//! chosen from the output extension so the same call writes PNG or SVG.

use crate::{bright_fringe_offset, dark_fringe_offset, PhaseGrating};
use ndarray::Array1;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

/// Size and stroke settings for the composed figure.
#[derive(Clone)]
pub struct FigureConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Stroke width of the distance-sweep traces.
    pub line_width: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        FigureConfig {
            width: 2000,
            height: 1200,
            line_width: 5,
        }
    }
}

/// Render the four diagnostic panels and write the composed figure.
///
/// Top row: intensity against offset at `z_pick` with the dark fringe marked,
/// and the distance sweep held at the dark-fringe offset. Bottom row: the same
/// offset sweep with the bright fringe and the sweep maximum marked, and the
/// distance sweep held at the bright-fringe offset.
///
/// * `grating` - the grating under analysis
/// * `z_pick` - reference propagation distance (m)
/// * `out_path` - output file; `.svg` selects the vector backend, anything
///   else rasterises
/// * `config` - figure geometry, defaults when `None`
pub fn render_intensity_figure(
    grating: &PhaseGrating,
    z_pick: f64,
    out_path: &str,
    config: Option<&FigureConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned = config.cloned().unwrap_or_default();
    let config = &owned;

    if out_path.ends_with(".svg") {
        let root = SVGBackend::new(out_path, (config.width, config.height)).into_drawing_area();
        draw_panels(&root, grating, z_pick, config)
    } else {
        let root = BitMapBackend::new(out_path, (config.width, config.height)).into_drawing_area();
        draw_panels(&root, grating, z_pick, config)
    }
}

fn draw_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    grating: &PhaseGrating,
    z_pick: f64,
    config: &FigureConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let offsets = Array1::linspace(-2.0, 2.0, 1000).mapv(|a| a * 1e-6);
    let offset_sweep = grating.offset_profile(z_pick, &offsets);
    let sweep_max = offset_sweep
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);

    let distances = Array1::linspace(0.01, z_pick, 1000);
    let dark = dark_fringe_offset(grating.period, 0);
    let bright = bright_fringe_offset(grating.period);
    let dark_sweep = grating.distance_profile(dark, &distances);
    let bright_sweep = grating.distance_profile(bright, &distances);
    let bright_sweep_max = bright_sweep
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);

    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    // offset sweep with the dark fringe marked
    {
        let mut chart = ChartBuilder::on(&panels[0])
            .caption(
                format!("Intensity of the field U at a distance z = {}", z_pick),
                ("sans-serif", 28),
            )
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(-2.0..2.0, 0.0..1.1)?;
        chart
            .configure_mesh()
            .x_desc("a (microns)")
            .y_desc("Intensity")
            .y_labels(11)
            .draw()?;
        chart.draw_series(LineSeries::new(
            offsets
                .iter()
                .zip(offset_sweep.iter())
                .map(|(a, i)| (a * 1e6, *i)),
            &BLUE,
        ))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(-2.0, 0.0), (2.0, 0.0)],
            &RED,
        )))?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(dark * 1e6, 0.0), (dark * 1e6, 1.1)],
                &RED,
            )))?
            .label(format!(
                "a = {:.3e} m, I(a) = {:.6}",
                dark,
                grating.intensity(z_pick, dark)
            ))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    // distance sweep held at the dark fringe
    {
        let mut chart = ChartBuilder::on(&panels[1])
            .caption(
                format!("Intensity of the field U at offset a = {:.3e} m", dark),
                ("sans-serif", 28),
            )
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(0.01..z_pick, -0.1..1.1)?;
        chart
            .configure_mesh()
            .x_desc("z (m)")
            .y_desc("Intensity")
            .y_labels(13)
            .draw()?;
        chart.draw_series(LineSeries::new(
            distances.iter().zip(dark_sweep.iter()).map(|(z, i)| (*z, *i)),
            RED.stroke_width(config.line_width),
        ))?;
    }

    // offset sweep with the bright fringe and the sweep maximum marked
    {
        let mut chart = ChartBuilder::on(&panels[2])
            .caption(
                format!("Intensity of the field U at a distance z = {}", z_pick),
                ("sans-serif", 28),
            )
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(-2.0..2.0, 0.0..1.1)?;
        chart
            .configure_mesh()
            .x_desc("a (microns)")
            .y_desc("Intensity")
            .y_labels(11)
            .draw()?;
        chart.draw_series(LineSeries::new(
            offsets
                .iter()
                .zip(offset_sweep.iter())
                .map(|(a, i)| (a * 1e6, *i)),
            &BLUE,
        ))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(-2.0, sweep_max), (2.0, sweep_max)],
            &GREEN,
        )))?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(bright * 1e6, 0.0), (bright * 1e6, 1.1)],
                &GREEN,
            )))?
            .label(format!(
                "a = {:.3e} m, I(a) = {:.6}",
                bright,
                grating.intensity(z_pick, bright)
            ))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    // distance sweep held at the bright fringe
    {
        let mut chart = ChartBuilder::on(&panels[3])
            .caption(
                format!("Intensity of the field U at offset a = {:.3e} m", bright),
                ("sans-serif", 28),
            )
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(0.01..z_pick, -0.1..1.1)?;
        chart
            .configure_mesh()
            .x_desc("z (m)")
            .y_desc("Intensity")
            .y_labels(13)
            .draw()?;
        chart
            .draw_series(LineSeries::new(
                distances
                    .iter()
                    .zip(bright_sweep.iter())
                    .map(|(z, i)| (*z, *i)),
                GREEN.stroke_width(config.line_width),
            ))?
            .label(format!(
                "a = {:.3e} m, max I = {:.6}",
                bright, bright_sweep_max
            ))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn figure_config_default() {
        let config = FigureConfig::default();
        assert_eq!(config.width, 2000);
        assert_eq!(config.height, 1200);
        assert_eq!(config.line_width, 5);
    }

    #[test]
    fn renders_svg_figure() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        let grating = PhaseGrating::bragg(633e-9, 3.3e-6);
        render_intensity_figure(&grating, 0.1, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn renders_png_figure() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let grating = PhaseGrating::bragg(633e-9, 3.3e-6);
        let config = FigureConfig {
            width: 800,
            height: 480,
            line_width: 2,
        };
        render_intensity_figure(&grating, 0.1, path.to_str().unwrap(), Some(&config)).unwrap();
        assert!(path.exists());
    }
}
