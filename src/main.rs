use grating_fresnel::carpet::{intensity_map, save_intensity_image};
use grating_fresnel::figure::render_intensity_figure;
use grating_fresnel::{bright_fringe_offset, dark_fringe_offset, PhaseGrating};
use ndarray::Array1;
use std::error::Error;
use std::path::Path;

pub fn main() -> Result<(), Box<dyn Error>> {
    // HeNe illumination of a 3.3 micron grating, screen at 10 cm
    let wavelength = 633e-9;
    let period = 3.3e-6;
    let z_pick = 0.1;

    let grating = PhaseGrating::bragg(wavelength, period);
    let dark = dark_fringe_offset(period, 0);
    let bright = bright_fringe_offset(period);

    println!("Two-beam phase grating analysis");
    println!("===============================");
    println!("  wavelength:             {:e} m", wavelength);
    println!("  grating period:         {:e} m", period);
    println!("  Bragg incidence angle:  {:.6} rad", grating.theta);
    println!("  phase-modulation depth: {:.6} rad", grating.modulation_depth());
    println!();
    println!(
        "  dark fringe offset:     {:.4e} m, intensity {:.6e}",
        dark,
        grating.intensity(z_pick, dark)
    );
    println!(
        "  bright fringe offset:   {:.4e} m, intensity {:.6}",
        bright,
        grating.intensity(z_pick, bright)
    );

    let offsets = Array1::linspace(-2.0, 2.0, 1000).mapv(|a| a * 1e-6);
    let sweep = grating.offset_profile(z_pick, &offsets);
    let sweep_max = sweep.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!("  offset-sweep maximum:   {:.6}", sweep_max);
    println!();

    if !Path::new("img").exists() {
        std::fs::create_dir("img")?;
    }

    render_intensity_figure(&grating, z_pick, "img/intensity_plots.png", None)?;
    println!("figure written to img/intensity_plots.png");

    let map = intensity_map(&grating, (-2e-6, 2e-6), (0.01, z_pick), [400, 1000]);
    save_intensity_image("img/offset_distance_map.png", map.view(), 1.0, true)?;
    println!("map written to img/offset_distance_map.png");

    Ok(())
}
