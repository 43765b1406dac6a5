//! Two-beam Fresnel analysis of a thin sinusoidal phase grating.
//!
//! The diffracted field behind the grating is the closed-form interference of
//! two symmetric diffraction orders illuminated at the Bragg angle. The field
//! is a pure function of the propagation distance and the lateral grating
//! offset; everything downstream of it is rendering.

use ndarray::Array1;
use num_complex::Complex;
use std::f64::consts::PI;

pub mod bessel;
pub mod carpet;
pub mod figure;

/// A thin sinusoidal phase grating probed by two interfering diffraction
/// orders.
///
/// The square of the field it produces is the irradiance measured on a screen
/// at distance `z`.
#[derive(Clone, Debug)]
pub struct PhaseGrating {
    /// Reference field amplitude behind the grating.
    pub amplitude: Complex<f64>,
    /// Vacuum wavelength of the illumination (m).
    pub wavelength: f64,
    /// Spatial period of the grooves (m).
    pub period: f64,
    /// Diffraction order of the lower beam.
    pub q_lower: i32,
    /// Diffraction order of the upper beam.
    pub q_upper: i32,
    /// Incidence angle (rad).
    pub theta: f64,
    /// Refractive index of the grating material.
    pub index: f64,
    /// Groove depth (m).
    pub depth: f64,
}

impl PhaseGrating {
    /// First-order two-beam geometry: orders -1 and +1, incidence at the
    /// Bragg angle `asin(wavelength / period)`, unit amplitude, and a glass
    /// grating half a micron deep.
    pub fn bragg(wavelength: f64, period: f64) -> PhaseGrating {
        PhaseGrating {
            amplitude: Complex::new(1.0, 0.0),
            wavelength,
            period,
            q_lower: -1,
            q_upper: 1,
            theta: (wavelength / period).asin(),
            index: 1.5,
            depth: 0.5e-6,
        }
    }

    /// Peak phase retardation 2 pi (n - 1) s / lambda imprinted by the grooves.
    pub fn modulation_depth(&self) -> f64 {
        2.0 * PI * (self.index - 1.0) * self.depth / self.wavelength
    }

    /// Complex field at distance `z` and lateral grating offset `a`.
    ///
    /// A spherical-wave prefactor carries the overall 1/(lambda z) decay; each
    /// beam contributes an order-dependent amplitude built from the ordinary
    /// Bessel function of its order and the two half-integer orders of the
    /// Fresnel integral, phase-shifted by the grating offset.
    ///
    /// Nothing is guarded: `z = 0`, or an incidence angle that cancels a beam
    /// wavenumber exactly, propagates Inf/NaN through the arithmetic.
    ///
    /// * `z` - propagation distance (m)
    /// * `a` - lateral grating offset (m)
    pub fn field(&self, z: f64, a: f64) -> Complex<f64> {
        let k = 2.0 * PI / self.wavelength;
        let h_0 = Complex::new(0.0, -1.0) * Complex::new(0.0, k * z).exp() / (self.wavelength * z);
        let alpha = k / (2.0 * z);
        let m = self.modulation_depth();

        // transverse wavenumbers of the two beams
        let a_q = 2.0 * PI * self.q_lower as f64 / self.period + k * self.theta.sin();
        let b_q = 2.0 * PI * self.q_upper as f64 / self.period - k * self.theta.sin();

        let aq = a_q.powi(2) / (8.0 * alpha);
        let bq = b_q.powi(2) / (8.0 * alpha);

        let k_a = a_q / 4.0
            * bessel::jn(self.q_lower, m / 2.0)
            * Complex::new(0.0, -(aq - self.q_lower as f64 * PI / 4.0)).exp()
            * Complex::new(bessel::j_half(aq), bessel::j_neg_half(aq))
            * Complex::new(0.0, k * self.theta.sin() * a).exp();
        let k_b = b_q / 4.0
            * bessel::jn(self.q_upper, m / 2.0)
            * Complex::new(0.0, -(bq - self.q_upper as f64 * PI / 4.0)).exp()
            * Complex::new(bessel::j_half(bq), bessel::j_neg_half(bq))
            * Complex::new(0.0, -(k * self.theta.sin() * a)).exp();

        self.amplitude * h_0 * (PI / alpha).powf(3.0).sqrt() * (k_a + k_b)
    }

    /// Irradiance `|U(z, a)|^2`.
    pub fn intensity(&self, z: f64, a: f64) -> f64 {
        self.field(z, a).norm_sqr()
    }

    /// Intensity over a lateral-offset sweep at fixed distance.
    pub fn offset_profile(&self, z: f64, offsets: &Array1<f64>) -> Array1<f64> {
        offsets.mapv(|a| self.intensity(z, a))
    }

    /// Intensity over a distance sweep at fixed offset.
    pub fn distance_profile(&self, a: f64, distances: &Array1<f64>) -> Array1<f64> {
        distances.mapv(|z| self.intensity(z, a))
    }
}

/// Offset of the n-th dark fringe, `period/2 * (3/4 + n)`.
///
/// A function of the grating period alone; the fringe comb does not move with
/// wavelength or distance.
pub fn dark_fringe_offset(period: f64, n: i32) -> f64 {
    period / 2.0 * (0.75 + n as f64)
}

/// Offset of the bright fringe adjacent to the first dark one: the first dark
/// offset pulled back by half the spacing between consecutive dark fringes.
pub fn bright_fringe_offset(period: f64) -> f64 {
    let spacing = dark_fringe_offset(period, 1) - dark_fringe_offset(period, 0);
    dark_fringe_offset(period, 0) - spacing / 2.0
}
