//! Synthetic photovoltaic generation curve.

use chrono::NaiveDateTime;
use rand::{SeedableRng, rngs::StdRng};

use crate::frame::hour_of_day;
use crate::signals::gaussian_noise;

/// Default peak generation under ideal conditions (kW).
pub const PEAK_KW: f32 = 4.0;
/// Default standard deviation of the additive noise, as a fraction of peak.
pub const NOISE_STD: f32 = 0.05;

/// Hour at which the clear-sky curve rises above zero.
const SUNRISE_HOUR: f32 = 7.0;
/// Width of the daylight half-sine in hours.
const DAYLIGHT_SPAN_HOURS: f32 = 13.0;

/// Generates a bounded half-sine solar curve with additive weather noise.
///
/// The clear-sky component is `sin((h - 7) * PI / 13)` clamped below at
/// zero; Gaussian noise is added to the clamped curve before scaling by the
/// peak, so noisy values stay non-negative but may be small positives at
/// night.
#[derive(Debug, Clone)]
pub struct SolarProfile {
    /// Maximum power output in kilowatts under ideal conditions.
    pub peak_kw: f32,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_std: f32,
    rng: StdRng,
}

impl SolarProfile {
    /// Creates a solar profile with explicit parameters.
    ///
    /// Negative `peak_kw` or `noise_std` are clamped to zero.
    pub fn new(peak_kw: f32, noise_std: f32, seed: u64) -> Self {
        Self {
            peak_kw: peak_kw.max(0.0),
            noise_std: noise_std.max(0.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a solar profile with the stock peak and noise parameters.
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(PEAK_KW, NOISE_STD, seed)
    }

    /// Clear-sky generation fraction at a fractional hour of day, in [0, 1].
    fn clear_sky_frac(hour: f32) -> f32 {
        ((hour - SUNRISE_HOUR) * std::f32::consts::PI / DAYLIGHT_SPAN_HOURS)
            .sin()
            .max(0.0)
    }

    /// Generates one generation value (kW) per index timestamp.
    pub fn generate(&mut self, index: &[NaiveDateTime]) -> Vec<f32> {
        index
            .iter()
            .map(|ts| {
                let frac = Self::clear_sky_frac(hour_of_day(ts));
                let noise = gaussian_noise(&mut self.rng, self.noise_std);
                ((frac + noise) * self.peak_kw).max(0.0)
            })
            .collect()
    }
}
