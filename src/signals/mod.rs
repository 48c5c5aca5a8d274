//! Synthetic signal generators: solar, time-of-use price, and grid events.

pub mod grid;
pub mod price;
pub mod solar;

pub use grid::GridEvents;
pub use price::TimeOfUseTariff;
pub use solar::SolarProfile;

use rand::{Rng, rngs::StdRng};

/// Gaussian noise via the Box-Muller transform, mean 0.
///
/// Returns 0.0 when `std_dev` is non-positive.
pub(crate) fn gaussian_noise(rng: &mut StdRng, std_dev: f32) -> f32 {
    if std_dev <= 0.0 {
        return 0.0;
    }

    let u1: f32 = rng.random::<f32>().clamp(1e-6, 1.0);
    let u2: f32 = rng.random::<f32>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
    z0 * std_dev
}
