use crate::map::models::LatLng;
use rand::Rng;

/// Perturbs a position by two independent uniform offsets in
/// `[-amount, amount]`, one per axis. The result is clamped so it stays
/// within the valid degree ranges even for positions right at the poles
/// or the antimeridian.
pub fn jitter(position: LatLng, amount: f64) -> LatLng {
    let mut rng = rand::thread_rng();
    LatLng {
        lat: position.lat + rng.gen_range(-amount..=amount),
        lng: position.lng + rng.gen_range(-amount..=amount),
    }
    .clamped()
}
