/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Standard atmospheric refraction factor applied to the Earth radius.
pub const DEFAULT_REFRACTION: f64 = 1.07;

pub fn effective_radius_km(refraction: f64) -> f64 {
    EARTH_RADIUS_KM * refraction
}

/// Hidden height beyond the horizon via the small-angle approximation
/// `d^2 / 2R`.
pub fn hidden_height_quadratic(distance_km: f64, radius_km: f64) -> f64 {
    (distance_km * distance_km) / (2.0 * radius_km)
}

/// Hidden height beyond the horizon via the exact arc formula
/// `R * (1 - cos(d / R))`.
pub fn hidden_height_arc(distance_km: f64, radius_km: f64) -> f64 {
    let angle = distance_km / radius_km;
    radius_km * (1.0 - angle.cos())
}
