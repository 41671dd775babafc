//! # Collision integral for diffusion
//!
//! Tabulated Omega_D as a function of the reduced temperature T*
//! (Welty, Wicks, Wilson, Rorrer. Fundamentals of Momentum, Heat and Mass Transfer, appendix K).
//! Values between anchors are linearly interpolated; outside [0.30, 90.0] the nearest end value
//! is returned, no extrapolation.
use log::warn;

/// (T*, Omega_D), strictly increasing in T*
pub const COLLISION_INTEGRAL_TABLE: [(f64, f64); 76] = [
    (0.30, 2.662),
    (0.35, 2.476),
    (0.40, 2.318),
    (0.45, 2.184),
    (0.50, 2.066),
    (0.55, 1.966),
    (0.60, 1.877),
    (0.65, 1.798),
    (0.70, 1.729),
    (0.75, 1.667),
    (0.80, 1.612),
    (0.85, 1.562),
    (0.90, 1.517),
    (0.95, 1.476),
    (1.00, 1.439),
    (1.05, 1.406),
    (1.10, 1.375),
    (1.15, 1.346),
    (1.20, 1.320),
    (1.25, 1.296),
    (1.30, 1.273),
    (1.35, 1.253),
    (1.40, 1.233),
    (1.45, 1.215),
    (1.50, 1.198),
    (1.55, 1.182),
    (1.60, 1.167),
    (1.65, 1.153),
    (1.70, 1.140),
    (1.80, 1.116),
    (1.85, 1.105),
    (1.90, 1.094),
    (1.95, 1.084),
    (2.00, 1.075),
    (2.10, 1.057),
    (2.20, 1.041),
    (2.30, 1.026),
    (2.40, 1.012),
    (2.50, 0.9996),
    (2.60, 0.9878),
    (2.70, 0.9770),
    (2.80, 0.9672),
    (2.90, 0.9576),
    (3.00, 0.9490),
    (3.10, 0.9406),
    (3.20, 0.9328),
    (3.30, 0.9256),
    (3.40, 0.9186),
    (3.50, 0.9120),
    (3.60, 0.9058),
    (3.70, 0.8998),
    (3.80, 0.8942),
    (3.90, 0.8888),
    (4.00, 0.8836),
    (4.10, 0.8788),
    (4.20, 0.8740),
    (4.30, 0.8694),
    (4.40, 0.8652),
    (4.50, 0.8610),
    (4.60, 0.8568),
    (4.70, 0.8530),
    (4.80, 0.8492),
    (4.90, 0.8456),
    (5.0, 0.8422),
    (6.0, 0.8124),
    (7.0, 0.7896),
    (8.0, 0.7712),
    (10.0, 0.7424),
    (20.0, 0.6640),
    (30.0, 0.6232),
    (40.0, 0.5960),
    (50.0, 0.5756),
    (60.0, 0.5596),
    (70.0, 0.5464),
    (80.0, 0.5352),
    (90.0, 0.5256),
];

/// empirical factor of the energy scale: epsilon/k = 0.77 Tc
const EPSILON_TC_RATIO: f64 = 0.77;

/// T* = T / sqrt(Tc_A * Tc_B * 0.77^2)
pub fn reduced_temperature(t: f64, tc_a: f64, tc_b: f64) -> f64 {
    t / (tc_a * tc_b * EPSILON_TC_RATIO.powi(2)).sqrt()
}

/// Omega_D for a given T*, together with a flag telling whether T* was inside the table range
pub fn collision_integral_in_range(t_star: f64) -> (f64, bool) {
    let table = &COLLISION_INTEGRAL_TABLE;
    for (i, &(x2, y2)) in table.iter().enumerate() {
        if x2 >= t_star {
            if i == 0 {
                return (y2, t_star == x2);
            }
            let (x1, y1) = table[i - 1];
            return (y1 + (y2 - y1) * (t_star - x1) / (x2 - x1), true);
        }
    }
    (table[table.len() - 1].1, false)
}

/// Omega_D for a given T*, clamped to the end values outside the table
pub fn collision_integral(t_star: f64) -> f64 {
    let (omega, in_range) = collision_integral_in_range(t_star);
    if !in_range {
        warn!(
            "reduced temperature T* = {:.4} is outside the tabulated range [0.30, 90.0], Omega_D clamped to {}",
            t_star, omega
        );
    }
    omega
}
