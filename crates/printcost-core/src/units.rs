//! Unit conversion and display rounding
//!
//! All lengths are millimeters, masses grams and densities g/cm³.
//! Displayed weights and currency amounts are rounded half away from zero
//! to two decimals; internal values stay unrounded.

use std::f64::consts::PI;

/// Cubic millimeters in one cubic centimeter
pub const MM3_PER_CM3: f64 = 1000.0;

/// Grams in one kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Decimal places used for every displayed figure
pub const DISPLAY_DECIMALS: i32 = 2;

/// Convert cubic millimeters to cubic centimeters
pub fn mm3_to_cm3(volume_mm3: f64) -> f64 {
    volume_mm3 / MM3_PER_CM3
}

/// Mass in grams of `volume_mm3` of material with `density_g_cm3`
pub fn grams_from_volume(volume_mm3: f64, density_g_cm3: f64) -> f64 {
    mm3_to_cm3(volume_mm3) * density_g_cm3
}

/// Length of filament of `diameter_mm` holding `volume_mm3`
pub fn filament_length_mm(volume_mm3: f64, diameter_mm: f64) -> f64 {
    let cross_section = PI * (diameter_mm / 2.0).powi(2);
    if cross_section > 0.0 {
        volume_mm3 / cross_section
    } else {
        0.0
    }
}

/// Round to `decimals` places, half away from zero
///
/// Ties are decided on the shortest decimal form of `value`, so `1.005`
/// rounds to `1.01` even though its binary value lies just below the tie.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(decimals);
    let shifted = format!("{}e{}", value, decimals)
        .parse::<f64>()
        .unwrap_or(value * factor);
    if !shifted.is_finite() {
        return value;
    }

    shifted.round() / factor
}

/// Round to display precision
pub fn round_display(value: f64) -> f64 {
    round_to(value, DISPLAY_DECIMALS)
}

/// Format a weight for display
pub fn format_grams(grams: f64) -> String {
    format!("{:.2}", round_display(grams))
}

/// Format a currency amount for display
pub fn format_currency(amount: f64) -> String {
    format!("{:.2}", round_display(amount))
}

/// Format a volume in cm³ for display
pub fn format_volume_cm3(volume_mm3: f64) -> String {
    format!("{:.2} cm³", round_display(mm3_to_cm3(volume_mm3)))
}
