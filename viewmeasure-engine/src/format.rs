//! Label text for measured values

/// Unit suffix for lengths (blender units)
pub const LENGTH_UNIT: &str = "BU";

/// Unit suffix for areas
pub const AREA_UNIT: &str = "BU^2";

/// Round to `precision` decimals
pub fn round_to(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision.min(15) as i32);
    (value * scale).round() / scale
}

/// Value with a fixed number of decimals, negative zero printed as zero
pub fn format_value(value: f64, precision: usize) -> String {
    let rounded = round_to(value, precision);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.precision$}")
}

/// `"Distance: 1.2346 BU"`
pub fn format_distance(value: f64, precision: usize) -> String {
    format!("Distance: {} {LENGTH_UNIT}", format_value(value, precision))
}

/// `"1.2346 BU^2"`
pub fn format_area(value: f64, precision: usize) -> String {
    format!("{} {AREA_UNIT}", format_value(value, precision))
}
