//! Centralized axis naming utilities
//!
//! Provides consistent body-axis and quaternion component names across all plot functions.

/// Get the standard axis name for a given index
///
/// # Arguments
/// * `index` - Axis index (0=Roll, 1=Pitch, 2=Yaw)
///
/// # Returns
/// Static string slice with the axis name
///
/// # Panics
/// Panics if index is greater than 2
pub fn axis_name(index: usize) -> &'static str {
    AXIS_NAMES.get(index).copied().unwrap_or_else(|| {
        panic!(
            "Invalid axis index: {}. Expected 0 (Roll), 1 (Pitch), or 2 (Yaw)",
            index
        )
    })
}

/// Get all axis names as a static array
pub const AXIS_NAMES: [&str; 3] = ["Roll", "Pitch", "Yaw"];

/// Body axis letters matching `AXIS_NAMES`.
pub const AXIS_LETTERS: [&str; 3] = ["X", "Y", "Z"];

/// Quaternion components, scalar part first.
pub const QUATERNION_COMPONENT_NAMES: [&str; 4] = ["q0", "q1", "q2", "q3"];

/// Y-axis label used on the Euler angle column, e.g. "X axis (Roll)".
///
/// # Panics
/// Panics if index is greater than 2, like [`axis_name`].
pub fn euler_axis_label(index: usize) -> String {
    let name = axis_name(index);
    let letter = AXIS_LETTERS.get(index).copied().unwrap_or_default();
    format!("{} axis ({})", letter, name)
}
