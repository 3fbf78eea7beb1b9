/// Core value type.
///
/// Declares the `Value` enum, its conversions and how results are printed.
pub mod core;
