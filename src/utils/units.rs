// File: src/utils/units.rs

/// Smallest currency units per display unit (wei per ether).
pub const AMOUNT_SCALE: f64 = 1_000_000_000_000_000_000.0;

/// Raw hashes per second in one MH/s.
pub const HASHRATE_SCALE: f64 = 1_000_000.0;

/// Converts an amount in the chain's smallest unit to display units.
pub fn to_display_amount(raw: f64) -> f64 {
    raw / AMOUNT_SCALE
}

/// Converts a raw hashrate (H/s) to MH/s.
pub fn to_display_hashrate(raw: f64) -> f64 {
    raw / HASHRATE_SCALE
}
