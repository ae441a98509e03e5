//! Size formatting shared by the report formats

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Megabytes with three decimal places, e.g. `2.000`.
///
/// Rounds half away from zero: 65 536 bytes is exactly 0.0625 MB and prints
/// as `0.063`.
pub fn format_megabytes(bytes: u64) -> String {
    let per_mb = u128::from(BYTES_PER_MB);
    let thousandths = (u128::from(bytes) * 1000 + per_mb / 2) / per_mb;
    format!("{}.{:03}", thousandths / 1000, thousandths % 1000)
}
