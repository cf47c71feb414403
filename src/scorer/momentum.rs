//! Median-based volume momentum for the buy/sell/advanceBuy/advanceSell
//! categories.

use crate::types::StockRow;

/// Median of the rows' volumes: sort ascending, take the middle element, or
/// the mean of the two middle elements for an even count. None for an empty
/// category.
pub fn median_volume(rows: &[StockRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }

    let mut volumes: Vec<f64> = rows.iter().map(StockRow::volume).collect();
    volumes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = volumes.len() / 2;
    Some(if volumes.len() % 2 == 0 {
        (volumes[mid - 1] + volumes[mid]) / 2.0
    } else {
        volumes[mid]
    })
}

/// Score every row: volume over the category median, rounded to two decimals.
/// A zero or undefined median divides by 1 instead (documented fallback from
/// the original service, kept verbatim rather than switching to a null
/// sentinel).
pub fn apply_momentum(rows: &mut [StockRow]) {
    let divisor = match median_volume(rows) {
        Some(m) if m != 0.0 => m,
        _ => 1.0,
    };

    for row in rows.iter_mut() {
        let strength = (row.volume() / divisor * 100.0).round() / 100.0;
        row.momentum_strength = Some(strength);
    }
}
