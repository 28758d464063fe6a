use db::models::sale::Sale;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    /// Sum of prices over rows where a price is present.
    pub total: f64,
    /// Number of sales, priced or not.
    pub count: usize,
    /// `total / count`, defined as 0.0 for an empty set.
    pub average: f64,
}

/// In-process aggregate over a slice of sales. Order of the input does not
/// matter; rows with a null price count toward `count` but add nothing to
/// `total`.
pub fn aggregate(sales: &[Sale]) -> SalesReport {
    let total: f64 = sales.iter().filter_map(|s| s.price).sum();
    let count = sales.len();
    let average = if count > 0 { total / count as f64 } else { 0.0 };
    SalesReport {
        total,
        count,
        average,
    }
}
