/// Alias to a scalar floating type.
///
/// NOTE: container quantities are fractional during the search, so `f64` keeps enough precision
/// for penalty tolerances of a tenth of TEU on large inventories.
pub type Float = f64;
