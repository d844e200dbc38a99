//! Historical sale record entity.

/// A previously observed vehicle sale.
///
/// Records are bulk-loaded from the sales feed and never updated afterwards.
/// Only rows with a positive `sale_price` and a VIN of at least six characters
/// take part in price matching.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub id: i64,
    pub vin: String,
    pub sale_year: i32,
    pub make: String,
    pub model: String,
    pub sale_price: f64,
}

impl SaleRecord {
    /// Creates a new SaleRecord instance.
    pub fn new(
        id: i64,
        vin: String,
        sale_year: i32,
        make: String,
        model: String,
        sale_price: f64,
    ) -> Self {
        Self {
            id,
            vin,
            sale_year,
            make,
            model,
            sale_price,
        }
    }

    /// Absolute distance between this record's year and `target`.
    pub fn year_distance(&self, target: i32) -> i32 {
        (self.sale_year - target).abs()
    }
}

/// Input data for loading a sale record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSaleRecord {
    pub vin: String,
    pub sale_year: i32,
    pub make: String,
    pub model: String,
    pub sale_price: f64,
}
