use crate::protocol::Product;

/// 低于该数量视为低库存
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// 报表页使用的库存汇总
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StockSummary {
    pub items: usize,
    pub units: i64,
    pub value: f64,
    pub low_stock: usize,
}

impl StockSummary {
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().fold(Self::default(), |mut acc, p| {
            acc.items += 1;
            acc.units += p.base.quantity;
            acc.value += p.base.quantity as f64 * p.base.price;
            if p.base.quantity < LOW_STOCK_THRESHOLD {
                acc.low_stock += 1;
            }
            acc
        })
    }
}
