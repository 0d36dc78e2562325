//! 前后端共享的线上数据模型与格式化工具

pub mod date;
mod protocol;
mod report;

pub use chrono;
pub use protocol::*;
pub use report::{LOW_STOCK_THRESHOLD, StockSummary};
