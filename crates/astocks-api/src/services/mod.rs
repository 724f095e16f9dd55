//! 비즈니스 로직 서비스.

pub mod stock_service;

pub use stock_service::{QuoteSource, ServiceError, StockQuote, StockService};
