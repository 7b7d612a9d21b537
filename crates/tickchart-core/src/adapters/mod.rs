pub mod alphavantage;

pub use alphavantage::{parse_csv, AlphaVantageClient, REQUIRED_COLUMNS};
