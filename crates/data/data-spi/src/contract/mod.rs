//! Contract module containing trait definitions for data providers

mod data_source;

pub use data_source::DataSource;
