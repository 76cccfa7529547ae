//! Contract module containing trait definitions for forecast operations

mod forecast_model;

pub use forecast_model::ForecastModel;
