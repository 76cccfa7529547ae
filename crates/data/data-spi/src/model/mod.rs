//! Model module containing data structures for energy series

mod observation;
mod utils;

pub use observation::{Observation, Series};
pub use utils::{format_timestamp, now_local};
