//! Display formatting for prices, percentages and volumes.

pub mod decimal;
pub mod num;
