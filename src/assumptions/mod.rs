//! Calculator assumptions: input defaults, slider bounds and nightly rates

mod calculator;
mod rates;

pub use calculator::CalculatorConfig;
pub use rates::NightlyRates;
