//! Renter vs owner nightly rate comparison

use serde::{Deserialize, Serialize};

/// Nightly cost of a rented room against an owned unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightlyRates {
    /// Standard hotel room, per night
    #[serde(default = "default_renter_nightly")]
    pub renter_nightly: f64,

    /// Owned unit (maintenance fees), per night
    #[serde(default = "default_owner_nightly")]
    pub owner_nightly: f64,
}

fn default_renter_nightly() -> f64 { 300.0 }
fn default_owner_nightly() -> f64 { 85.0 }

impl Default for NightlyRates {
    fn default() -> Self {
        Self {
            renter_nightly: 300.0,
            owner_nightly: 85.0,
        }
    }
}

impl NightlyRates {
    pub fn savings_per_night(&self) -> f64 {
        self.renter_nightly - self.owner_nightly
    }

    /// Savings over a year of `nights` stays
    pub fn annual_savings(&self, nights: u32) -> f64 {
        self.savings_per_night() * f64::from(nights)
    }

    /// How many times more renting costs per night
    /// `None` when the owner rate is not positive
    pub fn cost_ratio(&self) -> Option<f64> {
        if self.owner_nightly > 0.0 {
            Some(self.renter_nightly / self.owner_nightly)
        } else {
            None
        }
    }

    /// Nights a yearly rental budget covers at the renter rate
    pub fn nights_for_spend(&self, annual_spend: f64) -> Option<f64> {
        if self.renter_nightly > 0.0 {
            Some(annual_spend / self.renter_nightly)
        } else {
            None
        }
    }
}
