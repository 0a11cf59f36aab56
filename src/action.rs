//! The action catalog: the ten possible crossings and their effects.
//!
//! Each action is a row of coefficients: which bank the vehicle docks at
//! and how the origin-bank counts shift. The search engine iterates this
//! table in order at every decision point instead of special-casing the
//! individual moves, so catalog order also fixes the order in which
//! solutions are discovered and reported.

use serde::{Deserialize, Serialize};

use crate::state::Bank;

/// How many agents fit in the vehicle per crossing.
pub const VEHICLE_CAPACITY: u8 = 2;

/// Names of the ten possible crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionName {
    OneUnsafeOver,
    TwoUnsafeOver,
    OneSafeOver,
    TwoSafeOver,
    PairOver,
    OneUnsafeBack,
    TwoUnsafeBack,
    OneSafeBack,
    TwoSafeBack,
    PairBack,
}

/// A single crossing: where the vehicle ends up and how the origin-bank
/// counts change (destination counts move inversely).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub name: ActionName,
    /// Bank the vehicle arrives at. The action only fits a configuration
    /// whose vehicle is currently on the other side.
    pub vehicle_to: Bank,
    /// Signed change to the origin bank's safe count.
    pub delta_safe: i8,
    /// Signed change to the origin bank's unsafe count.
    pub delta_unsafe: i8,
}

impl Action {
    /// Number of agents this action ferries.
    pub fn passengers(&self) -> u8 {
        (self.delta_safe.abs() + self.delta_unsafe.abs()) as u8
    }
}

/// The fixed, ordered catalog of crossings: the five moves towards the
/// destination bank, then the five symmetric moves back.
pub const CATALOG: [Action; 10] = [
    Action {
        name: ActionName::OneUnsafeOver,
        vehicle_to: Bank::Destination,
        delta_safe: 0,
        delta_unsafe: -1,
    },
    Action {
        name: ActionName::TwoUnsafeOver,
        vehicle_to: Bank::Destination,
        delta_safe: 0,
        delta_unsafe: -2,
    },
    Action {
        name: ActionName::OneSafeOver,
        vehicle_to: Bank::Destination,
        delta_safe: -1,
        delta_unsafe: 0,
    },
    Action {
        name: ActionName::TwoSafeOver,
        vehicle_to: Bank::Destination,
        delta_safe: -2,
        delta_unsafe: 0,
    },
    Action {
        name: ActionName::PairOver,
        vehicle_to: Bank::Destination,
        delta_safe: -1,
        delta_unsafe: -1,
    },
    Action {
        name: ActionName::OneUnsafeBack,
        vehicle_to: Bank::Origin,
        delta_safe: 0,
        delta_unsafe: 1,
    },
    Action {
        name: ActionName::TwoUnsafeBack,
        vehicle_to: Bank::Origin,
        delta_safe: 0,
        delta_unsafe: 2,
    },
    Action {
        name: ActionName::OneSafeBack,
        vehicle_to: Bank::Origin,
        delta_safe: 1,
        delta_unsafe: 0,
    },
    Action {
        name: ActionName::TwoSafeBack,
        vehicle_to: Bank::Origin,
        delta_safe: 2,
        delta_unsafe: 0,
    },
    Action {
        name: ActionName::PairBack,
        vehicle_to: Bank::Origin,
        delta_safe: 1,
        delta_unsafe: 1,
    },
];
