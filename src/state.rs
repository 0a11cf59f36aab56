//! Configuration types for the river crossing puzzle.
//!
//! A configuration is a snapshot of how many safe and unsafe agents stand
//! on each bank, plus where the vehicle is. The methods here decide which
//! actions fit a configuration, what applying one yields, and whether a
//! configuration is legal or final.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionName};

/// Number of agents of each class in the puzzle.
pub const AGENTS_PER_CLASS: u8 = 3;

/// A side of the crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Origin,
    Destination,
}

impl Bank {
    /// The other side.
    pub fn opposite(self) -> Bank {
        match self {
            Bank::Origin => Bank::Destination,
            Bank::Destination => Bank::Origin,
        }
    }

    /// Digit used in the text rendering: 0 for origin, 1 for destination.
    pub fn as_digit(self) -> u8 {
        match self {
            Bank::Origin => 0,
            Bank::Destination => 1,
        }
    }
}

/// A complete snapshot of the puzzle: agent counts on both banks, the
/// vehicle position, and the action that produced it (`None` for the
/// initial configuration).
///
/// Equality and hashing cover the five state fields only. `action_taken`
/// is provenance, not state identity: two configurations with the same
/// counts and vehicle are the same state no matter which move reached
/// them, and the cycle check relies on exactly that.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub origin_safe: u8,
    pub origin_unsafe: u8,
    pub dest_safe: u8,
    pub dest_unsafe: u8,
    pub vehicle: Bank,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<ActionName>,
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.origin_safe == other.origin_safe
            && self.origin_unsafe == other.origin_unsafe
            && self.dest_safe == other.dest_safe
            && self.dest_unsafe == other.dest_unsafe
            && self.vehicle == other.vehicle
    }
}

impl Eq for Configuration {}

impl Hash for Configuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin_safe.hash(state);
        self.origin_unsafe.hash(state);
        self.dest_safe.hash(state);
        self.dest_unsafe.hash(state);
        self.vehicle.hash(state);
    }
}

impl Configuration {
    /// The fixed start state: all agents on the origin bank, vehicle there
    /// with them.
    pub fn initial() -> Self {
        Self {
            origin_safe: AGENTS_PER_CLASS,
            origin_unsafe: AGENTS_PER_CLASS,
            dest_safe: 0,
            dest_unsafe: 0,
            vehicle: Bank::Origin,
            action_taken: None,
        }
    }

    /// Check whether `action` fits this configuration: the vehicle must
    /// not already be on the action's target bank, and the shifted origin
    /// counts must stay within range for both classes.
    ///
    /// Range only; the safety invariant is checked on the successor via
    /// [`Configuration::is_valid`]. An out-of-range action is rejected
    /// here, before any successor is built.
    pub fn can_apply(&self, action: &Action) -> bool {
        if self.vehicle == action.vehicle_to {
            return false;
        }
        in_range(self.origin_safe as i8 + action.delta_safe)
            && in_range(self.origin_unsafe as i8 + action.delta_unsafe)
    }

    /// Apply `action`, producing the successor configuration: origin
    /// counts shift by the action's deltas, destination counts shift
    /// inversely, and the vehicle docks at the action's target bank.
    ///
    /// Pure; `self` is untouched. Callers establish
    /// [`Configuration::can_apply`] first, which keeps every count within
    /// 0..=3.
    pub fn apply(&self, action: &Action) -> Configuration {
        Configuration {
            origin_safe: (self.origin_safe as i8 + action.delta_safe) as u8,
            origin_unsafe: (self.origin_unsafe as i8 + action.delta_unsafe) as u8,
            dest_safe: (self.dest_safe as i8 - action.delta_safe) as u8,
            dest_unsafe: (self.dest_unsafe as i8 - action.delta_unsafe) as u8,
            vehicle: action.vehicle_to,
            action_taken: Some(action.name),
        }
    }

    /// Check the configuration invariants:
    /// 1. neither bank may have unsafe agents outnumbering safe agents
    ///    while at least one safe agent stands there (a bank with no safe
    ///    agents is never a hazard),
    /// 2. each class sums to [`AGENTS_PER_CLASS`] across the two banks
    ///    (conservation cannot break under correct `apply`, but is
    ///    checked anyway).
    pub fn is_valid(&self) -> bool {
        if self.origin_unsafe > self.origin_safe && self.origin_safe != 0 {
            return false;
        }
        if self.dest_unsafe > self.dest_safe && self.dest_safe != 0 {
            return false;
        }
        self.origin_safe as u16 + self.dest_safe as u16 == AGENTS_PER_CLASS as u16
            && self.origin_unsafe as u16 + self.dest_unsafe as u16 == AGENTS_PER_CLASS as u16
    }

    /// True once every agent stands on the destination bank and the
    /// vehicle is there with them.
    pub fn is_terminal(&self) -> bool {
        self.origin_safe == 0
            && self.origin_unsafe == 0
            && self.dest_safe == AGENTS_PER_CLASS
            && self.dest_unsafe == AGENTS_PER_CLASS
            && self.vehicle == Bank::Destination
    }
}

fn in_range(count: i8) -> bool {
    0 <= count && count <= AGENTS_PER_CLASS as i8
}

impl fmt::Display for Configuration {
    /// Renders `originSafe,originUnsafe,destSafe,destUnsafe,vehicleDigit`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.origin_safe,
            self.origin_unsafe,
            self.dest_safe,
            self.dest_unsafe,
            self.vehicle.as_digit()
        )
    }
}
