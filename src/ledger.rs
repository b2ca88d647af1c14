//! Per-run resource timelines.
//!
//! The ledger records every committed booking for each surgeon and each
//! equipment set during a single scheduling run. Surgeons and equipment
//! are independent namespaces keyed by display name: the same string
//! names different resources in each namespace.
//!
//! # Contract
//! The ledger trusts its caller. [`ResourceLedger::commit`] appends
//! unconditionally; feasibility is the caller's job, via
//! [`ResourceLedger::is_free`] before committing. A ledger lives for one
//! run and is discarded with it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::TimeSlot;

/// The two exclusive resource namespaces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// An operating surgeon: one case at a time.
    Surgeon,
    /// An equipment set: one case at a time, usable in any theater.
    Equipment,
}

impl ResourceKind {
    /// Display label used in conflict reports.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Surgeon => "Surgeon",
            ResourceKind::Equipment => "Equipment",
        }
    }
}

/// Committed bookings per resource, per namespace, for one run.
#[derive(Debug, Clone, Default)]
pub struct ResourceLedger {
    surgeons: HashMap<String, Vec<TimeSlot>>,
    equipment: HashMap<String, Vec<TimeSlot>>,
}

impl ResourceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn timeline(&self, kind: ResourceKind, name: &str) -> Option<&Vec<TimeSlot>> {
        match kind {
            ResourceKind::Surgeon => self.surgeons.get(name),
            ResourceKind::Equipment => self.equipment.get(name),
        }
    }

    /// Whether no committed booking for this resource overlaps `slot`.
    ///
    /// A resource with no bookings is free. Touching bookings (one ends
    /// where the other starts) do not overlap.
    pub fn is_free(&self, kind: ResourceKind, name: &str, slot: TimeSlot) -> bool {
        self.timeline(kind, name)
            .map_or(true, |slots| slots.iter().all(|s| !s.overlaps(&slot)))
    }

    /// Records a booking. Appends unconditionally; callers check
    /// [`Self::is_free`] first.
    pub fn commit(&mut self, kind: ResourceKind, name: &str, slot: TimeSlot) {
        let map = match kind {
            ResourceKind::Surgeon => &mut self.surgeons,
            ResourceKind::Equipment => &mut self.equipment,
        };
        map.entry(name.to_string()).or_default().push(slot);
    }

    /// Whether both of a case's identities are free over `slot`.
    pub fn fits(&self, slot: TimeSlot, surgeon: &str, equipment: &str) -> bool {
        self.is_free(ResourceKind::Surgeon, surgeon, slot)
            && self.is_free(ResourceKind::Equipment, equipment, slot)
    }

    /// Books both of a case's identities over `slot`.
    pub fn occupy(&mut self, slot: TimeSlot, surgeon: &str, equipment: &str) {
        self.commit(ResourceKind::Surgeon, surgeon, slot);
        self.commit(ResourceKind::Equipment, equipment, slot);
    }

    /// Number of bookings recorded for a resource.
    pub fn booking_count(&self, kind: ResourceKind, name: &str) -> usize {
        self.timeline(kind, name).map_or(0, |slots| slots.len())
    }
}
