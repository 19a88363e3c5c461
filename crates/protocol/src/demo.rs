//! Demo data seeding for testing and demonstration.
//!
//! This module seeds a registry with realistic sample items for trying the
//! TUI without typing everything in first.
//!
//! # Examples
//!
//! ```
//! use trellis_protocol::{demo::seed_demo_items, Registry};
//!
//! let registry = Registry::new();
//! seed_demo_items(&registry).unwrap();
//! assert_eq!(registry.len(), 6);
//! ```

use crate::error::Result;
use crate::item::Status;
use crate::registry::Registry;

/// A seed entry: title, description, headcount, and final status.
struct Seed {
    title: &'static str,
    description: &'static str,
    people: u32,
    status: Status,
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Build API",
        description: "Design the REST API for the billing service",
        people: 3,
        status: Status::Active,
    },
    Seed {
        title: "Write onboarding guide",
        description: "Document the local development setup end to end",
        people: 1,
        status: Status::Active,
    },
    Seed {
        title: "Fix flaky importer",
        description: "The CSV importer drops rows on malformed quotes",
        people: 2,
        status: Status::Active,
    },
    Seed {
        title: "Migrate CI runners",
        description: "Move the pipeline off the deprecated runner pool",
        people: 2,
        status: Status::Active,
    },
    Seed {
        title: "Ship dark mode",
        description: "Theme tokens, toggle, and persistence of the choice",
        people: 4,
        status: Status::Finished,
    },
    Seed {
        title: "Rotate signing keys",
        description: "Quarterly rotation of the release signing keys",
        people: 1,
        status: Status::Finished,
    },
];

/// Seeds the registry with sample items.
///
/// Items are created through the normal `add`/`transfer` path, so every
/// subscriber attached before seeding observes the same notifications a
/// user would produce.
///
/// # Errors
///
/// Propagates registry errors; none occur outside re-entrant use.
pub fn seed_demo_items(registry: &Registry) -> Result<()> {
    for seed in SEEDS {
        let id = registry.add(seed.title, seed.description, seed.people)?;
        if seed.status != Status::Active {
            registry.transfer(id, seed.status)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_populates_both_statuses() {
        let registry = Registry::new();
        seed_demo_items(&registry).expect("seed");

        let snapshot = registry.snapshot();
        let active = snapshot.iter().filter(|i| i.status == Status::Active).count();
        let finished = snapshot
            .iter()
            .filter(|i| i.status == Status::Finished)
            .count();

        assert_eq!(active, 4);
        assert_eq!(finished, 2);
    }

    #[test]
    fn seeded_items_have_positive_headcounts() {
        let registry = Registry::new();
        seed_demo_items(&registry).expect("seed");

        assert!(registry.snapshot().iter().all(|item| item.people >= 1));
    }
}
