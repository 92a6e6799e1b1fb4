//! Per-army count aggregation.

use serde::Serialize;

use crate::models::{Army, Status};

/// Miniature counts per known status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub built: u64,
    pub work: u64,
    pub painted: u64,
}

impl StatusCounts {
    pub fn get(&self, status: Status) -> u64 {
        match status {
            Status::Built => self.built,
            Status::Work => self.work,
            Status::Painted => self.painted,
        }
    }

    fn bucket_mut(&mut self, status: Status) -> &mut u64 {
        match status {
            Status::Built => &mut self.built,
            Status::Work => &mut self.work,
            Status::Painted => &mut self.painted,
        }
    }

    /// Counts paired with their status, in progress order.
    pub fn iter(&self) -> impl Iterator<Item = (Status, u64)> + '_ {
        Status::ALL.into_iter().map(|status| (status, self.get(status)))
    }
}

/// Totals for one army.
///
/// `total` counts every unit. Units with an unrecognized status land in
/// `unclassified` rather than in `by_status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArmyStats {
    pub total: u64,
    pub by_status: StatusCounts,
    pub unclassified: u64,
}

pub fn compute(army: &Army) -> ArmyStats {
    let mut stats = ArmyStats::default();

    for unit in army.units() {
        let count = u64::from(unit.miniatures_number);
        stats.total += count;
        match unit.status.known() {
            Some(status) => *stats.by_status.bucket_mut(status) += count,
            None => stats.unclassified += count,
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Unit, UnitStatus};

    #[test]
    fn test_empty_army() {
        assert_eq!(compute(&Army::new()), ArmyStats::default());
    }

    #[test]
    fn test_counts_by_status() {
        let mut army = Army::new();
        army.insert("Boyz", Unit::new("Infantry", 20));
        army.insert("Nobz", Unit::new("Infantry", 5).with_status(Status::Work));
        army.insert("Trukk", Unit::new("Vehicle", 1).with_status(Status::Painted));
        army.insert("Grots", Unit::new("Infantry", 10).with_status(Status::Painted));

        let stats = compute(&army);

        assert_eq!(stats.total, 36);
        assert_eq!(
            stats.by_status,
            StatusCounts {
                built: 20,
                work: 5,
                painted: 11
            }
        );
        assert_eq!(stats.unclassified, 0);
    }

    #[test]
    fn test_unrecognized_status_only_counts_toward_total() {
        let mut army = Army::new();
        army.insert("Boyz", Unit::new("Infantry", 20));
        army.insert(
            "Weirdboy",
            Unit::new("Psyker", 2).with_status(UnitStatus::Unrecognized("primed".into())),
        );

        let stats = compute(&army);

        assert_eq!(stats.total, 22);
        assert_eq!(stats.by_status.built, 20);
        assert_eq!(stats.by_status.work, 0);
        assert_eq!(stats.by_status.painted, 0);
        assert_eq!(stats.unclassified, 2);
    }

    #[test]
    fn test_iter_in_progress_order() {
        let counts = StatusCounts {
            built: 1,
            work: 2,
            painted: 3,
        };
        let pairs: Vec<(Status, u64)> = counts.iter().collect();
        assert_eq!(
            pairs,
            vec![(Status::Built, 1), (Status::Work, 2), (Status::Painted, 3)]
        );
    }
}
