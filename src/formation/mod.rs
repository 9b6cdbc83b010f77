//! Formation data model
//!
//! Performer records, their grid assignments and the stage grid itself.

mod grid;
mod performer;

pub use grid::{Cell, StageGrid};
pub use performer::{Performer, PerformerId};

use std::collections::BTreeMap;

/// All performers, keyed and ordered by id
#[derive(Debug, Clone, Default)]
pub struct Roster {
    performers: BTreeMap<PerformerId, Performer>,
}

impl Roster {
    /// Create a roster with ids `1..=names.len()` in the given order.
    ///
    /// Ids are `u32`; names past `u32::MAX` get no id and are left out.
    /// `StageConfig::validate` rejects such rosters before they get here.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let performers = names
            .into_iter()
            .enumerate()
            .map_while(|(i, name)| {
                let id = u32::try_from(i).ok()?.checked_add(1).map(PerformerId)?;
                Some((id, Performer::new(id, name)))
            })
            .collect();
        Self { performers }
    }

    pub fn len(&self) -> usize {
        self.performers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performers.is_empty()
    }

    pub fn get(&self, id: PerformerId) -> Option<&Performer> {
        self.performers.get(&id)
    }

    pub fn get_mut(&mut self, id: PerformerId) -> Option<&mut Performer> {
        self.performers.get_mut(&id)
    }

    /// Performers in roster order
    pub fn iter(&self) -> impl Iterator<Item = &Performer> {
        self.performers.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = PerformerId> + '_ {
        self.performers.keys().copied()
    }

    /// Position of `id` in roster order
    pub fn index_of(&self, id: PerformerId) -> Option<usize> {
        self.performers.keys().position(|k| *k == id)
    }

    /// Set or clear a performer's cell. Returns false for an unknown id.
    pub fn assign(&mut self, id: PerformerId, cell: Option<Cell>) -> bool {
        match self.performers.get_mut(&id) {
            Some(performer) => {
                performer.cell = cell;
                true
            }
            None => false,
        }
    }

    /// Send everyone off-stage
    pub fn clear_all(&mut self) {
        for performer in self.performers.values_mut() {
            performer.cell = None;
        }
    }

    /// Performers currently assigned to `cell`
    pub fn occupants(&self, cell: Cell) -> Vec<PerformerId> {
        self.performers
            .values()
            .filter(|p| p.cell == Some(cell))
            .map(|p| p.id)
            .collect()
    }

    pub fn assigned_count(&self) -> usize {
        self.performers.values().filter(|p| p.is_on_stage()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_are_sequential() {
        let roster = Roster::from_names(["Alice", "Bob", "Carol"]);
        let ids: Vec<_> = roster.ids().collect();
        assert_eq!(ids, vec![PerformerId(1), PerformerId(2), PerformerId(3)]);
        assert_eq!(roster.get(PerformerId(2)).unwrap().label(), "2. Bob");
        assert_eq!(roster.index_of(PerformerId(3)), Some(2));
    }

    #[test]
    fn test_assign_and_clear() {
        let mut roster = Roster::from_names(["Alice", "Bob"]);
        assert!(roster.assign(PerformerId(1), Some(Cell::new(0, 1))));
        assert!(!roster.assign(PerformerId(9), Some(Cell::new(0, 1))));
        assert_eq!(roster.assigned_count(), 1);

        roster.clear_all();
        assert_eq!(roster.assigned_count(), 0);
        assert!(roster.iter().all(|p| p.cell.is_none()));
    }

    #[test]
    fn test_shared_cell_occupants() {
        let mut roster = Roster::from_names(["Alice", "Bob", "Carol"]);
        roster.assign(PerformerId(1), Some(Cell::new(2, 2)));
        roster.assign(PerformerId(3), Some(Cell::new(2, 2)));
        assert_eq!(roster.occupants(Cell::new(2, 2)), vec![PerformerId(1), PerformerId(3)]);
        assert!(roster.occupants(Cell::new(0, 0)).is_empty());
    }
}
