//! Guest selection and multi-drag payload construction

use shared::models::{Guest, GuestId};
use shared::seating::{Arrangement, DragPayload, DraggedGuest, MultiDrag};
use std::collections::HashSet;

/// Set of selected guest ids
///
/// Ids may go stale when guests are deleted or undo rolls them away; stale
/// ids are ignored when building payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<GuestId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: &GuestId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn select(&mut self, id: GuestId) {
        self.ids.insert(id);
    }

    pub fn deselect(&mut self, id: &GuestId) {
        self.ids.remove(id);
    }

    pub fn contains(&self, id: &GuestId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer name a guest
    pub fn retain_known(&mut self, known: &HashSet<GuestId>) {
        self.ids.retain(|id| known.contains(id));
    }

    pub fn ids(&self) -> impl Iterator<Item = &GuestId> {
        self.ids.iter()
    }

    /// Selected ids as an owned list (for group/delete commands)
    pub fn to_vec(&self) -> Vec<GuestId> {
        self.ids.iter().cloned().collect()
    }

    /// True when `guests` is non-empty and every member is selected
    pub fn is_group_fully_selected(&self, guests: &[Guest]) -> bool {
        !guests.is_empty() && guests.iter().all(|g| self.contains(&g.id))
    }

    /// True when some but not all members are selected
    pub fn is_group_partially_selected(&self, guests: &[Guest]) -> bool {
        let selected = guests.iter().filter(|g| self.contains(&g.id)).count();
        selected > 0 && selected < guests.len()
    }

    pub fn select_group(&mut self, guests: &[Guest]) {
        self.ids.extend(guests.iter().map(|g| g.id.clone()));
    }

    /// Deselect the group when fully selected, otherwise select all of it
    pub fn toggle_group(&mut self, guests: &[Guest]) {
        if self.is_group_fully_selected(guests) {
            for guest in guests {
                self.ids.remove(&guest.id);
            }
        } else {
            self.select_group(guests);
        }
    }

    /// Build the payload for a drag starting on `dragged`
    ///
    /// Dragging a selected guest while more than one guest is selected
    /// carries the whole selection, each guest tagged with where it sits
    /// now. Anything else is a single-guest drag.
    pub fn build_drag_payload(
        &self,
        dragged: &Guest,
        from_table_index: Option<usize>,
        arrangement: &Arrangement,
    ) -> DragPayload {
        if !self.contains(&dragged.id) || self.len() <= 1 {
            return DragPayload::single(dragged.clone(), from_table_index);
        }

        let mut selected = Vec::with_capacity(self.len());
        for guest in &arrangement.pool {
            if self.contains(&guest.id) {
                selected.push(DraggedGuest::from_pool(guest.clone()));
            }
        }
        for (index, members) in arrangement.tables.iter().enumerate() {
            for guest in members {
                if self.contains(&guest.id) {
                    selected.push(DraggedGuest::from_table(guest.clone(), index));
                }
            }
        }

        if selected.len() <= 1 {
            return DragPayload::single(dragged.clone(), from_table_index);
        }
        DragPayload::Multi(MultiDrag::new(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(id: &str) -> Guest {
        Guest::primary(id, format!("G{}", id), "Test", "Family")
    }

    fn arrangement() -> Arrangement {
        let mut a = Arrangement::with_tables(2);
        a.pool = vec![guest("1"), guest("2")];
        a.tables[1] = vec![guest("3")];
        a
    }

    #[test]
    fn test_toggle() {
        let mut sel = Selection::new();
        assert!(sel.toggle(&"1".into()));
        assert!(sel.contains(&"1".into()));
        assert!(!sel.toggle(&"1".into()));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_group_selection_states() {
        let group = vec![guest("1"), guest("2")];
        let mut sel = Selection::new();
        assert!(!sel.is_group_fully_selected(&group));
        assert!(!sel.is_group_partially_selected(&group));

        sel.select("1".into());
        assert!(sel.is_group_partially_selected(&group));
        assert!(!sel.is_group_fully_selected(&group));

        sel.toggle_group(&group);
        assert!(sel.is_group_fully_selected(&group));
        sel.toggle_group(&group);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_empty_group_is_never_fully_selected() {
        let mut sel = Selection::new();
        sel.select("1".into());
        assert!(!sel.is_group_fully_selected(&[]));
    }

    #[test]
    fn test_single_drag_when_not_selected() {
        let a = arrangement();
        let mut sel = Selection::new();
        sel.select("2".into());
        sel.select("3".into());
        let payload = sel.build_drag_payload(&a.pool[0], None, &a);
        assert!(!payload.is_multi());
    }

    #[test]
    fn test_single_drag_when_only_one_selected() {
        let a = arrangement();
        let mut sel = Selection::new();
        sel.select("1".into());
        let payload = sel.build_drag_payload(&a.pool[0], None, &a);
        assert!(!payload.is_multi());
    }

    #[test]
    fn test_multi_drag_tags_each_guest_with_its_location() {
        let a = arrangement();
        let mut sel = Selection::new();
        sel.select("1".into());
        sel.select("3".into());
        sel.select("gone".into());

        let payload = sel.build_drag_payload(&a.pool[0], None, &a);
        assert!(payload.is_multi());
        let guests = payload.guests();
        assert_eq!(guests.len(), 2);
        assert_eq!(guests[0].guest.id.as_str(), "1");
        assert_eq!(guests[0].from_table_index, None);
        assert_eq!(guests[1].guest.id.as_str(), "3");
        assert_eq!(guests[1].from_table_index, Some(1));
    }
}
