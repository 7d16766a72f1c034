//! Guest-level actions: adding, +1 companions, renaming, regrouping,
//! deleting

use crate::seating::identity::reserve_id;
use crate::seating::traits::{
    ActionContext, ActionError, ActionHandler, ActionResult, describe_guests,
};
use shared::models::{Guest, GuestId, UNGROUPED};
use shared::seating::SkipReason;
use std::collections::HashSet;

/// Add one guest to the pool
#[derive(Debug, Clone)]
pub struct AddGuestAction {
    pub first_name: String,
    pub last_name: String,
    pub group: Option<String>,
}

impl ActionHandler for AddGuestAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let first = self.first_name.trim();
        if first.is_empty() {
            return Err(ActionError::Skip(SkipReason::FirstNameRequired));
        }
        let group = self
            .group
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .unwrap_or(UNGROUPED);

        let id = reserve_id(&ctx.arrangement.guest_ids());
        let guest = Guest::primary(id, first, self.last_name.trim(), group);
        let description = format!("Add {}", guest.full_name());
        ctx.arrangement.pool.push(guest);
        ctx.grow_tables();
        Ok(description)
    }
}

/// Whether a guest may bring a +1
///
/// Only primaries with numeric ids qualify; companion ids ("5-2") and
/// generated UUIDs never do.
pub fn plus_one_allowed(guest: &Guest) -> bool {
    guest.is_primary() && guest.id.is_numeric()
}

/// Id for the next companion of `primary`
///
/// The n-th ticket holder is `"{primary}-{n}"`, the primary being ticket 1.
/// If that id is taken (a companion was deleted and re-added), the suffix
/// is bumped until free.
pub fn next_companion_id(
    primary: &GuestId,
    companions: usize,
    taken: &HashSet<GuestId>,
) -> GuestId {
    let mut seq = companions + 2;
    loop {
        let candidate = GuestId::new(format!("{}-{}", primary, seq));
        if !taken.contains(&candidate) {
            return candidate;
        }
        seq += 1;
    }
}

/// Add a companion for a primary guest
#[derive(Debug, Clone)]
pub struct AddPlusOneAction {
    pub guest_id: GuestId,
}

impl ActionHandler for AddPlusOneAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let primary = ctx
            .arrangement
            .find_guest(&self.guest_id)
            .ok_or(ActionError::Skip(SkipReason::GuestNotFound))?;
        if !plus_one_allowed(primary) {
            return Err(ActionError::Skip(SkipReason::PlusOneNotAllowed));
        }

        let companions = ctx.arrangement.companions_of(&primary.id);
        let id = next_companion_id(&primary.id, companions, &ctx.arrangement.guest_ids());
        let companion = Guest::companion(
            id,
            primary.first_name.clone(),
            format!("{} +1", primary.last_name),
            primary.group.clone(),
            primary.id.clone(),
        );
        let description = format!("Add +1 for {}", primary.full_name());

        ctx.arrangement.pool.push(companion);
        ctx.grow_tables();
        Ok(description)
    }
}

/// Change a guest's first and last name
#[derive(Debug, Clone)]
pub struct RenameGuestAction {
    pub guest_id: GuestId,
    pub first_name: String,
    pub last_name: String,
}

impl ActionHandler for RenameGuestAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if first.is_empty() {
            return Err(ActionError::Skip(SkipReason::FirstNameRequired));
        }
        let guest = ctx
            .arrangement
            .all_guests_mut()
            .find(|g| g.id == self.guest_id)
            .ok_or(ActionError::Skip(SkipReason::GuestNotFound))?;
        if guest.first_name == first && guest.last_name == last {
            return Err(ActionError::Skip(SkipReason::Unchanged));
        }

        let old = guest.full_name();
        guest.first_name = first.to_string();
        guest.last_name = last.to_string();
        Ok(format!("Rename {} to {}", old, guest.full_name()))
    }
}

/// Assign a group label to several guests, wherever they sit
///
/// An empty label is allowed and shows as "Ungrouped".
#[derive(Debug, Clone)]
pub struct ChangeGroupAction {
    pub guest_ids: Vec<GuestId>,
    pub group: String,
}

impl ActionHandler for ChangeGroupAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        if self.guest_ids.is_empty() {
            return Err(ActionError::Skip(SkipReason::NothingSelected));
        }
        let wanted: HashSet<&GuestId> = self.guest_ids.iter().collect();
        let group = self.group.trim();

        let matched: Vec<&Guest> = ctx
            .arrangement
            .all_guests()
            .filter(|g| wanted.contains(&g.id))
            .collect();
        if matched.is_empty() {
            return Err(ActionError::Skip(SkipReason::GuestNotFound));
        }
        if matched.iter().all(|g| g.group == group) {
            return Err(ActionError::Skip(SkipReason::Unchanged));
        }
        let names: Vec<String> = matched.iter().map(|g| g.full_name()).collect();

        for guest in ctx.arrangement.all_guests_mut() {
            if wanted.contains(&guest.id) {
                guest.group = group.to_string();
            }
        }
        let label = if group.is_empty() { UNGROUPED } else { group };
        Ok(format!("Move {} to group {}", describe_guests(&names), label))
    }
}

/// Delete guests from the unassigned pool
///
/// Seated guests are not touched; they must be unassigned first.
#[derive(Debug, Clone)]
pub struct DeleteGuestsAction {
    pub guest_ids: Vec<GuestId>,
}

impl ActionHandler for DeleteGuestsAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        if self.guest_ids.is_empty() {
            return Err(ActionError::Skip(SkipReason::NothingSelected));
        }
        let wanted: HashSet<&GuestId> = self.guest_ids.iter().collect();
        let names: Vec<String> = ctx
            .arrangement
            .pool
            .iter()
            .filter(|g| wanted.contains(&g.id))
            .map(Guest::full_name)
            .collect();
        if names.is_empty() {
            return Err(ActionError::Skip(SkipReason::GuestNotFound));
        }

        ctx.arrangement.pool.retain(|g| !wanted.contains(&g.id));
        Ok(format!("Delete {}", describe_guests(&names)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::seating::Arrangement;

    fn run(action: &impl ActionHandler, a: &mut Arrangement) -> ActionResult {
        let mut ctx = ActionContext::new(a, 2);
        action.execute(&mut ctx)
    }

    fn skip(reason: SkipReason) -> ActionResult {
        Err(ActionError::Skip(reason))
    }

    #[test]
    fn test_add_guest_defaults_group_and_grows_tables() {
        let mut a = Arrangement::new();
        let action = AddGuestAction {
            first_name: " Jane ".to_string(),
            last_name: "Smith".to_string(),
            group: None,
        };
        assert_eq!(run(&action, &mut a).unwrap(), "Add Jane Smith");
        assert_eq!(a.pool[0].group, UNGROUPED);
        assert_eq!(a.table_count(), 1);

        let unnamed = AddGuestAction {
            first_name: "  ".to_string(),
            last_name: "Smith".to_string(),
            group: None,
        };
        assert_eq!(run(&unnamed, &mut a), skip(SkipReason::FirstNameRequired));
    }

    #[test]
    fn test_plus_one_ids() {
        let mut a = Arrangement::with_tables(1);
        a.pool.push(Guest::primary("5", "Ana", "Ruiz", "Friends"));

        let action = AddPlusOneAction {
            guest_id: "5".into(),
        };
        assert_eq!(run(&action, &mut a).unwrap(), "Add +1 for Ana Ruiz");
        run(&action, &mut a).unwrap();

        let ids: Vec<&str> = a.pool.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "5-2", "5-3"]);
        let companion = &a.pool[1];
        assert_eq!(companion.last_name, "Ruiz +1");
        assert_eq!(companion.group, "Friends");
        assert_eq!(companion.original_guest_id().map(GuestId::as_str), Some("5"));
        // 3 guests at 2 seats per table
        assert_eq!(a.table_count(), 2);

        // Two companions already: ticket count 3, next suffix 4
        assert_eq!(a.companions_of(&"5".into()), 2);
        run(&action, &mut a).unwrap();
        let ids: Vec<&str> = a.pool.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "5-2", "5-3", "5-4"]);
        assert_eq!(a.table_count(), 2);
    }

    #[test]
    fn test_plus_one_id_collision_is_bumped() {
        let taken: HashSet<GuestId> = ["5".into(), "5-3".into()].into_iter().collect();
        assert_eq!(next_companion_id(&"5".into(), 1, &taken).as_str(), "5-4");
        assert_eq!(next_companion_id(&"5".into(), 0, &taken).as_str(), "5-2");
    }

    #[test]
    fn test_plus_one_requires_numeric_primary() {
        let mut a = Arrangement::new();
        a.pool.push(Guest::primary("a1b2-c3", "Bo", "Lee", ""));
        a.pool.push(Guest::companion("7-2", "Cy", "Lee +1", "", "7"));

        let guid = AddPlusOneAction {
            guest_id: "a1b2-c3".into(),
        };
        assert_eq!(run(&guid, &mut a), skip(SkipReason::PlusOneNotAllowed));
        let companion = AddPlusOneAction {
            guest_id: "7-2".into(),
        };
        assert_eq!(run(&companion, &mut a), skip(SkipReason::PlusOneNotAllowed));
        let missing = AddPlusOneAction {
            guest_id: "404".into(),
        };
        assert_eq!(run(&missing, &mut a), skip(SkipReason::GuestNotFound));
    }

    #[test]
    fn test_rename_seated_guest() {
        let mut a = Arrangement::with_tables(1);
        a.tables[0].push(Guest::primary("1", "Jane", "Smith", ""));
        let action = RenameGuestAction {
            guest_id: "1".into(),
            first_name: "Janet".to_string(),
            last_name: "Smith".to_string(),
        };
        assert_eq!(
            run(&action, &mut a).unwrap(),
            "Rename Jane Smith to Janet Smith"
        );
        assert_eq!(a.tables[0][0].first_name, "Janet");
        assert_eq!(run(&action, &mut a), skip(SkipReason::Unchanged));

        let blank = RenameGuestAction {
            guest_id: "1".into(),
            first_name: " ".to_string(),
            last_name: "Smith".to_string(),
        };
        assert_eq!(run(&blank, &mut a), skip(SkipReason::FirstNameRequired));
    }

    #[test]
    fn test_change_group_spans_pool_and_tables() {
        let mut a = Arrangement::with_tables(1);
        a.pool.push(Guest::primary("1", "A", "X", "Old"));
        a.tables[0].push(Guest::primary("2", "B", "Y", "Old"));
        let action = ChangeGroupAction {
            guest_ids: vec!["1".into(), "2".into(), "gone".into()],
            group: "Work".to_string(),
        };
        assert_eq!(run(&action, &mut a).unwrap(), "Move 2 guests to group Work");
        assert!(a.all_guests().all(|g| g.group == "Work"));

        let clear = ChangeGroupAction {
            guest_ids: vec!["1".into()],
            group: String::new(),
        };
        run(&clear, &mut a).unwrap();
        assert_eq!(a.pool[0].display_group(), UNGROUPED);
    }

    #[test]
    fn test_delete_only_touches_pool() {
        let mut a = Arrangement::with_tables(1);
        a.pool.push(Guest::primary("1", "A", "X", ""));
        a.tables[0].push(Guest::primary("2", "B", "Y", ""));

        let seated = DeleteGuestsAction {
            guest_ids: vec!["2".into()],
        };
        assert_eq!(run(&seated, &mut a), skip(SkipReason::GuestNotFound));
        assert_eq!(a.tables[0].len(), 1);

        let both = DeleteGuestsAction {
            guest_ids: vec!["1".into(), "2".into()],
        };
        assert_eq!(run(&both, &mut a).unwrap(), "Delete A X");
        assert!(a.pool.is_empty());
        assert_eq!(a.tables[0].len(), 1);
    }
}
