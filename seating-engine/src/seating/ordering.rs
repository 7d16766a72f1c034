//! Display ordering for guests
//!
//! Exports depend on this order, so it must stay stable: companions sort
//! right after their primary guest, in ticket order.

use shared::models::Guest;
use std::collections::BTreeMap;

/// Sort key for one guest
///
/// - primary: `"{id}-000"`
/// - companion: `"{originalGuestId}-{seq:03}"`, `seq` being the trailing
///   numeric segment of the companion's own id (0 when not numeric)
pub fn sort_key(guest: &Guest) -> String {
    match guest.original_guest_id() {
        Some(original) => format!("{}-{:03}", original, guest.id.sequence_number()),
        None => format!("{}-000", guest.id),
    }
}

/// Sort guests in place by [`sort_key`]
pub fn sort_guests(guests: &mut [Guest]) {
    guests.sort_by_cached_key(sort_key);
}

/// Sorted copy of `guests`
pub fn sorted(guests: &[Guest]) -> Vec<Guest> {
    let mut out = guests.to_vec();
    sort_guests(&mut out);
    out
}

/// Bucket guests by display group
///
/// Group names iterate in ascending order; guests without a group land in
/// "Ungrouped". Each bucket is sorted by [`sort_key`].
pub fn group_guests(guests: &[Guest]) -> BTreeMap<String, Vec<Guest>> {
    let mut groups: BTreeMap<String, Vec<Guest>> = BTreeMap::new();
    for guest in guests {
        groups
            .entry(guest.display_group().to_string())
            .or_default()
            .push(guest.clone());
    }
    for members in groups.values_mut() {
        sort_guests(members);
    }
    groups
}
