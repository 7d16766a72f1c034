//! Drag-and-drop payloads
//!
//! A drag carries either one guest (tagged with the table it was dragged
//! from, absent when dragged from the pool) or a multi-drag envelope holding
//! every selected guest.

use crate::models::Guest;
use serde::{Deserialize, Serialize};

/// Id written into the multi-drag envelope in place of a guest id
pub const MULTI_DRAG_ID: &str = "multi-drag";

/// A guest in flight, tagged with its source table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggedGuest {
    #[serde(flatten)]
    pub guest: Guest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_table_index: Option<usize>,
}

impl DraggedGuest {
    pub fn from_pool(guest: Guest) -> Self {
        Self {
            guest,
            from_table_index: None,
        }
    }

    pub fn from_table(guest: Guest, table_index: usize) -> Self {
        Self {
            guest,
            from_table_index: Some(table_index),
        }
    }
}

/// Multi-guest drag envelope
///
/// `id`, `first_name` and `last_name` mimic a guest so list widgets can
/// render the drag preview ("3 guests").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDrag {
    pub is_multi_drag: bool,
    pub selected_guests: Vec<DraggedGuest>,
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl MultiDrag {
    pub fn new(selected_guests: Vec<DraggedGuest>) -> Self {
        Self {
            is_multi_drag: true,
            first_name: format!("{} guests", selected_guests.len()),
            last_name: String::new(),
            id: MULTI_DRAG_ID.to_string(),
            selected_guests,
        }
    }
}

/// Unit consumed by move-to-table / move-to-pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DragPayload {
    Multi(MultiDrag),
    Single(DraggedGuest),
}

impl DragPayload {
    pub fn single(guest: Guest, from_table_index: Option<usize>) -> Self {
        DragPayload::Single(DraggedGuest {
            guest,
            from_table_index,
        })
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, DragPayload::Multi(_))
    }

    /// Guests carried by this payload, in drag order
    pub fn guests(&self) -> Vec<&DraggedGuest> {
        match self {
            DragPayload::Multi(multi) => multi.selected_guests.iter().collect(),
            DragPayload::Single(single) => vec![single],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DragPayload::Multi(multi) => multi.selected_guests.len(),
            DragPayload::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
