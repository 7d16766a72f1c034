//! Guest Model

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display bucket for guests without a group label
pub const UNGROUPED: &str = "Ungrouped";

/// Opaque guest identifier
///
/// Legacy documents store integer ids, newer ones store GUID strings.
/// Both are accepted on input; the id is always written back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuestId(String);

impl GuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id reads as a finite number (legacy integer-id scheme)
    ///
    /// Only such ids are eligible for "+1" companions.
    pub fn is_numeric(&self) -> bool {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return false;
        }
        trimmed.parse::<f64>().is_ok_and(f64::is_finite)
    }

    /// Trailing `-`-separated segment parsed as an integer, 0 when not numeric
    pub fn sequence_number(&self) -> u64 {
        self.0
            .rsplit('-')
            .next()
            .and_then(|last| last.parse::<u64>().ok())
            .unwrap_or(0)
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GuestId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GuestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for GuestId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GuestId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => GuestId(s),
            RawId::Int(n) => GuestId(n.to_string()),
            RawId::Float(n) => GuestId(n.to_string()),
        })
    }
}

/// Companion linkage of a guest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuestLink {
    /// The original invitee
    #[default]
    Primary,
    /// A "+N" guest attending with the referenced primary guest
    Companion { original_guest_id: GuestId },
}

/// Guest entity
///
/// Serialized in the flat camelCase shape the browser and the persisted
/// documents use: `originalGuestId` is present only on companions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GuestRecord", into = "GuestRecord")]
pub struct Guest {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    /// Free-text group label; empty is allowed and displayed as "Ungrouped"
    pub group: String,
    pub link: GuestLink,
}

impl Guest {
    /// Create a primary guest
    pub fn primary(
        id: impl Into<GuestId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            group: group.into(),
            link: GuestLink::Primary,
        }
    }

    /// Create a companion guest linked to `original_guest_id`
    pub fn companion(
        id: impl Into<GuestId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        group: impl Into<String>,
        original_guest_id: impl Into<GuestId>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            group: group.into(),
            link: GuestLink::Companion {
                original_guest_id: original_guest_id.into(),
            },
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self.link, GuestLink::Primary)
    }

    pub fn is_companion(&self) -> bool {
        matches!(self.link, GuestLink::Companion { .. })
    }

    /// Id of the primary guest this companion belongs to
    pub fn original_guest_id(&self) -> Option<&GuestId> {
        match &self.link {
            GuestLink::Primary => None,
            GuestLink::Companion { original_guest_id } => Some(original_guest_id),
        }
    }

    /// "First Last" display name
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// Group label used for display and grouping
    pub fn display_group(&self) -> &str {
        if self.group.trim().is_empty() {
            UNGROUPED
        } else {
            &self.group
        }
    }
}

/// Flat wire shape of a guest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuestRecord {
    id: GuestId,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default = "default_group")]
    group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original_guest_id: Option<GuestId>,
}

fn default_group() -> String {
    UNGROUPED.to_string()
}

impl From<GuestRecord> for Guest {
    fn from(record: GuestRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            group: record.group,
            link: match record.original_guest_id {
                Some(original_guest_id) => GuestLink::Companion { original_guest_id },
                None => GuestLink::Primary,
            },
        }
    }
}

impl From<Guest> for GuestRecord {
    fn from(guest: Guest) -> Self {
        let original_guest_id = match guest.link {
            GuestLink::Primary => None,
            GuestLink::Companion { original_guest_id } => Some(original_guest_id),
        };
        Self {
            id: guest.id,
            first_name: guest.first_name,
            last_name: guest.last_name,
            group: guest.group,
            original_guest_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids() {
        assert!(GuestId::from("12").is_numeric());
        assert!(GuestId::from(" 7 ").is_numeric());
        assert!(GuestId::from("1.5").is_numeric());
        assert!(!GuestId::from("g1").is_numeric());
        assert!(!GuestId::from("12-2").is_numeric());
        assert!(!GuestId::from("").is_numeric());
        assert!(!GuestId::from("inf").is_numeric());
        assert!(!GuestId::from("3f2c1a9e-6b7d-4c1e-9a55-0d2b8e4f1a77").is_numeric());
    }

    #[test]
    fn test_sequence_number() {
        assert_eq!(GuestId::from("g1-2").sequence_number(), 2);
        assert_eq!(GuestId::from("15-12").sequence_number(), 12);
        assert_eq!(GuestId::from("g1").sequence_number(), 0);
        assert_eq!(GuestId::from("a-b-x").sequence_number(), 0);
    }

    #[test]
    fn test_wire_shape() {
        let companion = Guest::companion("5-2", "Jane", "Smith +1", "Family", "5");
        let json = serde_json::to_value(&companion).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["originalGuestId"], "5");

        let primary = Guest::primary("5", "Jane", "Smith", "Family");
        let json = serde_json::to_value(&primary).unwrap();
        assert!(json.get("originalGuestId").is_none());
    }

    #[test]
    fn test_legacy_numeric_id_and_missing_group() {
        let guest: Guest =
            serde_json::from_str(r#"{"id": 42, "firstName": "Ana", "lastName": "Ruiz"}"#).unwrap();
        assert_eq!(guest.id.as_str(), "42");
        assert_eq!(guest.group, UNGROUPED);
        assert!(guest.is_primary());
    }

    #[test]
    fn test_display_group() {
        let guest = Guest::primary("1", "Ana", "Ruiz", "");
        assert_eq!(guest.display_group(), UNGROUPED);
        assert_eq!(guest.full_name(), "Ana Ruiz");
    }
}
