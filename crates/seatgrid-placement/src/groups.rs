//! Group normalization — validation and largest-first ordering.

use tracing::debug;

use seat_core::{GroupId, GroupInput};

use crate::error::{AllocError, AllocResult};

/// A validated group ready for allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub size: u32,
}

impl Group {
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>, size: u32) -> Self {
        Self {
            id: GroupId::new(category, subcategory),
            size,
        }
    }
}

/// What to do with an entry that has a blank label or a non-positive size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePolicy {
    /// Fail with [`AllocError::InvalidGroup`].
    #[default]
    Reject,
    /// Drop the entry.
    Filter,
}

fn check(input: &GroupInput) -> Result<u32, String> {
    if input.category.trim().is_empty() || input.subcategory.trim().is_empty() {
        return Err("category and subcategory must not be empty".to_string());
    }
    if input.size <= 0 {
        return Err(format!("size must be positive, got {}", input.size));
    }
    u32::try_from(input.size).map_err(|_| format!("size {} is too large", input.size))
}

/// Validate `raw` and order it by size, largest first. Ties keep input order.
pub fn normalize_groups(raw: &[GroupInput], policy: NormalizePolicy) -> AllocResult<Vec<Group>> {
    let mut groups = Vec::with_capacity(raw.len());

    for (index, input) in raw.iter().enumerate() {
        match check(input) {
            Ok(size) => groups.push(Group { id: input.id(), size }),
            Err(reason) => match policy {
                NormalizePolicy::Reject => return Err(AllocError::InvalidGroup { index, reason }),
                NormalizePolicy::Filter => {
                    debug!(index, group = %input.id(), %reason, "dropping invalid group");
                }
            },
        }
    }

    groups.sort_by(|a, b| b.size.cmp(&a.size));
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_largest_first_with_stable_ties() {
        let raw = vec![
            GroupInput::new("A", "1", 20),
            GroupInput::new("B", "1", 45),
            GroupInput::new("C", "1", 20),
        ];
        let groups = normalize_groups(&raw, NormalizePolicy::Reject).unwrap();
        let labels: Vec<String> = groups.iter().map(|g| g.id.to_string()).collect();
        assert_eq!(labels, ["B-1", "A-1", "C-1"]);
    }

    #[test]
    fn reject_policy_reports_first_bad_entry() {
        let raw = vec![
            GroupInput::new("A", "1", 20),
            GroupInput::new("B", "1", 0),
            GroupInput::new("", "1", 5),
        ];
        let err = normalize_groups(&raw, NormalizePolicy::Reject).unwrap_err();
        assert!(matches!(err, AllocError::InvalidGroup { index: 1, .. }));
    }

    #[test]
    fn filter_policy_drops_bad_entries() {
        let raw = vec![
            GroupInput::new("A", "1", 20),
            GroupInput::new("B", "1", -3),
            GroupInput::new("C", "  ", 5),
            GroupInput::new("D", "2", 7),
        ];
        let groups = normalize_groups(&raw, NormalizePolicy::Filter).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].id, GroupId::new("D", "2"));
    }

    #[test]
    fn oversized_group_is_invalid() {
        let raw = vec![GroupInput::new("A", "1", i64::from(u32::MAX) + 1)];
        assert!(normalize_groups(&raw, NormalizePolicy::Reject).is_err());
    }
}
