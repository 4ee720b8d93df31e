//! Workspace membership: roles, permission predicates, and dedup of the
//! membership list fetched from the backend (which can return duplicates
//! when a user is re-invited to a workspace they already belong to).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role within a workspace. Ordered: lower discriminant = stronger role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Owner = 0,
    Admin = 1,
    Member = 2,
    Viewer = 3,
}

impl Role {
    pub fn can_manage_members(self) -> bool {
        matches!(self, Role::Owner | Role::Admin)
    }

    pub fn can_edit_tasks(self) -> bool {
        !matches!(self, Role::Viewer)
    }

    /// Deleting the workspace itself is owner-only.
    pub fn can_delete_workspace(self) -> bool {
        matches!(self, Role::Owner)
    }

    pub fn can_view(self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub workspace_id: String,
    pub user_id: String,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

impl Membership {
    pub fn new(
        workspace_id: impl Into<String>,
        user_id: impl Into<String>,
        role: Role,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            user_id: user_id.into(),
            role,
            joined_at,
        }
    }
}

/// Collapse duplicate memberships to one entry per workspace.
///
/// Tiebreak: keep the strongest role; among equal roles, the earliest
/// `joined_at` wins. Output preserves first-occurrence order of
/// workspace ids.
pub fn dedup_memberships(memberships: Vec<Membership>) -> Vec<Membership> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, Membership> = HashMap::new();

    for m in memberships {
        match best.get(&m.workspace_id) {
            None => {
                order.push(m.workspace_id.clone());
                best.insert(m.workspace_id.clone(), m);
            }
            Some(current) => {
                let wins = m.role < current.role
                    || (m.role == current.role && m.joined_at < current.joined_at);
                if wins {
                    best.insert(m.workspace_id.clone(), m);
                }
            }
        }
    }

    order.into_iter().filter_map(|id| best.remove(&id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_role_rule_table() {
        assert!(Role::Owner.can_manage_members());
        assert!(Role::Admin.can_manage_members());
        assert!(!Role::Member.can_manage_members());
        assert!(!Role::Viewer.can_manage_members());

        assert!(Role::Member.can_edit_tasks());
        assert!(!Role::Viewer.can_edit_tasks());

        assert!(Role::Owner.can_delete_workspace());
        assert!(!Role::Admin.can_delete_workspace());

        assert!(Role::Viewer.can_view());
    }

    #[test]
    fn test_dedup_keeps_strongest_role() {
        let ms = vec![
            Membership::new("w1", "u1", Role::Member, at(1)),
            Membership::new("w1", "u1", Role::Admin, at(5)),
        ];
        let out = dedup_memberships(ms);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].role, Role::Admin);
    }

    #[test]
    fn test_dedup_equal_roles_keeps_earliest_join() {
        let ms = vec![
            Membership::new("w1", "u1", Role::Member, at(9)),
            Membership::new("w1", "u1", Role::Member, at(2)),
        ];
        let out = dedup_memberships(ms);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].joined_at, at(2));
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let ms = vec![
            Membership::new("w2", "u1", Role::Viewer, at(1)),
            Membership::new("w1", "u1", Role::Owner, at(2)),
            Membership::new("w2", "u1", Role::Owner, at(3)),
        ];
        let out = dedup_memberships(ms);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].workspace_id, "w2");
        assert_eq!(out[0].role, Role::Owner);
        assert_eq!(out[1].workspace_id, "w1");
    }
}
