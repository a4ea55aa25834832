use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::errors::{RegistryError, RegistryResult};
use crate::models::Activity;
use crate::seed::seed_activities;

/// In-memory registry of activities keyed by name.
///
/// Clones share the same underlying map, so one registry built at startup
/// can be handed to every request handler. The set of activity names is
/// fixed once constructed; only participant lists change.
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: Arc<DashMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn from_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            activities: Arc::new(activities.into_iter().collect()),
        }
    }

    /// Registry populated with the school's activity catalogue.
    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of every activity, ordered by name.
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        let snapshot: BTreeMap<String, Activity> = self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        debug!(count = snapshot.len(), "Listed activities");
        snapshot
    }

    pub fn get_activity(&self, name: &str) -> RegistryResult<Activity> {
        self.activities
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))
    }

    /// Appends `email` to the activity's participants.
    ///
    /// Signing up twice for the same activity is rejected and leaves the
    /// roster untouched.
    pub fn signup(&self, activity_name: &str, email: &str) -> RegistryResult<()> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity_name.to_string()))?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadyRegistered {
                email: email.to_string(),
                activity: activity_name.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        info!(activity = %activity_name, %email, "Participant signed up");
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> RegistryResult<()> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotRegistered {
                email: email.to_string(),
                activity: activity_name.to_string(),
            })?;

        activity.participants.remove(position);
        info!(activity = %activity_name, %email, "Participant unregistered");
        Ok(())
    }

    /// Removes `email` from every activity it appears in and returns the
    /// names of those activities, sorted. Never fails.
    pub fn unregister_anywhere(&self, email: &str) -> Vec<String> {
        let mut removed_from = Vec::new();

        for mut entry in self.activities.iter_mut() {
            let before = entry.participants.len();
            entry.participants.retain(|p| p != email);
            if entry.participants.len() != before {
                removed_from.push(entry.key().clone());
            }
        }

        removed_from.sort();
        info!(%email, activities = ?removed_from, "Participant removed from all activities");
        removed_from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ActivityRegistry {
        ActivityRegistry::from_activities([
            (
                "Chess Club".to_string(),
                Activity::new("Chess", "Fridays", 12).with_participants(["michael@mergington.edu"]),
            ),
            (
                "Art Club".to_string(),
                Activity::new("Painting", "Thursdays", 15),
            ),
        ])
    }

    #[test]
    fn test_clones_share_state() {
        let registry = registry();
        let handle = registry.clone();

        handle.signup("Art Club", "new@mergington.edu").unwrap();

        assert!(registry
            .get_activity("Art Club")
            .unwrap()
            .has_participant("new@mergington.edu"));
    }

    #[test]
    fn test_list_is_ordered_by_name() {
        let names: Vec<String> = registry().list_activities().into_keys().collect();
        assert_eq!(names, vec!["Art Club", "Chess Club"]);
    }

    #[test]
    fn test_unregister_keeps_remaining_order() {
        let registry = registry();
        registry.signup("Chess Club", "a@mergington.edu").unwrap();
        registry.signup("Chess Club", "b@mergington.edu").unwrap();

        registry.unregister("Chess Club", "a@mergington.edu").unwrap();

        assert_eq!(
            registry.get_activity("Chess Club").unwrap().participants,
            vec!["michael@mergington.edu", "b@mergington.edu"]
        );
    }

    #[test]
    fn test_emails_match_exactly() {
        let registry = registry();
        let result = registry.unregister("Chess Club", "Michael@mergington.edu");

        assert_eq!(
            result,
            Err(RegistryError::NotRegistered {
                email: "Michael@mergington.edu".to_string(),
                activity: "Chess Club".to_string(),
            })
        );
    }
}
