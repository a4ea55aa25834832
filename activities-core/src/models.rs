use serde::{Deserialize, Serialize};

/// An extracurricular offering and its roster.
///
/// The activity name is not stored here; it is the key the registry files
/// the activity under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>, // signup order, no duplicates
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            let email = email.into();
            if !self.has_participant(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining places, never below zero. Capacity is informational only.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_participants_skips_duplicates() {
        let activity = Activity::new("Board games", "Mondays", 4)
            .with_participants(["a@example.com", "b@example.com", "a@example.com"]);

        assert_eq!(activity.participants, vec!["a@example.com", "b@example.com"]);
        assert!(activity.has_participant("b@example.com"));
        assert!(!activity.has_participant("c@example.com"));
    }

    #[test]
    fn test_spots_left_saturates() {
        let activity = Activity::new("Tiny", "Never", 1)
            .with_participants(["a@example.com", "b@example.com"]);
        assert_eq!(activity.spots_left(), 0);

        let roomy = Activity::new("Roomy", "Always", 10).with_participants(["a@example.com"]);
        assert_eq!(roomy.spots_left(), 9);
    }

    #[test]
    fn test_serialized_shape() {
        let activity = Activity::new("Learn chess", "Fridays", 12)
            .with_participants(["michael@mergington.edu"]);

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "Learn chess",
                "schedule": "Fridays",
                "max_participants": 12,
                "participants": ["michael@mergington.edu"]
            })
        );
    }
}
