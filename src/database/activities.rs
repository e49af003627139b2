use tracing::{info, warn};

use crate::error::StoreError;
use crate::model::activity::{Activity, ActivityListing};

/// The fixed set of activities and who is signed up for each
#[derive(Debug, Clone)]
pub struct ActivityRegistry {
    activities: Vec<Activity>,
    enforce_capacity: bool,
}

impl ActivityRegistry {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            enforce_capacity: false,
        }
    }

    /// Reject signups once an activity reaches `max_participants`.
    /// Off by default, capacity is otherwise only informational.
    pub fn with_capacity_enforced(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn list_all(&self) -> ActivityListing {
        ActivityListing(self.activities.clone())
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn sign_up(&mut self, activity_name: &str, email: &str) -> Result<String, StoreError> {
        let enforce_capacity = self.enforce_capacity;
        let activity = self.get_mut(activity_name)?;

        if activity.participants.iter().any(|p| p == email) {
            warn!("{email} is already signed up for {activity_name}");
            return Err(StoreError::AlreadyRegistered);
        }

        if enforce_capacity && activity.is_full() {
            warn!("{activity_name} is full, rejecting {email}");
            return Err(StoreError::ActivityFull);
        }

        activity.participants.push(email.to_owned());
        info!("Signed up {email} for {activity_name}");
        Ok(format!("Signed up {email} for {activity_name}"))
    }

    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<String, StoreError> {
        let activity = self.get_mut(activity_name)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            warn!("{email} is not signed up for {activity_name}");
            return Err(StoreError::NotRegistered);
        };

        activity.participants.remove(position);
        info!("Unregistered {email} from {activity_name}");
        Ok(format!("Unregistered {email} from {activity_name}"))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Activity, StoreError> {
        self.activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| {
                warn!("Unknown activity {name}");
                StoreError::ActivityNotFound
            })
    }
}
