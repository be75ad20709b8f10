use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ApiError;
use crate::models::Activity;

/// 进程内的活动注册表，按装载顺序保存
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: Vec<Activity>,
}

impl ActivityRegistry {
    /// 活动名称的唯一性由 [`crate::models::SeedSet::into_activities`] 保证
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn list(&self) -> &[Activity] {
        &self.activities
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Activity, ApiError> {
        self.activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(ApiError::ActivityNotFound)
    }

    pub fn sign_up(
        &mut self,
        activity_name: &str,
        email: &str,
        enforce_capacity: bool,
    ) -> Result<String, ApiError> {
        let activity = self.get_mut(activity_name)?;

        if activity.has_participant(email) {
            return Err(ApiError::AlreadySignedUp);
        }
        if enforce_capacity && activity.is_full() {
            return Err(ApiError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<String, ApiError> {
        let activity = self.get_mut(activity_name)?;

        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ApiError::ParticipantNotFound)?;

        activity.participants.remove(idx);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

impl Serialize for ActivityRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details())?;
        }
        map.end()
    }
}
