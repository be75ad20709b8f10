use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// 课外活动
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// 活动名称（唯一标识符）
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// 容量上限，默认仅作展示
    pub max_participants: u32,
    /// 已报名学生邮箱，按报名顺序排列
    pub participants: Vec<String>,
}

/// `GET /activities` 中每个活动的 JSON 值（名称作为外层 key）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Result<Self, SeedError> {
        let name = name.into();

        for (i, email) in details.participants.iter().enumerate() {
            if details.participants[..i].contains(email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name,
                    email: email.clone(),
                });
            }
        }

        Ok(Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        })
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    pub fn details(&self) -> ActivityDetails {
        ActivityDetails {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }
}
