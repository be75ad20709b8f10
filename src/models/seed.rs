use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::SeedError;
use crate::models::{Activity, ActivityDetails};

/// 启动时装载的活动列表，保留文件中的顺序
#[derive(Debug, Default)]
pub struct SeedSet(pub Vec<(String, ActivityDetails)>);

impl<'de> Deserialize<'de> for SeedSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeedVisitor;

        impl<'de> Visitor<'de> for SeedVisitor {
            type Value = SeedSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SeedSet, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    entries.push((name, details));
                }
                Ok(SeedSet(entries))
            }
        }

        deserializer.deserialize_map(SeedVisitor)
    }
}

impl SeedSet {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// 校验并转换为活动记录：名称唯一，参与者不重复
    pub fn into_activities(self) -> Result<Vec<Activity>, SeedError> {
        let mut activities: Vec<Activity> = Vec::with_capacity(self.0.len());
        for (name, details) in self.0 {
            if activities.iter().any(|a| a.name == name) {
                return Err(SeedError::DuplicateActivity(name));
            }
            activities.push(Activity::new(name, details)?);
        }
        Ok(activities)
    }
}

fn seed(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: [&str; 2],
) -> (String, ActivityDetails) {
    (
        name.to_string(),
        ActivityDetails {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    )
}

/// 内置的默认活动
pub fn default_seed() -> SeedSet {
    SeedSet(vec![
        seed(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        seed(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        seed(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
        seed(
            "Soccer Team",
            "Competitive soccer team practices and matches",
            "Mondays, Wednesdays, 4:00 PM - 6:00 PM",
            22,
            ["liam@mergington.edu", "noah@mergington.edu"],
        ),
        seed(
            "Track and Field",
            "Sprint, distance, and field event training",
            "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
            40,
            ["ava@mergington.edu", "isabella@mergington.edu"],
        ),
        seed(
            "Art Club",
            "Explore drawing, painting, and mixed media projects",
            "Wednesdays, 3:30 PM - 5:00 PM",
            25,
            ["mia@mergington.edu", "charlotte@mergington.edu"],
        ),
        seed(
            "Drama Club",
            "Acting workshops and school play productions",
            "Fridays, 4:00 PM - 6:00 PM",
            30,
            ["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        seed(
            "Debate Team",
            "Practice arguing cases, public speaking, and tournaments",
            "Mondays, 3:30 PM - 5:00 PM",
            18,
            ["evelyn@mergington.edu", "elijah@mergington.edu"],
        ),
        seed(
            "Science Club",
            "Hands-on experiments, projects, and science fairs",
            "Thursdays, 3:30 PM - 5:00 PM",
            24,
            ["lucas@mergington.edu", "mia2@mergington.edu"],
        ),
    ])
}
