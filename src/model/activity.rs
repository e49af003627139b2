use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Used as the key of the listing, so it is not repeated in the body
    #[serde(skip_serializing)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

/// Snapshot of every activity, serialized as an object keyed by activity name.
///
/// Keys keep the order the activities were seeded in.
#[derive(Debug, Clone)]
pub struct ActivityListing(pub Vec<Activity>);

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|a| (&a.name, a)))
    }
}

/// Layout of an activities seed file: a list of `[[activity]]` tables
#[derive(Debug, Deserialize)]
pub struct ActivitySeedFile {
    #[serde(rename = "activity", default)]
    pub activities: Vec<Activity>,
}
