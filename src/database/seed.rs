use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;

use crate::error::ConfigError;
use crate::model::activity::{Activity, ActivitySeedFile};

/// The activities on offer when no seed file is configured
pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        Activity::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        Activity::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        Activity::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

/// Reads `[[activity]]` tables from a TOML file
pub fn load_activities(path: &Path) -> Result<Vec<Activity>, ConfigError> {
    let contents = read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let seed = toml::from_str::<ActivitySeedFile>(&contents).map_err(|source| {
        ConfigError::Parse {
            path: path.display().to_string(),
            source,
        }
    })?;

    validate(&seed.activities)?;
    Ok(seed.activities)
}

fn validate(activities: &[Activity]) -> Result<(), ConfigError> {
    if activities.is_empty() {
        return Err(ConfigError::invalid("activity", "seed file lists no activities"));
    }

    let mut names = HashSet::new();
    for activity in activities {
        if !names.insert(activity.name.as_str()) {
            return Err(ConfigError::invalid(
                "activity.name",
                format!("'{}' appears more than once", activity.name),
            ));
        }

        if activity.max_participants == 0 {
            return Err(ConfigError::invalid(
                "activity.max_participants",
                format!("'{}' must allow at least one participant", activity.name),
            ));
        }

        let mut emails = HashSet::new();
        if let Some(dup) = activity.participants.iter().find(|p| !emails.insert(p.as_str())) {
            return Err(ConfigError::invalid(
                "activity.participants",
                format!("'{dup}' is listed twice in '{}'", activity.name),
            ));
        }
    }

    Ok(())
}
