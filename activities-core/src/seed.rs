//! The activity catalog the school starts each term with.

use crate::activity::Activity;

/// Returns the nine Mergington High School activities in catalog order.
#[must_use]
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Basketball",
            "Team-based basketball games and training",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
        ),
        Activity::new(
            "Tennis",
            "Individual and doubles tennis matches",
            "Mondays and Wednesdays, 4:00 PM - 5:00 PM",
            12,
        ),
        Activity::new(
            "Drama Club",
            "Theater performances and acting workshops",
            "Wednesdays, 3:30 PM - 5:00 PM",
            25,
        ),
        Activity::new(
            "Art Class",
            "Painting, drawing, and sculpture techniques",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
        ),
        Activity::new(
            "Debate Team",
            "Competitive debate and public speaking",
            "Tuesdays, 4:00 PM - 5:30 PM",
            16,
        ),
        Activity::new(
            "Science Club",
            "Hands-on science experiments and research",
            "Fridays, 3:30 PM - 4:30 PM",
            20,
        ),
    ]
}
