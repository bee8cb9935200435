//! Built-in activity catalog and role list.

/// Role recorded when the user does not pick one.
pub const DEFAULT_ROLE: &str = "Pre-Sales";

/// Activities a user can log time against.
pub const DEFAULT_ACTIVITIES: [&str; 8] = [
    "Solution Innovation and Improvement",
    "Client and Partner Engagement",
    "Solution Design and Architecture",
    "Proposal Support",
    "Solution Documentation",
    "Internal Meetings",
    "Training and Development",
    "Administrative Tasks",
];

pub fn default_activities() -> Vec<String> {
    DEFAULT_ACTIVITIES.iter().map(|a| a.to_string()).collect()
}

pub fn default_roles() -> Vec<String> {
    vec![DEFAULT_ROLE.to_string()]
}

/// Case-insensitive lookup returning the catalog spelling.
pub fn resolve<'a>(catalog: &'a [String], name: &str) -> Option<&'a str> {
    let needle = name.trim();
    catalog
        .iter()
        .find(|entry| entry.eq_ignore_ascii_case(needle))
        .map(String::as_str)
}
