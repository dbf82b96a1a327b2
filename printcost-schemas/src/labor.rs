use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One role on the press crew and its monthly base wage, before payroll burden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub role: String,
    pub monthly_wage: f64,
}

/// The crew assigned to an order, keyed by role name.
///
/// Roles are unique; inserting a role that already exists replaces its wage.
/// On disk a roster is a list of [`CrewMember`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CrewMember>", into = "Vec<CrewMember>")]
pub struct CrewRoster {
    wages: BTreeMap<String, f64>,
}

impl CrewRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, role: impl Into<String>, monthly_wage: f64) -> Self {
        self.insert(role, monthly_wage);
        self
    }

    pub fn insert(&mut self, role: impl Into<String>, monthly_wage: f64) -> Option<f64> {
        self.wages.insert(role.into(), monthly_wage)
    }

    pub fn wage(&self, role: &str) -> Option<f64> {
        self.wages.get(role).copied()
    }

    pub fn total_wages(&self) -> f64 {
        self.wages.values().sum()
    }

    pub fn len(&self) -> usize {
        self.wages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.wages.iter().map(|(role, wage)| (role.as_str(), *wage))
    }
}

impl From<Vec<CrewMember>> for CrewRoster {
    fn from(members: Vec<CrewMember>) -> Self {
        members.into_iter().collect()
    }
}

impl From<CrewRoster> for Vec<CrewMember> {
    fn from(roster: CrewRoster) -> Self {
        roster
            .wages
            .into_iter()
            .map(|(role, monthly_wage)| CrewMember { role, monthly_wage })
            .collect()
    }
}

impl FromIterator<CrewMember> for CrewRoster {
    fn from_iter<I: IntoIterator<Item = CrewMember>>(iter: I) -> Self {
        let mut roster = CrewRoster::new();
        for member in iter {
            roster.insert(member.role, member.monthly_wage);
        }
        roster
    }
}
