use serde::{Deserialize, Serialize};

/// A skill the user declared on their profile.
///
/// `level` is free text ("Beginner".."Expert") and is carried for display only;
/// matching looks at `name` alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub level: String,
}

impl Skill {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            level: level.into(),
        }
    }
}

/// The two disjoint skill collections of one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSkills {
    #[serde(default)]
    pub hard: Vec<Skill>,
    #[serde(default)]
    pub soft: Vec<Skill>,
}

impl UserSkills {
    pub fn new(hard: Vec<Skill>, soft: Vec<Skill>) -> Self {
        Self { hard, soft }
    }

    /// Number of declared skills, blank names included.
    pub fn declared_count(&self) -> usize {
        self.hard.len() + self.soft.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hard
            .iter()
            .chain(self.soft.iter())
            .map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_deserializes_without_id_or_level() {
        let skill: Skill = serde_json::from_str(r#"{"name": "Rust"}"#).unwrap();
        assert_eq!(skill.name, "Rust");
        assert!(skill.id.is_none());
        assert!(skill.level.is_empty());
    }

    #[test]
    fn test_names_chain_hard_then_soft() {
        let skills = UserSkills::new(
            vec![Skill::new("Rust", "Expert")],
            vec![Skill::new("Teamwork", "Intermediate")],
        );
        let names: Vec<&str> = skills.names().collect();
        assert_eq!(names, vec!["Rust", "Teamwork"]);
        assert_eq!(skills.declared_count(), 2);
    }
}
