//! Additional skills

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseError;

/// One of the fixed additional skills offered as checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    JavaScript,
    Css,
    Python,
}

impl Skill {
    /// All skills in checkbox order.
    pub const ALL: [Skill; 3] = [Skill::JavaScript, Skill::Css, Skill::Python];

    /// The display name, also used as the serialized key.
    pub fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Css => "CSS",
            Self::Python => "Python",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skill {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.name() == s)
            .ok_or_else(|| ParseError::UnknownSkill(s.to_string()))
    }
}

/// Selection state of every [`Skill`].
///
/// The skill list is closed, so each skill has its own flag rather than an
/// entry in an open-ended map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(rename = "JavaScript")]
    javascript: bool,
    #[serde(rename = "CSS")]
    css: bool,
    #[serde(rename = "Python")]
    python: bool,
}

impl SkillSet {
    /// Creates a set with no skill selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set with the given skills selected.
    pub fn with(skills: impl IntoIterator<Item = Skill>) -> Self {
        let mut set = Self::new();
        for skill in skills {
            set.set(skill, true);
        }
        set
    }

    /// Returns `true` if `skill` is selected.
    pub fn is_selected(&self, skill: Skill) -> bool {
        match skill {
            Skill::JavaScript => self.javascript,
            Skill::Css => self.css,
            Skill::Python => self.python,
        }
    }

    /// Selects or deselects `skill`.
    pub fn set(&mut self, skill: Skill, selected: bool) {
        *self.flag_mut(skill) = selected;
    }

    /// Flips `skill` and returns its new state.
    pub fn toggle(&mut self, skill: Skill) -> bool {
        let flag = self.flag_mut(skill);
        *flag = !*flag;
        *flag
    }

    /// Returns `true` if at least one skill is selected.
    pub fn any(&self) -> bool {
        self.javascript || self.css || self.python
    }

    /// Iterates over every skill and its state, in checkbox order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, bool)> + '_ {
        Skill::ALL.into_iter().map(|skill| (skill, self.is_selected(skill)))
    }

    /// Iterates over the selected skills.
    pub fn selected(&self) -> impl Iterator<Item = Skill> + '_ {
        self.iter()
            .filter_map(|(skill, selected)| selected.then_some(skill))
    }

    fn flag_mut(&mut self, skill: Skill) -> &mut bool {
        match skill {
            Skill::JavaScript => &mut self.javascript,
            Skill::Css => &mut self.css,
            Skill::Python => &mut self.python,
        }
    }
}
