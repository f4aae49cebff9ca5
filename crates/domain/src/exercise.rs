use std::{convert::Infallible, str::FromStr};

use derive_more::{AsRef, Deref, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub target: String,
    pub equipment: String,
    pub body_part: String,
    pub gif_url: String,
    pub instructions: Vec<String>,
    pub secondary_muscles: Vec<String>,
}

impl Exercise {
    /// Name with its first letter in upper case, as shown on cards and titles.
    #[must_use]
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl FromStr for ExerciseID {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "")]
    #[case("chest", "Chest")]
    #[case("3/4 sit-up", "3/4 sit-up")]
    #[case("ez barbell curl", "Ez barbell curl")]
    fn test_capitalize(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(capitalize(text), expected);
    }

    #[test]
    fn test_exercise_display_name() {
        let exercise = Exercise {
            id: "0001".into(),
            name: "3/4 sit-up".to_string(),
            target: "abs".to_string(),
            equipment: "body weight".to_string(),
            body_part: "waist".to_string(),
            gif_url: String::new(),
            instructions: vec![],
            secondary_muscles: vec![],
        };
        assert_eq!(exercise.display_name(), "3/4 sit-up");
        assert_eq!(
            Exercise {
                name: "air bike".to_string(),
                ..exercise
            }
            .display_name(),
            "Air bike"
        );
    }

    #[rstest]
    #[case("0001", "0001")]
    #[case(" 0001 ", "0001")]
    fn test_exercise_id_from_str(#[case] value: &str, #[case] expected: &str) {
        let id = ExerciseID::from(value);
        assert_eq!(id.to_string(), expected);
        assert_eq!(id.as_str(), expected);
        assert_eq!(value.parse::<ExerciseID>(), Ok(id));
    }

    #[test]
    fn test_exercise_id_is_empty() {
        assert!(ExerciseID::from("  ").is_empty());
        assert!(!ExerciseID::from("0001").is_empty());
    }
}
