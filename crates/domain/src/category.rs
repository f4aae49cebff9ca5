use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum CategoryType {
    #[default]
    BodyPart,
    Equipment,
}

impl CategoryType {
    pub const ALL: [CategoryType; 2] = [CategoryType::BodyPart, CategoryType::Equipment];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CategoryType::BodyPart => "Body Parts",
            CategoryType::Equipment => "Equipment",
        }
    }

    /// Path segment used by the exercise database and by the category route.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            CategoryType::BodyPart => "bodyPart",
            CategoryType::Equipment => "equipment",
        }
    }

    /// Browsable categories of this type.
    #[must_use]
    pub fn categories(self) -> Vec<Category> {
        let names: &[&str] = match self {
            CategoryType::BodyPart => &BODY_PARTS,
            CategoryType::Equipment => &EQUIPMENT,
        };
        names
            .iter()
            .zip(0..)
            .map(|(name, id)| Category {
                id,
                name: (*name).to_string(),
            })
            .collect()
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.segment())
    }
}

impl FromStr for CategoryType {
    type Err = CategoryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bodyPart" => Ok(CategoryType::BodyPart),
            "equipment" => Ok(CategoryType::Equipment),
            _ => Err(CategoryTypeError::Unknown(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryTypeError {
    #[error("Unknown category type \"{0}\"")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

pub const BODY_PARTS: [&str; 10] = [
    "back",
    "cardio",
    "chest",
    "lower arms",
    "lower legs",
    "neck",
    "shoulders",
    "upper arms",
    "upper legs",
    "waist",
];

pub const EQUIPMENT: [&str; 28] = [
    "assisted",
    "band",
    "barbell",
    "body weight",
    "bosu ball",
    "cable",
    "dumbbell",
    "elliptical machine",
    "ez barbell",
    "hammer",
    "kettlebell",
    "leverage machine",
    "medicine ball",
    "olympic barbell",
    "resistance band",
    "roller",
    "rope",
    "skierg machine",
    "sled machine",
    "smith machine",
    "stability ball",
    "stationary bike",
    "stepmill machine",
    "tire",
    "trap bar",
    "upper body ergometer",
    "weighted",
    "wheel roller",
];
