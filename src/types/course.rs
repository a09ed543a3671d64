use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Body of `POST /add-course`. An empty teacher selection means no teacher.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CourseForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub teacher_id: Option<i32>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CourseStudent {
    pub id: i32,
    pub name: String,
}

/// A course joined with its teacher and enrolled students.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CourseOverview {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub teacher_name: Option<String>,
    pub students: Vec<CourseStudent>,
}

fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(de)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
