use serde::{Deserialize, Serialize};

/// Body of `POST /add` and `POST /edit/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub course_id: i32,
}

/// A student joined with its course and that course's teacher.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StudentOverview {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub course_id: i32,
    pub course_name: String,
    pub teacher_name: Option<String>,
}
