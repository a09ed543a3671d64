use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeacherForm {
    pub name: String,
    pub email: String,
}
