use crate::db::sqlite_service::SqliteService;
use crate::types::error::AppError;
use entity::course::{ActiveModel as CourseActive, Entity as Course};
use entity::teacher::ActiveModel as TeacherActive;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use tracing::info;

const SEED_TEACHERS: [(&str, &str); 2] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
];

// (name, description, index into SEED_TEACHERS)
const SEED_COURSES: [(&str, &str, usize); 3] = [
    ("Python Basics", "Learn Python fundamentals", 0),
    ("Web Development", "HTML, CSS, Flask", 1),
    ("Data Science", "Python for data analysis", 0),
];

impl SqliteService {
    /// Inserts the sample teachers and courses when no course exists yet.
    /// Returns whether anything was inserted.
    pub async fn seed_defaults(&self) -> Result<bool, AppError> {
        let txn = self.database_connection.begin().await?;
        if Course::find().count(&txn).await? > 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        let mut teacher_ids = Vec::with_capacity(SEED_TEACHERS.len());
        for (name, email) in SEED_TEACHERS {
            let teacher = TeacherActive {
                name: Set(name.to_string()),
                email: Set(email.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            teacher_ids.push(teacher.id);
        }

        for (name, description, teacher) in SEED_COURSES {
            CourseActive {
                name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                teacher_id: Set(Some(teacher_ids[teacher])),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        info!(
            "Seeded {} teachers and {} courses.",
            SEED_TEACHERS.len(),
            SEED_COURSES.len()
        );
        Ok(true)
    }
}
