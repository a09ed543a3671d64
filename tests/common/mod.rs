use std::sync::Arc;
use school_admin::db::sqlite_service::SqliteService;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub db: Arc<SqliteService>,
    pub _dir: TempDir,
}

impl TestContext {
    /// Fresh database file, migrated and seeded like a first start.
    pub async fn new() -> TestContext {
        let ctx = TestContext::empty().await;
        ctx.db.seed_defaults().await.expect("Failed to seed database");
        ctx
    }

    /// Fresh database file, migrated but not seeded.
    #[allow(dead_code)]
    pub async fn empty() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("school.db").display());

        let db = Arc::new(
            SqliteService::new(&db_url)
                .await
                .expect("Failed to initialize SqliteService")
        );

        TestContext {
            db,
            _dir: dir,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use school_admin::types::{course::CourseForm, student::StudentForm, teacher::TeacherForm};

    pub fn sample_student() -> StudentForm {
        StudentForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            course_id: 1,
        }
    }

    pub fn sample_student_with_email(email: &str) -> StudentForm {
        StudentForm {
            name: "Test Student".to_string(),
            email: email.to_string(),
            course_id: 1,
        }
    }

    pub fn sample_teacher() -> TeacherForm {
        TeacherForm {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        }
    }

    pub fn sample_course(teacher_id: Option<i32>) -> CourseForm {
        CourseForm {
            name: "Compilers".to_string(),
            description: "From source to machine code".to_string(),
            teacher_id,
        }
    }
}
