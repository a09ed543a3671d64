use crate::db::sqlite_service::SqliteService;
use crate::types::{
    course::{CourseForm, CourseOverview, CourseStudent},
    error::AppError,
};
use entity::course::{ActiveModel as CourseActive, Entity as Course, Model as CourseModel};
use entity::student::Entity as Student;
use entity::teacher::Entity as Teacher;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};
use std::collections::HashMap;

impl SqliteService {
    pub async fn list_courses(&self) -> Result<Vec<CourseModel>, AppError> {
        Ok(Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn count_courses(&self) -> Result<u64, AppError> {
        Ok(Course::find().count(&self.database_connection).await?)
    }

    pub async fn create_course(&self, payload: CourseForm) -> Result<CourseModel, AppError> {
        Ok(CourseActive {
            name: Set(payload.name),
            description: Set(Some(payload.description)),
            teacher_id: Set(payload.teacher_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// Courses with their teacher and students. Two queries, grouped in memory.
    pub async fn list_course_overviews(&self) -> Result<Vec<CourseOverview>, AppError> {
        let courses = Course::find()
            .find_also_related(Teacher)
            .order_by_asc(entity::course::Column::Id)
            .all(&self.database_connection)
            .await?;

        let mut by_course: HashMap<i32, Vec<CourseStudent>> = HashMap::new();
        for s in Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(&self.database_connection)
            .await?
        {
            by_course
                .entry(s.course_id)
                .or_default()
                .push(CourseStudent { id: s.id, name: s.name });
        }

        Ok(courses
            .into_iter()
            .map(|(c, t)| CourseOverview {
                students: by_course.remove(&c.id).unwrap_or_default(),
                id: c.id,
                name: c.name,
                description: c.description,
                teacher_name: t.map(|t| t.name),
            })
            .collect())
    }
}
