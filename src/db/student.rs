use crate::db::sqlite_service::SqliteService;
use crate::types::{
    error::AppError,
    student::{StudentForm, StudentOverview},
};
use entity::course::Entity as Course;
use entity::student::{ActiveModel as StudentActive, Entity as Student, Model as StudentModel};
use entity::teacher::Entity as Teacher;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use std::collections::HashMap;

impl SqliteService {
    pub async fn list_students(&self) -> Result<Vec<StudentModel>, AppError> {
        Ok(Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Students joined with course and teacher names, in storage order.
    pub async fn list_student_overviews(&self) -> Result<Vec<StudentOverview>, AppError> {
        let rows = Student::find()
            .find_also_related(Course)
            .order_by_asc(entity::student::Column::Id)
            .all(&self.database_connection)
            .await?;

        let teachers: HashMap<i32, String> = Teacher::find()
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(s, c)| {
                let (course_name, teacher_name) = match c {
                    Some(c) => (
                        c.name,
                        c.teacher_id.and_then(|id| teachers.get(&id).cloned()),
                    ),
                    None => (String::new(), None),
                };
                StudentOverview {
                    id: s.id,
                    name: s.name,
                    email: s.email,
                    course_id: s.course_id,
                    course_name,
                    teacher_name,
                }
            })
            .collect())
    }

    pub async fn get_student_by_id(&self, id: i32) -> Result<StudentModel, AppError> {
        Ok(Student::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Student does not exist".into()))?)
    }

    pub async fn create_student(&self, payload: StudentForm) -> Result<StudentModel, AppError> {
        Ok(StudentActive {
            name: Set(payload.name),
            email: Set(payload.email),
            course_id: Set(payload.course_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// Overwrites every mutable field. Concurrent edits are last-write-wins.
    pub async fn update_student(&self, id: i32, payload: StudentForm) -> Result<StudentModel, AppError> {
        let mut am: StudentActive = self.get_student_by_id(id).await?.into();
        am.name = Set(payload.name);
        am.email = Set(payload.email);
        am.course_id = Set(payload.course_id);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_student(&self, id: i32) -> Result<(), AppError> {
        let res = Student::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
