use crate::db::sqlite_service::SqliteService;
use crate::types::{error::AppError, teacher::TeacherForm};
use entity::teacher::{ActiveModel as TeacherActive, Entity as Teacher, Model as TeacherModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};

impl SqliteService {
    pub async fn list_teachers(&self) -> Result<Vec<TeacherModel>, AppError> {
        Ok(Teacher::find()
            .order_by_asc(entity::teacher::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_teacher_by_id(&self, id: i32) -> Result<TeacherModel, AppError> {
        Ok(Teacher::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Teacher does not exist".into()))?)
    }

    /// Duplicate emails surface as `AppError::AlreadyExists` from the unique index.
    pub async fn create_teacher(&self, payload: TeacherForm) -> Result<TeacherModel, AppError> {
        Ok(TeacherActive {
            name: Set(payload.name),
            email: Set(payload.email),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }
}
