use actix_web::{get, post, web, HttpRequest};
use entity::{course::Model as CourseModel, student::Model as StudentModel};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::db::sqlite_service::SqliteService;
use crate::types::{flash::Flash, response::{PageResponse, PageResult}, student::StudentForm};
use crate::utils::{render::Renderer, webutils::pending_flash};

#[derive(Serialize)]
struct Page {
    flash: Option<Flash>,
    student: StudentModel,
    courses: Vec<CourseModel>,
}

#[get("/edit/{id}")]
pub async fn edit_student_form(
    req: HttpRequest,
    path: web::Path<i32>,
    db: web::Data<Arc<SqliteService>>,
    renderer: web::Data<Arc<Renderer>>,
) -> PageResult {
    let student = db.get_student_by_id(path.into_inner()).await?;
    let courses = db.list_courses().await?;

    Ok(PageResponse::Html(renderer.render("edit.html", &Page {
        flash: pending_flash(&req),
        student,
        courses,
    })?))
}

#[post("/edit/{id}")]
pub async fn edit_student(
    path: web::Path<i32>,
    db: web::Data<Arc<SqliteService>>,
    form: web::Form<StudentForm>,
) -> PageResult {
    let student = db.update_student(path.into_inner(), form.into_inner()).await?;
    info!("Updated student {}", student.id);

    Ok(PageResponse::redirect("/", Flash::success("Student updated successfully!")))
}
