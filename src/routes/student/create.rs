use actix_web::{get, post, web, HttpRequest};
use entity::course::Model as CourseModel;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::db::sqlite_service::SqliteService;
use crate::types::{flash::Flash, response::{PageResponse, PageResult}, student::StudentForm};
use crate::utils::{render::Renderer, webutils::pending_flash};

#[derive(Serialize)]
struct Page {
    flash: Option<Flash>,
    courses: Vec<CourseModel>,
}

#[get("/add")]
pub async fn add_student_form(
    req: HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    renderer: web::Data<Arc<Renderer>>,
) -> PageResult {
    let courses = db.list_courses().await?;

    Ok(PageResponse::Html(renderer.render("add.html", &Page {
        flash: pending_flash(&req),
        courses,
    })?))
}

#[post("/add")]
pub async fn add_student(
    db: web::Data<Arc<SqliteService>>,
    form: web::Form<StudentForm>,
) -> PageResult {
    let student = db.create_student(form.into_inner()).await?;
    info!("Created student {} in course {}", student.id, student.course_id);

    Ok(PageResponse::redirect("/", Flash::success("Student added successfully!")))
}
