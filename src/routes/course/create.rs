use actix_web::{get, post, web, HttpRequest};
use entity::teacher::Model as TeacherModel;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::db::sqlite_service::SqliteService;
use crate::types::{course::CourseForm, flash::Flash, response::{PageResponse, PageResult}};
use crate::utils::{render::Renderer, webutils::pending_flash};

#[derive(Serialize)]
struct Page {
    flash: Option<Flash>,
    teachers: Vec<TeacherModel>,
}

#[get("/add-course")]
pub async fn add_course_form(
    req: HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    renderer: web::Data<Arc<Renderer>>,
) -> PageResult {
    let teachers = db.list_teachers().await?;

    Ok(PageResponse::Html(renderer.render("add_course.html", &Page {
        flash: pending_flash(&req),
        teachers,
    })?))
}

#[post("/add-course")]
pub async fn add_course(
    db: web::Data<Arc<SqliteService>>,
    form: web::Form<CourseForm>,
) -> PageResult {
    let course = db.create_course(form.into_inner()).await?;
    info!("Created course {} ({})", course.id, course.name);

    Ok(PageResponse::redirect("/courses", Flash::success("Course added successfully!")))
}
