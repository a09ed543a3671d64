use actix_web::{get, post, web, HttpRequest};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::db::sqlite_service::SqliteService;
use crate::types::{flash::Flash, response::{PageResponse, PageResult}, teacher::TeacherForm};
use crate::utils::{render::Renderer, webutils::pending_flash};

#[derive(Serialize)]
struct Page {
    flash: Option<Flash>,
}

#[get("/add-teacher")]
pub async fn add_teacher_form(
    req: HttpRequest,
    renderer: web::Data<Arc<Renderer>>,
) -> PageResult {
    Ok(PageResponse::Html(renderer.render("add_teacher.html", &Page {
        flash: pending_flash(&req),
    })?))
}

#[post("/add-teacher")]
pub async fn add_teacher(
    db: web::Data<Arc<SqliteService>>,
    form: web::Form<TeacherForm>,
) -> PageResult {
    let teacher = db.create_teacher(form.into_inner()).await?;
    info!("Created teacher {}", teacher.id);

    Ok(PageResponse::redirect("/courses", Flash::success("Teacher added successfully!")))
}
