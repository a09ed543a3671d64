use actix_web::{get, web, HttpRequest};
use serde::Serialize;
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::{flash::Flash, response::{PageResponse, PageResult}, student::StudentOverview};
use crate::utils::{render::Renderer, webutils::pending_flash};

#[derive(Serialize)]
struct Page {
    flash: Option<Flash>,
    students: Vec<StudentOverview>,
}

#[get("/")]
pub async fn index(
    req: HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    renderer: web::Data<Arc<Renderer>>,
) -> PageResult {
    let students = db.list_student_overviews().await?;

    Ok(PageResponse::Html(renderer.render("index.html", &Page {
        flash: pending_flash(&req),
        students,
    })?))
}
