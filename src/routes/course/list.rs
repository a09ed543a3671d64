use actix_web::{get, web, HttpRequest};
use serde::Serialize;
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::{course::CourseOverview, flash::Flash, response::{PageResponse, PageResult}};
use crate::utils::{render::Renderer, webutils::pending_flash};

#[derive(Serialize)]
struct Page {
    flash: Option<Flash>,
    courses: Vec<CourseOverview>,
}

#[get("/courses")]
pub async fn courses(
    req: HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    renderer: web::Data<Arc<Renderer>>,
) -> PageResult {
    let courses = db.list_course_overviews().await?;

    Ok(PageResponse::Html(renderer.render("courses.html", &Page {
        flash: pending_flash(&req),
        courses,
    })?))
}
