use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::sqlite_service::SqliteService;
use crate::types::{flash::Flash, response::{PageResponse, PageResult}};

// State change, so POST only; `GET /delete/{id}` is not routed.
#[post("/delete/{id}")]
pub async fn delete_student(
    path: web::Path<i32>,
    db: web::Data<Arc<SqliteService>>,
) -> PageResult {
    let id = path.into_inner();
    db.delete_student(id).await?;
    info!("Deleted student {}", id);

    Ok(PageResponse::redirect("/", Flash::danger("Student deleted!")))
}
