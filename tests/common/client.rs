use actix_web::{body::MessageBody, dev::ServiceResponse, http::header, test, web, App};
use std::sync::Arc;
use school_admin::{
    db::sqlite_service::SqliteService,
    types::{error::AppError, student::StudentForm},
    utils::{render::Renderer, webutils::FLASH_COOKIE},
};

pub struct TestClient {
    pub db: Arc<SqliteService>,
    #[allow(dead_code)]
    pub renderer: Arc<Renderer>,
}

impl TestClient {
    pub fn new(db: Arc<SqliteService>) -> Self {
        TestClient {
            db,
            renderer: Arc::new(Renderer::new().expect("Failed to build renderer")),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Arc::clone(&self.renderer)))
            .configure(school_admin::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_student(&self, email: Option<String>) -> Result<i32, AppError> {
        let email = email.unwrap_or_else(|| "student@test.com".to_string());
        let student = self.db.create_student(StudentForm {
            name: "Test Student".to_string(),
            email,
            course_id: 1,
        }).await?;

        Ok(student.id)
    }
}

#[allow(dead_code)]
pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Raw value of the flash cookie set by the response, if any.
#[allow(dead_code)]
pub fn flash_cookie<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .map(|c| c.value().to_string())
}

#[allow(dead_code)]
pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
