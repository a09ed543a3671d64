use actix_web::{
    body::BoxBody,
    http::header::{self, ContentType},
    HttpRequest, HttpResponse, Responder,
};

use crate::types::{error::AppError, flash::Flash};
use crate::utils::webutils::{flash_cookie, flash_removal_cookie, FLASH_COOKIE};

pub enum PageResponse {
    /// Rendered page. Consumes any flash the request carried.
    Html(String),
    /// 303 after a mutation, handing the flash to the next rendered page.
    Redirect { location: &'static str, flash: Flash },
}

impl PageResponse {
    pub fn redirect(location: &'static str, flash: Flash) -> Self {
        PageResponse::Redirect { location, flash }
    }
}

impl Responder for PageResponse {
    type Body = BoxBody;
    fn respond_to(self, req: &HttpRequest) -> HttpResponse {
        match self {
            PageResponse::Html(body) => {
                let mut res = HttpResponse::Ok();
                res.content_type(ContentType::html());
                if req.cookie(FLASH_COOKIE).is_some() {
                    res.cookie(flash_removal_cookie());
                }
                res.body(body)
            }
            PageResponse::Redirect { location, flash } => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .cookie(flash_cookie(&flash))
                .finish(),
        }
    }
}

pub type PageResult = Result<PageResponse, AppError>;
