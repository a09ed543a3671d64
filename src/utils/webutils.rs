use actix_web::{cookie::Cookie, HttpRequest};

use crate::types::flash::{Flash, FlashCategory};

pub const FLASH_COOKIE: &str = "flash";

pub fn decode_all(input: &str) -> Option<String> {
    urlencoding::decode(input).ok().map(|cow| cow.into_owned())
}

/// `<category>:<url-encoded message>`
pub fn encode_flash(flash: &Flash) -> String {
    format!("{}:{}", flash.category, urlencoding::encode(&flash.message))
}

pub fn decode_flash(value: &str) -> Option<Flash> {
    let (category, message) = value.split_once(':')?;
    Some(Flash {
        category: FlashCategory::parse(category)?,
        message: decode_all(message)?,
    })
}

pub fn flash_cookie(flash: &Flash) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, encode_flash(flash))
        .path("/")
        .http_only(true)
        .finish()
}

pub fn flash_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Pending flash carried by the request, if any. Malformed values are ignored.
pub fn pending_flash(req: &HttpRequest) -> Option<Flash> {
    req.cookie(FLASH_COOKIE)
        .and_then(|cookie| decode_flash(cookie.value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_value_survives_cookie_encoding() {
        let flash = Flash::success("Student added successfully!");
        let encoded = encode_flash(&flash);
        assert!(!encoded.contains(' '));
        assert_eq!(decode_flash(&encoded), Some(flash));
    }

    #[test]
    fn message_may_contain_separator() {
        let flash = Flash::danger("Note: deleted");
        assert_eq!(decode_flash(&encode_flash(&flash)), Some(flash));
    }

    #[test]
    fn garbage_is_ignored() {
        assert_eq!(decode_flash("no-separator"), None);
        assert_eq!(decode_flash("warning:hello"), None);
    }
}
