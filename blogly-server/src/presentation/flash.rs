use axum::response::Redirect;
use serde::Deserialize;
use url::form_urlencoded;

/// One-shot confirmation message carried through the redirect query string.
#[derive(Debug, Deserialize)]
pub(crate) struct FlashParams {
    pub(crate) flash: Option<String>,
}

pub(crate) fn redirect_with_flash(path: &str, message: &str) -> Redirect {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("flash", message)
        .finish();
    Redirect::to(&format!("{path}?{query}"))
}

#[cfg(test)]
mod tests {
    use super::redirect_with_flash;
    use axum::http::header::LOCATION;
    use axum::response::IntoResponse;

    #[test]
    fn redirect_carries_encoded_message() {
        let response = redirect_with_flash("/users", "User Jane Doe added.").into_response();
        let location = response
            .headers()
            .get(LOCATION)
            .expect("redirect must set location")
            .to_str()
            .expect("location must be ascii");

        assert_eq!(location, "/users?flash=User+Jane+Doe+added.");
    }
}
