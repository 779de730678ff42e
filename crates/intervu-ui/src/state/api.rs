//! HTTP access to the Intervu backend
//!
//! Requests only run in the browser; native builds (tests) get a network
//! error instead of touching `web-sys`.

use intervu_core::{Error, Interview, Result, UserProfile};
use serde::de::DeserializeOwned;

/// GET a JSON document.
///
/// # Errors
/// Returns `Error::Network` if the request cannot be sent,
/// `Error::HttpStatus` for non-2xx responses and `Error::Decode` if the
/// body is not the expected JSON.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| Error::network(url, e.to_string()))?;

        if !response.ok() {
            return Err(Error::http_status(url, response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::decode(url, e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(Error::network(url, "HTTP requests require a browser"))
    }
}

/// Fetch the signed-in user's profile; `None` when no profile exists yet.
///
/// # Errors
/// See [`fetch_json`].
pub async fn fetch_current_user(url: &str) -> Result<Option<UserProfile>> {
    fetch_json(url).await
}

/// Fetch the interviews of the signed-in user.
///
/// # Errors
/// See [`fetch_json`].
pub async fn fetch_my_interviews(url: &str) -> Result<Vec<Interview>> {
    fetch_json(url).await
}
