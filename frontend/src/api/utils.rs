use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::Storage;
use log::debug;
use serde::de::DeserializeOwned;
use shared::dto::common::ErrorResponse;

/// Creates a request with Authorization header from localStorage
pub fn authenticated_request(method: &str, url: &str) -> RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url),
    };

    if let Ok(session_id) = gloo_storage::LocalStorage::get::<String>("session_id") {
        req = req.header("Authorization", &format!("Bearer {}", session_id));
    }

    req
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request("GET", url)
}

pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated_request("POST", url)
}

pub fn authenticated_put(url: &str) -> RequestBuilder {
    authenticated_request("PUT", url)
}

pub fn authenticated_delete(url: &str) -> RequestBuilder {
    authenticated_request("DELETE", url)
}

/// Turns a non-2xx response into the API's error message.
pub async fn error_message(response: Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.banner_message(),
        Err(_) => format!("Request failed with status {}", response.status()),
    }
}

/// GETs `url` and decodes the JSON body; `what` names the resource in errors.
pub async fn get_json<T: DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    debug!("Fetching {} from {}", what, url);
    let response = authenticated_get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", what, e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse {} response: {}", what, e))
}

/// DELETEs `url`; any 2xx counts as success.
pub async fn delete(url: &str, what: &str) -> Result<(), String> {
    let response = authenticated_delete(url)
        .send()
        .await
        .map_err(|e| format!("Failed to delete {}: {}", what, e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}
