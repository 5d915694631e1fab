use contracts::domain::tabs::dto::{CreateTabRequest, DeleteTabRequest, RenameTabRequest};
use contracts::domain::tabs::response::{interpret_response, MutationOutcome};
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::api_utils::api_url;

/// Serialize a request DTO into a form-url-encoded body.
fn form_body<T: Serialize>(dto: &T) -> Result<String, String> {
    serde_qs::to_string(dto).map_err(|e| format!("Failed to encode request body: {}", e))
}

/// POST a form-encoded body and interpret the text response.
///
/// The HTTP status is deliberately not consulted: the backend signals
/// failure only through an `error` member in the response text.
async fn post_form(path: &str, body: String) -> Result<MutationOutcome, String> {
    let response = Request::post(&api_url(path))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    Ok(interpret_response(&text))
}

/// Create a tab named `tab_name`.
pub async fn add_tab(tab_name: &str) -> Result<MutationOutcome, String> {
    let body = form_body(&CreateTabRequest {
        tab_name: tab_name.to_string(),
    })?;
    post_form("/add_tab", body).await
}

/// Rename the tab identified by `tab_id`.
pub async fn rename_tab(tab_id: &str, new_tab_name: &str) -> Result<MutationOutcome, String> {
    let body = form_body(&RenameTabRequest {
        tab_id: tab_id.to_string(),
        new_tab_name: new_tab_name.to_string(),
    })?;
    post_form("/rename_tab", body).await
}

/// Delete the tab identified by `tab_id`.
pub async fn delete_tab(tab_id: &str) -> Result<MutationOutcome, String> {
    let body = form_body(&DeleteTabRequest {
        tab_id: tab_id.to_string(),
    })?;
    post_form("/delete_tab", body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_encodes_name() {
        let body = form_body(&CreateTabRequest {
            tab_name: "boiler1".to_string(),
        })
        .unwrap();
        assert_eq!(body, "tab_name=boiler1");
    }

    #[test]
    fn cyrillic_names_are_percent_encoded() {
        let body = form_body(&CreateTabRequest {
            tab_name: "Цех".to_string(),
        })
        .unwrap();
        assert_eq!(body, "tab_name=%D0%A6%D0%B5%D1%85");
    }

    #[test]
    fn rename_request_keeps_both_keys() {
        let body = form_body(&RenameTabRequest {
            tab_id: "7".to_string(),
            new_tab_name: "Drying".to_string(),
        })
        .unwrap();
        assert_eq!(body, "tab_id=7&new_tab_name=Drying");
    }

    #[test]
    fn delete_request_encodes_id() {
        let body = form_body(&DeleteTabRequest {
            tab_id: "12".to_string(),
        })
        .unwrap();
        assert_eq!(body, "tab_id=12");
    }
}
