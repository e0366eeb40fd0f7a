//! The single generation request the shell ever issues.

use viewsmith_core::{ErrorDetail, GenerateRequest, GenerateResponse, SubmitError};

/// Fixed local origin of the generation API.
pub const API_BASE: &str = "http://127.0.0.1:8000";

pub fn components_base() -> String {
    format!("{API_BASE}/components")
}

/// POST the assembled request with the token as a bearer credential.
///
/// `Ok(())` means the server accepted the generation; the caller is expected
/// to reload the page so the registry re-resolves the fresh view. Every
/// failure mode maps onto a fixed [`SubmitError`] message.
pub async fn submit_generation(request: &GenerateRequest, token: &str) -> Result<(), SubmitError> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{API_BASE}/generate_jsx"))
        .bearer_auth(token)
        .json(request)
        .send()
        .await
        .map_err(|e| SubmitError::transport(e.to_string()))?;

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        let detail = response
            .json::<ErrorDetail>()
            .await
            .ok()
            .map(|body| body.detail);
        return Err(SubmitError::from_status(status, detail));
    }

    let body: GenerateResponse = response
        .json()
        .await
        .map_err(|e| SubmitError::transport(e.to_string()))?;

    if body.success {
        Ok(())
    } else {
        Err(SubmitError::rejected(body.message))
    }
}
