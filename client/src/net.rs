use gloo_net::http::Request;

use digitpad_shared::{SavePayload, SaveResponse, SAVE_PATH};

use crate::feedback::{interpret_response, SubmitError};

pub async fn submit(payload: &SavePayload) -> Result<SaveResponse, SubmitError> {
    let request = Request::post(SAVE_PATH)
        .json(payload)
        .map_err(|error| SubmitError::Network(error.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|error| SubmitError::Network(error.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| SubmitError::MalformedResponse(error.to_string()))?;
    interpret_response(status, &body)
}
