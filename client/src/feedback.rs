use digitpad_shared::{ErrorResponse, Label, SaveResponse};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response from the server: {0}")]
    MalformedResponse(String),
}

/// Classifies a finished `POST /img/save` exchange.
pub fn interpret_response(status: u16, body: &str) -> Result<SaveResponse, SubmitError> {
    if !(200..300).contains(&status) {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse { error }) => error,
            Err(_) if body.trim().is_empty() => "no details".to_string(),
            Err(_) => body.trim().to_string(),
        };
        return Err(SubmitError::Status { status, message });
    }
    let response = serde_json::from_str::<SaveResponse>(body)
        .map_err(|error| SubmitError::MalformedResponse(error.to_string()))?;
    if response.message.is_none()
        && response.saved_as.is_none()
        && (response.prediction.is_none() || response.probability.is_none())
    {
        return Err(SubmitError::MalformedResponse(
            "no message in response".to_string(),
        ));
    }
    Ok(response)
}

fn round_probability(probability: f64) -> f64 {
    (probability * 1000.0).round() / 1000.0
}

/// Text shown after a sample was accepted.
pub fn success_message(response: &SaveResponse, target: Label) -> String {
    if let (Some(prediction), Some(probability)) = (response.prediction, response.probability) {
        let probability = round_probability(probability);
        if prediction == target.digit() {
            return format!("correctly predicted with a probability of {probability}");
        }
        return format!(
            "incorrectly predicted to be {prediction} with a probability of {probability}"
        );
    }
    if let Some(message) = &response.message {
        return message.clone();
    }
    match &response.saved_as {
        Some(saved_as) => format!("saved as {saved_as}"),
        None => String::new(),
    }
}

pub fn failure_message(error: &SubmitError) -> String {
    format!("Could not save: {error}")
}

#[cfg(test)]
#[path = "feedback_test.rs"]
mod tests;
