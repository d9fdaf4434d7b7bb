use serde::{Deserialize, Serialize};

pub mod pixels;

pub const INPUT_SIZE: u32 = 112;
pub const PREVIEW_SIZE: u32 = 28;
pub const PIXEL_COUNT: usize = (PREVIEW_SIZE * PREVIEW_SIZE) as usize;
pub const SAVE_PATH: &str = "/img/save";
pub const STATS_PATH: &str = "/img/stats";

pub const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// The digit a user is asked to draw.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Label(u8);

impl Label {
    pub fn new(digit: u8) -> Option<Self> {
        (digit <= 9).then_some(Self(digit))
    }

    /// Maps a uniform sample in `[0, 1)` onto one of the ten labels.
    pub fn from_unit(sample: f64) -> Self {
        let digit = (sample * 10.0).floor();
        if digit.is_finite() {
            Self(digit.clamp(0.0, 9.0) as u8)
        } else {
            Self(0)
        }
    }

    pub fn digit(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        DIGIT_NAMES[usize::from(self.0)]
    }
}

impl TryFrom<u8> for Label {
    type Error = PayloadError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PayloadError::LabelOutOfRange(value))
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("label {0} is not a digit between 0 and 9")]
    LabelOutOfRange(u8),
    #[error("expected 784 pixels, got {0}")]
    PixelCount(usize),
}

/// Body of `POST /img/save`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SavePayload {
    pub number: u8,
    pub img: Vec<u8>,
}

impl SavePayload {
    pub fn new(label: Label, img: Vec<u8>) -> Self {
        Self {
            number: label.digit(),
            img,
        }
    }

    pub fn validate(&self) -> Result<Label, PayloadError> {
        let label = Label::try_from(self.number)?;
        if self.img.len() != PIXEL_COUNT {
            return Err(PayloadError::PixelCount(self.img.len()));
        }
        Ok(label)
    }
}

/// Successful reply to a save. Servers that score the sample may also fill
/// `prediction` and `probability`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total: usize,
    pub per_digit: [usize; 10],
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
