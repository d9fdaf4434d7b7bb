use std::collections::BTreeMap;
use std::fmt::Write;
use std::io::ErrorKind;

use digitpad_shared::pixels::text_preview;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::storage::{Storage, StorageError, StoredSample};

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("no samples stored yet; run the app and draw some digits first")]
    Empty,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Picks up to `per_digit` random samples of every stored digit, ordered by digit.
pub async fn pick_samples<R: Rng + ?Sized>(
    storage: &dyn Storage,
    per_digit: usize,
    rng: &mut R,
) -> Result<Vec<StoredSample>, SummaryError> {
    let samples = match storage.list_samples().await {
        Ok(samples) => samples,
        Err(StorageError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            return Err(SummaryError::Empty);
        }
        Err(error) => return Err(error.into()),
    };
    if samples.is_empty() {
        return Err(SummaryError::Empty);
    }
    let mut groups: BTreeMap<u8, Vec<StoredSample>> = BTreeMap::new();
    for sample in samples {
        groups.entry(sample.label.digit()).or_default().push(sample);
    }
    let mut picked = Vec::new();
    for mut group in groups.into_values() {
        group.shuffle(rng);
        picked.extend(group.into_iter().take(per_digit));
    }
    Ok(picked)
}

pub async fn render_summary<R: Rng + ?Sized>(
    storage: &dyn Storage,
    per_digit: usize,
    rng: &mut R,
) -> Result<String, SummaryError> {
    let picked = pick_samples(storage, per_digit, rng).await?;
    let mut out = String::new();
    for sample in &picked {
        let pixels = storage.load_sample(&sample.name).await?;
        let _ = writeln!(out, "{} ({})", sample.label.digit(), sample.name);
        out.push_str(&text_preview(&pixels));
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
