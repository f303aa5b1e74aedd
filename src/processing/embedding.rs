use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::processing::{ProcessingError, ProcessingResult};

/// The embedding collaborator: one text in, one fixed-length vector out.
///
/// Implementations must be deterministic for a fixed model version. The
/// pipeline never inspects the vector beyond dot products and norms.
pub trait TextEmbedder {
    fn embed(&mut self, text: &str) -> ProcessingResult<Vec<f32>>;
}

/// Production embedder backed by a pretrained fastembed model.
pub struct FastembedEmbedder {
    model: TextEmbedding,
}

impl FastembedEmbedder {
    /// Initialize the underlying model. Fails with
    /// [`ProcessingError::ModelUnavailable`] when the model cannot be loaded;
    /// there is no fallback embedding.
    pub fn new() -> ProcessingResult<Self> {
        let model = TextEmbedding::try_new(InitOptions::new(EmbeddingModel::MultilingualE5Large))
            .map_err(|error| ProcessingError::ModelUnavailable(format!("{error:?}")))?;
        Ok(Self { model })
    }
}

impl TextEmbedder for FastembedEmbedder {
    fn embed(&mut self, text: &str) -> ProcessingResult<Vec<f32>> {
        let embedding = self
            .model
            .embed(vec![text.to_string()], None)
            .map_err(|error| ProcessingError::ModelUnavailable(format!("{error:?}")))?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ProcessingError::ModelUnavailable("model returned no embedding".to_string())
            })?;
        Ok(normalize_embedding(&embedding))
    }
}

/// Normalize a vector to unit length.
///
/// Returns the original vector when the norm is zero.
pub(crate) fn normalize_embedding(vec: &[f32]) -> Vec<f32> {
    let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        vec.to_vec()
    } else {
        vec.iter().map(|x| x / norm).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_embedding;

    #[test]
    fn normalize_embedding_returns_unit_vector() {
        let normalized = normalize_embedding(&[3.0, 4.0]);
        assert!((normalized[0] - 0.6).abs() < 1e-6);
        assert!((normalized[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn normalize_embedding_passes_zero_vector_through() {
        assert_eq!(normalize_embedding(&[0.0, 0.0]), vec![0.0, 0.0]);
    }
}
