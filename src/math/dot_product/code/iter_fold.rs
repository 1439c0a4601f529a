//! Iterator-based implementation of dot product.
//!
//! Same summation order as the naive loop, expressed with `zip` and `fold`.
//! `Iterator::sum` is avoided because it starts from `-0.0` for floats.

use crate::error::DotProductError;

/// Compute the dot product with a single `fold` over the zipped vectors.
///
/// # Errors
/// Returns [`DotProductError::LengthMismatch`] if the lengths differ.
pub fn dot_product_iter_fold(x: &[f32], y: &[f32]) -> Result<f32, DotProductError> {
    if x.len() != y.len() {
        return Err(DotProductError::LengthMismatch {
            requested: x.len(),
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    Ok(x.iter().zip(y).fold(0.0f32, |acc, (a, b)| acc + a * b))
}
