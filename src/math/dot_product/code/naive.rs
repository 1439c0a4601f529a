//! Naive (reference) implementation of dot product.
//!
//! One accumulator, ascending index order, no unrolling and no fused
//! multiply-add. Every other variant is checked bit-for-bit against this one.

use crate::error::DotProductError;

/// Compute the dot product of the first `n` elements of two vectors.
///
/// The sum is accumulated left to right into a single `f32` initialized to
/// `0.0`. When `n == 0` the result is `0.0` whatever the inputs are.
///
/// Only the first `n` elements are read, so longer slices (even of
/// different lengths) are accepted and their tails ignored.
///
/// # Errors
/// Returns [`DotProductError::LengthMismatch`] if either slice holds fewer
/// than `n` elements. Use [`dot`] to require equal lengths.
///
/// # Example
/// ```
/// use naive_dotprod::math::dot_product::naive_dot_product;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [4.0, 5.0, 6.0];
/// assert_eq!(naive_dot_product(&x, &y, 3), Ok(32.0));
/// ```
pub fn naive_dot_product(x: &[f32], y: &[f32], n: usize) -> Result<f32, DotProductError> {
    if x.len() < n || y.len() < n {
        return Err(DotProductError::LengthMismatch {
            requested: n,
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let mut acc: f32 = 0.0;
    for i in 0..n {
        acc += x[i] * y[i];
    }

    Ok(acc)
}

/// Compute the dot product of two whole vectors.
///
/// # Errors
/// Returns [`DotProductError::LengthMismatch`] if the lengths differ.
pub fn dot(x: &[f32], y: &[f32]) -> Result<f32, DotProductError> {
    if x.len() != y.len() {
        return Err(DotProductError::LengthMismatch {
            requested: x.len(),
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    naive_dot_product(x, y, x.len())
}
