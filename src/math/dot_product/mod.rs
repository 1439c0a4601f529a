//! # Dot Product
//!
//! `dot(x, y) = Σ x[i] * y[i]`, summed in ascending index order into a
//! single `f32` accumulator.
//!
//! The summation order is the quantity under study: reordering, unrolling,
//! SIMD lanes or fused multiply-add all change the low bits of the result.
//! Every variant in [`code::available_variants`] keeps the naive order, and
//! [`verify`] demands bit-identical results.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use tracing::debug;

use crate::error::DotProductError;

/// Result of one variant on a given input pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantValue {
    pub name: &'static str,
    pub value: f32,
}

/// Run every available variant once on `x` and `y`.
pub fn evaluate_variants(x: &[f32], y: &[f32]) -> Result<Vec<VariantValue>, DotProductError> {
    code::available_variants()
        .iter()
        .map(|v| {
            (v.function)(x, y).map(|value| VariantValue {
                name: v.name,
                value,
            })
        })
        .collect()
}

/// Verify that every variant matches the reference bit for bit.
pub fn verify(x: &[f32], y: &[f32]) -> Result<(), String> {
    let variants = code::available_variants();
    let reference = variants
        .iter()
        .find(|v| v.name == REFERENCE_VARIANT)
        .ok_or("No 'naive' variant found for reference")?;

    let expected = (reference.function)(x, y).map_err(|e| e.to_string())?;

    for variant in &variants {
        if variant.name == REFERENCE_VARIANT {
            continue;
        }

        let result = (variant.function)(x, y).map_err(|e| e.to_string())?;
        if result.to_bits() != expected.to_bits() {
            return Err(format!(
                "Variant '{}' failed verification. Expected {:e} ({:#010x}), got {:e} ({:#010x})",
                variant.name,
                expected,
                expected.to_bits(),
                result,
                result.to_bits()
            ));
        }
        debug!(variant = variant.name, "variant matches reference");
    }

    Ok(())
}
