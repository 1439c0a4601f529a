//! Dot product implementations.
//!
//! Every variant computes the same naive summation (ascending index, one
//! accumulator) and must agree with [`naive_dot_product`] bit for bit.

pub mod c_impl;
mod iter_fold;
mod naive;

pub use c_impl::{dot_product_c_naive, C_IMPL_AVAILABLE};
pub use iter_fold::dot_product_iter_fold;
pub use naive::{dot, naive_dot_product};

use crate::error::DotProductError;
use crate::utils::VariantInfo;

/// Name of the reference variant.
pub const REFERENCE_VARIANT: &str = "naive";

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[f32], &[f32]) -> Result<f32, DotProductError>;

/// Get all variants available in this build
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: REFERENCE_VARIANT,
            description: "Indexed loop with a single accumulator",
            function: dot,
        },
        VariantInfo {
            name: "iter-fold",
            description: "Iterator zip + fold, same summation order",
            function: dot_product_iter_fold,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-naive",
            description: "C kernel built without fast-math or FMA contraction",
            function: dot_product_c_naive,
        });
    }

    variants
}
