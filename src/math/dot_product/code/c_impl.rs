//! FFI binding for the C kernel.

use crate::error::DotProductError;

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_float;

    extern "C" {
        pub fn dotprod_c_naive(x: *const c_float, y: *const c_float, n: size_t) -> c_float;
    }
}

/// Whether the build script compiled the C kernel.
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

/// C naive kernel wrapper.
///
/// The length check happens here, so the C side never reads past either slice.
#[cfg(c_implementation_active)]
pub fn dot_product_c_naive(x: &[f32], y: &[f32]) -> Result<f32, DotProductError> {
    if x.len() != y.len() {
        return Err(DotProductError::LengthMismatch {
            requested: x.len(),
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    // SAFETY: both pointers are valid for `x.len()` reads, checked above.
    Ok(unsafe { ffi::dotprod_c_naive(x.as_ptr(), y.as_ptr(), x.len()) })
}

// Never listed in the variant table when the kernel is missing.
#[cfg(not(c_implementation_active))]
pub fn dot_product_c_naive(_x: &[f32], _y: &[f32]) -> Result<f32, DotProductError> {
    panic!("C implementation not compiled (requires GCC, Clang, or MSVC)")
}
