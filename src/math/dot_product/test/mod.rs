//! Tests for dot product implementations.

#[cfg(test)]
mod tests {
    use crate::error::DotProductError;
    use crate::inputs::{InputSource, DEFAULT_SEED, DEFAULT_SIZE};
    use crate::math::dot_product::*;
    use crate::utils::TimingConfig;

    /// Ascending-order single-accumulator sum, written independently of the kernels.
    fn reference_sum(x: &[f32], y: &[f32]) -> f32 {
        let mut acc = 0.0f32;
        let mut i = 0;
        while i < x.len() {
            acc = acc + x[i] * y[i];
            i += 1;
        }
        acc
    }

    fn seeded_pair(n: usize) -> (Vec<f32>, Vec<f32>) {
        InputSource::seeded(DEFAULT_SEED).vector_pair(n).unwrap()
    }

    #[test]
    fn test_naive_basic() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        assert_eq!(naive_dot_product(&x, &y, 3), Ok(32.0));
        assert_eq!(dot(&x, &y), Ok(32.0));
    }

    #[test]
    fn test_naive_zero_vector() {
        let x = [0.0, 0.0];
        let y = [1.0, 1.0];
        assert_eq!(naive_dot_product(&x, &y, 2), Ok(0.0));
    }

    #[test]
    fn test_naive_zero_length() {
        let empty: [f32; 0] = [];
        let result = naive_dot_product(&empty, &empty, 0).unwrap();
        assert_eq!(result.to_bits(), 0.0f32.to_bits());

        // n = 0 is valid whatever the inputs hold.
        assert_eq!(naive_dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0], 0), Ok(0.0));
        assert_eq!(dot(&empty, &empty), Ok(0.0));
    }

    #[test]
    fn test_naive_prefix() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        assert_eq!(naive_dot_product(&x, &y, 2), Ok(14.0));
    }

    #[test]
    fn test_naive_length_mismatch() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0];
        assert_eq!(
            naive_dot_product(&x, &y, 3),
            Err(DotProductError::LengthMismatch {
                requested: 3,
                x_len: 3,
                y_len: 2
            })
        );
        assert!(matches!(
            naive_dot_product(&y, &x, 3),
            Err(DotProductError::LengthMismatch { .. })
        ));
        assert!(matches!(dot(&x, &y), Err(DotProductError::LengthMismatch { .. })));
    }

    #[test]
    fn test_variants_reject_mismatch() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0];
        for variant in available_variants() {
            assert!(
                (variant.function)(&x, &y).is_err(),
                "variant '{}' accepted mismatched lengths",
                variant.name
            );
        }
    }

    #[test]
    fn test_naive_bit_exact_against_reference() {
        for &n in &[1usize, 3, 17, 1023, DEFAULT_SIZE] {
            let (x, y) = seeded_pair(n);
            let result = naive_dot_product(&x, &y, n).unwrap();
            assert_eq!(
                result.to_bits(),
                reference_sum(&x, &y).to_bits(),
                "bit mismatch for n = {}",
                n
            );
        }
    }

    #[test]
    fn test_naive_differs_from_pairwise_order() {
        // Large + small values where the naive order loses the small terms.
        let x = [1.0e8f32, 1.0, 1.0, 1.0, 1.0, -1.0e8];
        let y = [1.0f32; 6];
        let naive = dot(&x, &y).unwrap();
        assert_eq!(naive, 0.0);
        let pairwise = (x[0] + x[5]) + ((x[1] + x[2]) + (x[3] + x[4]));
        assert_eq!(pairwise, 4.0);
    }

    #[test]
    fn test_naive_commutative() {
        let (x, y) = seeded_pair(DEFAULT_SIZE);
        let xy = dot(&x, &y).unwrap();
        let yx = dot(&y, &x).unwrap();
        assert_eq!(xy.to_bits(), yx.to_bits());
    }

    #[test]
    fn test_naive_deterministic() {
        let (x, y) = seeded_pair(DEFAULT_SIZE);
        let first = dot(&x, &y).unwrap();
        for _ in 0..10 {
            assert_eq!(dot(&x, &y).unwrap().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_seeded_run_in_expected_range() {
        // Mean of the product of two U[0,1) values is 1/4.
        let (x, y) = seeded_pair(DEFAULT_SIZE);
        let result = dot(&x, &y).unwrap();
        assert!(result > 900.0 && result < 1150.0, "unexpected result {}", result);
    }

    #[test]
    fn test_reference_variant_listed_first() {
        let variants = available_variants();
        assert_eq!(variants[0].name, REFERENCE_VARIANT);
        assert!(variants.iter().any(|v| v.name == "iter-fold"));
        assert_eq!(variants.iter().any(|v| v.name == "c-naive"), C_IMPL_AVAILABLE);
    }

    #[test]
    fn test_verify_all_variants() {
        for &n in &[0usize, 1, 1023, DEFAULT_SIZE] {
            let (x, y) = seeded_pair(n);
            if let Err(e) = verify(&x, &y) {
                panic!("verification failed for n = {}: {}", n, e);
            }
        }
    }

    #[test]
    fn test_evaluate_variants_agree() {
        let (x, y) = seeded_pair(512);
        let values = evaluate_variants(&x, &y).unwrap();
        assert_eq!(values.len(), available_variants().len());
        let reference = values[0].value.to_bits();
        assert!(values.iter().all(|v| v.value.to_bits() == reference));
    }

    #[test]
    fn test_run_all_benchmarks() {
        let (x, y) = seeded_pair(64);
        let config = TimingConfig {
            runs_per_variant: 3,
            warmup_iterations: 1,
        };
        let results = bench::run_all_benchmarks(&x, &y, &config, &mut InputSource::seeded(5));
        assert_eq!(results.len(), available_variants().len());

        let expected = f64::from(dot(&x, &y).unwrap());
        for result in &results {
            assert_eq!(result.runs, 3);
            assert_eq!(result.result_sample, Some(expected));
        }
    }
}
