//! Probe collector.
//!
//! A probe is a named, labeled scalar recorded during a run, e.g. the result
//! of one dot product variant. Probes are held by an explicit [`Probes`]
//! value and written out once at the end of the run.

use std::io::Write;

use tracing::debug;

use crate::error::ProbeError;

/// One recorded measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct Probe {
    pub test: String,
    pub variable: String,
    pub value: f64,
}

/// Ordered collection of probes, keyed by `(test, variable)`.
#[derive(Debug, Default)]
pub struct Probes {
    entries: Vec<Probe>,
}

impl Probes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value under `test`/`variable`.
    ///
    /// # Errors
    /// Returns [`ProbeError::Duplicate`] if the key was already recorded.
    pub fn record(
        &mut self,
        test: &str,
        variable: &str,
        value: impl Into<f64>,
    ) -> Result<(), ProbeError> {
        if self.get(test, variable).is_some() {
            return Err(ProbeError::Duplicate {
                test: test.to_string(),
                variable: variable.to_string(),
            });
        }

        let value = value.into();
        debug!(test, variable, value, "probe recorded");
        self.entries.push(Probe {
            test: test.to_string(),
            variable: variable.to_string(),
            value,
        });
        Ok(())
    }

    /// Look up a recorded value.
    pub fn get(&self, test: &str, variable: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|p| p.test == test && p.variable == variable)
            .map(|p| p.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Probe> {
        self.entries.iter()
    }

    /// Remove and return every probe, in recording order.
    pub fn drain(&mut self) -> Vec<Probe> {
        std::mem::take(&mut self.entries)
    }

    /// Write every probe as CSV (`test,variable,value`) and empty the collector.
    ///
    /// Values are written with 17 significant digits so the `f32` results
    /// survive the round trip exactly.
    pub fn dump<W: Write>(&mut self, mut out: W) -> Result<usize, ProbeError> {
        let probes = self.drain();

        writeln!(out, "test,variable,value")?;
        for probe in &probes {
            writeln!(out, "{},{},{:.16e}", probe.test, probe.variable, probe.value)?;
        }
        out.flush()?;

        debug!(count = probes.len(), "probes dumped");
        Ok(probes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut probes = Probes::new();
        probes.record("dotprod_test", "naive", 32.0f32).unwrap();
        assert_eq!(probes.get("dotprod_test", "naive"), Some(32.0));
        assert_eq!(probes.get("dotprod_test", "other"), None);
        assert_eq!(probes.len(), 1);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut probes = Probes::new();
        probes.record("dotprod_test", "naive", 1.0).unwrap();
        let err = probes.record("dotprod_test", "naive", 2.0).unwrap_err();
        assert!(matches!(err, ProbeError::Duplicate { .. }));
        // First value wins.
        assert_eq!(probes.get("dotprod_test", "naive"), Some(1.0));
    }

    #[test]
    fn test_same_variable_different_test() {
        let mut probes = Probes::new();
        probes.record("a", "naive", 1.0).unwrap();
        probes.record("b", "naive", 2.0).unwrap();
        assert_eq!(probes.len(), 2);
    }

    #[test]
    fn test_drain_empties_in_order() {
        let mut probes = Probes::new();
        probes.record("t", "first", 1.0).unwrap();
        probes.record("t", "second", 2.0).unwrap();

        let drained = probes.drain();
        assert!(probes.is_empty());
        assert_eq!(drained[0].variable, "first");
        assert_eq!(drained[1].variable, "second");
    }

    #[test]
    fn test_dump_csv() {
        let mut probes = Probes::new();
        probes.record("dotprod_test", "naive", 0.5f32).unwrap();
        probes.record("dotprod_test", "c-naive", 0.25f32).unwrap();

        let mut buf = Vec::new();
        let written = probes.dump(&mut buf).unwrap();
        assert_eq!(written, 2);
        assert!(probes.is_empty());

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "test,variable,value");
        assert_eq!(lines[1], "dotprod_test,naive,5.0000000000000000e-1");
        assert_eq!(lines[2], "dotprod_test,c-naive,2.5000000000000000e-1");
    }

    #[test]
    fn test_dump_preserves_f32_bits() {
        let value = 1017.123_4f32;
        let mut probes = Probes::new();
        probes.record("t", "v", value).unwrap();

        let mut buf = Vec::new();
        probes.dump(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let field = text.lines().nth(1).unwrap().rsplit(',').next().unwrap();
        let parsed: f64 = field.parse().unwrap();
        assert_eq!((parsed as f32).to_bits(), value.to_bits());
    }
}
