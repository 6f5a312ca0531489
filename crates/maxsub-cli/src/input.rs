// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Where the arrays to solve come from. `--array` arguments come first,
//! followed by every array of the `--file` input. The built-in reference
//! arrays are used only when neither is given.

use anyhow::{Context, Result};
use maxsub_model::{loading::SequenceLoader, sequence::Sequence};
use maxsub_solver::reference::REFERENCE_CASES;
use std::path::Path;

/// An input array together with a human readable origin for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledInput {
    pub label: String,
    pub sequence: Sequence<i64>,
}

/// Collects the inputs named on the command line. Without any `--array` or
/// `--file`, the reference arrays are used.
pub fn collect(arrays: &[String], file: Option<&Path>) -> Result<Vec<LabeledInput>> {
    let loader = SequenceLoader::<i64>::new();
    let mut inputs = Vec::new();

    for (i, raw) in arrays.iter().enumerate() {
        let sequence = loader
            .parse_line(raw)
            .with_context(|| format!("invalid --array value #{}: '{}'", i + 1, raw))?;
        inputs.push(LabeledInput {
            label: format!("array #{}", i + 1),
            sequence,
        });
    }

    if let Some(path) = file {
        let sequences = loader
            .from_path(path)
            .with_context(|| format!("failed to load arrays from {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = sequences.len(), "arrays loaded");
        inputs.extend(
            sequences
                .into_iter()
                .enumerate()
                .map(|(i, sequence)| LabeledInput {
                    label: format!("{} #{}", path.display(), i + 1),
                    sequence,
                }),
        );
    }

    if arrays.is_empty() && file.is_none() {
        inputs = reference_inputs()?;
    }

    Ok(inputs)
}

fn reference_inputs() -> Result<Vec<LabeledInput>> {
    REFERENCE_CASES
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let sequence = Sequence::from_slice(case.values)
                .with_context(|| format!("reference array #{} is empty", i + 1))?;
            Ok(LabeledInput {
                label: format!("reference #{}", i + 1),
                sequence,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_reference_arrays() {
        let inputs = collect(&[], None).unwrap();
        assert_eq!(inputs.len(), REFERENCE_CASES.len());
        assert_eq!(inputs[0].label, "reference #1");
        assert_eq!(inputs[0].sequence.as_slice(), REFERENCE_CASES[0].values);
    }

    #[test]
    fn test_array_arguments_replace_reference_arrays() {
        let arrays = vec!["1 -1 1".to_string(), "[5]".to_string()];
        let inputs = collect(&arrays, None).unwrap();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].label, "array #1");
        assert_eq!(inputs[0].sequence.as_slice(), &[1, -1, 1]);
        assert_eq!(inputs[1].sequence.as_slice(), &[5]);
    }

    #[test]
    fn test_array_arguments_and_file_are_combined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arrays.txt");
        std::fs::write(&path, "# two arrays\n[-2, 3]\n\n4 -1 4\n").unwrap();

        let arrays = vec!["7".to_string()];
        let inputs = collect(&arrays, Some(path.as_path())).unwrap();

        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0].label, "array #1");
        assert_eq!(inputs[0].sequence.as_slice(), &[7]);
        assert_eq!(inputs[1].label, format!("{} #1", path.display()));
        assert_eq!(inputs[1].sequence.as_slice(), &[-2, 3]);
        assert_eq!(inputs[2].sequence.as_slice(), &[4, -1, 4]);
    }

    #[test]
    fn test_invalid_array_argument_names_the_argument() {
        let arrays = vec!["1 x".to_string()];
        let err = collect(&arrays, None).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid --array value #1"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = collect(&[], Some(Path::new("/nonexistent/maxsub.txt"))).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to load arrays"));
    }
}
