// SPDX-License-Identifier: MPL-2.0
//! Scroll-linked value transforms.
//!
//! Parallax layers map a continuous scroll progress onto an offset, opacity or
//! scale. The transforms here are pure and hold no state between calls; they
//! are unrelated to the visibility observer.

use crate::error::MotionError;

/// Linearly maps `progress` from `input_range` onto `output_range`.
///
/// Values outside the input range are clamped to the nearest end of the
/// output range. A zero-width input range returns the output start below the
/// point and the output end at or above it.
///
/// # Example
///
/// ```
/// use iced_reveal::motion::parallax::offset;
///
/// assert_eq!(offset(0.5, (0.0, 1.0), (100.0, -100.0)), 0.0);
/// assert_eq!(offset(2.0, (0.0, 1.0), (100.0, -100.0)), -100.0);
/// ```
#[must_use]
pub fn offset(progress: f32, input_range: (f32, f32), output_range: (f32, f32)) -> f32 {
    let (in_start, in_end) = input_range;
    let (out_start, out_end) = output_range;

    if progress.is_nan() {
        return out_start;
    }

    let span = in_end - in_start;
    if span == 0.0 {
        return if progress < in_start { out_start } else { out_end };
    }

    let t = ((progress - in_start) / span).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// A piecewise-linear transform through several stops.
///
/// Used for layers that fade in and out over a section's scroll range, e.g.
/// opacity `[0, 0.3, 0.7, 1] -> [0, 1, 1, 0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    inputs: Vec<f32>,
    outputs: Vec<f32>,
}

impl Keyframes {
    /// Builds a transform from matching input and output stops.
    ///
    /// # Errors
    ///
    /// Fails if the stop counts differ, fewer than two stops are given, or
    /// the inputs are not finite and non-decreasing.
    pub fn new(inputs: Vec<f32>, outputs: Vec<f32>) -> Result<Self, MotionError> {
        if inputs.len() != outputs.len() {
            return Err(MotionError::MismatchedStops {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(MotionError::TooFewStops(inputs.len()));
        }
        let sorted = inputs.iter().all(|value| value.is_finite())
            && inputs.windows(2).all(|pair| pair[0] <= pair[1]);
        if !sorted {
            return Err(MotionError::UnsortedStops);
        }
        Ok(Self { inputs, outputs })
    }

    /// Two-stop transform; equivalent to [`offset`].
    pub fn linear(input_range: (f32, f32), output_range: (f32, f32)) -> Result<Self, MotionError> {
        Self::new(
            vec![input_range.0, input_range.1],
            vec![output_range.0, output_range.1],
        )
    }

    /// Samples the transform, clamping outside the first and last stop.
    #[must_use]
    pub fn sample(&self, progress: f32) -> f32 {
        let last = self.inputs.len() - 1;
        if progress.is_nan() || progress <= self.inputs[0] {
            return self.outputs[0];
        }
        if progress >= self.inputs[last] {
            return self.outputs[last];
        }

        // First segment whose end is past the progress.
        let segment = self
            .inputs
            .windows(2)
            .position(|pair| progress < pair[1])
            .unwrap_or(last - 1);

        offset(
            progress,
            (self.inputs[segment], self.inputs[segment + 1]),
            (self.outputs[segment], self.outputs[segment + 1]),
        )
    }
}
