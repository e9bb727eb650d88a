//! Fixed-size chunking and sliding windows over a sequence.
//!
//! - [`chunked`] splits a sequence into consecutive, non-overlapping chunks.
//! - [`windowed`] produces windows of a fixed size starting every `step`
//!   elements, with an optional shorter tail window (see [`WindowConfig`]).
//!
//! Both operations reject a zero `size` (and [`windowed`] a zero `step`) with
//! an error instead of producing an empty or unbounded result.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Options for [`windowed`].
///
/// Deserializes with defaults for missing fields, so `{}` is the default
/// configuration and `{"partial": true}` keeps `step = 1`.
///
/// # Example
/// ```
/// use seqkit::WindowConfig;
///
/// let cfg = WindowConfig::default().with_step(3).with_partial(true);
/// assert_eq!(cfg.step, 3);
/// assert!(cfg.partial);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Distance between the start indices of consecutive windows. Must be >= 1.
    pub step: usize,
    /// Emit a final window shorter than `size` when the input runs out.
    pub partial: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            step: 1,
            partial: false,
        }
    }
}

impl WindowConfig {
    /// Replace the step.
    #[must_use]
    pub const fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Replace the partial-tail policy.
    #[must_use]
    pub const fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// Check that the configuration can drive a window scan.
    ///
    /// # Errors
    /// Returns an error if `step` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            debug!(step = self.step, "rejecting window config");
            bail!("window step must be at least 1, got {}", self.step);
        }
        Ok(())
    }
}

fn check_size(size: usize, what: &str) -> Result<()> {
    if size == 0 {
        debug!(size, what, "rejecting zero size");
        bail!("{what} size must be at least 1, got {size}");
    }
    Ok(())
}

/// Split `items` into consecutive chunks of `size` elements.
///
/// Every chunk but the last has exactly `size` elements; the last holds the
/// remainder. Flattening the result reproduces `items`. An empty input gives
/// no chunks.
///
/// # Errors
/// Returns an error if `size` is zero.
///
/// # Example
/// ```
/// use seqkit::chunked;
///
/// let chunks = chunked(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunked<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    check_size(size, "chunk")?;
    let out: Vec<Vec<T>> = items.chunks(size).map(<[T]>::to_vec).collect();
    trace!(input = items.len(), size, chunks = out.len(), "chunked");
    Ok(out)
}

/// Sliding windows of `size` elements starting at `0, step, 2*step, ...`.
///
/// Windows overlap when `step < size` and skip elements when `step > size`.
/// Without `partial`, the scan stops at the first start index that has fewer
/// than `size` elements left, so trailing elements may be dropped. With
/// `partial`, the window at that start index is emitted too (if non-empty),
/// and then the scan stops. At most one partial window is produced, even when
/// `step < size` would leave several shorter windows: `[1, 2, 3, 4, 5]` with
/// size 3, step 1 and `partial` ends with `[4, 5]`, not `[4, 5], [5]`.
///
/// # Errors
/// Returns an error if `size` or `config.step` is zero.
///
/// # Example
/// ```
/// use seqkit::{windowed, WindowConfig};
///
/// let xs = [1, 2, 3, 4, 5];
/// let full = windowed(&xs, 2, WindowConfig::default()).unwrap();
/// assert_eq!(full, vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]);
///
/// let cfg = WindowConfig::default().with_step(3).with_partial(true);
/// assert_eq!(windowed(&xs, 3, cfg).unwrap(), vec![vec![1, 2, 3], vec![4, 5]]);
/// ```
pub fn windowed<T: Clone>(items: &[T], size: usize, config: WindowConfig) -> Result<Vec<Vec<T>>> {
    check_size(size, "window")?;
    config.validate()?;

    let mut out = Vec::new();
    let mut start = 0;
    while start < items.len() {
        let remaining = items.len() - start;
        if remaining < size {
            if config.partial {
                out.push(items[start..].to_vec());
            }
            break;
        }
        out.push(items[start..start + size].to_vec());
        start = start.saturating_add(config.step);
    }

    trace!(
        input = items.len(),
        size,
        step = config.step,
        partial = config.partial,
        windows = out.len(),
        "windowed"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_has_no_tail() {
        let w = windowed(&[1, 2, 3, 4], 2, WindowConfig::default().with_step(2).with_partial(true))
            .unwrap();
        assert_eq!(w, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn overlapping_partial_emits_single_tail() {
        let w = windowed(&[1, 2, 3, 4, 5], 3, WindowConfig::default().with_partial(true)).unwrap();
        assert_eq!(w, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5], vec![4, 5]]);
    }

    #[test]
    fn zero_step_is_rejected() {
        let err = windowed(&[1, 2, 3], 2, WindowConfig::default().with_step(0)).unwrap_err();
        assert!(err.to_string().contains("step"));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(chunked::<u8>(&[], 0).is_err());
        assert!(windowed::<u8>(&[], 0, WindowConfig::default()).is_err());
    }
}
