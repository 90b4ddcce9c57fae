//! Configuration options for the region-based dealiaser.

use crate::result::{Error, Result};

/// Options for region-based dealiasing.
///
/// Use the builder methods to configure options, then pass to
/// [`dealias_sweep`](crate::dealias_sweep).
///
/// # Example
///
/// ```
/// use dealias_region::DealiasOptions;
///
/// // Defaults: 3 interval splits, gap jumps up to 100 gates, centered output
/// let options = DealiasOptions::new();
///
/// // A sector scan with no gap jumping along rays
/// let options = DealiasOptions::new()
///     .with_rays_wrap_around(false)
///     .with_skip_along_ray(0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DealiasOptions {
    /// Number of equal-width segments the Nyquist interval is split into when
    /// finding regions of similar velocity. More splits create more initial
    /// regions, which takes longer to process but may dealias cleaner. Not
    /// used when `interval_limits` is set.
    pub interval_splits: usize,

    /// Explicit velocity limits used for finding regions of similar velocity,
    /// overriding `interval_splits`. Must be strictly increasing and cover
    /// the entire Nyquist interval.
    pub interval_limits: Option<Vec<f32>>,

    /// Maximum number of excluded rays to jump over when connecting regions
    /// across a ray gap. Zero disables connecting regions across excluded
    /// rays.
    pub skip_between_rays: usize,

    /// Maximum number of excluded gates to jump over when connecting regions
    /// along a ray. Zero disables connecting regions across excluded gates.
    pub skip_along_ray: usize,

    /// Whether to shift each sweep after dealiasing so the average number of
    /// unfoldings is near zero. Without centering a sweep may come out
    /// uniformly under- or over-folded by the Nyquist interval.
    pub centered: bool,

    /// Whether the first and last rays of the sweep are adjacent, as in a
    /// full 360-degree PPI scan.
    pub rays_wrap_around: bool,

    /// Whether excluded gates keep their measured velocity in the output.
    /// When false, excluded gates are set to `f32::NAN` instead.
    pub keep_original: bool,
}

impl Default for DealiasOptions {
    fn default() -> Self {
        Self {
            interval_splits: 3,
            interval_limits: None,
            skip_between_rays: 100,
            skip_along_ray: 100,
            centered: true,
            rays_wrap_around: true,
            keep_original: true,
        }
    }
}

impl DealiasOptions {
    /// Creates options with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of equal-width Nyquist interval segments.
    pub fn with_interval_splits(mut self, interval_splits: usize) -> Self {
        self.interval_splits = interval_splits;
        self
    }

    /// Sets explicit interval limits, overriding the split count.
    pub fn with_interval_limits(mut self, interval_limits: Vec<f32>) -> Self {
        self.interval_limits = Some(interval_limits);
        self
    }

    /// Sets the maximum excluded-ray gap to jump when connecting regions.
    pub fn with_skip_between_rays(mut self, skip_between_rays: usize) -> Self {
        self.skip_between_rays = skip_between_rays;
        self
    }

    /// Sets the maximum excluded-gate gap to jump along a ray.
    pub fn with_skip_along_ray(mut self, skip_along_ray: usize) -> Self {
        self.skip_along_ray = skip_along_ray;
        self
    }

    /// Sets whether the per-sweep centering shift is applied.
    pub fn with_centering(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Sets whether the first and last rays are treated as adjacent.
    pub fn with_rays_wrap_around(mut self, rays_wrap_around: bool) -> Self {
        self.rays_wrap_around = rays_wrap_around;
        self
    }

    /// Sets whether excluded gates keep their measured velocity.
    pub fn with_keep_original(mut self, keep_original: bool) -> Self {
        self.keep_original = keep_original;
        self
    }

    /// Validates the option combination, independent of any particular sweep.
    pub(crate) fn validate(&self) -> Result<()> {
        match &self.interval_limits {
            Some(limits) => {
                if limits.len() < 2 {
                    return Err(Error::IntervalLimitsTooShort {
                        found: limits.len(),
                    });
                }
                for (index, pair) in limits.windows(2).enumerate() {
                    if pair[1] <= pair[0] {
                        return Err(Error::IntervalLimitsNotIncreasing { index: index + 1 });
                    }
                }
            }
            None => {
                if self.interval_splits == 0 {
                    return Err(Error::NoIntervalSplits);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DealiasOptions::new();

        assert_eq!(options.interval_splits, 3);
        assert_eq!(options.interval_limits, None);
        assert_eq!(options.skip_between_rays, 100);
        assert_eq!(options.skip_along_ray, 100);
        assert!(options.centered);
        assert!(options.rays_wrap_around);
        assert!(options.keep_original);
    }

    #[test]
    fn test_builder_methods_chain() {
        let options = DealiasOptions::new()
            .with_interval_splits(5)
            .with_skip_between_rays(2)
            .with_skip_along_ray(3)
            .with_centering(false)
            .with_rays_wrap_around(false)
            .with_keep_original(false);

        assert_eq!(options.interval_splits, 5);
        assert_eq!(options.skip_between_rays, 2);
        assert_eq!(options.skip_along_ray, 3);
        assert!(!options.centered);
        assert!(!options.rays_wrap_around);
        assert!(!options.keep_original);
    }

    #[test]
    fn test_validate_rejects_zero_splits() {
        let options = DealiasOptions::new().with_interval_splits(0);

        assert_eq!(options.validate(), Err(Error::NoIntervalSplits));
    }

    #[test]
    fn test_validate_rejects_short_limits() {
        let options = DealiasOptions::new().with_interval_limits(vec![0.0]);

        assert_eq!(
            options.validate(),
            Err(Error::IntervalLimitsTooShort { found: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_unsorted_limits() {
        let options = DealiasOptions::new().with_interval_limits(vec![-10.0, 5.0, 5.0, 10.0]);

        assert_eq!(
            options.validate(),
            Err(Error::IntervalLimitsNotIncreasing { index: 2 })
        );
    }

    #[test]
    fn test_validate_accepts_explicit_limits() {
        let options = DealiasOptions::new().with_interval_limits(vec![-10.0, 0.0, 10.0]);

        assert_eq!(options.validate(), Ok(()));
    }
}
