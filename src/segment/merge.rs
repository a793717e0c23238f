//! Merge policy between displayed and newly computed segmentations
//!
//! More fragments is treated as the better breakdown. Ties keep what is
//! already displayed, so a shown segmentation is never replaced by a coarser
//! one no matter which result arrives last.

use crate::core::Fragment;

/// Whether `candidate` should replace `current`
#[inline]
#[must_use]
pub fn prefers(current: &[Fragment], candidate: &[Fragment]) -> bool {
    candidate.len() > current.len()
}

/// Keep whichever segmentation has strictly more fragments
///
/// # Examples
/// ```
/// use morpheme_lab::core::{Fragment, Role};
/// use morpheme_lab::segment::merge;
///
/// let placeholder = vec![Fragment::new("rested", Role::Root)];
/// let split = vec![Fragment::new("rest", Role::Root), Fragment::new("ed", Role::Suffix)];
///
/// let shown = merge(placeholder, split.clone());
/// assert_eq!(shown, split);
///
/// // A later, coarser result does not regress the display
/// let shown = merge(shown, vec![Fragment::new("rested", Role::Root)]);
/// assert_eq!(shown.len(), 2);
/// ```
#[must_use]
pub fn merge(current: Vec<Fragment>, candidate: Vec<Fragment>) -> Vec<Fragment> {
    if prefers(&current, &candidate) {
        candidate
    } else {
        current
    }
}
