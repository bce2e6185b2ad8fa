//! Visibility-triggered marking: deferred images and staggered entrances.

use serde::Deserialize;

/// What to do with a lazy image once it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyImageAction {
    /// Image already decoded, mark it now
    MarkLoaded,
    /// Wait for the `load` event before marking
    AwaitLoad,
}

impl LazyImageAction {
    /// Decide based on the image's `complete` flag.
    pub fn for_image(complete: bool) -> Self {
        if complete {
            LazyImageAction::MarkLoaded
        } else {
            LazyImageAction::AwaitLoad
        }
    }
}

/// Descendants of a revealed block that animate in one after another.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaggerGroup {
    /// Selector evaluated inside the revealed block
    pub selector: String,
    /// Delay added per item
    pub interval_ms: u32,
}

impl StaggerGroup {
    /// Group matching `selector`, spaced `interval_ms` apart.
    pub fn new(selector: impl Into<String>, interval_ms: u32) -> Self {
        Self {
            selector: selector.into(),
            interval_ms,
        }
    }

    /// Delays for `count` matched items.
    pub fn delays(&self, count: usize) -> impl Iterator<Item = u32> + use<> {
        stagger_delays(count, self.interval_ms)
    }
}

/// Delay for each of `count` items: `index × interval_ms`, saturating.
pub fn stagger_delays(count: usize, interval_ms: u32) -> impl Iterator<Item = u32> {
    (0..count).map(move |i| u32::try_from(i).map_or(u32::MAX, |i| i.saturating_mul(interval_ms)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complete_image_marked_immediately() {
        assert_eq!(LazyImageAction::for_image(true), LazyImageAction::MarkLoaded);
        assert_eq!(LazyImageAction::for_image(false), LazyImageAction::AwaitLoad);
    }

    #[test]
    fn test_stagger_delays_increase_per_item() {
        let delays: Vec<u32> = stagger_delays(4, 150).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
    }

    #[test]
    fn test_groups_stagger_independently() {
        let stats = StaggerGroup::new(".stat-item", 200);
        let features = StaggerGroup::new(".feature-item", 100);
        assert_eq!(stats.delays(3).collect::<Vec<_>>(), vec![0, 200, 400]);
        assert_eq!(features.delays(3).collect::<Vec<_>>(), vec![0, 100, 200]);
    }

    #[test]
    fn test_empty_group_schedules_nothing() {
        assert_eq!(stagger_delays(0, 150).count(), 0);
    }

    #[test]
    fn test_delays_saturate() {
        let last = stagger_delays(3, u32::MAX).last();
        assert_eq!(last, Some(u32::MAX));
    }
}
