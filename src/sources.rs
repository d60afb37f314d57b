use crate::pos::Pos;
use serde::Deserialize;

pub const MIN_SOURCES: usize = 1;
pub const MAX_SOURCES: usize = 6;
/// Pointer distance (px) under which a source counts as hit.
pub const HIT_RADIUS: f32 = 10.0;

/// A point emitter of circular waves.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct WaveSource {
    pub x: f32,
    pub y: f32,
    /// Stored with every source but not read by either renderer yet.
    #[serde(default = "default_frequency")]
    pub frequency: f32,
}

fn default_frequency() -> f32 {
    1.0
}

impl WaveSource {
    pub fn new(x: f32, y: f32) -> Self {
        WaveSource {
            x,
            y,
            frequency: default_frequency(),
        }
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

/// Ordered set of sources. Identity is the index, and the count always stays
/// within `MIN_SOURCES..=MAX_SOURCES`.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceSet {
    sources: Vec<WaveSource>,
}

impl SourceSet {
    /// Builds a set from `sources`, truncated to `MAX_SOURCES`. An empty input
    /// yields the single source `add` would have created first.
    pub fn new(mut sources: Vec<WaveSource>) -> Self {
        sources.truncate(MAX_SOURCES);
        if sources.is_empty() {
            sources.push(WaveSource::new(100.0, 300.0));
        }
        SourceSet { sources }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WaveSource> {
        self.sources.iter()
    }

    pub fn as_slice(&self) -> &[WaveSource] {
        &self.sources
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut WaveSource> {
        self.sources.get_mut(idx)
    }

    /// Appends a source staggered along x. Returns its index, or `None` when full.
    pub fn add(&mut self) -> Option<usize> {
        let count = self.sources.len();
        if count >= MAX_SOURCES {
            return None;
        }
        self.sources
            .push(WaveSource::new(100.0 + count as f32 * 100.0, 300.0));
        Some(count)
    }

    /// Removes the most recently added source, keeping at least one.
    pub fn remove(&mut self) -> Option<WaveSource> {
        if self.sources.len() <= MIN_SOURCES {
            return None;
        }
        self.sources.pop()
    }

    /// Index of the first source, in insertion order, closer than `HIT_RADIUS`.
    pub fn find_near(&self, p: Pos) -> Option<usize> {
        self.sources
            .iter()
            .position(|source| source.pos().distance(&p) < HIT_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three() -> SourceSet {
        SourceSet::new(vec![
            WaveSource::new(200.0, 300.0),
            WaveSource::new(400.0, 300.0),
            WaveSource::new(600.0, 300.0),
        ])
    }

    #[test]
    fn add_staggers_new_sources() {
        let mut set = three();
        assert_eq!(set.add(), Some(3));
        assert_eq!(set.as_slice()[3], WaveSource::new(400.0, 300.0));
        assert_eq!(set.as_slice()[3].frequency, 1.0);
    }

    #[test]
    fn add_is_ignored_when_full() {
        let mut set = three();
        while set.len() < MAX_SOURCES {
            set.add();
        }
        let before = set.clone();
        assert_eq!(set.add(), None);
        assert_eq!(set, before);
    }

    #[test]
    fn remove_pops_last_and_keeps_one() {
        let mut set = three();
        assert_eq!(set.remove(), Some(WaveSource::new(600.0, 300.0)));
        assert_eq!(set.remove(), Some(WaveSource::new(400.0, 300.0)));
        let before = set.clone();
        assert_eq!(set.remove(), None);
        assert_eq!(set, before);
    }

    #[test]
    fn count_stays_in_bounds_for_any_sequence() {
        let mut set = three();
        let ops = "aaaaarrrrrrrrraararaaaaaaaarrrrarr";
        for op in ops.chars() {
            match op {
                'a' => {
                    set.add();
                }
                _ => {
                    set.remove();
                }
            }
            assert!((MIN_SOURCES..=MAX_SOURCES).contains(&set.len()));
        }
    }

    #[test]
    fn new_clamps_to_bounds() {
        assert_eq!(SourceSet::new(vec![]).len(), 1);
        let many = vec![WaveSource::new(0.0, 0.0); 9];
        assert_eq!(SourceSet::new(many).len(), MAX_SOURCES);
    }

    #[test]
    fn find_near_first_match_wins() {
        let set = SourceSet::new(vec![
            WaveSource::new(100.0, 100.0),
            WaveSource::new(106.0, 100.0),
        ]);
        // Closer to the second source, but the first is still within range.
        assert_eq!(set.find_near(Pos::new(105.0, 100.0)), Some(0));
        assert_eq!(set.find_near(Pos::new(112.0, 100.0)), Some(1));
    }

    #[test]
    fn find_near_misses_outside_hit_radius() {
        let set = three();
        assert_eq!(set.find_near(Pos::new(210.0, 300.0)), None);
        assert_eq!(set.find_near(Pos::new(50.0, 50.0)), None);
        assert_eq!(set.find_near(Pos::new(209.9, 300.0)), Some(0));
    }
}
