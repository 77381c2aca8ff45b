use crate::context;
use crate::error::CrumbResult;
use serde::Serialize;
use serde_json::Value;

/// A single breadcrumb entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    /// The display text for this breadcrumb.
    pub label: String,
    /// Opaque payload carried alongside the label.
    pub context: Option<Value>,
}

impl Segment {
    /// Create a new segment without context.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            context: None,
        }
    }

    /// Attach a JSON context to this segment. `null` counts as no context.
    pub fn with_context(mut self, context: impl Into<Value>) -> Self {
        self.context = context::normalize(Some(context.into()));
        self
    }

    /// Attach any serializable value as context.
    pub fn try_with_context<T: Serialize + ?Sized>(mut self, value: &T) -> CrumbResult<Self> {
        self.context = context::to_context(value)?;
        Ok(self)
    }
}

impl From<&str> for Segment {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Segment {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// The ordered list of segments a breadcrumb displays.
///
/// Insertion order is display order is navigation order. The last segment
/// is the active one; all earlier segments are navigable links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of segments in the path.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments, root first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The segment at a 1-based level.
    pub fn get(&self, level: usize) -> Option<&Segment> {
        level.checked_sub(1).and_then(|index| self.segments.get(index))
    }

    /// The active (last) segment.
    pub fn active(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Context of the active segment.
    pub fn active_context(&self) -> Option<&Value> {
        self.active().and_then(|segment| segment.context.as_ref())
    }

    /// The label sequence of the path.
    pub fn labels(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.label.clone()).collect()
    }

    /// Append a segment, making it the active one.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Remove up to `count` segments from the end.
    ///
    /// Removing more segments than exist empties the path. The removed
    /// segments are returned in path order.
    pub fn pop(&mut self, count: usize) -> Vec<Segment> {
        let keep = self.segments.len().saturating_sub(count);
        self.segments.split_off(keep)
    }

    /// Remove everything after the 1-based `level`, making that segment active.
    ///
    /// Returns `None` when `level` does not name an existing segment.
    pub fn truncate_to(&mut self, level: usize) -> Option<Vec<Segment>> {
        if level == 0 || level > self.segments.len() {
            return None;
        }
        Some(self.pop(self.segments.len() - level))
    }

    /// Remove all segments.
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
