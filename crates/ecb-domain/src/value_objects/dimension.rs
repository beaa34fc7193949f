use std::fmt;

use crate::constants::PATH_SEPARATOR;

/// Fixed three-segment address of a factory's configuration subtree
///
/// Built with a `const fn` so every factory type carries its path as an
/// associated constant. Empty segments are rejected at compile time when
/// the constructor runs in a const context.
///
/// # Example
///
/// ```
/// use ecb_domain::value_objects::DimensionPath;
///
/// const PATH: DimensionPath = DimensionPath::new("v", "p", "t");
/// assert_eq!(PATH.to_string(), "v.p.t");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimensionPath {
    segments: [&'static str; 3],
}

impl DimensionPath {
    /// Create a dimension path from vendor, package and component-type
    pub const fn new(vendor: &'static str, package: &'static str, component: &'static str) -> Self {
        assert!(
            !vendor.is_empty() && !package.is_empty() && !component.is_empty(),
            "dimension path segments must not be empty"
        );
        Self {
            segments: [vendor, package, component],
        }
    }

    /// All segments in descent order
    pub const fn segments(&self) -> &[&'static str; 3] {
        &self.segments
    }

    /// Vendor segment
    pub const fn vendor(&self) -> &'static str {
        self.segments[0]
    }

    /// Package segment
    pub const fn package(&self) -> &'static str {
        self.segments[1]
    }

    /// Component-type segment
    pub const fn component(&self) -> &'static str {
        self.segments[2]
    }

    /// Iterate the segments in descent order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().copied()
    }

    /// Render the path followed by extra segments, e.g. `v.p.t.id.key`
    pub fn render_with(&self, tail: &[&str]) -> String {
        let mut parts: Vec<&str> = self.segments.to_vec();
        parts.extend_from_slice(tail);
        parts.join(PATH_SEPARATOR)
    }
}

impl fmt::Display for DimensionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&[]))
    }
}
