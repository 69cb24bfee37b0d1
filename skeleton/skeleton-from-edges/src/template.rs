//! Strut templates and the library that caches them.
//!
//! A template is authored in canonical pose: local `(0, 0, 0)` is the end
//! of the strut that lands on an edge's start point, and local `(1, 0, 0)`
//! is the end that lands on the edge's end point. Placement stretches the
//! local X axis to the edge length and leaves Y and Z alone, so cross
//! sections keep their authored size.

use hashbrown::HashMap;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SkeletonError, SkeletonResult};

/// Geometry to stamp onto each edge, as polyline strands in canonical pose.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrutTemplate {
    strands: Vec<Vec<Point3<f64>>>,
}

impl StrutTemplate {
    /// Creates a template from polyline strands.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::EmptyTemplate`] if `strands` is empty, or
    /// [`SkeletonError::ShortStrand`] if any strand has fewer than two
    /// points.
    pub fn new(strands: Vec<Vec<Point3<f64>>>) -> SkeletonResult<Self> {
        if strands.is_empty() {
            return Err(SkeletonError::EmptyTemplate);
        }
        for (index, strand) in strands.iter().enumerate() {
            if strand.len() < 2 {
                return Err(SkeletonError::ShortStrand {
                    index,
                    points: strand.len(),
                });
            }
        }
        Ok(Self { strands })
    }

    /// The default template: a single strand spanning the unit X segment.
    ///
    /// Placing it reproduces each edge as a straight strand between its
    /// endpoints.
    #[must_use]
    pub fn unit_segment() -> Self {
        Self {
            strands: vec![vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]],
        }
    }

    /// The strands in canonical pose.
    #[must_use]
    pub fn strands(&self) -> &[Vec<Point3<f64>>] {
        &self.strands
    }

    /// Number of strands.
    #[must_use]
    pub fn strand_count(&self) -> usize {
        self.strands.len()
    }
}

impl Default for StrutTemplate {
    fn default() -> Self {
        Self::unit_segment()
    }
}

/// A named cache of strut templates.
///
/// Conversions borrow templates from the library, so a library owned by the
/// caller outlives any number of conversions and each template is built
/// once. Dropping the library, or removing an entry with
/// [`remove`](Self::remove), releases the cached geometry.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: HashMap<String, StrutTemplate>,
}

impl TemplateLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registers a template under a name.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::DuplicateTemplate`] if the name is taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        template: StrutTemplate,
    ) -> SkeletonResult<()> {
        let name = name.into();
        if self.templates.contains_key(&name) {
            return Err(SkeletonError::DuplicateTemplate { name });
        }
        self.templates.insert(name, template);
        Ok(())
    }

    /// Looks up a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StrutTemplate> {
        self.templates.get(name)
    }

    /// Returns the named template, building and caching it on first use.
    pub fn get_or_insert_with(
        &mut self,
        name: impl Into<String>,
        build: impl FnOnce() -> StrutTemplate,
    ) -> &StrutTemplate {
        self.templates.entry(name.into()).or_insert_with(build)
    }

    /// Removes a template, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<StrutTemplate> {
        self.templates.remove(name)
    }

    /// Returns `true` if a template is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Number of cached templates.
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if the library has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_segment_spans_origin_to_unit_x() {
        let template = StrutTemplate::unit_segment();
        assert_eq!(template.strand_count(), 1);
        let strand = &template.strands()[0];
        assert_eq!(strand[0], Point3::origin());
        assert_eq!(strand[1], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn empty_templates_are_rejected() {
        assert_eq!(
            StrutTemplate::new(Vec::new()).unwrap_err(),
            SkeletonError::EmptyTemplate
        );
    }

    #[test]
    fn single_point_strands_are_rejected() {
        let strands = vec![
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            vec![Point3::new(0.5, 0.1, 0.0)],
        ];
        assert_eq!(
            StrutTemplate::new(strands).unwrap_err(),
            SkeletonError::ShortStrand { index: 1, points: 1 }
        );
    }

    #[test]
    fn library_builds_each_template_once() {
        let mut library = TemplateLibrary::new();
        let mut builds = 0;

        for _ in 0..3 {
            let _ = library.get_or_insert_with("strut", || {
                builds += 1;
                StrutTemplate::unit_segment()
            });
        }

        assert_eq!(builds, 1);
        assert_eq!(library.template_count(), 1);
    }

    #[test]
    fn insert_rejects_duplicate_names() {
        let mut library = TemplateLibrary::new();
        library.insert("strut", StrutTemplate::unit_segment()).unwrap();
        assert_eq!(
            library
                .insert("strut", StrutTemplate::unit_segment())
                .unwrap_err(),
            SkeletonError::DuplicateTemplate { name: "strut".to_string() }
        );
    }

    #[test]
    fn removed_templates_are_gone() {
        let mut library = TemplateLibrary::new();
        library.insert("strut", StrutTemplate::unit_segment()).unwrap();
        assert!(library.remove("strut").is_some());
        assert!(!library.contains("strut"));
        assert!(library.is_empty());
        assert!(library.remove("strut").is_none());
    }
}
