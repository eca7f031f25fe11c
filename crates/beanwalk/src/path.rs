//! Property paths from a traversal root, e.g. `wheels[0].diameter`

use std::fmt;

/// One step from a parent to a child node
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named property
    Property(String),
    /// Position in an array, list or set
    Index(usize),
    /// String form of a map key
    Key(String),
}

/// Ordered segments from the root to the current node
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// Empty path of the traversal root
    pub fn root() -> Self {
        Self::default()
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Path of a named property below this node
    pub fn property(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Property(name.into()))
    }

    /// Path of an element below this node
    pub fn index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Path of a map entry below this node
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.push(PathSegment::Key(key.into()))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of named properties on the path
    pub fn depth(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, PathSegment::Property(_)))
            .count()
    }

    /// Last named property, if any
    pub fn leaf_name(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|segment| match segment {
            PathSegment::Property(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Property(name) if i == 0 => f.write_str(name)?,
                PathSegment::Property(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
                PathSegment::Key(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}
