//! Validator metadata for introspection
//!
//! Validators can describe themselves through [`ValidatorMetadata`]: a name,
//! an optional description, a complexity class and a set of tags. Callers can
//! use this to order cheap checks first or to generate documentation.

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

// ============================================================================
// VALIDATOR METADATA
// ============================================================================

/// Metadata about a validator for introspection and optimization.
///
/// # Examples
///
/// ```rust,ignore
/// use identity_validator::foundation::{ValidatorMetadata, ValidationComplexity};
///
/// let metadata = ValidatorMetadata {
///     name: "Email".into(),
///     complexity: ValidationComplexity::Expensive,
///     ..ValidatorMetadata::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorMetadata {
    /// Human-readable name of the validator.
    pub name: Cow<'static, str>,

    /// Optional description of what the validator does.
    pub description: Option<Cow<'static, str>>,

    /// Computational complexity of the validation.
    pub complexity: ValidationComplexity,

    /// Whether validation results can be safely cached.
    ///
    /// False for validators whose answer depends on the wall clock.
    pub cacheable: bool,

    /// Estimated average execution time.
    pub estimated_time: Option<Duration>,

    /// Tags for categorization.
    pub tags: Vec<Cow<'static, str>>,

    /// Version of the validator (for tracking changes).
    pub version: Option<Cow<'static, str>>,

    /// Additional custom metadata as ordered key-value pairs.
    pub custom: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Default for ValidatorMetadata {
    fn default() -> Self {
        Self {
            name: "Unknown".into(),
            description: None,
            complexity: ValidationComplexity::Constant,
            cacheable: true,
            estimated_time: None,
            tags: Vec::new(),
            version: None,
            custom: Vec::new(),
        }
    }
}

impl ValidatorMetadata {
    /// Creates simple metadata with just a name.
    pub fn simple(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a tag to the metadata.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

// ============================================================================
// VALIDATION COMPLEXITY
// ============================================================================

/// Computational complexity classification for validators.
///
/// Helps optimize validation order by running cheap validators first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ValidationComplexity {
    /// O(1) - constant time operations.
    ///
    /// Examples: presence checks, single-character checks
    #[default]
    Constant,

    /// O(n) - linear time operations.
    ///
    /// Examples: charset scans, digit extraction
    Linear,

    /// O(n) with a larger constant, typically regex matching.
    Expensive,
}

impl ValidationComplexity {
    /// Returns a numeric score for comparison (lower is cheaper).
    #[must_use]
    pub fn score(&self) -> u8 {
        match self {
            Self::Constant => 1,
            Self::Linear => 2,
            Self::Expensive => 3,
        }
    }

    /// Returns true if this complexity is more expensive than another.
    #[must_use]
    pub fn is_more_expensive_than(&self, other: &Self) -> bool {
        self.score() > other.score()
    }
}

impl fmt::Display for ValidationComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "O(1)"),
            Self::Linear => write!(f, "O(n)"),
            Self::Expensive => write!(f, "O(n), regex"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
