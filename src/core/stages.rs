use super::error::ConfigError;

/// Half-open progress interval `[lower, upper)`; the last stage of a table is
/// closed at 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageBoundary {
    pub lower: f32,
    pub upper: f32,
}

impl StageBoundary {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }
}

/// Text and call-to-action shown while a stage is active.
#[derive(Clone, Debug, PartialEq)]
pub struct StageContent {
    pub badge: String,
    pub heading: String,
    pub body: String,
    pub cta_label: String,
    /// Anchor id of the page section the CTA scrolls to.
    pub cta_target: String,
}

impl StageContent {
    pub fn new(badge: &str, heading: &str, body: &str, cta_label: &str, cta_target: &str) -> Self {
        Self {
            badge: badge.to_string(),
            heading: heading.to_string(),
            body: body.to_string(),
            cta_label: cta_label.to_string(),
            cta_target: cta_target.to_string(),
        }
    }

    /// Heading words paired with whether they get the accent treatment
    /// (every second word).
    pub fn heading_words(&self) -> Vec<(&str, bool)> {
        self.heading
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| (w, i % 2 == 1))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub bounds: StageBoundary,
    pub content: StageContent,
}

/// Check that `boundaries` partition [0, 1] exactly.
pub fn validate_boundaries(boundaries: &[StageBoundary]) -> Result<(), ConfigError> {
    let first = boundaries.first().ok_or(ConfigError::EmptyStageTable)?;
    for (index, b) in boundaries.iter().enumerate() {
        if !b.lower.is_finite() || !b.upper.is_finite() {
            return Err(ConfigError::NonFiniteBound { index });
        }
    }
    if first.lower != 0.0 {
        return Err(ConfigError::NotStartingAtZero { lower: first.lower });
    }
    for (index, b) in boundaries.iter().enumerate() {
        if b.upper <= b.lower {
            return Err(ConfigError::EmptyInterval {
                index,
                lower: b.lower,
                upper: b.upper,
            });
        }
    }
    for (index, pair) in boundaries.windows(2).enumerate() {
        let (cur, next) = (pair[0], pair[1]);
        if next.lower > cur.upper {
            return Err(ConfigError::Gap {
                index,
                upper: cur.upper,
                next_lower: next.lower,
            });
        }
        if next.lower < cur.upper {
            return Err(ConfigError::Overlap {
                index,
                upper: cur.upper,
                next_lower: next.lower,
            });
        }
    }
    // first() succeeded above, so last() exists
    if let Some(last) = boundaries.last() {
        if last.upper != 1.0 {
            return Err(ConfigError::NotEndingAtOne { upper: last.upper });
        }
    }
    Ok(())
}

/// Index of the stage whose interval contains `progress`.
///
/// Out-of-range input is clamped and NaN reads as 0. `boundaries` is assumed
/// to have passed [`validate_boundaries`]; an empty slice yields 0.
pub fn resolve_stage(progress: f32, boundaries: &[StageBoundary]) -> usize {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let last = boundaries.len().saturating_sub(1);
    boundaries
        .iter()
        .position(|b| p < b.upper)
        .unwrap_or(last)
        .min(last)
}

/// Validated, immutable stage list.
#[derive(Clone, Debug, PartialEq)]
pub struct StageTable {
    stages: Vec<Stage>,
    boundaries: Vec<StageBoundary>,
}

impl StageTable {
    pub fn new(stages: Vec<Stage>) -> Result<Self, ConfigError> {
        let boundaries: Vec<StageBoundary> = stages.iter().map(|s| s.bounds).collect();
        validate_boundaries(&boundaries)?;
        Ok(Self { stages, boundaries })
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn boundaries(&self) -> &[StageBoundary] {
        &self.boundaries
    }

    pub fn get(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    pub fn content(&self, index: usize) -> Option<&StageContent> {
        self.stages.get(index).map(|s| &s.content)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    pub fn resolve(&self, progress: f32) -> usize {
        resolve_stage(progress, &self.boundaries)
    }

    /// The hero slider's four chapters.
    pub fn industrial() -> Self {
        let stage = |lower, upper, content| Stage {
            bounds: StageBoundary::new(lower, upper),
            content,
        };
        let stages = vec![
            stage(
                0.0,
                0.15,
                StageContent::new(
                    "ISO 9001:2008 Certified",
                    "Leading Steel Pipe Manufacturer",
                    "Delivering premium quality steel pipes and tubes since 1991. Trusted by industry leaders across Pakistan.",
                    "View Products",
                    "products",
                ),
            ),
            stage(
                0.15,
                0.4,
                StageContent::new(
                    "Extensive Range",
                    "Precision Product Engineering",
                    "From galvanized iron to ERW steel and scaffolding tubes, our range meets every project requirement.",
                    "Explore Range",
                    "products",
                ),
            ),
            stage(
                0.4,
                0.65,
                StageContent::new(
                    "Global Logistics",
                    "Secure & Timely Delivery",
                    "With an efficient global supply chain, we ensure your orders arrive safely and promptly.",
                    "Delivery Info",
                    "clients",
                ),
            ),
            stage(
                0.65,
                1.0,
                StageContent::new(
                    "Quality First",
                    "Certified Excellence",
                    "Manufactured from prime materials and certified to international standards for unmatched reliability.",
                    "Get Quote",
                    "contact",
                ),
            ),
        ];
        // literal table, checked by the stage tests
        let boundaries = stages.iter().map(|s| s.bounds).collect();
        Self { stages, boundaries }
    }
}

/// Edge-triggered wrapper around [`StageTable::resolve`]: reports an index
/// only when it differs from the previously resolved one.
#[derive(Clone, Debug)]
pub struct StageResolver {
    current: usize,
}

impl Default for StageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StageResolver {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn update(&mut self, table: &StageTable, progress: f32) -> Option<usize> {
        let next = table.resolve(progress);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    /// Re-sync without reporting a change (mount-time priming).
    pub fn reset_to(&mut self, index: usize) {
        self.current = index;
    }
}
