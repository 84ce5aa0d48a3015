use super::constants::{SECTION_ROOT_MARGIN, SECTION_THRESHOLD};
use super::error::ConfigError;
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionConfig {
    /// Anchor ids of the observed page sections.
    pub ids: Vec<String>,
    /// Minimum visible ratio for a section to count as dominant.
    pub threshold: f64,
    /// CSS margin insetting the viewport (biases toward the centre).
    pub root_margin: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            ids: ["home", "about", "products", "clients", "contact"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            threshold: SECTION_THRESHOLD,
            root_margin: SECTION_ROOT_MARGIN.to_string(),
        }
    }
}

impl SectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ids.is_empty() {
            return Err(ConfigError::Sections("no sections to observe"));
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::Sections("threshold must be in (0, 1]"));
        }
        Ok(())
    }
}

/// One observer record, in callback order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionEntry<'a> {
    pub id: &'a str,
    pub ratio: f64,
    pub intersecting: bool,
}

/// Tracks the dominant section. When several entries in a batch qualify the
/// last one observed wins, not the largest.
#[derive(Clone, Debug)]
pub struct SectionWatcher {
    ids: Vec<String>,
    index: FnvHashMap<String, usize>,
    threshold: f64,
    current: Option<usize>,
}

impl SectionWatcher {
    pub fn new(config: &SectionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let index = config
            .ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Ok(Self {
            ids: config.ids.clone(),
            index,
            threshold: config.threshold,
            current: None,
        })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn current(&self) -> Option<&str> {
        self.current.map(|i| self.ids[i].as_str())
    }

    /// Feed one observer batch; returns the new dominant id if it changed.
    pub fn observe<'a, I>(&mut self, entries: I) -> Option<&str>
    where
        I: IntoIterator<Item = SectionEntry<'a>>,
    {
        let mut candidate = None;
        for e in entries {
            if !e.intersecting || e.ratio < self.threshold {
                continue;
            }
            if let Some(&i) = self.index.get(e.id) {
                candidate = Some(i);
            }
        }
        match candidate {
            Some(i) if self.current != Some(i) => {
                self.current = Some(i);
                Some(self.ids[i].as_str())
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
