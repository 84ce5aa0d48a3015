use std::cell::Cell;
use std::rc::Rc;

/// Colour and density preset for the ambient background layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientPreset {
    pub key: &'static str,
    pub color: u32,
    pub accent: u32,
    pub density: f32,
}

pub static PRESETS: [AmbientPreset; 7] = [
    AmbientPreset { key: "hero", color: 0x2563eb, accent: 0x3b82f6, density: 1.0 },
    AmbientPreset { key: "features", color: 0x3b82f6, accent: 0x60a5fa, density: 1.2 },
    AmbientPreset { key: "profile", color: 0x475569, accent: 0x94a3b8, density: 0.8 },
    AmbientPreset { key: "products", color: 0x1d4ed8, accent: 0x2563eb, density: 1.5 },
    AmbientPreset { key: "clients", color: 0x1e3a8a, accent: 0x3b82f6, density: 1.0 },
    AmbientPreset { key: "contact", color: 0x2563eb, accent: 0x1e40af, density: 1.2 },
    AmbientPreset { key: "catalogue", color: 0x3b82f6, accent: 0x2563eb, density: 1.0 },
];

/// Preset by key; unknown keys fall back to `hero`.
pub fn preset_for(key: &str) -> &'static AmbientPreset {
    PRESETS
        .iter()
        .find(|p| p.key == key)
        .unwrap_or(&PRESETS[0])
}

/// Map a page anchor id to its preset.
pub fn preset_for_section(section_id: &str) -> &'static AmbientPreset {
    match section_id {
        "home" => preset_for("hero"),
        "about" => preset_for("profile"),
        other => preset_for(other),
    }
}

#[derive(Clone, Copy, Debug)]
struct ThemeState {
    preset: &'static AmbientPreset,
    version: u64,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            preset: &PRESETS[0],
            version: 0,
        }
    }
}

/// Create the page-wide ambient theme: one writer, any number of readers.
pub fn ambient_theme() -> (ThemeWriter, ThemeReader) {
    let cell = Rc::new(Cell::new(ThemeState::default()));
    (ThemeWriter(cell.clone()), ThemeReader(cell))
}

/// The only handle that can change the ambient preset. Not `Clone`.
#[derive(Debug)]
pub struct ThemeWriter(Rc<Cell<ThemeState>>);

impl ThemeWriter {
    /// Select the preset for `section_id`. Returns whether it changed.
    pub fn set_section(&mut self, section_id: &str) -> bool {
        let next = preset_for_section(section_id);
        let cur = self.0.get();
        if cur.preset.key == next.key {
            return false;
        }
        self.0.set(ThemeState {
            preset: next,
            version: cur.version + 1,
        });
        true
    }

    pub fn reader(&self) -> ThemeReader {
        ThemeReader(self.0.clone())
    }

    /// Back to defaults (page unmount).
    pub fn reset(&mut self) {
        let version = self.0.get().version + 1;
        self.0.set(ThemeState {
            preset: &PRESETS[0],
            version,
        });
    }
}

#[derive(Clone, Debug)]
pub struct ThemeReader(Rc<Cell<ThemeState>>);

impl ThemeReader {
    pub fn preset(&self) -> &'static AmbientPreset {
        self.0.get().preset
    }

    /// Bumped on every change; readers compare it to skip redundant work.
    pub fn version(&self) -> u64 {
        self.0.get().version
    }
}
