use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlProfileKind {
    Core,
    Compatibility,
}

// Windows are never resizable, so there is no knob for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub gl_version: (u8, u8),
    pub profile: GlProfileKind,
    pub vsync: bool,
}

impl WindowConfig {
    /// Immediate-mode window: needs a compatibility context for glBegin/glEnd.
    pub fn legacy() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "whatsupOpenGL".into(),
            gl_version: (2, 1),
            profile: GlProfileKind::Compatibility,
            vsync: true,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "LearnOpenGL".into(),
            gl_version: (3, 3),
            profile: GlProfileKind::Core,
            vsync: true,
        }
    }
}
