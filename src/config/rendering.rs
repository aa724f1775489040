use serde::{Deserialize, Serialize};

/// What to do when a shader stage fails to compile or the program fails to link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderErrorPolicy {
    /// Release the program and return the error.
    Fatal,
    /// Log the diagnostics and keep drawing with whatever the driver produced.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub clear_color: [f32; 4],
    pub info_log_limit: usize,
    pub shader_error_policy: ShaderErrorPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            info_log_limit: 512,
            shader_error_policy: ShaderErrorPolicy::Fatal,
        }
    }
}
