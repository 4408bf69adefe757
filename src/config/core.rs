use serde::{Deserialize, Serialize};

pub const MAX_NEXT_STEPS_LIMIT: usize = 10;

/// Root configuration structure for codecoach
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CoachConfig {
    /// Analysis behavior
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Ignore patterns
    #[serde(default)]
    pub ignore: IgnoreConfig,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// How many next learning steps to suggest (1 to 10)
    #[serde(default = "default_max_next_steps")]
    pub max_next_steps: usize,

    #[serde(default = "default_true")]
    pub include_interview_questions: bool,

    /// Skip files that do not parse; otherwise recover their imports lexically
    #[serde(default = "default_true")]
    pub skip_unparseable: bool,

    /// Traversal depth guard for deeply nested files
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Files larger than this are skipped unread
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_next_steps: default_max_next_steps(),
            include_interview_questions: true,
            skip_unparseable: true,
            max_depth: default_max_depth(),
            max_file_bytes: default_max_file_bytes(),
            parallel: true,
        }
    }
}

impl AnalysisSettings {
    /// Clamp out-of-range values, reporting each adjustment.
    pub fn normalized(mut self) -> Self {
        let clamped = self.max_next_steps.clamp(1, MAX_NEXT_STEPS_LIMIT);
        if clamped != self.max_next_steps {
            log::warn!(
                "max_next_steps = {} is out of range, using {}",
                self.max_next_steps,
                clamped
            );
            self.max_next_steps = clamped;
        }
        if self.max_depth == 0 {
            log::warn!("max_depth = 0 would reject every file, using {}", default_max_depth());
            self.max_depth = default_max_depth();
        }
        self
    }
}

pub fn default_max_next_steps() -> usize {
    5
}

pub fn default_max_depth() -> usize {
    256
}

pub fn default_max_file_bytes() -> u64 {
    1024 * 1024
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IgnoreConfig {
    #[serde(default = "default_ignore_patterns")]
    pub patterns: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            patterns: default_ignore_patterns(),
        }
    }
}

pub fn default_ignore_patterns() -> Vec<String> {
    [
        "**/__pycache__/**",
        "**/.venv/**",
        "**/venv/**",
        "**/site-packages/**",
        "test_*.py",
        "*_test.py",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
