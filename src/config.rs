/// Knobs for a single parse run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseConfig {
    /// Keep furthest-failure diagnostics while parsing
    pub track_failures: bool,
    /// Upper bound on expectations kept at the furthest failure
    pub max_expected: usize,
}

impl ParseConfig {
    /// Configuration with failure tracking disabled
    pub fn quiet() -> Self {
        Self {
            track_failures: false,
            ..Self::default()
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            track_failures: true,
            max_expected: 16,
        }
    }
}
