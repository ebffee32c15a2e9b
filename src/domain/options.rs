use serde::{Deserialize, Serialize};

/// Options attached to an analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    #[serde(default = "default_include_charts")]
    pub include_charts: bool,
    /// Collected from the page and logged, but no downstream step reads
    /// it. The selector exists in the UI without any wired behavior.
    #[serde(default)]
    pub analysis_depth: AnalysisDepth,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_charts: true,
            analysis_depth: AnalysisDepth::Standard,
        }
    }
}

fn default_include_charts() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDepth {
    #[default]
    Standard,
    Detailed,
    ExecutiveSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_wire_names() {
        assert_eq!(
            serde_json::from_str::<AnalysisDepth>("\"standard\"").unwrap(),
            AnalysisDepth::Standard
        );
        assert_eq!(
            serde_json::from_str::<AnalysisDepth>("\"detailed\"").unwrap(),
            AnalysisDepth::Detailed
        );
        assert_eq!(
            serde_json::from_str::<AnalysisDepth>("\"executive_summary\"").unwrap(),
            AnalysisDepth::ExecutiveSummary
        );
    }

    #[test]
    fn test_options_defaults() {
        let options: AnalysisOptions = serde_json::from_str("{}").unwrap();
        assert!(options.include_charts);
        assert_eq!(options.analysis_depth, AnalysisDepth::Standard);
    }

    #[test]
    fn test_options_override() {
        let options: AnalysisOptions =
            serde_json::from_str("{\"include_charts\": false, \"analysis_depth\": \"detailed\"}")
                .unwrap();
        assert!(!options.include_charts);
        assert_eq!(options.analysis_depth, AnalysisDepth::Detailed);
    }
}
