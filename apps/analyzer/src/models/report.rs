//! The durable output entity: the full scored analysis report.
//!
//! The wire format is the camelCase JSON tree the aggregation prompt asks
//! the model to emit. The synthesizer enforces only the top-level contract;
//! nested structs default missing pieces rather than reject them, so a
//! sparsely filled but structurally sound report still parses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level report. `overall_score` is validated to [60, 100] before typed
/// deserialization ever runs, so the default of 0 is never observable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub improvements: Vec<String>,
    pub rewrites: Vec<Rewrite>,
    pub skills: SkillsAssessment,
    pub keywords: Vec<String>,
    pub formatting: Formatting,
    pub impact: ImpactAssessment,
    pub competitor_analysis: CompetitorAnalysis,
}

/// A suggested rewrite of one résumé section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rewrite {
    pub section: String,
    pub original: String,
    pub improved: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillsAssessment {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
    pub suggested: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Formatting {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImpactAssessment {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    pub market_position: String,
    pub competitive_advantages: Vec<String>,
    pub competitive_disadvantages: Vec<String>,
    pub differentiation_strategies: Vec<String>,
    pub industry_benchmarks: IndustryBenchmarks,
    pub industry_analysis: IndustryAnalysis,
    pub career_progression: CareerProgression,
}

/// Score bands the aggregation prompt instructs the model to respect:
/// average 70–80, top performers 85–95.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndustryBenchmarks {
    pub average_score: f64,
    pub top_performers_score: f64,
    pub your_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndustryAnalysis {
    pub trends: Vec<String>,
    pub in_demand_skills: Vec<String>,
    pub salary_range: SalaryRange,
    pub top_companies: Vec<String>,
    pub growth_areas: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SalaryRange {
    pub entry: String,
    pub mid: String,
    pub senior: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerProgression {
    pub current_level: String,
    pub next_steps: NextSteps,
    pub skill_gaps: SkillGaps,
    pub certifications: Certifications,
    pub career_paths: CareerPaths,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NextSteps {
    pub short_term: Vec<String>,
    pub medium_term: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillGaps {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub industry: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certifications {
    pub recommended: Vec<String>,
    pub priority: Vec<String>,
}

/// `requirements` maps a career-path name to the skills it demands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerPaths {
    pub primary: String,
    pub alternatives: Vec<String>,
    pub requirements: HashMap<String, Vec<String>>,
}
