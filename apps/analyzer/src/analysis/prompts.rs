// All LLM prompt constants for the analysis pipeline.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Extraction system prompt template. Replace `{job_title}` and
/// `{json_only}` before sending; the user message is the raw chunk.
pub const EXTRACTION_SYSTEM_TEMPLATE: &str = r#"You are a professional resume analyzer. Analyze the following resume section for a {job_title} position. Focus on extracting key information, skills, and achievements. {json_only}

Return ONLY a JSON object with the following structure:
{
  "skills": string[],
  "achievements": string[],
  "experience": string[],
  "education": string[]
}"#;

/// Aggregation system prompt template. Replace `{job_title}` and
/// `{json_only}`; the user message is the serialized chunk extractions.
pub const AGGREGATION_SYSTEM_TEMPLATE: &str = r#"You are a professional resume analyzer. Based on the analyzed sections, provide a comprehensive analysis for a {job_title} position. {json_only}

Return ONLY a JSON object with the following structure. For scoring:
- Scores should be whole numbers between 60 and 100
- Average scores should be between 70-80
- Top performer scores should be between 85-95
- Your score should be based on content quality, skills match, and formatting
Example scores:
- Strong resume: 85-95
- Good resume: 75-84
- Average resume: 65-74
- Needs improvement: 60-64

{
  "overallScore": number,
  "improvements": string[],
  "rewrites": [{"section": string, "original": string, "improved": string}],
  "skills": {
    "matching": string[],
    "missing": string[],
    "suggested": string[]
  },
  "keywords": string[],
  "formatting": {
    "issues": string[],
    "suggestions": string[]
  },
  "impact": {
    "strengths": string[],
    "weaknesses": string[],
    "recommendations": string[]
  },
  "competitorAnalysis": {
    "marketPosition": string,
    "competitiveAdvantages": string[],
    "competitiveDisadvantages": string[],
    "differentiationStrategies": string[],
    "industryBenchmarks": {
      "averageScore": number,
      "topPerformersScore": number,
      "yourScore": number
    },
    "industryAnalysis": {
      "trends": string[],
      "inDemandSkills": string[],
      "salaryRange": {
        "entry": string,
        "mid": string,
        "senior": string
      },
      "topCompanies": string[],
      "growthAreas": string[]
    },
    "careerProgression": {
      "currentLevel": string,
      "nextSteps": {
        "shortTerm": string[],
        "mediumTerm": string[],
        "longTerm": string[]
      },
      "skillGaps": {
        "technical": string[],
        "soft": string[],
        "industry": string[]
      },
      "certifications": {
        "recommended": string[],
        "priority": string[]
      },
      "careerPaths": {
        "primary": string,
        "alternatives": string[],
        "requirements": {
          "[path]": string[]
        }
      }
    }
  }
}"#;

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Fills the extraction system template for a target role.
pub fn extraction_system(job_title: &str) -> String {
    EXTRACTION_SYSTEM_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

/// Fills the aggregation system template for a target role.
pub fn aggregation_system(job_title: &str) -> String {
    AGGREGATION_SYSTEM_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}
