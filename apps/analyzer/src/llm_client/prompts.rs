// Cross-cutting prompt fragments reused by the analysis prompt templates.

/// Appended to every system prompt that expects machine-readable output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
