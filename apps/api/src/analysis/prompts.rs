// Prompt constants and the structured-output schema for the scan call.
// The part order built from these is positional and significant: the model
// is told which section is which purely by the surrounding markers.

/// Instruction preamble — always the first part of the request.
pub const ANALYSIS_INSTRUCTION: &str = "You are an expert technical recruiter and ATS \
    (Applicant Tracking System) simulator. Analyze the provided candidate's Resume \
    against the provided Job Description.";

pub const RESUME_START_MARKER: &str = "\n--- RESUME START ---\n";
pub const RESUME_END_MARKER: &str = "\n--- RESUME END ---\n";
pub const JD_START_MARKER: &str = "\n--- JOB DESCRIPTION START ---\n";
pub const JD_END_MARKER: &str = "\n--- JOB DESCRIPTION END ---\n";

/// The response shape declared to the service. The response is parsed against
/// [`crate::analysis::AnalysisResult`], which mirrors these fields.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "NUMBER",
                "description": "An integer from 0 to 100 representing how well the resume matches the job description."
            },
            "missingKeywords": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "Exactly 3 crucial keywords, skills, or requirements missing from the resume but present in the JD."
            },
            "feedback": {
                "type": "STRING",
                "description": "A short, encouraging one-sentence feedback summarizing the gap."
            },
            "tips": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "Exactly 3 highly actionable, specific tips for the candidate to improve their resume based on the job description to increase their match score."
            }
        },
        "required": ["score", "missingKeywords", "feedback", "tips"]
    })
}
