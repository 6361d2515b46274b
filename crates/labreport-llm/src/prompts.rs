//! Enrichment prompts for lab-report interpretation.
//!
//! The enrichment service is a generic completion endpoint; these prompts ask
//! it to standardize extracted results and write a clinical narrative.

/// System prompt for lab-report enrichment.
pub const SYSTEM_PROMPT: &str = r#"You are a specialized medical information extractor. Given lab report text, your task is to:

1. Extract Relevant Data:
   - Identify medical test names, values, and units from the input text.
   - Extract only meaningful test results while filtering out irrelevant data.

2. Standardize Data:
   - Convert extracted test names into their standardized medical terminology.
   - Convert measurement units into their HL7 standard equivalents.

3. Interpret Results:
   - Add a "reference_range" field for each test with the normal interval.
   - Add a "status" field: "Low" (below normal), "Normal" (within range), or "High" (above normal).
   - Provide a brief, medically relevant summary highlighting abnormal findings.

Output a JSON object with a "results" array (fields: test_name, value, unit,
reference_range, status) and a "summary" string. No other commentary."#;

/// User prompt template for enrichment.
pub fn make_enrichment_prompt(report_text: &str) -> String {
    format!(
        r#"Extract and interpret all lab test results from this report text:

"{}"

Return a JSON object with:
- "results": array of objects with test_name, value (numeric), unit (HL7 standard),
  reference_range (as "low-high", null if unknown), and status ("Low", "Normal", or "High")
- "summary": a brief interpretation of the overall picture, noting abnormal values

Provide the JSON only. Do not include any other commentary or explanation."#,
        report_text
    )
}

/// Example few-shot prompts for better extraction accuracy.
pub const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    (
        "Hemoglobin: 13.5 g/dL (12.0-16.0)",
        r#"{"results":[{"test_name":"Hemoglobin","value":13.5,"unit":"g/dL","reference_range":"12.0-16.0","status":"Normal"}],"summary":"Hemoglobin is within the reference range."}"#,
    ),
    (
        "Glucose 250 mg/dL 70-100",
        r#"{"results":[{"test_name":"Glucose","value":250,"unit":"mg/dL","reference_range":"70-100","status":"High"}],"summary":"Glucose is markedly elevated; may indicate impaired glucose control."}"#,
    ),
    (
        "WBC 2.1  PLT 500",
        r#"{"results":[{"test_name":"WBC","value":2.1,"unit":"10*3/uL","reference_range":"4.0-11.0","status":"Low"},{"test_name":"PLT","value":500,"unit":"10*3/uL","reference_range":"150-450","status":"High"}],"summary":"Low white cell count with elevated platelets; suggest clinical correlation."}"#,
    ),
];
