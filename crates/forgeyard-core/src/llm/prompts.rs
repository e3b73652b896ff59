//! System instructions and user-message builders for the chat backend.
//!
//! Every instruction demands bare JSON with fixed key names so replies can
//! be parsed into typed structures. Replies that break the contract are
//! rejected by the callers, not repaired.

use crate::matching::OperationVocabulary;

/// Build the normalization instruction around the injected vocabulary.
pub fn normalization_instructions(vocabulary: &OperationVocabulary) -> String {
    let mut listed = String::new();
    for name in vocabulary.names() {
        listed.push_str("- ");
        listed.push_str(name);
        listed.push('\n');
    }

    format!(
        "Return only valid JSON with no explanations, markdown, or code fences. \
Use 'normalized_operation' as the key for the normalized operation.\n\
\n\
You standardize manufacturing operation names against a fixed vocabulary. \
Pick the single vocabulary entry that best describes the requested \
operation, using the supplied tools and materials as context.\n\
\n\
Known operations:\n\
{listed}\n\
Rules:\n\
1. Let the tools and materials guide the choice: a laser cutter working \
steel points at a cutting operation, a sewing machine working cotton \
points at sewing, MIG or TIG welders on metal point at welding.\n\
2. If nothing fits exactly, pick the closest vocabulary entry.\n\
3. Reply with exactly one JSON object of the form \
{{\"normalized_operation\": \"<entry>\"}}."
    )
}

/// User message for a normalization request.
pub fn normalization_request(operation: &str, tools: &[String], materials: &[String]) -> String {
    format!(
        "Normalize the following operation: '{}' for the given materials: {} and tools: {}.",
        operation,
        materials.join(", "),
        tools.join(", ")
    )
}

/// System instruction for process sheet generation.
pub const PROCESS_SHEET_INSTRUCTIONS: &str = "\
Return only valid JSON with no explanations, markdown, or code fences.\n\
\n\
You produce a process sheet for manufacturing the product named by the \
user. Reply with one JSON object holding \"product\" (the product name) and \
\"operations\", an array ordered by manufacturing sequence. Each operation \
holds:\n\
- \"operation\": name of the manufacturing operation\n\
- \"description\": what the operation involves for this product\n\
- \"materials\": array of materials used\n\
- \"tools\": array of tools required\n\
- \"time_required\": estimated duration, e.g. \"2 hours\"\n\
- \"sequence\": step number starting at 1\n\
\n\
Keep the listed tools appropriate to the materials they work, and order \
the steps from raw material preparation through to packaging.";

/// User message for a process sheet request.
pub fn process_sheet_request(product: &str) -> String {
    format!("create process sheet for {product}")
}

/// System instruction for variant generation.
pub const VARIANTS_INSTRUCTIONS: &str = "\
Return only valid JSON with no explanations, markdown, or code fences.\n\
\n\
You produce product variants for the product named by the user. Reply with \
one JSON object holding \"product\" and \"variants\", an array of at least \
six entries. Every variant holds \"name\" (unique, derived from the product \
name) and \"materials\" (an array), plus at least four further attributes \
relevant to the product such as size, color, weight, capacity, voltage \
rating, or temperature resistance. Mix standard specifications with more \
innovative options, and keep suggestions compatible with common industry \
standards.";

/// User message for a variants request, with optional extra specifications.
pub fn variants_request(product: &str, specs: Option<&str>) -> String {
    match specs {
        Some(specs) => format!("{product} and include following specification {specs}"),
        None => product.to_string(),
    }
}

/// System instruction for inspection plan generation.
pub const INSPECTION_INSTRUCTIONS: &str = "\
Return only valid JSON with no explanations, markdown, or code fences.\n\
\n\
You produce a quality inspection plan for the product named by the user. \
Reply with one JSON object holding \"product\" and \"inspection_plan\". The \
plan holds exactly three stages named \"initial_inspection\", \
\"mid_inspection\", and \"final_inspection\"; use those names and no \
others. Each stage maps step keys of the form \"step_1\", \"step_2\", ... \
to objects holding:\n\
- \"description\": what the step entails\n\
- \"parameters\": array of attributes or criteria to check\n\
- \"tools\": array of tools or methods required";
