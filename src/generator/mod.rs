mod selector;
mod templates;
mod types;

pub use selector::select;
pub use templates::{ECOMMERCE, LANDING, PORTFOLIO};
pub use types::{GenerateResult, TemplateRecord};

/// Fixed generation estimate reported to the client, in seconds.
const ESTIMATED_TIME_SECONDS: u32 = 45;

/// Builds the response payload for a selected template.
///
/// The request id comes from the invoking context and is echoed back
/// unmodified so the client can correlate the response.
pub fn assemble(template: &'static TemplateRecord, request_id: String) -> GenerateResult {
    GenerateResult {
        template,
        estimated_time: ESTIMATED_TIME_SECONDS,
        components_count: template.sections.len(),
        status: "ready",
        request_id,
    }
}
