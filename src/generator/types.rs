use serde::Serialize;

/// A static description of a website layout: display name, ordered section
/// list, color pair and preview image.
#[derive(Debug, PartialEq, Serialize)]
pub struct TemplateRecord {
    pub name: &'static str,
    pub sections: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub preview_url: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub template: &'static TemplateRecord,
    pub estimated_time: u32,
    pub components_count: usize,
    pub status: &'static str,
    pub request_id: String,
}
