use super::types::TemplateRecord;

// All three records currently share one preview image.
const PREVIEW_URL: &str = "https://v3.fal.media/files/koala/VZb58nzUzvn2JP8DpmS6B_output.png";

pub static LANDING: TemplateRecord = TemplateRecord {
    name: "Современный лендинг",
    sections: &["Hero", "Features", "CTA", "Footer"],
    colors: &["#2563EB", "#10B981"],
    preview_url: PREVIEW_URL,
};

pub static PORTFOLIO: TemplateRecord = TemplateRecord {
    name: "Портфолио",
    sections: &["About", "Projects", "Skills", "Contact"],
    colors: &["#8B5CF6", "#EC4899"],
    preview_url: PREVIEW_URL,
};

pub static ECOMMERCE: TemplateRecord = TemplateRecord {
    name: "Интернет-магазин",
    sections: &["Catalog", "Cart", "Checkout", "About"],
    colors: &["#F97316", "#EAB308"],
    preview_url: PREVIEW_URL,
};
