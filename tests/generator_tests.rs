use pretty_assertions::assert_eq;
use rstest::rstest;
use sitegen_rust::generator::{ECOMMERCE, LANDING, PORTFOLIO, TemplateRecord, assemble, select};

#[rstest]
#[case("Нужен сайт для интернет-магазина одежды", &ECOMMERCE)]
#[case("A small shop for handmade candles", &ECOMMERCE)]
#[case("Каталог запчастей с доставкой", &ECOMMERCE)]
#[case("Страница с карточками товаров", &ECOMMERCE)]
#[case("Хочу портфолио для своих проектов", &PORTFOLIO)]
#[case("My design portfolio with case studies", &PORTFOLIO)]
#[case("Мои работы и достижения за год", &PORTFOLIO)]
#[case("Новый проект для студии", &PORTFOLIO)]
#[case("Простой сайт для бизнеса", &LANDING)]
#[case("Сайт-визитка для кофейни", &LANDING)]
#[case("", &LANDING)]
fn select_classifies_by_keywords(#[case] description: &str, #[case] expected: &TemplateRecord) {
    assert_eq!(select(description), expected);
}

#[rstest]
#[case("SHOP для гаджетов", &ECOMMERCE)]
#[case("МАГАЗИН цветов с доставкой", &ECOMMERCE)]
#[case("PORTFOLIO of a freelance illustrator", &PORTFOLIO)]
fn select_ignores_case(#[case] description: &str, #[case] expected: &TemplateRecord) {
    assert_eq!(select(description), expected);
}

#[test]
fn commerce_keywords_win_over_portfolio_keywords() {
    // Both keyword sets match; the commerce set is checked first
    assert_eq!(select("Портфолио и каталог товаров"), &ECOMMERCE);
    assert_eq!(select("A portfolio shop for prints"), &ECOMMERCE);
}

#[test]
fn select_returns_the_catalog_instance() {
    // The record is handed out by reference, never copied
    assert!(std::ptr::eq(select("shop for vinyl"), &ECOMMERCE));
}

#[test]
fn catalog_records_have_four_sections_and_two_colors() {
    for template in [&LANDING, &PORTFOLIO, &ECOMMERCE] {
        assert_eq!(template.sections.len(), 4);
        assert_eq!(template.colors.len(), 2);
        assert!(!template.preview_url.is_empty());
    }
}

#[test]
fn catalog_names_are_distinct() {
    assert_ne!(LANDING.name, PORTFOLIO.name);
    assert_ne!(LANDING.name, ECOMMERCE.name);
    assert_ne!(PORTFOLIO.name, ECOMMERCE.name);
}

#[test]
fn assemble_derives_component_count_from_sections() {
    for template in [&LANDING, &PORTFOLIO, &ECOMMERCE] {
        let result = assemble(template, "req".to_string());
        assert_eq!(result.components_count, template.sections.len());
        assert_eq!(result.estimated_time, 45);
        assert_eq!(result.status, "ready");
    }
}

#[test]
fn assemble_echoes_request_id_verbatim() {
    let result = assemble(&LANDING, "ид-запроса с пробелами".to_string());
    assert_eq!(result.request_id, "ид-запроса с пробелами");
}

#[test]
fn result_serializes_with_nested_template() {
    let result = assemble(select("shop for books"), "req-7".to_string());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["template"]["name"], "Интернет-магазин");
    assert_eq!(
        value["template"]["colors"],
        serde_json::json!(["#F97316", "#EAB308"])
    );
    assert_eq!(value["components_count"], 4);
    assert_eq!(value["request_id"], "req-7");
}
