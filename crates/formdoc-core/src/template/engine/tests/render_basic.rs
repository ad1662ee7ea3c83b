//! Basic rendering tests for template engine

use super::helpers::person_values;
use super::*;
use crate::template::Installment;

#[test]
fn test_render_empty_markup() {
    assert_eq!(render("", &person_values()), "");
}

#[test]
fn test_render_without_tokens_is_unchanged() {
    let markup = "<p>Sem marcadores { } {x} }}</p>";
    assert_eq!(render(markup, &person_values()), markup);
}

#[test]
fn test_render_escapes_and_masks() {
    let result = render("{{nome}}, CPF {{doc_cpf}}", &person_values());
    assert_eq!(result, "&lt;A&amp;B&gt;, CPF 123.456.789-01");
}

#[test]
fn test_render_placeholder_with_spaces() {
    let values = person_values();
    assert_eq!(render("{{ nome }}", &values), "&lt;A&amp;B&gt;");
    assert_eq!(render("{{  nome\t}}", &values), "&lt;A&amp;B&gt;");
}

#[test]
fn test_render_formats_by_key_name() {
    let values = person_values();
    assert_eq!(render("{{cnpj}}", &values), "11.222.333/0001-81");
    assert_eq!(render("{{valor_total}}", &values), "R$ 1.500,00");
    assert_eq!(render("{{data_assinatura}}", &values), "09/03/2024");
}

#[test]
fn test_render_missing_key_is_empty() {
    assert_eq!(render("[{{ausente}}]", &ValueMap::new()), "[]");
}

#[test]
fn test_render_booleans_and_numbers_as_text() {
    let values = ValueMap::new()
        .with("ativo", true)
        .with("inativo", false)
        .with("qtd", 3i64);
    assert_eq!(render("{{ativo}}/{{inativo}}/{{qtd}}", &values), "true/false/3");
}

#[test]
fn test_render_installment_list_placeholder_is_empty() {
    let values = ValueMap::new().with("parcelas", vec![Installment::default()]);
    assert_eq!(render("[{{parcelas}}]", &values), "[]");
}

#[test]
fn test_render_invalid_identifiers_left_intact() {
    let values = person_values();
    for markup in ["{{}}", "{{ }}", "{{nome.x}}", "{{ação}}", "{{nome}", "{nome}}"] {
        assert_eq!(render(markup, &values), markup, "{markup:?}");
    }
}

#[test]
fn test_render_triple_braces_match_inner_token() {
    let values = ValueMap::new().with("x", "1");
    assert_eq!(render("{{{x}}}", &values), "{1}");
}

#[test]
fn test_render_does_not_mutate_values() {
    let values = person_values();
    let before = values.clone();
    let _ = render("{{nome}} {{#check:aceite}} {{parcelas_rows}}", &values);
    assert_eq!(values, before);
}

#[test]
fn test_engine_and_function_agree() {
    let values = person_values();
    let markup = "{{nome}} {{#radio:tipo|b}}";
    assert_eq!(TemplateEngine::new().render(markup, &values), render(markup, &values));
}

#[test]
fn test_substituted_values_are_not_rescanned() {
    let values = ValueMap::new().with("a", "{{b}}").with("b", "nope");
    assert_eq!(render("{{a}}", &values), "{{b}}");
}
