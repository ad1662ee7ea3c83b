//! Builtin template definitions

use crate::template::{FieldDeclaration as Field, FieldType, Template};

/// Ids of the builtin templates, in listing order
pub const BUILTIN_TEMPLATE_IDS: [&str; 4] = [
    "procuracao-pj",
    "procuracao-pf",
    "contrato-producao-musical",
    "contrato-producao-musical-v2",
];

const COOPERATIVAS: &[(&str, &str)] = &[
    ("UNI GOIANA", "UNI GOIANA"),
    ("UNICRED PROSPERAR", "UNICRED PROSPERAR"),
    ("UNICRED CENTRAL", "UNICRED CENTRAL"),
];

const ASSINATURA_TIPOS: &[(&str, &str)] = &[("Simples", "simples"), ("Múltipla", "multipla")];

/// Get builtin template by id
pub fn get_builtin_template(id: &str) -> Option<Template> {
    match id {
        "procuracao-pj" => Some(procuracao_pj()),
        "procuracao-pf" => Some(procuracao_pf()),
        "contrato-producao-musical" => Some(contrato_producao_musical()),
        "contrato-producao-musical-v2" => Some(contrato_producao_musical_v2()),
        _ => None,
    }
}

/// All builtin templates, in listing order
pub fn builtin_templates() -> Vec<Template> {
    BUILTIN_TEMPLATE_IDS
        .iter()
        .filter_map(|id| get_builtin_template(id))
        .collect()
}

/// Power of attorney for internet banking, company grantor
fn procuracao_pj() -> Template {
    Template::new(
        "procuracao-pj",
        "Procuração Internet Banking - PJ",
        include_str!("../../builtin_templates/procuracao-pj.html"),
    )
    .with_field(
        Field::new("cooperativa", "Cooperativa/Agência", FieldType::Select)
            .with_options(COOPERATIVAS),
    )
    .with_field(
        Field::new("razao_social", "Razão Social", FieldType::Text)
            .with_placeholder("WEGEN NEGÓCIOS E SOLUÇÕES LTDA"),
    )
    .with_field(Field::new(
        "representante_nome",
        "Nome do Sócio/Representante/Administrador",
        FieldType::Text,
    ))
    .with_field(Field::new(
        "representante_cpf",
        "CPF do Sócio/Representante/Administrador",
        FieldType::Text,
    ))
    .with_field(
        Field::new(
            "empresa_multisocio",
            "A empresa possui mais de um Sócio/Representante/Administrador?",
            FieldType::Radio,
        )
        .with_options(&[("Não", "nao"), ("Sim", "sim")]),
    )
    .with_field(Field::new("procurador_nome", "Nome do Procurador", FieldType::Text))
    .with_field(Field::new("procurador_cpf", "CPF do Procurador", FieldType::Text))
    .with_field(Field::new("conta", "Conta", FieldType::Text))
    .with_field(
        Field::new("assinatura_tipo", "Tipo de assinatura", FieldType::Radio)
            .with_options(ASSINATURA_TIPOS),
    )
    .with_field(Field::new("qtd_assinaturas", "Quantidade de assinaturas", FieldType::Number))
    .with_field(
        Field::new("permissoes", "Permissões do Procurador", FieldType::Checkboxes).with_items(&[
            ("perm_perfil_operador", "Perfil Operador"),
            ("perm_autorizador", "Perfil Autorizador"),
            ("perm_transferencias", "Permite transferências"),
        ]),
    )
    .with_field(Field::new("local", "Local", FieldType::Text).with_placeholder("Goiânia"))
    .with_field(Field::new("data", "Data", FieldType::Date))
    .with_field(Field::new("observacoes", "Observações", FieldType::Textarea))
}

/// Power of attorney for internet banking, individual grantor
fn procuracao_pf() -> Template {
    Template::new(
        "procuracao-pf",
        "Procuração Internet Banking - PF",
        include_str!("../../builtin_templates/procuracao-pf.html"),
    )
    .with_field(
        Field::new("cooperativa", "Cooperativa/Agência", FieldType::Select)
            .with_options(COOPERATIVAS),
    )
    .with_field(Field::new("outorgante_nome", "Nome do Outorgante", FieldType::Text))
    .with_field(Field::new("outorgante_cpf", "CPF do Outorgante", FieldType::Text))
    .with_field(Field::new(
        "outorgado_nome",
        "Nome do Procurador (Outorgado)",
        FieldType::Text,
    ))
    .with_field(Field::new("outorgado_cpf", "CPF do Procurador", FieldType::Text))
    .with_field(Field::new("conta", "Conta", FieldType::Text))
    .with_field(
        Field::new("assinatura_tipo", "Tipo de assinatura", FieldType::Radio)
            .with_options(ASSINATURA_TIPOS),
    )
    .with_field(Field::new("qtd_assinaturas", "Quantidade de assinaturas", FieldType::Number))
    .with_field(
        Field::new("permissoes", "Permissões do Procurador", FieldType::Checkboxes).with_items(&[
            ("perm_saldos", "Consultar saldos e extratos"),
            ("perm_pagamentos", "Efetuar pagamentos"),
            ("perm_transferencias", "Realizar transferências"),
        ]),
    )
    .with_field(Field::new("local", "Local", FieldType::Text).with_placeholder("Cidade"))
    .with_field(Field::new("data", "Data", FieldType::Date))
    .with_field(Field::new("observacoes", "Observações", FieldType::Textarea))
}

/// Contracting party, amounts and signatures shared by both contract versions
fn contract_parties(template: Template) -> Template {
    template
        .with_field(Field::new(
            "contratante_nome",
            "Nome da empresa (Contratante)",
            FieldType::Text,
        ))
        .with_field(Field::new("contratante_cnpj", "CNPJ da Contratante", FieldType::Text))
        .with_field(Field::new(
            "contratante_sede",
            "Sede (endereço) da Contratante",
            FieldType::Text,
        ))
        .with_field(Field::new(
            "contratante_email",
            "E-mail da Contratante",
            FieldType::Text,
        ))
        .with_field(
            Field::new("artistas", "Dupla/Artistas", FieldType::Text)
                .with_placeholder("Nome da dupla"),
        )
        .with_field(Field::new(
            "qtd_fonogramas",
            "Quantidade de fonogramas",
            FieldType::Number,
        ))
        .with_field(
            Field::new("valor_total", "Valor total bruto (R$)", FieldType::Text)
                .with_placeholder("R$ 0,00"),
        )
        .with_field(Field::new("valor_extenso", "Valor por extenso", FieldType::Text))
        .with_field(Field::new(
            "qtd_parcelas",
            "Quantidade de parcelas",
            FieldType::Number,
        ))
}

fn contract_signatures(template: Template) -> Template {
    template
        .with_field(Field::new("local", "Local", FieldType::Text).with_placeholder("Mairinque/SP"))
        .with_field(Field::new("data", "Data", FieldType::Date))
        .with_field(Field::new("test1_nome", "Testemunha 1 - Nome", FieldType::Text))
        .with_field(Field::new("test1_cpf", "Testemunha 1 - CPF", FieldType::Text))
        .with_field(Field::new("test2_nome", "Testemunha 2 - Nome", FieldType::Text))
        .with_field(Field::new("test2_cpf", "Testemunha 2 - CPF", FieldType::Text))
        .with_field(Field::new(
            "contratada_resp_nome",
            "Contratada - Representante (nome)",
            FieldType::Text,
        ))
        .with_field(Field::new(
            "contratada_resp_cpf",
            "Contratada - Representante (CPF)",
            FieldType::Text,
        ))
}

/// Music production contract with three fixed installments
fn contrato_producao_musical() -> Template {
    let template = contract_parties(Template::new(
        "contrato-producao-musical",
        "Contrato de Produção Musical",
        include_str!("../../builtin_templates/contrato-producao-musical.html"),
    ));

    let template = (1..=3).fold(template, |template, n| {
        template
            .with_field(Field::new(
                format!("p{n}_venc"),
                format!("{n}ª parcela - Vencimento"),
                FieldType::Date,
            ))
            .with_field(Field::new(
                format!("p{n}_valor"),
                format!("{n}ª parcela - Valor (R$)"),
                FieldType::Text,
            ))
    });

    contract_signatures(template)
}

/// Music production contract with a dynamic installment table
fn contrato_producao_musical_v2() -> Template {
    let template = contract_parties(Template::new(
        "contrato-producao-musical-v2",
        "Contrato de Produção Musical (Parcelas Dinâmicas)",
        include_str!("../../builtin_templates/contrato-producao-musical-v2.html"),
    ))
    .with_field(Field::new("parcelas", "Parcelas", FieldType::Installments));

    contract_signatures(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{create_initial_data, render, FieldValue, Installment};

    #[test]
    fn test_builtin_ids_and_order() {
        let ids: Vec<String> = builtin_templates().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, BUILTIN_TEMPLATE_IDS);
    }

    #[test]
    fn test_get_builtin_nonexistent() {
        assert!(get_builtin_template("nonexistent").is_none());
    }

    #[test]
    fn test_builtin_field_ids_are_unique() {
        for template in builtin_templates() {
            let mut ids: Vec<&str> = template.fields.iter().map(|f| f.id.as_str()).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "{}", template.id);
        }
    }

    #[test]
    fn test_procuracao_pj_shape() {
        let template = get_builtin_template("procuracao-pj").unwrap();
        assert_eq!(template.fields.len(), 14);
        assert_eq!(
            template.field("cooperativa").unwrap().options[0].value,
            "UNI GOIANA"
        );
        assert_eq!(template.field("permissoes").unwrap().items.len(), 3);
        assert!(template.preview_html.contains("{{#if:assinatura_tipo|multipla}}"));
    }

    #[test]
    fn test_contract_v1_has_fixed_installment_fields() {
        let template = get_builtin_template("contrato-producao-musical").unwrap();
        assert_eq!(template.fields.len(), 23);
        assert_eq!(template.field("p2_venc").unwrap().kind, FieldType::Date);
        assert_eq!(template.field("p3_valor").unwrap().label, "3ª parcela - Valor (R$)");
        assert!(!template.preview_html.contains("{{parcelas_rows}}"));
    }

    #[test]
    fn test_contract_v2_uses_dynamic_rows() {
        let template = get_builtin_template("contrato-producao-musical-v2").unwrap();
        assert_eq!(template.fields.len(), 18);
        assert_eq!(
            template.field("parcelas").unwrap().kind,
            FieldType::Installments
        );
        assert!(template.preview_html.contains("{{parcelas_rows}}"));
    }

    #[test]
    fn test_render_procuracao_pf_with_initial_data() {
        let template = get_builtin_template("procuracao-pf").unwrap();
        let mut values = create_initial_data(Some(&template));
        values.insert("outorgante_nome", "Ana");
        values.insert("outorgante_cpf", "12345678901");
        values.insert("perm_saldos", true);

        let html = render(&template.preview_html, &values);
        assert!(html.contains("<strong>Ana</strong>"));
        assert!(html.contains("123.456.789-01"));
        assert!(html.contains("<strong>UNI GOIANA</strong>"));
        assert!(!html.contains("{{"));
        // Simples is the default, so the quantity clause is dropped
        assert!(!html.contains("Quantidade:"));
    }

    #[test]
    fn test_render_contract_v2_rows() {
        let template = get_builtin_template("contrato-producao-musical-v2").unwrap();
        let mut values = create_initial_data(Some(&template));
        values.insert("qtd_parcelas", "2");
        values.sync_installments();
        values.insert(
            "parcelas",
            FieldValue::from(vec![
                Installment::new("2024-01-05", "10000"),
                Installment::new("2024-02-05", "20000"),
            ]),
        );

        let html = render(&template.preview_html, &values);
        assert!(html.contains("05/02/2024"));
        assert!(html.contains("R$ 200,00"));
        assert!(!html.contains("Nenhuma parcela definida."));
    }
}
