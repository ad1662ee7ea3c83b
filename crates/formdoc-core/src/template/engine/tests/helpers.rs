//! Shared test helpers for template engine tests

use crate::template::{Installment, ValueMap};

/// Values for a person signing a power of attorney
pub(super) fn person_values() -> ValueMap {
    ValueMap::new()
        .with("nome", "<A&B>")
        .with("doc_cpf", "12345678901")
        .with("cnpj", "11222333000181")
        .with("valor_total", "150000")
        .with("data_assinatura", "2024-03-09")
        .with("tipo", "b")
        .with("aceite", true)
        .with("recusa", false)
}

/// Values with two installments and their count
pub(super) fn installment_values() -> ValueMap {
    ValueMap::new().with("qtd_parcelas", "2").with(
        "parcelas",
        vec![
            Installment::new("2024-01-05", "10000"),
            Installment::new("2024-02-05", "R$ 50,00"),
        ],
    )
}
