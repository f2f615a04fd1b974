//! Frases de demonstração com a categoria esperada.
//!
//! Usadas pelo endpoint de exemplos da interface de chat e pelos testes de
//! integração. Cobrem os grupos do dicionário e as três interpretações de
//! agenda (avulso, parcelado, recorrente).

/// Pares (categoria esperada, frase), no vocabulário coloquial que o
/// interpretador entende.
pub fn demo_phrases() -> &'static [(&'static str, &'static str)] {
    &[
        ("transporte", "Gastei 50 no uber para o trabalho"),
        ("saude", "Gastei 180 no barbeiro parcelado em 3x"),
        ("alimentacao", "Paguei 89,90 no ifood"),
        ("casa", "Assinatura de 39,90 todo mes"),
        ("educacao", "Paguei 450 na faculdade"),
        ("lazer", "Comprei um jogo de 120 na steam"),
        ("salario", "Recebi 3000 de salario"),
        ("investimento", "Coloquei 500 na poupanca"),
    ]
}
