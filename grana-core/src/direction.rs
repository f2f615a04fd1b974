//! Direção (entrada/saída) e método de pagamento (débito/crédito).
//!
//! Pistas lexicais sobre o texto normalizado. Entrada vence se qualquer
//! marcador de renda aparece; crédito vence se há parcelamento (> 1) ou
//! marcador de cartão — mas entrada força débito incondicionalmente:
//! dinheiro que entra soma no saldo, nunca na fatura.

use crate::model::{PaymentMethod, TransactionType};

/// Marcadores de renda (texto normalizado).
const INCOME_MARKERS: &[&str] = &[
    "receber", "recebi", "ganhei", "caiu", "salario", "venda", "lucro",
    "entrada", "reembolso", "freela", "freelance", "pagamento",
];

/// Marcadores de cartão de crédito (texto normalizado).
const CREDIT_MARKERS: &[&str] = &[
    "cartao", "credito", "fatura", "parcelado", "parcela", "dividido",
];

/// Entrada se qualquer marcador de renda aparece; senão saída.
pub fn detect_type(normalized: &str) -> TransactionType {
    if INCOME_MARKERS.iter().any(|m| normalized.contains(m)) {
        TransactionType::Income
    } else {
        TransactionType::Expense
    }
}

/// Débito por padrão; crédito com parcelas ou marcador de cartão.
/// Entradas são sempre débito, independente do resto.
pub fn detect_payment_method(
    normalized: &str,
    installments: u32,
    kind: TransactionType,
) -> PaymentMethod {
    if kind == TransactionType::Income {
        return PaymentMethod::Debit;
    }
    if installments > 1 || CREDIT_MARKERS.iter().any(|m| normalized.contains(m)) {
        PaymentMethod::Credit
    } else {
        PaymentMethod::Debit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_markers() {
        assert_eq!(detect_type("recebi 3000 de salario"), TransactionType::Income);
        assert_eq!(detect_type("caiu 500 na conta"), TransactionType::Income);
        assert_eq!(detect_type("gastei 50 no mercado"), TransactionType::Expense);
    }

    #[test]
    fn test_credit_by_keyword_or_installments() {
        assert_eq!(
            detect_payment_method("paguei 100 no cartao", 1, TransactionType::Expense),
            PaymentMethod::Credit
        );
        assert_eq!(
            detect_payment_method("600 em 3x", 3, TransactionType::Expense),
            PaymentMethod::Credit
        );
        assert_eq!(
            detect_payment_method("gastei 50 no uber", 1, TransactionType::Expense),
            PaymentMethod::Debit
        );
    }

    #[test]
    fn test_income_forces_debit() {
        // Mesmo com marcador de crédito na frase, entrada é débito
        assert_eq!(
            detect_payment_method("recebi 200 de estorno da fatura", 1, TransactionType::Income),
            PaymentMethod::Debit
        );
    }
}
