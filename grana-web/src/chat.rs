//! Roteamento das mensagens do assistente.
//!
//! Antes de tentar interpretar um lançamento, o assistente atende duas
//! consultas diretas: saldo consolidado e ajuda. Todo o resto passa pelo
//! interpretador; em caso de sucesso o lançamento é gravado no razão e a
//! resposta ecoa montante, método, descrição, categoria e período.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use grana_core::schedule::MONTHS;
use grana_core::{
    format_brl, normalize, ParsedTransaction, PaymentMethod, TransactionParser, TransactionSink,
    TransactionType,
};

use crate::ledger::MemoryLedger;

/// Resposta do assistente para uma mensagem.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub resposta: String,
    /// Presente apenas quando a mensagem virou lançamento.
    pub lancamento: Option<ParsedTransaction>,
}

/// Processa uma mensagem do usuário contra o razão.
///
/// `today` é injetado pelo handler (data local) e repassado ao
/// interpretador, mantendo a rota testável com data fixa.
pub fn respond(
    parser: &TransactionParser,
    ledger: &mut MemoryLedger,
    texto: &str,
    today: NaiveDate,
) -> ChatReply {
    let clean = normalize(texto);

    if clean.contains("saldo") {
        return ChatReply {
            resposta: format!(
                "💰 Seu saldo atual consolidado é de {}.",
                format_brl(ledger.total_balance())
            ),
            lancamento: None,
        };
    }

    if clean.contains("ajuda") {
        return ChatReply {
            resposta: "🤝 Como posso ajudar:\n\n\
                Você pode me enviar comandos naturais como:\n\
                • \"Gastei 180 no barbeiro\" (Débito)\n\
                • \"Minha fatura de Fevereiro é 345\" (Agendamento)\n\
                • \"Qual meu saldo atual?\" (Consulta)"
                .to_string(),
            lancamento: None,
        };
    }

    match parser.parse_with_date(texto, today) {
        Some(tx) => {
            ledger.record(tx.to_record());

            let titulo = match tx.kind {
                TransactionType::Income => "Entrada registrada",
                TransactionType::Expense => "Lançamento realizado",
            };
            let metodo = match (tx.payment_method, tx.kind) {
                (PaymentMethod::Credit, _) => "💳 (Crédito/Fatura)",
                (_, TransactionType::Income) => "💰 (Receita/Saldo)",
                _ => "💵 (Débito Direto)",
            };
            let mut resposta = format!(
                "✅ {titulo} com sucesso!\n\n\
                 Já processei as informações para o período de {periodo}:\n\n\
                 💰 Montante: {montante}\n\
                 ⚙️ Método: {metodo}\n\
                 📝 Descrição: {descricao}\n\
                 📂 Categoria: {categoria}",
                periodo = period_label(tx.date),
                montante = format_brl(tx.amount),
                descricao = tx.description,
                categoria = tx.category.label(),
            );
            if !tx.feedback.is_empty() {
                resposta.push_str(&format!("\n\n🧮 {}", tx.feedback));
            }

            ChatReply {
                resposta,
                lancamento: Some(tx),
            }
        }
        None => ChatReply {
            resposta: "🤔 Compreendi sua intenção, mas preciso de um valor numérico \
                claro para processar o lançamento. Poderia repetir informando o valor?"
                .to_string(),
            lancamento: None,
        },
    }
}

/// "agosto de 2026" — mês por extenso e ano, como a UI exibe períodos.
fn period_label(date: NaiveDate) -> String {
    let name = MONTHS
        .get(date.month0() as usize)
        .copied()
        .unwrap_or("mes");
    format!("{} de {}", name, date.year())
}
