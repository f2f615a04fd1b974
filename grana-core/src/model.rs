//! # Modelo de Dados — Vocabulários e Registros de Lançamento
//!
//! Define os vocabulários fixos compartilhados com a camada de dados
//! (categorias, bancos, métodos de pagamento) e os dois registros que
//! atravessam a fronteira do interpretador:
//!
//! - [`ParsedTransaction`]: a saída imutável do pipeline, uma por frase.
//! - [`NewTransaction`]: o payload entregue ao coletor de lançamentos
//!   ([`TransactionSink`]), no formato que a camada de persistência espera.
//!
//! ## Sincronia com a camada de dados
//!
//! Os nomes serializados (`alimentacao`, `nubank`, `debit`...) são o
//! contrato com o armazenamento. Renomear uma variante aqui sem migrar as
//! linhas já gravadas quebra a leitura do histórico — por isso os testes
//! deste módulo fixam os nomes serializados.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Categorias de lançamento reconhecidas pelo classificador.
///
/// A ordem de varredura do dicionário de palavras-chave é definida em
/// [`crate::categories::CATEGORY_GROUPS`], não aqui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// **Alimentação**: delivery, restaurantes, mercado, padaria. Ex: "ifood", "padaria".
    Alimentacao,
    /// **Transporte**: apps de corrida, combustível, transporte público, manutenção veicular.
    Transporte,
    /// **Casa**: aluguel, contas de consumo, reformas, pet, assinaturas domésticas.
    Casa,
    /// **Lazer**: streaming, jogos, viagens, vestuário, eletrônicos.
    Lazer,
    /// **Saúde**: farmácia, consultas, academia, cuidados pessoais.
    Saude,
    /// **Educação**: mensalidades, cursos, livros, material escolar.
    Educacao,
    /// **Salário**: rendimentos do trabalho e entradas em geral.
    Salario,
    /// **Investimento**: renda fixa, cripto, corretoras, reservas.
    Investimento,
    /// **Outros**: fallback quando nenhum grupo do dicionário casa.
    Outros,
}

impl Category {
    /// Rótulo legível em pt-BR, como exibido na interface.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Alimentacao => "Alimentação",
            Category::Transporte => "Transporte",
            Category::Casa => "Casa",
            Category::Lazer => "Lazer",
            Category::Saude => "Saúde",
            Category::Educacao => "Educação",
            Category::Salario => "Salário",
            Category::Investimento => "Investimento",
            Category::Outros => "Outros",
        }
    }

    /// Ícone emoji para a categoria (UI do chat)
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Alimentacao => "🍔",
            Category::Transporte => "🚗",
            Category::Casa => "🏠",
            Category::Lazer => "🎮",
            Category::Saude => "💊",
            Category::Educacao => "📚",
            Category::Salario => "💼",
            Category::Investimento => "📈",
            Category::Outros => "📦",
        }
    }
}

/// Bancos conhecidos pela aplicação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Nubank,
    Itau,
    Caixa,
    Outros,
}

impl Bank {
    /// Rótulo legível em pt-BR.
    pub fn label(&self) -> &'static str {
        match self {
            Bank::Nubank => "Nubank",
            Bank::Itau => "Itaú",
            Bank::Caixa => "Caixa",
            Bank::Outros => "Outros",
        }
    }
}

/// Método de pagamento de um lançamento.
///
/// `Credit` significa "vai para a fatura do cartão"; `Debit` afeta o saldo
/// da conta diretamente. Entradas são sempre `Debit` (dinheiro que cai na
/// conta, nunca na fatura).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Debit,
    Credit,
}

/// Direção do lançamento: entrada ou saída de dinheiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Resultado estruturado do interpretador — um por frase do usuário.
///
/// Imutável depois de produzido. O chamador entrega o registro ao coletor
/// (via [`ParsedTransaction::to_record`]) e ecoa `feedback` para o usuário;
/// o interpretador não guarda memória entre frases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedTransaction {
    /// Valor desta ocorrência, já dividido se o plano de parcelas divide.
    /// Sempre positivo: sem valor não há lançamento (o parse falha antes).
    pub amount: f64,
    pub category: Category,
    /// Rótulo derivado do texto, nunca vazio (mínimo 3 caracteres ou fallback).
    pub description: String,
    pub bank: Bank,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Data de competência: hoje, ou dia 5 do mês citado na frase.
    pub date: NaiveDate,
    /// Quantos lançamentos esta frase gera (1 = avulso, 12 = recorrente).
    pub installments: u32,
    /// `true` = "repete todo mês"; exclui a interpretação de parcelamento.
    pub is_recurring: bool,
    pub payment_method: PaymentMethod,
    /// Explicação legível de como valor e data foram derivados.
    pub feedback: String,
}

impl ParsedTransaction {
    /// Converte para o payload do coletor de lançamentos.
    ///
    /// Mapeamento do contrato: `installments` → `repeat_months` e a negação
    /// de `is_recurring` → `is_installment` (parcelamento e recorrência são
    /// interpretações mutuamente exclusivas de "repetir").
    pub fn to_record(&self) -> NewTransaction {
        NewTransaction {
            description: self.description.clone(),
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            bank: self.bank,
            date: self.date,
            repeat_months: self.installments,
            is_installment: !self.is_recurring,
            payment_method: self.payment_method,
        }
    }
}

/// Payload aceito pelo coletor de lançamentos da camada de dados.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub bank: Bank,
    pub date: NaiveDate,
    pub repeat_months: u32,
    pub is_installment: bool,
    pub payment_method: PaymentMethod,
}

/// Coletor de lançamentos — a costura com a camada de dados excluída.
///
/// O coletor é dono do fan-out (criar N linhas para um plano de parcelas ou
/// recorrência) e da persistência. O interpretador nunca chama o coletor
/// por conta própria.
pub trait TransactionSink {
    fn record(&mut self, tx: NewTransaction);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_storage_vocabulary() {
        // Contrato com a camada de dados: nomes minúsculos sem acento
        assert_eq!(serde_json::to_string(&Category::Alimentacao).unwrap(), "\"alimentacao\"");
        assert_eq!(serde_json::to_string(&Category::Saude).unwrap(), "\"saude\"");
        assert_eq!(serde_json::to_string(&Bank::Itau).unwrap(), "\"itau\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Credit).unwrap(), "\"credit\"");
        assert_eq!(serde_json::to_string(&TransactionType::Expense).unwrap(), "\"expense\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Saude.label(), "Saúde");
        assert_eq!(Category::Alimentacao.label(), "Alimentação");
        assert_eq!(Bank::Itau.label(), "Itaú");
    }

    #[test]
    fn test_to_record_maps_repeat_fields() {
        let tx = ParsedTransaction {
            amount: 60.0,
            category: Category::Saude,
            description: "barbeiro".to_string(),
            bank: Bank::Itau,
            kind: TransactionType::Expense,
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            installments: 3,
            is_recurring: false,
            payment_method: PaymentMethod::Credit,
            feedback: String::new(),
        };
        let record = tx.to_record();
        assert_eq!(record.repeat_months, 3);
        assert!(record.is_installment);

        let recurring = ParsedTransaction { installments: 12, is_recurring: true, ..tx };
        assert!(!recurring.to_record().is_installment);
        assert_eq!(recurring.to_record().repeat_months, 12);
    }
}
