//! # Pipeline — O Interpretador de Lançamentos
//!
//! Orquestra os estágios em ordem fixa sobre uma única passada:
//!
//! 1. **Normalização**: minúsculas, sem diacríticos ([`crate::normalizer`]).
//! 2. **Extração numérica**: tokens monetários; o montante bruto é o
//!    máximo encontrado. Sem número, o parse falha — única falha dura.
//! 3. **Análise de pagamento**: data, recorrência, parcelas
//!    ([`crate::schedule`]).
//! 4. **Direção e método**: entrada/saída, débito/crédito
//!    ([`crate::direction`]).
//! 5. **Categoria**: dicionário curado, primeiro acerto vence
//!    ([`crate::categories`]).
//! 6. **Descrição**: o que sobra da frase original
//!    ([`crate::description`]).
//!
//! O interpretador é puro e sem estado entre frases: cada chamada opera só
//! sobre a entrada e as tabelas constantes, então uma mesma instância pode
//! ser compartilhada entre threads sem coordenação.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use grana_core::{TransactionParser, Category, PaymentMethod};
//! use chrono::NaiveDate;
//!
//! let parser = TransactionParser::new();
//! let hoje = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//!
//! let tx = parser
//!     .parse_with_date("Gastei 180 no barbeiro parcelado em 3x", hoje)
//!     .expect("frase tem valor numérico");
//!
//! assert_eq!(tx.amount, 60.0);
//! assert_eq!(tx.category, Category::Saude);
//! assert_eq!(tx.installments, 3);
//! assert_eq!(tx.payment_method, PaymentMethod::Credit);
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::categories::{classify, MatchMode};
use crate::description::DescriptionCleaner;
use crate::direction::{detect_payment_method, detect_type};
use crate::model::{Bank, Category, ParsedTransaction};
use crate::normalizer::normalize;
use crate::numeric::NumberScanner;
use crate::schedule::ScheduleAnalyzer;

/// Nomes de banco reconhecidos no texto, em ordem de prioridade.
const BANK_MARKERS: &[(&str, Bank)] = &[
    ("nubank", Bank::Nubank),
    ("itau", Bank::Itau),
    ("caixa", Bank::Caixa),
];

/// Configuração explícita dos padrões do interpretador.
///
/// Banco e categorias de fallback são parâmetros, não constantes: cada
/// usuário tem uma conta padrão diferente.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Banco usado quando nenhum nome de banco aparece na frase.
    pub default_bank: Bank,
    /// Categoria de fallback para saídas sem acerto no dicionário.
    pub default_expense_category: Category,
    /// Categoria de fallback para entradas sem acerto no dicionário.
    pub default_income_category: Category,
    /// Estratégia de casamento do dicionário (substring por padrão).
    pub match_mode: MatchMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_bank: Bank::Itau,
            default_expense_category: Category::Outros,
            default_income_category: Category::Salario,
            match_mode: MatchMode::Substring,
        }
    }
}

/// O interpretador: estágios com regexes compiladas uma única vez.
pub struct TransactionParser {
    config: ParserConfig,
    numbers: NumberScanner,
    schedule: ScheduleAnalyzer,
    cleaner: DescriptionCleaner,
}

impl TransactionParser {
    /// Interpretador com a configuração padrão.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            numbers: NumberScanner::new(),
            schedule: ScheduleAnalyzer::new(),
            cleaner: DescriptionCleaner::new(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Interpreta a frase usando a data local como "hoje".
    pub fn parse(&self, text: &str) -> Option<ParsedTransaction> {
        self.parse_with_date(text, Local::now().date_naive())
    }

    /// Interpreta a frase com "hoje" injetado — determinístico para testes.
    ///
    /// Retorna `None` se e somente se nenhum token numérico for encontrado:
    /// lançamento sem valor não existe. Toda outra ambiguidade resolve em
    /// padrões (categoria "outros", banco configurado, rótulo genérico).
    pub fn parse_with_date(&self, text: &str, today: NaiveDate) -> Option<ParsedTransaction> {
        let clean = normalize(text);

        let raw_amount = self
            .numbers
            .extract(text)
            .into_iter()
            .fold(0.0_f64, f64::max);
        if raw_amount <= 0.0 {
            return None;
        }

        let plan = self.schedule.analyze(text, raw_amount, today);
        let kind = detect_type(&clean);
        let payment_method = detect_payment_method(&clean, plan.installments, kind);
        let classification = classify(
            &clean,
            kind,
            self.config.match_mode,
            self.config.default_expense_category,
            self.config.default_income_category,
        );
        let bank = detect_bank(&clean).unwrap_or(self.config.default_bank);
        let description = self
            .cleaner
            .extract(text, classification.matched_keyword, kind);

        Some(ParsedTransaction {
            amount: plan.final_amount,
            category: classification.category,
            description,
            bank,
            kind,
            date: plan.date,
            installments: plan.installments,
            is_recurring: plan.is_recurring,
            payment_method,
            feedback: plan.feedback,
        })
    }
}

impl Default for TransactionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Primeiro nome de banco presente no texto normalizado.
fn detect_bank(normalized: &str) -> Option<Bank> {
    BANK_MARKERS
        .iter()
        .find(|(marker, _)| normalized.contains(marker))
        .map(|(_, bank)| *bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PaymentMethod, TransactionType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_no_number_is_the_only_hard_failure() {
        let parser = TransactionParser::new();
        assert!(parser.parse_with_date("gastei muito no mercado", today()).is_none());
        assert!(parser.parse_with_date("", today()).is_none());
    }

    #[test]
    fn test_raw_amount_is_the_maximum_token() {
        let parser = TransactionParser::new();
        let tx = parser.parse_with_date("50 e depois 120 no mercado", today()).unwrap();
        assert_eq!(tx.amount, 120.0);
    }

    #[test]
    fn test_bank_detection_and_default() {
        let parser = TransactionParser::new();
        let nubank = parser.parse_with_date("paguei 80 no nubank", today()).unwrap();
        assert_eq!(nubank.bank, Bank::Nubank);

        let default = parser.parse_with_date("paguei 80 no mercado", today()).unwrap();
        assert_eq!(default.bank, Bank::Itau);
    }

    #[test]
    fn test_configured_default_bank() {
        let parser = TransactionParser::with_config(ParserConfig {
            default_bank: Bank::Caixa,
            ..ParserConfig::default()
        });
        let tx = parser.parse_with_date("paguei 80 no mercado", today()).unwrap();
        assert_eq!(tx.bank, Bank::Caixa);
    }

    #[test]
    fn test_income_defaults_to_salary_category() {
        let parser = TransactionParser::new();
        let tx = parser.parse_with_date("recebi 3000", today()).unwrap();
        assert_eq!(tx.kind, TransactionType::Income);
        assert_eq!(tx.category, Category::Salario);
        assert_eq!(tx.payment_method, PaymentMethod::Debit);
    }

    #[test]
    fn test_expense_defaults_to_other_category() {
        let parser = TransactionParser::new();
        let tx = parser.parse_with_date("gastei 75 com aquilo", today()).unwrap();
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.category, Category::Outros);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = TransactionParser::new();
        let text = "Assinatura de 39,90 todo mes no nubank";
        let a = parser.parse_with_date(text, today());
        let b = parser.parse_with_date(text, today());
        assert_eq!(a, b);
    }
}
