//! # grana-core — Interpretador de Lançamentos em Linguagem Natural
//!
//! Este crate transforma frases coloquiais em Português Brasileiro
//! ("Gastei 180 no barbeiro parcelado em 3x") em lançamentos financeiros
//! estruturados, de forma determinística e sem chamadas externas.
//!
//! ## Arquitetura do Sistema
//!
//! O interpretador é um pipeline linear de passada única, sem estado entre
//! frases:
//!
//! 1.  **Entrada**: Frase livre (String).
//! 2.  **Normalização** ([`normalizer`]): minúsculas e sem diacríticos,
//!     base de todo o casamento de palavras-chave.
//! 3.  **Extração Numérica** ([`numeric`]): tokens monetários (decimal com
//!     vírgula, prefixo R$, sufixo "k"); o montante bruto é o máximo.
//! 4.  **Análise de Pagamento** ([`schedule`]): mês citado, recorrência,
//!     parcelas explícitas; deriva data de competência e valor final.
//! 5.  **Direção e Método** ([`direction`]): entrada/saída e
//!     débito/crédito por pistas lexicais.
//! 6.  **Categoria** ([`categories`]): dicionário curado, primeiro acerto
//!     vence na ordem da lista.
//! 7.  **Descrição** ([`description`]): o que sobra da frase após remover
//!     números e palavras de descarte.
//! 8.  **Saída**: [`ParsedTransaction`], ou `None` quando a frase não tem
//!     valor numérico (a única falha dura).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use grana_core::{TransactionParser, Category, TransactionType};
//! use chrono::NaiveDate;
//!
//! let parser = TransactionParser::new();
//! let hoje = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//!
//! let tx = parser.parse_with_date("Recebi 3000 de salario", hoje).unwrap();
//! assert_eq!(tx.kind, TransactionType::Income);
//! assert_eq!(tx.category, Category::Salario);
//!
//! // Sem valor numérico não há lançamento
//! assert!(parser.parse_with_date("gastei muito hoje", hoje).is_none());
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: orquestrador e configuração ([`ParserConfig`]).
//! - [`categories`]: o dicionário de categorias e o modo de casamento.
//! - [`model`]: vocabulários e registros compartilhados com a camada de
//!   dados ([`TransactionSink`] é a costura com a persistência).

pub mod categories;
pub mod corpus;
pub mod description;
pub mod direction;
pub mod model;
pub mod money;
pub mod normalizer;
pub mod numeric;
pub mod pipeline;
pub mod schedule;

pub use categories::{Classification, MatchMode};
pub use model::{
    Bank, Category, NewTransaction, ParsedTransaction, PaymentMethod, TransactionSink,
    TransactionType,
};
pub use money::format_brl;
pub use normalizer::normalize;
pub use pipeline::{ParserConfig, TransactionParser};
pub use schedule::{CalculationMethod, PaymentPlan};
