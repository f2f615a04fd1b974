//! # Analisador de Pagamento — Datas, Recorrência e Parcelas
//!
//! Decide **quando** e **quantas vezes** a frase gera lançamento, e qual o
//! valor de cada ocorrência. As regras são avaliadas nesta prioridade:
//!
//! 1. **Mês citado** — "minha fatura de fevereiro é 345" ancora a data no
//!    dia 5 da próxima ocorrência do mês (ano seguinte se já passou). A
//!    data vale para todos os ramos abaixo; sem mês citado, vale hoje.
//! 2. **Recorrência** — "todo mes", "assinatura", "fixo"... encerra a
//!    análise: 12 ocorrências mensais com o valor cheio, sem divisão.
//! 3. **Parcelas explícitas** — "em 3x", "5 vezes", "4 parcelas". Na
//!    fraseologia "N parcelas de X" o valor informado já é o da parcela;
//!    caso contrário o valor é o total e é dividido por N.
//! 4. Nada casou: lançamento avulso com o valor cheio.
//!
//! Mês e parcelas são eixos independentes: uma frase com os dois ganha o
//! mês como data de competência e o parcelamento como divisão de valor.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::money::format_brl;
use crate::normalizer::normalize;

/// Nomes dos meses já normalizados (sem diacríticos), em ordem de calendário.
///
/// A varredura segue esta ordem de lista: o primeiro mês encontrado na
/// frase vence, independente da posição no texto.
pub const MONTHS: &[&str] = &[
    "janeiro", "fevereiro", "marco", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// Marcadores de recorrência mensal ("repete para sempre").
const RECURRENCE_MARKERS: &[&str] = &[
    "todo mes", "toda semana", "mensal", "assinatura", "fixo", "sempre",
];

/// Como o valor final de cada ocorrência foi calculado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationMethod {
    /// O valor informado é o de cada ocorrência (avulso, recorrente ou
    /// "N parcelas de X").
    Fixed,
    /// O valor informado era o total e foi dividido pelo número de parcelas.
    Divided,
}

/// Resultado da análise de pagamento de uma frase.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentPlan {
    /// Quantas ocorrências a frase gera (1 = avulso, 12 = recorrente).
    pub installments: u32,
    pub is_recurring: bool,
    /// Valor de cada ocorrência, já dividido quando for o caso.
    pub final_amount: f64,
    pub method: CalculationMethod,
    /// Explicação legível da derivação (vazio no caso avulso).
    pub feedback: String,
    /// Data de competência: hoje ou dia 5 do mês citado.
    pub date: NaiveDate,
}

/// Analisador com a regex de parcelas compilada uma única vez.
pub struct ScheduleAnalyzer {
    installment_re: Regex,
}

impl ScheduleAnalyzer {
    pub fn new() -> Self {
        Self {
            installment_re: Regex::new(r"(\d+)\s*(?:x|vezes|parcelas)").unwrap(),
        }
    }

    /// Analisa a frase e deriva o plano de pagamento.
    ///
    /// `raw_amount` é o montante bruto já escolhido pelo pipeline (máximo
    /// dos tokens numéricos); `today` é injetado para testes determinísticos.
    pub fn analyze(&self, text: &str, raw_amount: f64, today: NaiveDate) -> PaymentPlan {
        let clean = normalize(text);
        let date = self.resolve_date(&clean, today);

        if RECURRENCE_MARKERS.iter().any(|m| clean.contains(m)) {
            return PaymentPlan {
                installments: 12,
                is_recurring: true,
                final_amount: raw_amount,
                method: CalculationMethod::Fixed,
                feedback: "Recorrência mensal identificada.".to_string(),
                date,
            };
        }

        if let Some(n) = self.explicit_installments(&clean) {
            let lower = text.to_lowercase();
            if lower.contains(" de ") && lower.contains("parcelas") {
                // "3 parcelas de 200": o valor informado já é o da parcela
                return PaymentPlan {
                    installments: n,
                    is_recurring: false,
                    final_amount: raw_amount,
                    method: CalculationMethod::Fixed,
                    feedback: format!("{} parcelas de {}.", n, format_brl(raw_amount)),
                    date,
                };
            }
            let per_installment = raw_amount / n as f64;
            return PaymentPlan {
                installments: n,
                is_recurring: false,
                final_amount: per_installment,
                method: CalculationMethod::Divided,
                feedback: format!(
                    "Total dividido em {}x de {}.",
                    n,
                    format_brl(per_installment)
                ),
                date,
            };
        }

        PaymentPlan {
            installments: 1,
            is_recurring: false,
            final_amount: raw_amount,
            method: CalculationMethod::Fixed,
            feedback: String::new(),
            date,
        }
    }

    /// Dia 5 da próxima ocorrência do mês citado, ou `today`.
    fn resolve_date(&self, clean: &str, today: NaiveDate) -> NaiveDate {
        for (i, name) in MONTHS.iter().enumerate() {
            if clean.contains(name) {
                let month = i as u32 + 1;
                let mut year = today.year();
                if month < today.month() {
                    year += 1;
                }
                return NaiveDate::from_ymd_opt(year, month, 5).unwrap_or(today);
            }
        }
        today
    }

    /// Contagem explícita "N x|vezes|parcelas". Zero é ignorado: o modelo
    /// de dados exige ao menos uma ocorrência.
    fn explicit_installments(&self, clean: &str) -> Option<u32> {
        let caps = self.installment_re.captures(clean)?;
        let n: u32 = caps[1].parse().ok()?;
        (n >= 1).then_some(n)
    }
}

impl Default for ScheduleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
