//! Razão em memória — o coletor de lançamentos do demo.
//!
//! Implementa [`TransactionSink`] materializando o fan-out que a camada de
//! dados real faria: um plano de N parcelas (ou uma recorrência de 12
//! meses) vira N linhas, uma por mês a partir da data de competência.
//!
//! Saldo segue a regra da aplicação: entrada soma no saldo do banco,
//! saída no débito subtrai, saída no crédito acumula na fatura do banco
//! (e só afetaria o saldo no pagamento da fatura, fora deste demo).

use std::collections::HashMap;

use chrono::{Months, NaiveDate};
use serde::Serialize;

use grana_core::{Bank, Category, NewTransaction, PaymentMethod, TransactionSink, TransactionType};

/// Uma linha materializada do razão.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LedgerEntry {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub bank: Bank,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: Vec<LedgerEntry>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Saldo por banco: entradas somam, saídas no débito subtraem.
    pub fn bank_balances(&self) -> HashMap<Bank, f64> {
        let mut balances = HashMap::new();
        for entry in &self.entries {
            let balance = balances.entry(entry.bank).or_insert(0.0);
            match (entry.kind, entry.payment_method) {
                (TransactionType::Income, _) => *balance += entry.amount,
                (TransactionType::Expense, PaymentMethod::Debit) => *balance -= entry.amount,
                (TransactionType::Expense, PaymentMethod::Credit) => {}
            }
        }
        balances
    }

    /// Fatura acumulada por banco (saídas no crédito).
    pub fn credit_card_bills(&self) -> HashMap<Bank, f64> {
        let mut bills = HashMap::new();
        for entry in &self.entries {
            if entry.kind == TransactionType::Expense
                && entry.payment_method == PaymentMethod::Credit
            {
                *bills.entry(entry.bank).or_insert(0.0) += entry.amount;
            }
        }
        bills
    }

    /// Saldo consolidado de todos os bancos.
    pub fn total_balance(&self) -> f64 {
        self.bank_balances().values().sum()
    }
}

impl TransactionSink for MemoryLedger {
    fn record(&mut self, tx: NewTransaction) {
        let occurrences = tx.repeat_months.max(1);
        for i in 0..occurrences {
            let date = tx
                .date
                .checked_add_months(Months::new(i))
                .unwrap_or(tx.date);
            self.entries.push(LedgerEntry {
                description: tx.description.clone(),
                amount: tx.amount,
                kind: tx.kind,
                category: tx.category,
                bank: tx.bank,
                date,
                payment_method: tx.payment_method,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_tx() -> NewTransaction {
        NewTransaction {
            description: "barbeiro".to_string(),
            amount: 60.0,
            kind: TransactionType::Expense,
            category: Category::Saude,
            bank: Bank::Itau,
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            repeat_months: 3,
            is_installment: true,
            payment_method: PaymentMethod::Credit,
        }
    }

    #[test]
    fn test_installment_plan_fans_out_monthly() {
        let mut ledger = MemoryLedger::new();
        ledger.record(base_tx());

        assert_eq!(ledger.entries().len(), 3);
        assert_eq!(ledger.entries()[0].date, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert_eq!(ledger.entries()[1].date, NaiveDate::from_ymd_opt(2026, 9, 6).unwrap());
        assert_eq!(ledger.entries()[2].date, NaiveDate::from_ymd_opt(2026, 10, 6).unwrap());
    }

    #[test]
    fn test_credit_expense_goes_to_bill_not_balance() {
        let mut ledger = MemoryLedger::new();
        ledger.record(base_tx());

        assert_eq!(ledger.bank_balances().get(&Bank::Itau).copied().unwrap_or(0.0), 0.0);
        assert_eq!(ledger.credit_card_bills()[&Bank::Itau], 180.0);
    }

    #[test]
    fn test_income_and_debit_move_the_balance() {
        let mut ledger = MemoryLedger::new();
        ledger.record(NewTransaction {
            description: "salario".to_string(),
            amount: 3000.0,
            kind: TransactionType::Income,
            payment_method: PaymentMethod::Debit,
            repeat_months: 1,
            ..base_tx()
        });
        ledger.record(NewTransaction {
            description: "mercado".to_string(),
            amount: 200.0,
            payment_method: PaymentMethod::Debit,
            repeat_months: 1,
            ..base_tx()
        });

        assert_eq!(ledger.total_balance(), 2800.0);
    }
}
