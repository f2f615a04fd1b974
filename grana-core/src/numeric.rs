//! # Extrator Numérico — Tokens Monetários em Texto Livre
//!
//! Varre a frase em busca de tokens com cara de dinheiro e devolve os
//! valores na ordem em que aparecem no texto. Formas aceitas:
//!
//! | Forma               | Exemplo          | Valor    |
//! |---------------------|------------------|----------|
//! | Inteiro             | `180`            | 180.0    |
//! | Decimal com vírgula | `39,90`          | 39.9     |
//! | Decimal com ponto   | `39.90`          | 39.9     |
//! | Prefixo de moeda    | `R$ 250`, `$250` | 250.0    |
//! | Sufixo milhar       | `2k`, `1,5k`     | 2000.0, 1500.0 |
//!
//! Quem decide qual valor usar é o pipeline: o montante bruto é sempre o
//! **máximo** dos tokens encontrados, para que "paguei 3x de 50" aproveite
//! o maior número presente e contadores pequenos não dominem.

use regex::Regex;

/// Scanner de tokens monetários com regex compilada uma única vez.
pub struct NumberScanner {
    token_re: Regex,
}

impl NumberScanner {
    pub fn new() -> Self {
        Self {
            // Número com prefixo de moeda e decimal opcionais, ou a forma
            // isolada "<digitos>k" delimitada por espaços/bordas.
            token_re: Regex::new(
                r"(?i)(?:R\$|\$)?\s*\d+(?:[.,]\d{1,2})?\s*k?|(?:^|\s)\d+k(?:\s|$)",
            )
            .unwrap(),
        }
    }

    /// Extrai todos os valores numéricos do texto, na ordem do texto.
    ///
    /// Tokens que não parseiam como número são descartados. Lista vazia
    /// significa que a frase não tem valor — o parse inteiro falha.
    pub fn extract(&self, text: &str) -> Vec<f64> {
        self.token_re
            .find_iter(text)
            .filter_map(|m| parse_token(m.as_str()))
            .collect()
    }
}

impl Default for NumberScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Converte um token bruto ("R$ 39,90", "1,5k") em valor.
///
/// Regras, nesta ordem:
/// 1. descarta símbolo de moeda e espaços;
/// 2. sufixo `k` → remove o sufixo e multiplica por 1000;
/// 3. ponto E vírgula presentes → ponto é separador de milhar (removido
///    uma vez), vírgula vira ponto decimal;
/// 4. só vírgula → vira ponto decimal.
fn parse_token(raw: &str) -> Option<f64> {
    let mut n: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != 'r' && *c != '$')
        .collect();

    if n.contains('k') {
        n.retain(|c| c != 'k');
        return n.replace(',', ".").parse::<f64>().ok().map(|v| v * 1000.0);
    }

    if n.contains(',') && n.contains('.') {
        n = n.replacen('.', "", 1).replace(',', ".");
    } else if n.contains(',') {
        n = n.replace(',', ".");
    }
    n.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer() {
        let scanner = NumberScanner::new();
        assert_eq!(scanner.extract("gastei 180 no barbeiro"), vec![180.0]);
    }

    #[test]
    fn test_comma_decimal_and_currency_prefix() {
        let scanner = NumberScanner::new();
        assert_eq!(scanner.extract("assinatura de R$ 39,90"), vec![39.9]);
        assert_eq!(scanner.extract("paguei $25.50 hoje"), vec![25.5]);
    }

    #[test]
    fn test_k_suffix_multiplies() {
        let scanner = NumberScanner::new();
        assert_eq!(scanner.extract("recebi 3k de freela"), vec![3000.0]);
        assert_eq!(scanner.extract("entrou 1,5k na conta"), vec![1500.0]);
    }

    #[test]
    fn test_source_text_order() {
        let scanner = NumberScanner::new();
        assert_eq!(scanner.extract("50 e depois 120"), vec![50.0, 120.0]);
    }

    #[test]
    fn test_no_digits_yields_empty() {
        let scanner = NumberScanner::new();
        assert!(scanner.extract("gastei muito no mercado").is_empty());
    }

    #[test]
    fn test_installment_counter_is_also_captured() {
        // "3" também é token: quem resolve a ambiguidade é o máximo no pipeline
        let scanner = NumberScanner::new();
        assert_eq!(scanner.extract("600 em 3x"), vec![600.0, 3.0]);
    }

    #[test]
    fn test_both_separators_treated_as_thousands() {
        assert_eq!(parse_token("1.234,56"), Some(1234.56));
    }
}
