//! # Extrator de Descrição — O Que Sobra da Frase
//!
//! A descrição é derivada do texto **original** (com maiúsculas e
//! acentos), não do normalizado: remove-se todo token numérico e depois
//! toda palavra da lista de descarte (verbos de gasto/renda, pronomes,
//! preposições, gírias de dinheiro), por palavra inteira e sem
//! sensibilidade a caixa. O que sobrar, com espaços colapsados, é o rótulo.
//!
//! Sobrando menos de 3 caracteres, o fallback é a palavra-chave que o
//! classificador casou; sem palavra-chave, um rótulo genérico por direção
//! ("Entrada"/"Saída"). A descrição nunca é vazia.

use regex::Regex;

use crate::model::TransactionType;

/// Palavras descartadas da descrição (casadas por palavra inteira).
const STOPWORDS: &[&str] = &[
    "gastei", "paguei", "comprei", "assinei", "fiz", "um", "pix", "transferi", "perdi", "saida", "saída", "dei", "enviei", "pagar", "trocar", "fazer",
    "recebi", "ganhei", "caiu", "pingou", "depositei", "entrada", "vendi", "lucro", "pagaram", "agendar", "marcar", "coloquei", "botei", "faturei", "parcelei", "dividi", "acaba", "termina",
    "tenho", "possuo", "guardado", "banco", "conta", "dinheiro", "grana", "valor", "reais", "real", "r$", "conto", "pila", "mangos", "paus", "mil", "foi", "deu", "ficou",
    "no", "na", "em", "de", "do", "da", "com", "pelo", "pela", "para", "pro", "pra", "a", "o", "uns", "umas", "meu", "minha", "nossa", "e", "que", "ate", "esse", "essa",
];

/// Limpador com as duas regexes (tokens numéricos e palavras de descarte)
/// compiladas uma única vez.
pub struct DescriptionCleaner {
    amount_re: Regex,
    stopword_re: Regex,
}

impl DescriptionCleaner {
    pub fn new() -> Self {
        let alternation = STOPWORDS
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        Self {
            amount_re: Regex::new(r"(?i)(?:R\$|\$)?\s*\d+(?:[.,]\d{1,2})?k?").unwrap(),
            stopword_re: Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap(),
        }
    }

    /// Deriva o rótulo da frase original.
    pub fn extract(
        &self,
        original: &str,
        matched_keyword: Option<&'static str>,
        kind: TransactionType,
    ) -> String {
        let no_amounts = self.amount_re.replace_all(original, "");
        let no_stopwords = self.stopword_re.replace_all(&no_amounts, "");
        let collapsed = no_stopwords.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() >= 3 {
            return collapsed;
        }
        match matched_keyword {
            Some(key) => key.to_string(),
            None => match kind {
                TransactionType::Income => "Entrada".to_string(),
                TransactionType::Expense => "Saída".to_string(),
            },
        }
    }
}

impl Default for DescriptionCleaner {
    fn default() -> Self {
        Self::new()
    }
}
