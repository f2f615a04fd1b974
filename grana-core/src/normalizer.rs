//! Normalização de texto para casamento de palavras-chave.
//!
//! Todo o casamento do pipeline acontece sobre o texto normalizado:
//! minúsculas e sem marcas diacríticas, de modo que "conexão" e "conexao"
//! sejam idênticos. A decomposição NFD separa a letra base das marcas
//! combinantes, que são então descartadas.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Minúsculas + remoção de diacríticos. Função pura e total.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_accents() {
        assert_eq!(normalize("Conexão"), "conexao");
        assert_eq!(normalize("AÇÃO"), "acao");
        assert_eq!(normalize("Mês de Março"), "mes de marco");
    }

    #[test]
    fn test_plain_ascii_untouched() {
        assert_eq!(normalize("gastei 50 no uber"), "gastei 50 no uber");
    }

    #[test]
    fn test_total_on_empty_and_symbols() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("R$ 1,50!"), "r$ 1,50!");
    }
}
