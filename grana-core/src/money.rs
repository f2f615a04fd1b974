//! Formatação monetária em pt-BR ("R$ 1.234,56").
//!
//! Usada pelos textos de feedback do analisador de pagamento e pelas
//! respostas do assistente. Ponto como separador de milhar, vírgula como
//! separador decimal, sempre dois dígitos de centavos.

/// Formata um valor em reais no padrão brasileiro.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(cents / 100), cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
