//! # Classificador de Categoria — Dicionário Curado
//!
//! Um gazetteer ordenado de grupos (categoria, palavras-chave) cobrindo o
//! vocabulário coloquial brasileiro de gastos e rendas. A varredura é
//! **primeiro-acerto-vence na ordem da lista**: sem pontuação, sem melhor
//! casamento. Duas palavras-chave válidas na mesma frase resolvem para o
//! grupo que aparece primeiro no dicionário, não na frase.
//!
//! O casamento padrão é por substring, sem fronteira de palavra — "tenis"
//! dentro de uma palavra maior ainda casa. O modo [`MatchMode::WholeWord`]
//! existe como opção estrita, mas não é o padrão em lugar nenhum: o
//! dicionário foi calibrado contra o comportamento de substring.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::model::{Category, TransactionType};

/// O dicionário, na ordem de varredura.
///
/// As palavras-chave estão normalizadas (minúsculas, sem diacríticos) como
/// o texto contra o qual casam. Entradas com espaço são expressões
/// ("zona azul", "plano de saude"); "bar " carrega espaço final de
/// propósito, para não casar dentro de "barato"/"barbeiro".
pub const CATEGORY_GROUPS: &[(Category, &[&str])] = &[
    (
        Category::Transporte,
        &[
            "uber", "99", "taxi", "indrive", "black", "pop", "corrida", "transporte",
            "gasolina", "etanol", "diesel", "gnv", "abasteci", "posto", "combustivel", "tanque", "aditivada",
            "onibus", "busao", "metro", "trem", "passagem", "bilhete", "top", "recarga", "transcol",
            "estacionamento", "zona azul", "pedagio", "sem parar", "veloe", "conectcar", "tag",
            "mecanico", "oficina", "revisao", "oleo", "filtro", "pneu", "balanceamento", "alinhamento", "bateria", "funilaria", "pintura", "radiador",
            "ipva", "licenciamento", "multa", "detran", "emplacamento", "dpvat",
            "carro", "moto", "veiculo", "vistoria", "lavar carro", "lavajato", "seguro auto", "franquia", "sinistro",
        ],
    ),
    (
        Category::Saude,
        &[
            "farmacia", "remedio", "medicamento", "drogaria", "dipirona", "dorflex", "antibiotico", "anticoncepcional",
            "medico", "consulta", "exame", "laboratorio", "ultrassom", "raio x", "ressonancia", "checkup",
            "dentista", "ortodontista", "aparelho", "clareamento", "limpeza dental", "canal", "obturação",
            "convenio", "unimed", "plano de saude", "amil", "bradesco saude", "sulamerica", "notredame",
            "terapia", "psicologo", "psiquiatra", "nutricionista", "fisioterapia", "quiropraxia", "fono",
            "academia", "smartfit", "bluefit", "crossfit", "personal", "natacao", "pilates", "yoga", "musculacao",
            "suplemento", "whey", "creatina", "vitamina", "omega 3", "pre treino",
            "barbeiro", "cabelo", "corte", "salao", "manicure", "pedicure", "unha", "sobrancelha", "micropigmentacao",
            "depilacao", "estetica", "botox", "laser", "massagem", "harmonizacao", "drenagem", "limpeza de pele", "preenchimento", "silicone", "lipo",
            "skin care", "creme", "perfume", "cosmetico", "sephora", "boticario", "natura", "avon", "maquiagem", "protetor solar",
        ],
    ),
    (
        Category::Alimentacao,
        &[
            "ifood", "rappi", "ze delivery", "entrega", "delivery", "aiqfome",
            "restaurante", "almoco", "jantar", "prato feito", "self service", "rodizio", "marmita", "pf", "comida",
            "lanche", "mc donalds", "bk", "burger king", "subway", "hamburguer", "pizza", "esfiha", "habibs", "kfc", "taco", "pastel",
            "mercado", "supermercado", "compras", "assai", "carrefour", "pao de acucar", "atacadao", "dia", "extra", "sams club", "tenda", "mercadinho",
            "padaria", "pao", "cafe", "leite", "misto", "sonho", "baguete",
            "acai", "sorvete", "chocolate", "doce", "bolo", "torta", "brigadeiro",
            "bar ", "cerveja", "churrasco", "breja", "vinho", "drink", "happy hour", "gin", "vodka", "whisky", "balada",
            "sushi", "temaki", "japones", "feirante", "feira", "hortifruti", "sacolao", "acougue", "carne", "frango", "peixe",
        ],
    ),
    (
        Category::Casa,
        &[
            "aluguel", "condominio", "iptu", "seguro incendio", "imobiliaria",
            "luz", "energia", "enel", "cpfl", "light", "cemig", "coelba", "neoenergia",
            "agua", "sabesp", "esgoto", "embasa", "corsan", "cedae",
            "internet", "wifi", "fibra", "vivo", "claro", "tim", "oi", "net", "recarga celular",
            "gas", "botijao", "encanado", "comgas", "naturgy",
            "faxina", "diarista", "limpeza", "passadeira", "lavanderia", "dryclean",
            "reforma", "material", "tinta", "cimento", "telhado", "piso", "encanador", "eletricista", "marido de aluguel", "pedreiro",
            "moveis", "sofa", "cama", "mesa", "cadeira", "armario", "guarda roupa",
            "eletro", "geladeira", "fogao", "microondas", "maquina de lavar", "airfryer", "liquidificador", "alexa",
            "mercado livre", "shopee", "amazon", "magalu", "casas bahia", "leroy merlin", "tokstok", "fast shop",
            "pet", "racao", "veterinario", "banho e tosa", "gato", "cachorro", "areia de gato", "vacina pet", "bravecto", "petz", "cobasi",
            "assinatura", "streaming", "tv", "sky", "directv", "disney", "netflix",
            "jardinagem", "manutencao", "dedetizacao", "chaveiro",
        ],
    ),
    (
        Category::Educacao,
        &[
            "faculdade", "universidade", "escola", "colegio", "mensalidade", "matricula", "rematricula",
            "curso", "udemy", "alura", "hotmart", "kiwify", "ingles", "espanhol", "frances", "kumon", "wizard", "fisks",
            "livro", "ebook", "kindle", "saraiva", "leitura", "amazon books",
            "papelaria", "material escolar", "xerox", "caderno", "caneta", "lapis", "mochila", "fardamento", "uniforme", "lancheira",
        ],
    ),
    (
        Category::Lazer,
        &[
            "cinema", "pipoca", "ingresso", "show", "teatro", "museu", "exposicao",
            "netflix", "spotify", "prime video", "disney", "hbo", "globoplay", "youtube", "appletv", "paramount",
            "jogo", "steam", "playstation", "xbox", "nintendo", "riot", "valorant", "skins", "roblox", "coins", "v-bucks",
            "viagem", "passagem aerea", "hotel", "airbnb", "pousada", "resort", "passeio", "cvc", "decolar", "123milhas",
            "festa", "balada", "evento", "clube", "barzinho", "praia", "chacara", "sitio",
            "presente", "namoro", "hobby", "parque", "instrumento", "violao", "camera",
            "roupa", "camisa", "camiseta", "calca", "vestido", "tenis", "sapato", "bolsa", "mochila",
            "zara", "renner", "c&a", "riachuelo", "shein", "nike", "adidas", "puma", "vans",
            "celular", "iphone", "samsung", "xiaomi", "motorola", "fone", "airpods", "carregador", "capinha", "pelicula",
            "notebook", "computador", "mouse", "teclado", "gamer",
        ],
    ),
    (
        Category::Salario,
        &[
            "salario", "pagamento", "adiantamento", "vale", "holerite", "pro-labore",
            "freela", "freelance", "bico", "servico", "job", "extra",
            "venda", "comissao", "lucro", "faturamento", "receita",
            "13", "decimo", "ferias", "bonus", "plr", "participacao",
            "reembolso", "devolucao", "estorno", "restituicao",
            "recebi", "deposito", "transferencia", "caiu", "tenho", "possuo", "guardado", "achei", "ganhei", "faturei",
            "aposentadoria", "pensao", "mesada", "aluguel recebido",
        ],
    ),
    (
        Category::Investimento,
        &[
            "bitcoin", "cripto", "ethereum", "binance", "coinbase",
            "cdb", "cdi", "tesouro", "selic", "poupanca", "lci", "lca", "cri", "cra",
            "guardar", "reserva", "cofre", "porquinho", "caixinha",
            "acao", "fundo", "invest", "corretora", "rico", "xp", "nuinvest", "inter invest", "ion", "btg", "avenue",
            "aporte", "dividendo", "rendimento", "fii", "previdencia", "vgbl", "pgbl",
        ],
    ),
];

/// Estratégia de casamento das palavras-chave contra o texto normalizado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Substring simples, sem fronteira de palavra. É o padrão: o
    /// dicionário foi calibrado para este modo.
    Substring,
    /// Estrito: palavras-chave simples só casam como palavra inteira.
    /// Expressões e chaves com símbolos continuam por substring.
    WholeWord,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::Substring
    }
}

/// Resultado da classificação: o grupo vencedor e a chave que casou.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub matched_keyword: Option<&'static str>,
}

/// Varre o dicionário em ordem e devolve o primeiro grupo com acerto.
///
/// Sem acerto, o fallback depende da direção: `default_income` para
/// entradas, `default_expense` para saídas. Nunca falha — categoria
/// indefinida jamais bloqueia um lançamento.
pub fn classify(
    normalized: &str,
    kind: TransactionType,
    mode: MatchMode,
    default_expense: Category,
    default_income: Category,
) -> Classification {
    for (category, keys) in CATEGORY_GROUPS {
        if let Some(key) = keys.iter().copied().find(|k| keyword_matches(normalized, k, mode)) {
            return Classification {
                category: *category,
                matched_keyword: Some(key),
            };
        }
    }
    Classification {
        category: match kind {
            TransactionType::Income => default_income,
            TransactionType::Expense => default_expense,
        },
        matched_keyword: None,
    }
}

fn keyword_matches(text: &str, key: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => text.contains(key),
        MatchMode::WholeWord => {
            if key.chars().all(char::is_alphanumeric) {
                text.unicode_words().any(|w| w == key)
            } else {
                text.contains(key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_expense(text: &str) -> Classification {
        classify(
            text,
            TransactionType::Expense,
            MatchMode::Substring,
            Category::Outros,
            Category::Salario,
        )
    }

    #[test]
    fn test_first_group_in_dictionary_order_wins() {
        // "uber" (transporte) e "hospital"... "consulta" (saude) na mesma
        // frase: transporte vem antes no dicionário
        let c = classify_expense("50 no uber para a consulta");
        assert_eq!(c.category, Category::Transporte);
        assert_eq!(c.matched_keyword, Some("uber"));
    }

    #[test]
    fn test_matched_keyword_is_reported() {
        let c = classify_expense("gastei 180 no barbeiro");
        assert_eq!(c.category, Category::Saude);
        assert_eq!(c.matched_keyword, Some("barbeiro"));
    }

    #[test]
    fn test_fallback_depends_on_direction() {
        let none = classify(
            "zzz 10",
            TransactionType::Expense,
            MatchMode::Substring,
            Category::Outros,
            Category::Salario,
        );
        assert_eq!(none.category, Category::Outros);
        assert_eq!(none.matched_keyword, None);

        let income = classify(
            "zzz 10",
            TransactionType::Income,
            MatchMode::Substring,
            Category::Outros,
            Category::Salario,
        );
        assert_eq!(income.category, Category::Salario);
    }

    #[test]
    fn test_substring_matches_inside_longer_words() {
        // Sem fronteira de palavra: "tenis" casa dentro de "tenista"
        let c = classify_expense("paguei 30 pro tenista");
        assert_eq!(c.category, Category::Lazer);
        assert_eq!(c.matched_keyword, Some("tenis"));
    }

    #[test]
    fn test_whole_word_mode_rejects_embedded_match() {
        let c = classify(
            "paguei 30 pro tenista",
            TransactionType::Expense,
            MatchMode::WholeWord,
            Category::Outros,
            Category::Salario,
        );
        assert_eq!(c.category, Category::Outros);

        let exact = classify(
            "comprei um tenis novo",
            TransactionType::Expense,
            MatchMode::WholeWord,
            Category::Outros,
            Category::Salario,
        );
        assert_eq!(exact.category, Category::Lazer);
    }

    #[test]
    fn test_trailing_space_key_needs_the_space() {
        // "bar " não casa em "barato", casa em "no bar com amigos"
        let c = classify_expense("gastei 200 no barato da feira");
        // "feira" (alimentacao) casa; "bar " não
        assert_eq!(c.matched_keyword, Some("feira"));

        let bar = classify_expense("gastei 80 no bar com os amigos");
        assert_eq!(bar.category, Category::Alimentacao);
        assert_eq!(bar.matched_keyword, Some("bar "));
    }
}
