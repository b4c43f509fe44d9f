//! Static candidate words offered to the placement system.

/// Candidate words grouped by theme, ten per theme.
///
/// Every entry is composed solely of the uppercase letters `A` to `Z`.
pub const WORD_POOL: &[&str] = &[
    // animals
    "ELEFANTE", "GATO", "CACHORRO", "PAPAGAIO", "JACARE", "GOLFINHO", "CORUJA", "FORMIGA",
    "CAVALO", "LEAO",
    // fruits
    "ABACAXI", "LARANJA", "MELANCIA", "MORANGO", "PERA", "UVA", "MAMAO", "CEREJA", "BANANA",
    "GOIABA",
    // colours
    "VERMELHO", "AZUL", "AMARELO", "VERDE", "ROXO", "PRETO", "BRANCO", "CINZA", "ROSA",
    // countries
    "BRASIL", "ARGENTINA", "PORTUGAL", "CANADA", "JAPAO", "AUSTRALIA", "FRANCA", "ALEMANHA",
    "MEXICO", "ITALIA",
    // objects
    "RELOGIO", "TELEFONE", "COMPUTADOR", "MOCHILA", "LAPIS", "ESPELHO", "CHAVE", "JANELA",
    "CADEIRA", "GUARDACHUVA",
    // sports
    "FUTEBOL", "BASQUETE", "VOLEI", "NATACAO", "CORRIDA", "TENIS", "HANDEBOL", "SURFE", "SKATE",
    "CICLISMO",
    // professions
    "MEDICO", "PROFESSOR", "BOMBEIRO", "ENGENHEIRO", "ARQUITETO", "POLICIAL", "ADVOGADO",
    "CIENTISTA", "JORNALISTA", "ELETRICISTA",
    // nature
    "MONTANHA", "FLORESTA", "OCEANO", "CACHOEIRA", "LAGOA", "DESERTO", "ILHA", "CAVERNA",
    "PLANETA", "NUVEM",
    // food
    "PIZZA", "HAMBURGUER", "CHOCOLATE", "MACARRAO", "ARROZ", "FEIJAO", "QUEIJO", "BATATA",
    "SORVETE", "SALADA",
    // feelings
    "ALEGRIA", "TRISTEZA", "RAIVA", "AMOR", "MEDO", "ESPERANCA", "CORAGEM", "GRATIDAO", "PAZ",
    "ANSIEDADE",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::WORD_POOL;

    #[test]
    fn pool_entries_are_plain_uppercase_letters() {
        for word in WORD_POOL {
            assert!(
                !word.is_empty() && word.chars().all(|letter| letter.is_ascii_uppercase()),
                "pool entry {word:?} must only contain A-Z",
            );
        }
    }

    #[test]
    fn pool_entries_are_unique() {
        let unique: HashSet<&str> = WORD_POOL.iter().copied().collect();
        assert_eq!(unique.len(), WORD_POOL.len(), "pool must not repeat words");
    }
}
