// src/common/helper.rs

use crate::common::error::AppError;

/// Gera o código da filial juntando a primeira letra de cada palavra do nome.
/// Ex: "North Branch" -> "NB"
pub fn combine_first_letters(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Escapa os curingas do LIKE para que o termo de busca seja literal.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn hash_password(password: String) -> Result<String, AppError> {
    // bcrypt é caro: roda fora das threads do runtime
    tokio::task::spawn_blocking(move || bcrypt::hash(&password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Falha na task de hashing: {}", e)))?
        .map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filial_code_takes_first_letter_of_each_word() {
        assert_eq!(combine_first_letters("North Branch"), "NB");
        assert_eq!(combine_first_letters("  toshkent   shahar  markaz "), "TSM");
        assert_eq!(combine_first_letters("ўрта осиё"), "ЎО");
        assert_eq!(combine_first_letters(""), "");
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
