//! Keyword search conditions.
//!
//! Keywords are split on whitespace and every word is matched with `LIKE %word%`
//! against every searched column; a row matches when any pair matches. Values are
//! bound as parameters, never spliced into SQL.

use sea_orm::{ColumnTrait, Condition};

/// Splits a keyword into its non-empty whitespace-separated words.
pub fn keyword_words(keyword: &str) -> Vec<&str> {
    keyword.split_whitespace().collect()
}

/// Builds an `ANY(column LIKE %word%)` condition over `columns` × words.
///
/// # Arguments
/// - `columns` - Columns to match against
/// - `keyword` - Raw keyword; blank keywords match every row
///
/// # Returns
/// - `Condition` - Disjunction of `contains` expressions, or an empty (always-true)
///   condition when there are no words
pub fn any_word_matches<C: ColumnTrait>(columns: &[C], keyword: &str) -> Condition {
    let words = keyword_words(keyword);
    if words.is_empty() {
        return Condition::all();
    }

    let mut condition = Condition::any();
    for column in columns {
        for word in &words {
            condition = condition.add(column.contains(*word));
        }
    }
    condition
}
