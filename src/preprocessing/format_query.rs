use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // camelCase boundary: a lowercase letter followed by an uppercase one
    static ref LOWER_UPPER: Regex = Regex::new(r"(\p{Ll})(\p{Lu})").unwrap();
    // acronym boundary: XMLHttp -> XML Http
    static ref ACRONYM: Regex = Regex::new(r"(\p{Lu}+)(\p{Lu}\p{Ll})").unwrap();
    static ref LETTER_DIGIT: Regex = Regex::new(r"(\p{L})(\d)").unwrap();
    static ref DIGIT_LETTER: Regex = Regex::new(r"(\d)(\p{L})").unwrap();
    static ref SPACES: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalizes a free-text product query (or a catalog document's search text)
/// into lowercase space-separated terms: commas and semicolons become spaces,
/// camelCase words are split, digits are separated from letters. Works on
/// non-ASCII alphabets, Polish included.
pub fn format_query(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let formatted = input.replace([',', ';'], " ");
    let formatted = LOWER_UPPER.replace_all(&formatted, "$1 $2");
    let formatted = ACRONYM.replace_all(&formatted, "$1 $2");
    let formatted = LETTER_DIGIT.replace_all(&formatted, "$1 $2");
    let formatted = DIGIT_LETTER.replace_all(&formatted, "$1 $2");
    let formatted = formatted.to_lowercase();

    SPACES.replace_all(&formatted, " ").trim().to_string()
}

/// Same normalization, returned as individual terms.
pub fn tokenize(input: &str) -> Vec<String> {
    format_query(input)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
