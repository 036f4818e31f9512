pub mod codeblock;

/// Characters that separate words in a heading label.
const WORD_SEPARATORS: [char; 3] = [' ', '-', '_'];

/// Slugify a heading label for use as an anchor ID.
///
/// The label is split into words on spaces, hyphens and underscores. Every
/// character that is not alphanumeric is dropped from each word, and every
/// uppercase character is lowercased and preceded by a hyphen unless it starts
/// the word. The words are then joined back together with hyphens.
///
/// Empty words are kept, so consecutive separators produce consecutive
/// hyphens.
///
/// # Examples
///
/// ```
/// use hydra_commonmark::utils::slugify;
///
/// assert_eq!(slugify("CamelCase"), "camel-case");
/// assert_eq!(slugify("snake_case"), "snake-case");
/// assert_eq!(slugify("Greetings, Programs!"), "greetings-programs");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
  text
    .split(WORD_SEPARATORS)
    .map(slugify_word)
    .collect::<Vec<_>>()
    .join("-")
}

fn slugify_word(word: &str) -> String {
  let mut slug = String::with_capacity(word.len());

  for c in word.chars().filter(|c| c.is_alphanumeric() || *c == '_') {
    if c.is_uppercase() {
      if !slug.is_empty() {
        slug.push('-');
      }
      slug.extend(c.to_lowercase());
    } else {
      slug.push(c);
    }
  }

  slug
}
