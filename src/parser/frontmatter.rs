//! Front-matter grouping key extraction.
//!
//! A document may open with a metadata block delimited by `---` lines.
//! Only one field matters here: the grouping key (`part:` by default),
//! which decides which outer group a document lands in.

use std::io;

/// Read the grouping key from a document's leading metadata block.
///
/// Returns an empty string when the first line does not open a metadata
/// block, when the block closes before the field appears, or when the
/// document ends first. Stops reading as soon as the answer is known.
///
/// # Examples
///
/// ```
/// # use tocgen::parser::frontmatter::read_group_key;
/// let lines = ["---", "title: Setup", "part: Guide", "---", "# Setup"];
/// let key = read_group_key(lines.iter().map(|l| Ok(l.to_string())), "---", "part").unwrap();
/// assert_eq!(key, "Guide");
/// ```
pub fn read_group_key<I>(lines: I, delimiter: &str, field: &str) -> io::Result<String>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let prefix = format!("{}:", field);
    let mut lines = lines.into_iter();

    match lines.next().transpose()? {
        Some(first) if first.starts_with(delimiter) => {}
        _ => return Ok(String::new()),
    }

    for line in lines {
        let line = line?;
        if line.starts_with(delimiter) {
            break;
        }
        if let Some(value) = line.strip_prefix(&prefix) {
            return Ok(value.trim().to_string());
        }
    }

    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(text: &str) -> String {
        read_group_key(text.lines().map(|l| Ok(l.to_string())), "---", "part").unwrap()
    }

    #[test]
    fn test_key_in_front_matter() {
        assert_eq!(key_of("---\npart: Getting Started  \n---\n# Intro"), "Getting Started");
        assert_eq!(key_of("---\nlayout: doc\npart:Reference\n---"), "Reference");
    }

    #[test]
    fn test_no_front_matter() {
        assert_eq!(key_of("# Intro\npart: Guide"), "");
        assert_eq!(key_of(""), "");
        assert_eq!(key_of(" ---\npart: Guide\n---"), "");
    }

    #[test]
    fn test_key_after_closing_delimiter_is_ignored() {
        assert_eq!(key_of("---\ntitle: x\n---\npart: Guide"), "");
    }

    #[test]
    fn test_unterminated_block() {
        assert_eq!(key_of("---\ntitle: x\npart: Tail"), "Tail");
        assert_eq!(key_of("---\ntitle: x"), "");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(key_of("---\npart:\n---"), "");
    }

    #[test]
    fn test_custom_field() {
        let lines = ["+++", "category: API", "+++"];
        let key = read_group_key(lines.iter().map(|l| Ok(l.to_string())), "+++", "category");
        assert_eq!(key.unwrap(), "API");
    }

    #[test]
    fn test_read_error_propagates() {
        let lines = vec![
            Ok("---".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")),
        ];
        assert!(read_group_key(lines, "---", "part").is_err());
    }
}
