//! Path pattern matching for client-side navigation.
//!
//! Patterns are literal paths with optional `{name}` placeholder segments:
//!
//! - `/` matches only the root path
//! - `/agency/{agency_name}` matches any single non-empty segment after the
//!   fixed prefix and binds it to `agency_name`

use std::collections::HashMap;

use crate::error::PatternError;

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex in bytes.
const MAX_REGEX_SIZE: usize = 1 << 20;

/// A compiled path pattern.
///
/// Placeholders match exactly one non-empty path segment; they never match
/// across `/`. Literal text is matched exactly.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled regex, anchored at both ends.
	regex: regex::Regex,
	/// Placeholder names in the order they appear in the pattern.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns [`PatternError`] if the pattern is too long, has too many
	/// segments, contains a malformed placeholder name, or compiles to a
	/// regex the engine rejects.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(PatternError::TooLong {
				len: pattern.len(),
				max: MAX_PATTERN_LENGTH,
			});
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(PatternError::TooManySegments {
				count: segment_count,
				max: MAX_PATH_SEGMENTS,
			});
		}

		let (regex_str, param_names) = Self::compile(pattern)?;

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| PatternError::Regex(e.to_string()))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
		})
	}

	/// Compiles a pattern string into a regex and collects placeholder names.
	fn compile(pattern: &str) -> Result<(String, Vec<String>), PatternError> {
		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut name = String::new();
					loop {
						match chars.next() {
							Some('}') => break,
							Some(ch) => name.push(ch),
							None => return Err(PatternError::InvalidPlaceholder(name)),
						}
					}
					if !is_identifier(&name) {
						return Err(PatternError::InvalidPlaceholder(name));
					}
					regex_str.push_str(&format!("(?P<{}>[^/]+)", name));
					param_names.push(name);
				}
				'}' => {
					return Err(PatternError::InvalidPlaceholder("}".to_string()));
				}
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\' => {
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => {
					regex_str.push(c);
				}
			}
		}

		regex_str.push('$');
		Ok((regex_str, param_names))
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the placeholder names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether this pattern has no placeholders.
	pub fn is_exact(&self) -> bool {
		self.param_names.is_empty()
	}

	/// Attempts to match a path against this pattern.
	///
	/// Returns `Some((params, values))` on a match, where `params` maps
	/// placeholder names to captured values and `values` lists the captures
	/// in pattern order.
	pub fn matches(&self, path: &str) -> Option<(HashMap<String, String>, Vec<String>)> {
		self.regex.captures(path).map(|caps| {
			let values: Vec<String> = self
				.param_names
				.iter()
				.filter_map(|name| caps.name(name).map(|m| m.as_str().to_string()))
				.collect();
			let params: HashMap<String, String> = self
				.param_names
				.iter()
				.cloned()
				.zip(values.iter().cloned())
				.collect();
			(params, values)
		})
	}

	/// Checks whether this pattern would match the given path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Generates a concrete path by substituting placeholder values.
	///
	/// Returns `None` when a placeholder has no value in `params`.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		let mut result = self.pattern.clone();
		for name in &self.param_names {
			let value = params.get(name)?;
			result = result.replace(&format!("{{{}}}", name), value);
		}
		Some(result)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

/// Returns whether `s` is a well-formed placeholder identifier.
fn is_identifier(s: &str) -> bool {
	let mut chars = s.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_root_pattern_is_exact() {
		let pattern = PathPattern::new("/").unwrap();
		assert!(pattern.is_exact());
		assert!(pattern.is_match("/"));
		assert!(!pattern.is_match("/agency/"));
		assert!(!pattern.is_match(""));
	}

	#[test]
	fn test_single_placeholder() {
		let pattern = PathPattern::new("/agency/{agency_name}").unwrap();
		assert!(!pattern.is_exact());
		assert_eq!(pattern.param_names(), &["agency_name"]);

		let (params, values) = pattern.matches("/agency/Acme").unwrap();
		assert_eq!(params.get("agency_name"), Some(&"Acme".to_string()));
		assert_eq!(values, vec!["Acme".to_string()]);
	}

	#[test]
	fn test_placeholder_requires_non_empty_segment() {
		let pattern = PathPattern::new("/agency/{agency_name}").unwrap();
		assert!(!pattern.is_match("/agency/"));
		assert!(!pattern.is_match("/agency"));
	}

	#[test]
	fn test_placeholder_does_not_cross_segments() {
		let pattern = PathPattern::new("/agency/{agency_name}").unwrap();
		assert!(!pattern.is_match("/agency/Acme/extra"));
	}

	#[test]
	fn test_multiple_placeholders() {
		let pattern = PathPattern::new("/a/{x}/b/{y}").unwrap();
		let (params, values) = pattern.matches("/a/1/b/2").unwrap();
		assert_eq!(params.get("x"), Some(&"1".to_string()));
		assert_eq!(params.get("y"), Some(&"2".to_string()));
		assert_eq!(values, vec!["1".to_string(), "2".to_string()]);
	}

	#[test]
	fn test_literal_dots_are_escaped() {
		let pattern = PathPattern::new("/api/v1.0/").unwrap();
		assert!(pattern.is_match("/api/v1.0/"));
		assert!(!pattern.is_match("/api/v1X0/"));
	}

	#[test]
	fn test_reverse() {
		let pattern = PathPattern::new("/agency/{agency_name}").unwrap();
		let mut params = HashMap::new();
		params.insert("agency_name".to_string(), "Acme".to_string());
		assert_eq!(pattern.reverse(&params), Some("/agency/Acme".to_string()));
	}

	#[test]
	fn test_reverse_missing_value() {
		let pattern = PathPattern::new("/agency/{agency_name}").unwrap();
		assert_eq!(pattern.reverse(&HashMap::new()), None);
	}

	#[test]
	fn test_reverse_exact_pattern() {
		let pattern = PathPattern::new("/").unwrap();
		assert_eq!(pattern.reverse(&HashMap::new()), Some("/".to_string()));
	}

	#[test]
	fn test_rejects_malformed_placeholder() {
		assert!(matches!(
			PathPattern::new("/agency/{9bad}"),
			Err(PatternError::InvalidPlaceholder(_))
		));
		assert!(matches!(
			PathPattern::new("/agency/{unclosed"),
			Err(PatternError::InvalidPlaceholder(_))
		));
		assert!(matches!(
			PathPattern::new("/agency/{}"),
			Err(PatternError::InvalidPlaceholder(_))
		));
	}

	#[test]
	fn test_rejects_excessive_length() {
		let long = "/".to_string() + &"a".repeat(1025);
		assert!(matches!(
			PathPattern::new(&long),
			Err(PatternError::TooLong { .. })
		));
	}

	#[test]
	fn test_rejects_excessive_segments() {
		let segments: Vec<&str> = (0..35).map(|_| "seg").collect();
		let pattern = format!("/{}/", segments.join("/"));
		assert!(matches!(
			PathPattern::new(&pattern),
			Err(PatternError::TooManySegments { .. })
		));
	}

	#[test]
	fn test_pattern_equality() {
		let p1 = PathPattern::new("/agency/{agency_name}").unwrap();
		let p2 = PathPattern::new("/agency/{agency_name}").unwrap();
		let p3 = PathPattern::new("/agency/{name}").unwrap();
		assert_eq!(p1, p2);
		assert_ne!(p1, p3);
	}

	#[test]
	fn test_pattern_display() {
		let pattern = PathPattern::new("/agency/{agency_name}").unwrap();
		assert_eq!(format!("{}", pattern), "/agency/{agency_name}");
	}
}
