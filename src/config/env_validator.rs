//! Environment variable validation with helpful warnings
//!
//! Invalid `HANDOFF_*` values never abort: the validator prints a warning
//! with a typo suggestion and the caller keeps its current setting.

use std::io::Write;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, warning on `writer` and returning `None` if invalid
    pub fn parse<T, F, W>(&self, value: &str, parser: F, writer: &mut W) -> Option<T>
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        let parsed = parser(value);
        if parsed.is_none() {
            let hint = suggest(value, self.valid_values)
                .map(|s| format!(". Did you mean '{}'?", s))
                .unwrap_or_default();
            let _ = writeln!(
                writer,
                "Warning: Invalid {} value '{}'{}",
                self.var_name, value, hint
            );
            let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        }
        parsed
    }
}

/// Closest candidate within two edits, if any
pub fn suggest<'c>(value: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let input = value.to_lowercase();
    candidates
        .iter()
        .map(|&c| (c, levenshtein(&input, c)))
        .filter(|&(_, dist)| dist > 0 && dist <= 2)
        .min_by_key(|&(_, dist)| dist)
        .map(|(c, _)| c)
}

/// Levenshtein distance over bytes, for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
