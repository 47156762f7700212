//! String scanning.

use std::collections::HashMap;

use kata_common::InvalidArgument;

/// First non-space character that occurs exactly once in `s`.
///
/// ```
/// use kata_loops::find_first_single_char;
///
/// assert_eq!(find_first_single_char("abracadabra"), Some('c'));
/// assert_eq!(find_first_single_char("entente"), None);
/// ```
#[must_use]
pub fn find_first_single_char(s: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in s.chars().filter(|&c| c != ' ') {
        *counts.entry(c).or_default() += 1;
    }
    s.chars()
        .filter(|&c| c != ' ')
        .find(|c| counts.get(c) == Some(&1))
}

/// `s` with its characters in reverse order.
#[must_use]
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

const fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

const fn is_closing(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | '>')
}

/// True if every `()`, `[]`, `{}` and `<>` pair in `s` nests correctly.
///
/// Other characters are ignored. The empty string is balanced.
#[must_use]
pub fn is_brackets_balanced(s: &str) -> bool {
    let mut expected: Vec<char> = Vec::new();
    for c in s.chars() {
        if let Some(close) = closing_for(c) {
            expected.push(close);
        } else if is_closing(c) && expected.pop() != Some(c) {
            return false;
        }
    }
    expected.is_empty()
}

/// Directory segments of `path`, without the file name.
fn directories(path: &str) -> Vec<&str> {
    path.rsplit_once('/')
        .map(|(dir, _file)| dir.split('/').collect())
        .unwrap_or_default()
}

/// Longest directory prefix shared by all `paths`, with a trailing `/`.
///
/// Paths are compared segment by segment; the final segment of each path is
/// its file name and never part of the result. Returns an empty string when
/// not even the first segment agrees (for example one absolute and one
/// relative path).
///
/// ```
/// use kata_loops::get_common_directory_path;
///
/// let paths = ["/web/images/image1.png", "/web/images/image2.png"];
/// assert_eq!(get_common_directory_path(&paths)?, "/web/images/");
/// # Ok::<(), kata_loops::InvalidArgument>(())
/// ```
///
/// # Errors
/// `paths` is empty.
pub fn get_common_directory_path<S: AsRef<str>>(paths: &[S]) -> Result<String, InvalidArgument> {
    let (first, rest) = paths
        .split_first()
        .ok_or_else(|| InvalidArgument::new("paths", "at least one path is required"))?;

    let mut common = directories(first.as_ref());
    for path in rest {
        let other = directories(path.as_ref());
        let shared = common
            .iter()
            .zip(&other)
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }

    if common.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{}/", common.join("/")))
    }
}
