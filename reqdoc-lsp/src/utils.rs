/// Utility functions for LSP position handling and tag suggestions
use reqdoc::parser::TagKind;

/// Convert LSP UTF-16 character position to UTF-8 byte index
///
/// LSP uses UTF-16 code units for character positions, but Rust strings use UTF-8.
///
/// # Returns
/// The corresponding UTF-8 byte index, or None if the position is out of bounds
/// or inside a surrogate pair
pub fn utf16_pos_to_byte_index(line: &str, utf16_col: usize) -> Option<usize> {
    let mut utf16_count = 0usize;

    for (byte_idx, ch) in line.char_indices() {
        if utf16_count == utf16_col {
            return Some(byte_idx);
        }
        utf16_count += ch.len_utf16();
    }

    if utf16_count == utf16_col {
        Some(line.len())
    } else {
        None
    }
}

/// Convert a UTF-8 byte index into a UTF-16 column, clamped to the line length
pub fn byte_index_to_utf16_col(line: &str, byte_idx: usize) -> usize {
    let mut end = byte_idx.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line[..end].chars().map(char::len_utf16).sum()
}

/// Line number and byte column of a byte offset into `content`
pub fn offset_to_line_col(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count();
    let col = before.rfind('\n').map_or(before.len(), |nl| before.len() - nl - 1);
    (line, col)
}

/// Whether a line belongs to a comment: `*`, `/*`, `//` or `#` after indentation
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    ["*", "/*", "//", "#"]
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Text of a comment line after its decoration
pub fn strip_comment_prefix(line: &str) -> &str {
    let trimmed = line.trim_start();
    for prefix in ["/**", "/*", "///", "//", "*", "#"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return rest.trim_start();
        }
    }
    trimmed
}

/// Calculate Levenshtein distance between two strings
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    let mut matrix = vec![vec![0; s2.len() + 1]; s1.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for (i, c1) in s1.iter().enumerate() {
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1)
                .min(matrix[i + 1][j] + 1)
                .min(matrix[i][j] + cost);
        }
    }

    matrix[s1.len()][s2.len()]
}

/// Find the closest tag name to a misspelled one (name without the `@LRD` prefix)
pub fn find_closest_annotation(input: &str) -> Option<TagKind> {
    let input_lower = input.to_lowercase();
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for kind in TagKind::ALL {
        let distance = levenshtein_distance(&input_lower, kind.name());
        // Only suggest if at most 2 characters differ
        if distance < best_distance && distance <= 2 {
            best_distance = distance;
            best_match = Some(kind);
        }
    }

    best_match
}
