//! bracket-scanning helpers shared by the equation splitter and the
//! expression parser

/// index of the `)` pairing the `(` at `open_pos`, or None when unbalanced
pub fn find_pair_to_this_bracket(input: &str, open_pos: usize) -> Option<usize> {
    let mut depth = 0i32;
    for (i, c) in input.char_indices() {
        if i < open_pos {
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// byte position of the last occurrence of any of `operators` at bracket depth
/// zero, together with the operator found
pub fn find_rightmost_operator_outside_brackets(
    input: &str,
    operators: &[char],
) -> Option<(usize, char)> {
    let mut bracket_depth = 0i32;
    let mut last_op = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                last_op = Some((i, c)); // updates to LAST match
            }
            _ => {}
        }
    }

    last_op
}

/// like [`find_rightmost_operator_outside_brackets`] for `+`/`-`, but skips
/// occurrences in unary position (start of input, or right after another
/// operator, an opening bracket or an argument comma)
pub fn find_rightmost_additive_operator(input: &str) -> Option<(usize, char)> {
    let mut bracket_depth = 0i32;
    let mut last_op = None;
    let mut prev = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            '+' | '-' if bracket_depth == 0 => {
                let unary = match prev {
                    None => true,
                    Some(p) => matches!(p, '+' | '-' | '*' | '/' | '^' | '(' | ','),
                };
                if !unary {
                    last_op = Some((i, c));
                }
            }
            _ => {}
        }
        prev = Some(c);
    }

    last_op
}

/// byte position of the first occurrence of `op` at bracket depth zero
pub fn find_char_positions_outside_brackets(input: &str, op: char) -> Option<usize> {
    let mut bracket_depth = 0i32;
    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && c == op => return Some(i),
            _ => {}
        }
    }
    None
}

/// split `input` on commas that are not nested inside `(...)`; the final
/// accumulator is always flushed, so `"a,"` yields `["a", ""]`
pub fn split_outside_parens(input: &str) -> Vec<String> {
    let mut members = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;

    for c in input.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                members.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    members.push(current);

    members
}

//___________________________________TESTS____________________________________
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_pair() {
        assert_eq!(find_pair_to_this_bracket("sqrt(25-x^2)", 4), Some(11));
        assert_eq!(find_pair_to_this_bracket("f(g(x))", 1), Some(6));
        assert_eq!(find_pair_to_this_bracket("(x+", 0), None);
    }

    #[test]
    fn test_rightmost_additive_skips_unary() {
        assert_eq!(find_rightmost_additive_operator("-x"), None);
        assert_eq!(find_rightmost_additive_operator("x-2"), Some((1, '-')));
        assert_eq!(find_rightmost_additive_operator("x*-2"), None);
        assert_eq!(find_rightmost_additive_operator("a-b+c"), Some((3, '+')));
        assert_eq!(find_rightmost_additive_operator("(a-b)"), None);
    }

    #[test]
    fn test_split_outside_parens() {
        assert_eq!(
            split_outside_parens("sqrt(r^2-(x-h)^2),k"),
            vec!["sqrt(r^2-(x-h)^2)".to_string(), "k".to_string()]
        );
        assert_eq!(
            split_outside_parens("atan2(y,x)"),
            vec!["atan2(y,x)".to_string()]
        );
        assert_eq!(split_outside_parens("a,"), vec!["a".to_string(), String::new()]);
    }
}
