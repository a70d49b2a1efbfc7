use crate::equation::error::EquationError;
use crate::equation::utils::split_outside_parens;
use log::warn;

/// The two branch lists of a multi-value equation: every member is a raw
/// sub-expression string, kept in textual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationBranches {
    pub x_branch: Vec<String>,
    pub y_branch: Vec<String>,
}

/// Splits one equation string into its x-branch and y-branch expression lists.
///
/// Recognized forms:
/// - `y=<expr>` → x-branch `["x"]`, y-branch `[<expr>]` (suffix kept verbatim)
/// - `x=<expr>` → x-branch `[<expr>]`, y-branch `["y"]`
/// - `{e1,e2,...},{f1,f2,...}`: first brace group feeds the x-branch, second
///   the y-branch; a bare `e,f` splits on the outer comma the same way.
///
/// The scan keeps a single boolean "group open" flag, not a nesting counter:
/// only one level of brace grouping exists, which is a preserved limitation of
/// the engine. Whitespace inside the general form is dropped. Trailing content
/// after both groups closed is discarded with a warning.
pub fn split_equation(text: &str) -> Result<EquationBranches, EquationError> {
    let text = text.trim();

    if let Some(suffix) = text.strip_prefix("y=") {
        if !suffix.is_empty() {
            return Ok(EquationBranches {
                x_branch: vec!["x".to_string()],
                y_branch: vec![suffix.to_string()],
            });
        }
    }
    if let Some(suffix) = text.strip_prefix("x=") {
        if !suffix.is_empty() {
            return Ok(EquationBranches {
                x_branch: vec![suffix.to_string()],
                y_branch: vec!["y".to_string()],
            });
        }
    }

    let mut open = false;
    let mut current = String::new();
    let mut groups: [Option<String>; 2] = [None, None];
    let mut group_index = 0usize;

    let flush = |current: &mut String,
                     groups: &mut [Option<String>; 2],
                     group_index: &mut usize|
     -> Result<(), EquationError> {
        if *group_index == groups.len() {
            return Err(EquationError::TooManyBranches);
        }
        groups[*group_index] = Some(std::mem::take(current));
        *group_index += 1;
        Ok(())
    };

    for c in text.chars() {
        match c {
            '{' => {
                // single-level grammar: an already-open group swallows it
                if !open {
                    open = true;
                }
            }
            ',' => {
                if open {
                    current.push(',');
                } else if current.is_empty() {
                    // separator between two brace groups
                    open = true;
                } else {
                    // bare outer comma: the accumulator so far is a full group
                    flush(&mut current, &mut groups, &mut group_index)?;
                }
            }
            '}' => {
                if open {
                    flush(&mut current, &mut groups, &mut group_index)?;
                    open = false;
                } else {
                    current.push('}');
                }
            }
            c if c.is_whitespace() => {}
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        if group_index < groups.len() {
            groups[group_index] = Some(std::mem::take(&mut current));
        } else {
            warn!(
                "discarding trailing equation content after both branches closed: '{}'",
                current
            );
        }
    }

    let [x_raw, y_raw] = groups;
    let x_branch = split_branch_members(x_raw)?;
    let y_branch = split_branch_members(y_raw)?;

    Ok(EquationBranches { x_branch, y_branch })
}

/// one captured branch string is itself a comma-joined member list; commas
/// nested inside `(...)` do not split
fn split_branch_members(raw: Option<String>) -> Result<Vec<String>, EquationError> {
    let raw = raw.ok_or_else(|| {
        EquationError::MalformedEquation("equation must define both an x- and a y-branch".into())
    })?;
    if raw.is_empty() {
        return Err(EquationError::MalformedEquation(
            "empty branch in equation".into(),
        ));
    }
    Ok(split_outside_parens(&raw))
}
