//! Word syntax: lowercase letters are generators, `( ... )^k` expands to
//! `k` concatenations of the inner word. Implemented over a stack of
//! partial strings, one per open bracket.
use coxlex_utils::{CoxResult, Error, MAX_NESTED_WORD_LEN, MAX_WORD_LEN};

/// Expand bracket/exponent syntax into a flat string of generator letters.
pub fn expand_word(input: &str) -> CoxResult<String> {
    expand_word_with_limits(input, MAX_WORD_LEN, MAX_NESTED_WORD_LEN)
}

/// As [`expand_word`], with explicit limits (the REPL's `--max-word-len`
/// and `--max-nested-len` flags use this directly).
pub fn expand_word_with_limits(
    input: &str,
    max_word_len: usize,
    max_nested_len: usize,
) -> CoxResult<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut stack: Vec<String> = vec![String::new()];
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            'a'..='z' => {
                stack.last_mut().unwrap().push(c);
                i += 1;
                check_len(stack.last().unwrap(), max_word_len)?;
            }
            '(' => {
                stack.push(String::new());
                i += 1;
                if stack.len() - 1 > max_nested_len {
                    return Err(Error::malformed_input(format!(
                        "bracket nesting exceeds the limit of {max_nested_len}"
                    )));
                }
            }
            ')' => {
                i += 1;
                if chars.get(i) != Some(&'^') {
                    return Err(Error::malformed_input(
                        "`)` must be followed by `^<digits>`",
                    ));
                }
                i += 1;
                let digit_start = i;
                while chars.get(i).is_some_and(|c| c.is_ascii_digit()) {
                    i += 1;
                }
                if digit_start == i {
                    return Err(Error::malformed_input(
                        "`^` must be followed by a positive integer",
                    ));
                }
                let exponent_str: String = chars[digit_start..i].iter().collect();
                let exponent: usize = exponent_str.parse().map_err(|_| {
                    Error::malformed_input(format!(
                        "exponent `{exponent_str}` overflows"
                    ))
                })?;
                if exponent == 0 {
                    return Err(Error::malformed_input(
                        "exponent must be a positive integer",
                    ));
                }

                let inner = stack.pop().unwrap();
                if stack.is_empty() {
                    return Err(Error::malformed_input(
                        "unbalanced brackets: `)` with no matching `(`",
                    ));
                }
                let repeated = inner.repeat(exponent);
                stack.last_mut().unwrap().push_str(&repeated);
                check_len(stack.last().unwrap(), max_word_len)?;
            }
            other => {
                return Err(Error::malformed_input(format!(
                    "invalid character `{other}` in word"
                )))
            }
        }
    }

    if stack.len() != 1 {
        return Err(Error::malformed_input(
            "unbalanced brackets: `(` with no matching `)`",
        ));
    }

    Ok(stack.pop().unwrap())
}

fn check_len(s: &str, max_word_len: usize) -> CoxResult<()> {
    if s.len() > max_word_len {
        Err(Error::malformed_input(format!(
            "expanded word exceeds the maximum length of {max_word_len}"
        )))
    } else {
        Ok(())
    }
}

/// Map an expanded word's letters to 0-based generator indices, rejecting
/// any letter at or beyond generator `n`.
pub fn parse_generators(word: &str, n: usize) -> CoxResult<Vec<usize>> {
    word.chars()
        .map(|c| {
            if !c.is_ascii_lowercase() {
                return Err(Error::malformed_input(format!(
                    "invalid generator character `{c}`"
                )));
            }
            let idx = (c as u8 - b'a') as usize;
            if idx >= n {
                return Err(Error::malformed_input(format!(
                    "generator `{c}` is out of range for a group with {n} generators"
                )));
            }
            Ok(idx)
        })
        .collect()
}
