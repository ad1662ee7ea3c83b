//! Template engine implementation

mod helpers;
mod scan;

use tracing::trace;

use crate::format::format_value;
use crate::template::rows::installment_rows;
use crate::template::value::ValueMap;

use helpers::{checkbox_markup, equals_literal, is_truthy};
use scan::{Recognizer, Token, TokenKind};

/// Substitution passes, in the order they run
///
/// Each pass rewrites the whole text before the next one starts, so helper
/// syntax is consumed before the plain-token pass could mistake it for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// `{{#if:key|value}} ... {{/if}}`
    Conditional,
    /// `{{#check:key}}`
    Checkbox,
    /// `{{#radio:group|value}}`
    Radio,
    /// `{{parcelas_rows}}`
    InstallmentRows,
    /// `{{key}}`
    Placeholder,
}

impl Pass {
    /// All passes in execution order
    pub const ALL: [Pass; 5] = [
        Pass::Conditional,
        Pass::Checkbox,
        Pass::Radio,
        Pass::InstallmentRows,
        Pass::Placeholder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::Conditional => "conditional",
            Pass::Checkbox => "checkbox",
            Pass::Radio => "radio",
            Pass::InstallmentRows => "installment-rows",
            Pass::Placeholder => "placeholder",
        }
    }

    fn recognizer(self) -> Recognizer {
        match self {
            Pass::Conditional => scan::if_open,
            Pass::Checkbox => scan::check,
            Pass::Radio => scan::radio,
            Pass::InstallmentRows => scan::rows,
            Pass::Placeholder => scan::placeholder,
        }
    }
}

/// Replacement for one match
struct Expansion {
    markup: String,
    /// Bytes of input consumed, starting at the match's `{{`
    consumed: usize,
}

impl Expansion {
    fn token(markup: impl Into<String>, token: &Token<'_>) -> Self {
        Self {
            markup: markup.into(),
            consumed: token.length,
        }
    }
}

/// Run one pass over `text`, returning the output and the number of matches
///
/// Matches are taken leftmost first and never overlap. When `expand`
/// declines a recognized token, scanning resumes at the next byte.
fn substitute<'t, F>(text: &'t str, recognize: Recognizer, mut expand: F) -> (String, usize)
where
    F: FnMut(&'t str, Token<'t>) -> Option<Expansion>,
{
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;
    let mut replaced = 0;

    while let Some(offset) = text[search..].find("{{") {
        let at = search + offset;
        let candidate = &text[at..];

        match recognize(candidate).and_then(|token| expand(candidate, token)) {
            Some(expansion) => {
                output.push_str(&text[copied..at]);
                output.push_str(&expansion.markup);
                copied = at + expansion.consumed;
                search = copied;
                replaced += 1;
            }
            None => search = at + 1,
        }
    }

    output.push_str(&text[copied..]);
    (output, replaced)
}

/// Template engine filling markup from a [`ValueMap`]
///
/// Rendering is a pure function of its inputs: it never fails, never mutates
/// the value map, and the same inputs always give the same bytes.
///
/// # Known limitation
///
/// Conditional blocks do not nest. The first `{{/if}}` after an opening tag
/// closes it, so an inner block's closing tag ends the outer one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render `markup` with the given values
    pub fn render(&self, markup: &str, values: &ValueMap) -> String {
        if markup.is_empty() {
            return String::new();
        }

        let mut output = markup.to_string();
        for pass in Pass::ALL {
            let (next, replaced) = self.apply(pass, &output, values);
            trace!(pass = pass.name(), replaced, "substitution pass");
            output = next;
        }
        output
    }

    /// Run a single pass
    pub fn apply(&self, pass: Pass, text: &str, values: &ValueMap) -> (String, usize) {
        let recognize = pass.recognizer();

        match pass {
            Pass::Conditional => substitute(text, recognize, |candidate, token| {
                let TokenKind::IfOpen { key, value } = token.kind else {
                    return None;
                };
                let body = &candidate[token.length..];
                let (end, close_length) = scan::find_if_close(body)?;
                let markup = if equals_literal(values, key, value) {
                    &body[..end]
                } else {
                    ""
                };
                Some(Expansion {
                    markup: markup.to_string(),
                    consumed: token.length + end + close_length,
                })
            }),
            Pass::Checkbox => substitute(text, recognize, |_, token| {
                let TokenKind::Check { key } = token.kind else {
                    return None;
                };
                Some(Expansion::token(
                    checkbox_markup(is_truthy(values, key)),
                    &token,
                ))
            }),
            Pass::Radio => substitute(text, recognize, |_, token| {
                let TokenKind::Radio { group, value } = token.kind else {
                    return None;
                };
                Some(Expansion::token(
                    checkbox_markup(equals_literal(values, group, value)),
                    &token,
                ))
            }),
            Pass::InstallmentRows => substitute(text, recognize, |_, token| {
                Some(Expansion::token(installment_rows(values), &token))
            }),
            Pass::Placeholder => substitute(text, recognize, |_, token| {
                let TokenKind::Placeholder { key } = token.kind else {
                    return None;
                };
                Some(Expansion::token(
                    format_value(key, values.get(key)),
                    &token,
                ))
            }),
        }
    }
}

/// Convenience function to render a template
pub fn render(markup: &str, values: &ValueMap) -> String {
    TemplateEngine::new().render(markup, values)
}

#[cfg(test)]
mod tests;
