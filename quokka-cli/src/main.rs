//! Quokka selector CLI
//!
//! Builds a selector from expression tokens and prints its canonical form.
//!
//! ```text
//! $ quokka element=div id=main class=container class=draggable + element=table id=data
//! div#main.container.draggable + table#data
//! ```
//!
//! A `kind=value` token adds a part to the compound selector under
//! construction; any other token closes it and becomes the combinator to
//! the next one. Combinator symbols pass through verbatim, so `>`, `+`,
//! `~`, and a quoted `' '` (descendant) all work.

use anyhow::{Result, anyhow};
use clap::Parser;
use owo_colors::OwoColorize;
use quokka_selectors::{PartKind, Selector, combine};

#[derive(Parser)]
#[command(name = "quokka", about = "Build CSS selectors from the command line")]
struct Cli {
    /// Expression tokens: `kind=value` adds a part (element, id, class,
    /// attr, pseudo-class, pseudo-element); any other token is the
    /// combinator to the next compound selector.
    #[arg(required = true)]
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    match build_expression(&cli.tokens) {
        Ok(selector) => println!("{selector}"),
        Err(err) => {
            eprintln!("{} {err}", "error:".red());
            std::process::exit(1);
        }
    }
}

/// One parsed expression token.
enum Token<'a> {
    /// `kind=value` — a part of the compound selector under construction.
    Part(PartKind, &'a str),
    /// Anything else — the combinator joining two compound selectors.
    Combinator(&'a str),
}

/// Classify a raw token. Tokens containing `=` must name a known part kind;
/// the value keeps everything after the first `=`, so attribute expressions
/// like `attr=href$=".png"` survive intact.
fn parse_token(raw: &str) -> Result<Token<'_>> {
    match raw.split_once('=') {
        Some((kind_name, value)) => {
            let kind = kind_name
                .parse::<PartKind>()
                .map_err(|_| anyhow!("unknown part kind '{kind_name}' in token '{raw}'"))?;
            Ok(Token::Part(kind, value))
        }
        None => Ok(Token::Combinator(raw)),
    }
}

/// Apply one part to the compound under construction (starting a fresh one
/// if needed).
fn add_part(current: Option<Selector>, kind: PartKind, value: &str) -> Result<Selector> {
    let node = current.unwrap_or_default();
    let node = match kind {
        PartKind::Element => node.element(value),
        PartKind::Id => node.id(value),
        PartKind::Class => node.class(value),
        PartKind::Attribute => node.attr(value),
        PartKind::PseudoClass => node.pseudo_class(value),
        PartKind::PseudoElement => node.pseudo_element(value),
    }?;
    Ok(node)
}

/// Attach a finished compound to the expression built so far.
fn join(so_far: Option<Selector>, joiner: Option<&str>, compound: Selector) -> Selector {
    match (so_far, joiner) {
        (Some(left), Some(symbol)) => combine(left, symbol, compound),
        (None, _) => compound,
        // so_far and joiner are recorded together in build_expression
        (Some(_), None) => unreachable!(),
    }
}

/// Parse the token stream into compound groups and fold them left-to-right
/// with `combine`, keeping the first compound as the root.
fn build_expression(tokens: &[String]) -> Result<Selector> {
    let mut so_far: Option<Selector> = None;
    let mut pending: Option<&str> = None;
    let mut current: Option<Selector> = None;

    for raw in tokens {
        match parse_token(raw)? {
            Token::Part(kind, value) => {
                current = Some(add_part(current.take(), kind, value)?);
            }
            Token::Combinator(symbol) => {
                let compound = current
                    .take()
                    .ok_or_else(|| anyhow!("combinator '{symbol}' has no selector on its left"))?;
                so_far = Some(join(so_far.take(), pending.take(), compound));
                pending = Some(symbol);
            }
        }
    }

    let last = current
        .ok_or_else(|| anyhow!("expression must end with a selector, not a combinator"))?;
    Ok(join(so_far, pending, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_compound_expression() {
        let built = build_expression(&tokens(&["element=div", "id=main", "class=container"]));
        assert_eq!(built.unwrap().to_string(), "div#main.container");
    }

    #[test]
    fn test_combined_expression() {
        let built = build_expression(&tokens(&["element=div", "+", "element=table", "id=data"]));
        assert_eq!(built.unwrap().to_string(), "div + table#data");
    }

    #[test]
    fn test_descendant_combinator_token() {
        let built = build_expression(&tokens(&["element=tr", " ", "element=td"]));
        assert_eq!(built.unwrap().to_string(), "tr   td");
    }

    #[test]
    fn test_attribute_value_keeps_embedded_equals() {
        let built = build_expression(&tokens(&["element=a", "attr=href$=\".png\""]));
        assert_eq!(built.unwrap().to_string(), "a[href$=\".png\"]");
    }

    #[test]
    fn test_unknown_part_kind_is_rejected() {
        assert!(build_expression(&tokens(&["universal=*"])).is_err());
    }

    #[test]
    fn test_leading_combinator_is_rejected() {
        assert!(build_expression(&tokens(&["+", "element=div"])).is_err());
    }

    #[test]
    fn test_trailing_combinator_is_rejected() {
        assert!(build_expression(&tokens(&["element=div", "+"])).is_err());
    }

    #[test]
    fn test_grammar_violations_surface_as_errors() {
        assert!(build_expression(&tokens(&["class=box", "element=div"])).is_err());
    }
}
