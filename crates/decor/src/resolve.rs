//! Variable resolution.
//!
//! A variable's value is itself decor notation and may reference further
//! variables. Resolution expands references recursively, tracking the chain
//! of names being expanded so that a name reappearing on its own chain is
//! reported instead of recursing forever.
//!
//! Problems are rendered inline as error tokens rather than returned:
//!
//! ```text
//! <undef:NAME>                      NAME has no binding
//! <err:circular reference: A->B->A> A's value leads back to A
//! <err:...>                         the value is not valid notation
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use decor_notation::{parse, Action, Kind, Series, Token};
use tracing::{debug, trace};

use crate::error::CircularReference;

/// Values that `${name}` references resolve against.
///
/// Implemented for the standard maps keyed and valued by anything
/// string-like, so `HashMap<String, String>` and `HashMap<&str, &str>` both
/// work.
pub trait Bindings {
    /// The value bound to `name`, if any.
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl<K, V, S> Bindings for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> Bindings for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

/// Expands the variable `name` into a fully resolved series.
///
/// The result contains no variable tokens. If the value leaves bold or a
/// color open, a bold stop is appended. That stop resets the terminal, but
/// the optimizer still counts a color opened inside the value as active and
/// re-enters it afterwards, so only bold is fully contained.
///
/// The top-level name is not part of the reference chain, so a value that
/// refers back to it is expanded once more before the cycle is reported.
pub fn resolve<B: Bindings + ?Sized>(name: &str, values: &B) -> Series {
    expand(name, values, &[])
}

/// `chain` holds the names expanded below the top-level one, outermost
/// first; `name` is the last of them (or the top-level name itself).
fn expand<B: Bindings + ?Sized>(name: &str, values: &B, chain: &[&str]) -> Series {
    let Some(value) = values.lookup(name) else {
        debug!(name, "undefined variable");
        return Series::build([Token::error(format!("<undef:{name}>"))]);
    };
    if value.is_empty() {
        return Series::build([Token::literal("")]);
    }

    let parsed = match parse(value) {
        Ok(series) => series,
        Err(err) => {
            debug!(name, error = %err, "variable value is not valid notation");
            return Series::build([Token::error(format!("<err:{err}>"))]);
        }
    };
    trace!(name, chain = ?chain, tokens = parsed.len(), "expanding variable");

    let mut resolved = Series::new();
    let mut leaking = false;

    for token in parsed {
        if token.kind() == Kind::Variable {
            let nested = token.text();
            match chain.iter().position(|link| *link == nested) {
                Some(first) => {
                    let cycle = CircularReference {
                        chain: std::iter::once(&name)
                            .chain(&chain[first..])
                            .map(|link| link.to_string())
                            .collect(),
                    };
                    debug!(name, %cycle, "circular variable reference");
                    resolved.push(Token::error(format!("<err:{cycle}>")));
                }
                None => {
                    let mut next = chain.to_vec();
                    next.push(nested);
                    resolved.extend(expand(nested, values, &next));
                }
            }
            continue;
        }

        if matches!(
            token.kind(),
            Kind::Bold | Kind::ForegroundColor | Kind::BackgroundColor
        ) {
            match token.action() {
                Action::Start => leaking = true,
                Action::Stop => leaking = false,
                Action::None => {}
            }
        }
        resolved.push(token);
    }

    if leaking {
        resolved.push(Token::stop(Kind::Bold));
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    fn texts(series: &Series) -> Vec<String> {
        series.iter().map(|t| t.text().to_string()).collect()
    }

    // ==================== Plain values ====================

    mod values {
        use super::*;

        #[test]
        fn nested_references_expand_in_place() {
            let values = bindings(&[
                ("A", "foo-${C}-bar"),
                ("C", "abc-${E}-xyz"),
                ("E", "987-654-321"),
            ]);

            assert_eq!(
                texts(&resolve("A", &values)),
                ["foo-", "abc-", "987-654-321", "-xyz", "-bar"]
            );
        }

        #[test]
        fn undefined_variable() {
            let values = bindings(&[("A", "x${Nope}y")]);
            let series = resolve("A", &values);

            assert_eq!(
                series,
                Series::build([
                    Token::literal("x"),
                    Token::error("<undef:Nope>"),
                    Token::literal("y"),
                ])
            );
        }

        #[test]
        fn empty_value_is_empty_text() {
            let values = bindings(&[("A", "")]);
            assert_eq!(resolve("A", &values), Series::build([Token::literal("")]));
        }

        #[test]
        fn invalid_value_is_an_error_token() {
            let values = bindings(&[("A", "oops@")]);
            let series = resolve("A", &values);

            assert_eq!(series.len(), 1);
            assert_eq!(series.front().map(Token::kind), Some(Kind::Error));
            assert_eq!(
                series.front().map(Token::text),
                Some("<err:sigil '@' not allowed at end of string>")
            );
        }

        #[test]
        fn sibling_references_are_not_cycles() {
            let values = bindings(&[("A", "${X}+${X}"), ("X", "x")]);
            assert_eq!(texts(&resolve("A", &values)), ["x", "+", "x"]);
        }

        #[test]
        fn btree_bindings() {
            let values: BTreeMap<String, String> =
                [("A".to_string(), "value".to_string())].into_iter().collect();
            assert_eq!(texts(&resolve("A", &values)), ["value"]);
        }
    }

    // ==================== Cycles ====================

    mod cycles {
        use super::*;

        #[test]
        fn three_step_cycle() {
            let values = bindings(&[
                ("B", "123-${D}-789"),
                ("D", "klm-${F}-nop"),
                ("F", "xyz-${B}-abc"),
            ]);

            assert_eq!(
                texts(&resolve("B", &values)),
                [
                    "123-",
                    "klm-",
                    "xyz-",
                    "123-",
                    "<err:circular reference: B->D->F->B>",
                    "-789",
                    "-abc",
                    "-nop",
                    "-789",
                ]
            );
        }

        #[test]
        fn self_reference() {
            let values = bindings(&[("A", "a${A}")]);
            assert_eq!(
                texts(&resolve("A", &values)),
                ["a", "a", "<err:circular reference: A->A>"]
            );
        }

        #[test]
        fn two_step_cycle() {
            let values = bindings(&[("A", "${B}"), ("B", "${A}")]);
            assert_eq!(
                texts(&resolve("A", &values)),
                ["<err:circular reference: A->B->A>"]
            );
        }

        #[test]
        fn cycle_not_through_the_root() {
            let values = bindings(&[("A", "${B}"), ("B", "${C}"), ("C", "${B}")]);
            assert_eq!(
                texts(&resolve("A", &values)),
                ["<err:circular reference: C->B->C>"]
            );
        }
    }

    // ==================== Leak guard ====================

    mod leaks {
        use super::*;

        #[test]
        fn open_color_gets_closed() {
            let values = bindings(&[("A", "@F(1)x")]);
            assert_eq!(
                resolve("A", &values),
                Series::build([
                    Token::foreground("1"),
                    Token::literal("x"),
                    Token::stop(Kind::Bold),
                ])
            );
        }

        #[test]
        fn closed_color_is_left_alone() {
            let values = bindings(&[("A", "@F(1)x@f")]);
            assert_eq!(resolve("A", &values).len(), 3);
        }

        #[test]
        fn italics_do_not_count() {
            let values = bindings(&[("A", "@Ix")]);
            assert_eq!(
                resolve("A", &values),
                Series::build([Token::start(Kind::Italic), Token::literal("x")])
            );
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn resolution_terminates_without_variables(
                edges in prop::collection::vec((0usize..4, 0usize..4), 0..8)
            ) {
                let names = ["A", "B", "C", "D"];
                let mut values: HashMap<String, String> =
                    names.iter().map(|n| (n.to_string(), format!("<{n}>"))).collect();
                for (from, to) in edges {
                    if let Some(value) = values.get_mut(names[from]) {
                        value.push_str(&format!("${{{}}}", names[to]));
                    }
                }

                for name in names {
                    let series = resolve(name, &values);
                    prop_assert!(!series.contains_kind(Kind::Variable));
                }
            }
        }
    }
}
