//! Parsed notation with variables resolved at expansion time.

use std::fmt;

use decor_notation::{Kind, Series};
use tracing::debug;

use crate::decorator::Decorator;
use crate::resolve::{resolve, Bindings};

/// Notation parsed once and expanded many times against different values.
///
/// Created by [`Decorator::template`]. A template keeps a handle to its
/// decorator's code table, so it stays usable after the decorator is gone.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use decor::Decorator;
///
/// let decorator = Decorator::load("xterm-256color").unwrap();
/// let template = decorator.template("[${Name}]").unwrap();
///
/// let values = HashMap::from([("Name", "@Ualice@u")]);
/// assert_eq!(template.expand(&values), "[\x1b[4malice\x1b[24m]");
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    series: Series,
    decorator: Decorator,
}

impl Template {
    pub(crate) fn new(series: Series, decorator: Decorator) -> Self {
        Self { series, decorator }
    }

    /// Resolves every variable against `values`, optimizes the result and
    /// renders it with the decorator's codes.
    ///
    /// Undefined variables, circular references and unknown colors are
    /// rendered inline; expansion itself never fails.
    pub fn expand<B: Bindings + ?Sized>(&self, values: &B) -> String {
        let mut expanded = Series::new();
        for token in &self.series {
            if token.kind() == Kind::Variable {
                expanded.extend(resolve(token.text(), values));
            } else {
                expanded.push(token.clone());
            }
        }
        debug!(
            template = self.series.len(),
            expanded = expanded.len(),
            "expanding template"
        );

        let optimized = self.decorator.optimize(expanded);
        self.decorator.render(&optimized)
    }

    /// The parsed, unresolved series.
    pub fn series(&self) -> &Series {
        &self.series
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.series, f)
    }
}
