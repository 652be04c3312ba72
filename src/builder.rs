//! Selector construction and stringification.
//!
//! A [`SelectorBuilder`] accumulates typed selector parts in a fixed category
//! order and renders them to a CSS selector string. Builders are created
//! through the facade functions in the crate root (e.g. [`crate::element`])
//! or by [`combine`], which joins two finished selectors with a combinator.

use std::fmt;

use bitflags::bitflags;

use crate::CssbError;

/// The six selector-part categories, in the only order they may appear
/// within a single selector.
///
/// The derived `Ord` follows declaration order, so ordering validation is a
/// direct comparison between variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

bitflags! {
    /// Bitflags recording which categories a builder has already used.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct UsedCategories: u8 {
        const ELEMENT        = 0b0000_0001;
        const ID             = 0b0000_0010;
        const CLASS          = 0b0000_0100;
        const ATTRIBUTE      = 0b0000_1000;
        const PSEUDO_CLASS   = 0b0001_0000;
        const PSEUDO_ELEMENT = 0b0010_0000;
    }
}

impl Category {
    fn flag(self) -> UsedCategories {
        match self {
            Category::Element => UsedCategories::ELEMENT,
            Category::Id => UsedCategories::ID,
            Category::Class => UsedCategories::CLASS,
            Category::Attribute => UsedCategories::ATTRIBUTE,
            Category::PseudoClass => UsedCategories::PSEUDO_CLASS,
            Category::PseudoElement => UsedCategories::PSEUDO_ELEMENT,
        }
    }

    /// Whether this category may appear at most once per selector.
    fn is_singleton(self) -> bool {
        matches!(
            self,
            Category::Element | Category::Id | Category::PseudoElement
        )
    }

    /// Wraps a raw value with the category's fixed prefix/suffix. The value
    /// itself is taken verbatim; no escaping or validation is performed.
    fn render(self, value: &str) -> String {
        match self {
            Category::Element => value.to_string(),
            Category::Id => format!("#{value}"),
            Category::Class => format!(".{value}"),
            Category::Attribute => format!("[{value}]"),
            Category::PseudoClass => format!(":{value}"),
            Category::PseudoElement => format!("::{value}"),
        }
    }
}

/// A single rendered selector fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub category: Category,
    /// The category's literal string contribution, already prefixed
    /// (e.g. `#main`, `.container`, `[href]`).
    pub rendered: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    /// Normal mode: an ordered part sequence plus the used-category set.
    Building {
        parts: Vec<Part>,
        used: UsedCategories,
    },
    /// Result of [`combine`]: a single precomputed selector string. No
    /// further category parts may be appended.
    Combined(String),
}

/// A chainable builder for CSS selector strings.
///
/// Category methods consume and return the builder so calls chain with `?`:
///
/// ```rust
/// use cssb::element;
///
/// let selector = element("a").attr("href$=\".png\"")?.pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
/// # Ok::<(), cssb::CssbError>(())
/// ```
///
/// Parts must follow the order element, id, class, attribute, pseudo-class,
/// pseudo-element; element, id, and pseudo-element may each appear only once.
/// Violations fail with [`CssbError::OrderViolation`] or
/// [`CssbError::DuplicateSingleton`] and append nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorBuilder {
    state: State,
}

impl Default for SelectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorBuilder {
    /// Creates an empty builder. The facade functions are the usual entry
    /// points; an empty builder stringifies to `""`.
    pub fn new() -> Self {
        Self {
            state: State::Building {
                parts: Vec::new(),
                used: UsedCategories::empty(),
            },
        }
    }

    /// Builds the one-part builder behind the facade entry points. A first
    /// append can break neither ordering nor uniqueness, so this skips the
    /// checks in `push`.
    pub(crate) fn seeded(category: Category, value: &str) -> Self {
        let rendered = category.render(value);
        log::trace!("append {category:?} part: {rendered}");
        Self {
            state: State::Building {
                parts: vec![Part { category, rendered }],
                used: category.flag(),
            },
        }
    }

    /// Appends an element (type) part, e.g. `div`. At most one per selector.
    pub fn element(self, value: &str) -> Result<Self, CssbError> {
        self.push(Category::Element, value)
    }

    /// Appends an id part, rendered as `#value`. At most one per selector.
    pub fn id(self, value: &str) -> Result<Self, CssbError> {
        self.push(Category::Id, value)
    }

    /// Appends a class part, rendered as `.value`.
    pub fn class(self, value: &str) -> Result<Self, CssbError> {
        self.push(Category::Class, value)
    }

    /// Appends an attribute part, rendered as `[value]`. The brackets are
    /// supplied here; pass the inner content only (e.g. `href$=".png"`).
    pub fn attr(self, value: &str) -> Result<Self, CssbError> {
        self.push(Category::Attribute, value)
    }

    /// Appends a pseudo-class part, rendered as `:value`.
    pub fn pseudo_class(self, value: &str) -> Result<Self, CssbError> {
        self.push(Category::PseudoClass, value)
    }

    /// Appends a pseudo-element part, rendered as `::value`. At most one per
    /// selector.
    pub fn pseudo_element(self, value: &str) -> Result<Self, CssbError> {
        self.push(Category::PseudoElement, value)
    }

    fn push(mut self, category: Category, value: &str) -> Result<Self, CssbError> {
        let State::Building { parts, used } = &mut self.state else {
            return Err(CssbError::CombinedSealed);
        };

        // Parts must arrive in non-decreasing category order; equal ranks are
        // fine, which is how repeatable categories repeat.
        if let Some(last) = parts.last() {
            if category < last.category {
                return Err(CssbError::OrderViolation);
            }
        }
        if category.is_singleton() && used.contains(category.flag()) {
            return Err(CssbError::DuplicateSingleton);
        }

        let rendered = category.render(value);
        log::trace!("append {category:?} part: {rendered}");
        used.insert(category.flag());
        parts.push(Part { category, rendered });
        Ok(self)
    }

    /// The parts appended so far, in order. Empty for a combined builder,
    /// which holds only its precomputed string.
    pub fn parts(&self) -> &[Part] {
        match &self.state {
            State::Building { parts, .. } => parts,
            State::Combined(_) => &[],
        }
    }

    /// Renders the selector string: every part's rendered text concatenated
    /// in append order with no separators, or the precomputed string for a
    /// combined builder. Idempotent; never fails.
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Building { parts, .. } => {
                for part in parts {
                    f.write_str(&part.rendered)?;
                }
                Ok(())
            }
            State::Combined(rendered) => f.write_str(rendered),
        }
    }
}

/// Joins two selectors with a combinator, producing a new builder that wraps
/// the precomputed string `a + " " + combinator + " " + b`.
///
/// The combinator is surrounded by exactly one space on each side regardless
/// of its own content, so a descendant combinator written as `" "` yields a
/// visible triple space. Any combinator string is accepted. Either operand
/// may itself be a combined selector.
///
/// ```rust
/// use cssb::{combine, element, id};
///
/// let sel = combine(&element("p"), ">", &id("note"));
/// assert_eq!(sel.stringify(), "p > #note");
/// ```
pub fn combine(
    a: &SelectorBuilder,
    combinator: &str,
    b: &SelectorBuilder,
) -> SelectorBuilder {
    let rendered = format!("{} {} {}", a.stringify(), combinator, b.stringify());
    log::trace!("combine: {rendered}");
    SelectorBuilder {
        state: State::Combined(rendered),
    }
}
