//! The error node shared by every composition operation.
//!
//! A [`Failure`] is an immutable, reference-counted error value. Cloning it
//! is a pointer copy, and identity (not message text) decides whether two
//! failures are "the same" failure. Every node has one of three shapes:
//!
//! - a **leaf**: a plain message, or any foreign [`std::error::Error`]. A
//!   foreign error whose `source()` chain holds a `Failure` wraps that
//!   failure as its single child;
//! - a **wrap**: literal text interleaved with one or more child failures;
//! - a **composite**: a [`MultiError`] holding independent failures in order.

use std::error::Error as StdError;
use std::fmt;
use std::slice;
use std::sync::Arc;

use super::multi::MultiError;

/// Tagged view of a node, used to dispatch per shape.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// No children.
    Leaf,
    /// Literal text around exactly one child. Also used for a foreign error
    /// wrapping a `Failure` through its source chain.
    SingleWrap(&'a Failure),
    /// Literal text around two or more children.
    MultiWrap(&'a [Failure]),
    /// An ordered set of independent failures.
    Composite(&'a MultiError),
}

#[derive(Debug)]
pub(crate) enum Repr {
    Leaf(Leaf),
    Wrap(Wrap),
    Multi(MultiError),
}

#[derive(Debug)]
pub(crate) enum Leaf {
    Message(String),
    Foreign(Box<dyn StdError + Send + Sync>),
}

impl Leaf {
    /// Nearest `Failure` in a foreign error's chain, the error itself included.
    pub(crate) fn wrapped(&self) -> Option<&Failure> {
        let Leaf::Foreign(err) = self else {
            return None;
        };
        let first: &(dyn StdError + 'static) = &**err;
        let mut link = Some(first);
        while let Some(e) = link {
            if let Some(failure) = e.downcast_ref::<Failure>() {
                return Some(failure);
            }
            link = e.source();
        }
        None
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Segment {
    Text(String),
    /// Index into [`Wrap::children`].
    Child(usize),
}

/// Literal text interleaved with child failures.
#[derive(Debug, Clone)]
pub(crate) struct Wrap {
    pub(crate) segments: Vec<Segment>,
    pub(crate) children: Vec<Failure>,
}

impl Wrap {
    /// All literal text of the wrap, with the children left out.
    pub(crate) fn literal(&self) -> String {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Text(t) => Some(t.as_str()),
                Segment::Child(_) => None,
            })
            .collect()
    }
}

/// An immutable, cheaply cloneable error node.
///
/// # Example
///
/// ```rust
/// use trader_common::errors::Failure;
///
/// let gravy = Failure::msg("inconsistent gravy");
/// let dinner = Failure::context("error making dinner", gravy.clone());
///
/// assert_eq!(dinner.to_string(), "error making dinner: inconsistent gravy");
/// assert!(dinner.is(&gravy));
/// ```
#[derive(Clone)]
pub struct Failure(pub(crate) Arc<Repr>);

impl Failure {
    pub(crate) fn from_repr(repr: Repr) -> Self {
        Self(Arc::new(repr))
    }

    /// A leaf failure carrying only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::from_repr(Repr::Leaf(Leaf::Message(message.into())))
    }

    /// Adopt a foreign error as a leaf.
    ///
    /// The original value stays reachable through [`Failure::find`].
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_repr(Repr::Leaf(Leaf::Foreign(Box::new(err))))
    }

    /// Wrap two failures as `"outer: inner"`.
    pub fn wrap(outer: Failure, inner: Failure) -> Self {
        WrapBuilder::default()
            .child(outer)
            .text(": ")
            .child(inner)
            .build()
    }

    /// Wrap one failure behind a context message, as `"context: inner"`.
    pub fn context(context: impl Into<String>, inner: Failure) -> Self {
        WrapBuilder::default()
            .text(context)
            .text(": ")
            .child(inner)
            .build()
    }

    /// Start building a wrap with arbitrary text and children.
    pub fn builder() -> WrapBuilder {
        WrapBuilder::default()
    }

    /// The shape of this node.
    pub fn shape(&self) -> Shape<'_> {
        match &*self.0 {
            Repr::Leaf(leaf) => leaf.wrapped().map_or(Shape::Leaf, Shape::SingleWrap),
            Repr::Wrap(w) if w.children.len() == 1 => Shape::SingleWrap(&w.children[0]),
            Repr::Wrap(w) => Shape::MultiWrap(&w.children),
            Repr::Multi(m) => Shape::Composite(m),
        }
    }

    /// Direct children of this node, in order.
    pub fn children(&self) -> &[Failure] {
        match &*self.0 {
            Repr::Leaf(leaf) => leaf.wrapped().map(slice::from_ref).unwrap_or_default(),
            Repr::Wrap(w) => &w.children,
            Repr::Multi(m) => m.errors(),
        }
    }

    /// The composite view of this node, if it is one.
    pub fn as_multi(&self) -> Option<&MultiError> {
        match &*self.0 {
            Repr::Multi(m) => Some(m),
            _ => None,
        }
    }

    /// True if both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Failure) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// True if this node is `target` or wraps it anywhere below.
    ///
    /// Walks wraps, composites and foreign source chains uniformly.
    pub fn is(&self, target: &Failure) -> bool {
        self.ptr_eq(target) || self.children().iter().any(|c| c.is(target))
    }

    /// First foreign leaf of type `T`, searching depth-first in order.
    pub fn find<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        let own = match &*self.0 {
            Repr::Leaf(Leaf::Foreign(err)) => err.downcast_ref::<T>(),
            _ => None,
        };
        own.or_else(|| self.children().iter().find_map(|c| c.find::<T>()))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            Repr::Leaf(Leaf::Message(m)) => f.write_str(m),
            Repr::Leaf(Leaf::Foreign(err)) => fmt::Display::fmt(err, f),
            Repr::Wrap(w) => {
                for segment in &w.segments {
                    match segment {
                        Segment::Text(t) => f.write_str(t)?,
                        Segment::Child(i) => fmt::Display::fmt(&w.children[*i], f)?,
                    }
                }
                Ok(())
            }
            Repr::Multi(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.0 {
            Repr::Leaf(Leaf::Foreign(err)) => err.source(),
            Repr::Wrap(w) if w.children.len() == 1 => Some(&w.children[0]),
            _ => None,
        }
    }
}

/// Builder for wraps with interleaved text and children.
///
/// ```rust
/// use trader_common::errors::Failure;
///
/// let dinner = Failure::msg("error making dinner");
/// let vodka = Failure::msg("add vodka");
/// let err = Failure::builder()
///     .child(dinner.clone())
///     .text(": Run out of `sausages`: ")
///     .child(vodka.clone())
///     .build();
///
/// assert_eq!(err.to_string(), "error making dinner: Run out of `sausages`: add vodka");
/// ```
#[derive(Debug, Default)]
pub struct WrapBuilder {
    segments: Vec<Segment>,
    children: Vec<Failure>,
}

impl WrapBuilder {
    /// Append literal text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        match self.segments.last_mut() {
            Some(Segment::Text(prev)) => prev.push_str(&text),
            _ => self.segments.push(Segment::Text(text)),
        }
        self
    }

    /// Append a wrapped child.
    pub fn child(mut self, child: Failure) -> Self {
        self.segments.push(Segment::Child(self.children.len()));
        self.children.push(child);
        self
    }

    /// Finish the node. Without children the result is a plain leaf.
    pub fn build(self) -> Failure {
        if self.children.is_empty() {
            let wrap = Wrap {
                segments: self.segments,
                children: Vec::new(),
            };
            return Failure::msg(wrap.literal());
        }
        Failure::from_repr(Repr::Wrap(Wrap {
            segments: self.segments,
            children: self.children,
        }))
    }
}
