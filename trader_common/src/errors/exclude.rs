//! Removing one failure from an error tree.

use super::failure::{Failure, Leaf, Repr, Segment, Wrap};
use super::multi::MultiError;

/// Outcome of pruning one node.
enum Pruned {
    /// Target not present below this node.
    Unchanged,
    /// Nothing left once the target is gone.
    Removed,
    Rewritten(Failure),
}

impl Pruned {
    fn resolve(self, original: &Failure) -> Option<Failure> {
        match self {
            Pruned::Unchanged => Some(original.clone()),
            Pruned::Removed => None,
            Pruned::Rewritten(err) => Some(err),
        }
    }
}

/// Remove every occurrence of `target` from `err`.
///
/// The tree is rebuilt only along paths that actually held `target`; when it
/// does not occur at all, `err` comes back as the same node. Returns `None`
/// when nothing is left, and for a `None` input.
///
/// Per shape:
/// - composite: components are pruned in place and empty ones dropped. A
///   single survivor is returned on its own.
/// - wrap: children are pruned and the literal text kept, except for the
///   `": "` separator that joined a removed child to its text. A wrap whose
///   only child disappears becomes a leaf carrying the text; a wrap of
///   several children that all disappear is removed along with its text.
/// - foreign error holding a `Failure` in its source chain: treated as a
///   wrap of that failure, split around where the failure's message appears
///   in the foreign message. A rewrite replaces the foreign error with a
///   plain wrap or leaf.
///
/// ```rust
/// use trader_common::errors::{append_error, exclude_error, Failure};
///
/// let e1 = Failure::msg("inconsistent gravity");
/// let e2 = Failure::msg("barely marginal interest in your story");
/// let err = append_error(Some(e1.clone()), Some(e2.clone()));
///
/// let err = exclude_error(err, &e2).unwrap();
/// assert!(err.ptr_eq(&e1));
/// assert!(exclude_error(Some(err), &e1).is_none());
///
/// let dinner = Failure::msg("error making dinner");
/// let vodka = Failure::msg("add vodka");
/// let err = Failure::wrap(dinner.clone(), vodka.clone());
/// assert_eq!(exclude_error(Some(err), &dinner).unwrap().to_string(), "add vodka");
/// ```
pub fn exclude_error(err: Option<Failure>, target: &Failure) -> Option<Failure> {
    let err = err?;
    prune(&err, target).resolve(&err)
}

fn prune(node: &Failure, target: &Failure) -> Pruned {
    if node.ptr_eq(target) {
        return Pruned::Removed;
    }
    match &*node.0 {
        Repr::Leaf(leaf) => match leaf.wrapped() {
            Some(child) => prune_foreign(node, child, target),
            None => Pruned::Unchanged,
        },
        Repr::Multi(multi) => prune_multi(multi, target),
        Repr::Wrap(wrap) => prune_wrap(wrap, target),
    }
}

fn prune_multi(multi: &MultiError, target: &Failure) -> Pruned {
    let mut changed = false;
    let mut kept = Vec::with_capacity(multi.len());
    for err in multi {
        match prune(err, target) {
            Pruned::Unchanged => kept.push(err.clone()),
            Pruned::Removed => changed = true,
            Pruned::Rewritten(e) => {
                changed = true;
                kept.push(e);
            }
        }
    }
    if !changed {
        return Pruned::Unchanged;
    }
    if kept.len() == 1 {
        return kept.pop().map_or(Pruned::Removed, Pruned::Rewritten);
    }
    MultiError::into_failure(kept).map_or(Pruned::Removed, Pruned::Rewritten)
}

/// Prune a foreign error through the `Failure` in its source chain.
fn prune_foreign(node: &Failure, child: &Failure, target: &Failure) -> Pruned {
    if !child.is(target) {
        return Pruned::Unchanged;
    }
    let rendered = node.to_string();
    let inner = child.to_string();
    let mut segments = Vec::with_capacity(3);
    match rendered.rfind(&inner).filter(|_| !inner.is_empty()) {
        Some(at) => {
            segments.push(Segment::Text(rendered[..at].to_string()));
            segments.push(Segment::Child(0));
            segments.push(Segment::Text(rendered[at + inner.len()..].to_string()));
        }
        // The foreign message does not show its source.
        None => segments.push(Segment::Text(rendered)),
    }
    segments.retain(|s| !matches!(s, Segment::Text(t) if t.is_empty()));

    let wrap = Wrap {
        segments,
        children: vec![child.clone()],
    };
    prune_wrap(&wrap, target)
}

fn prune_wrap(wrap: &Wrap, target: &Failure) -> Pruned {
    let pruned: Vec<Pruned> = wrap.children.iter().map(|c| prune(c, target)).collect();
    if pruned.iter().all(|p| matches!(p, Pruned::Unchanged)) {
        return Pruned::Unchanged;
    }

    // Old child index -> new child index, for the children that survive.
    let mut remap = Vec::with_capacity(pruned.len());
    let mut children = Vec::with_capacity(pruned.len());
    for (child, outcome) in wrap.children.iter().zip(pruned) {
        match outcome.resolve(child) {
            Some(c) => {
                remap.push(Some(children.len()));
                children.push(c);
            }
            None => remap.push(None),
        }
    }

    if children.is_empty() && wrap.children.len() > 1 {
        return Pruned::Removed;
    }

    let segments = rebuild_segments(&wrap.segments, &remap);
    if children.is_empty() {
        let text: String = segments
            .into_iter()
            .filter_map(|s| match s {
                Segment::Text(t) => Some(t),
                Segment::Child(_) => None,
            })
            .collect();
        if text.trim().is_empty() {
            return Pruned::Removed;
        }
        return Pruned::Rewritten(Failure::from_repr(Repr::Leaf(Leaf::Message(text))));
    }
    Pruned::Rewritten(Failure::from_repr(Repr::Wrap(Wrap { segments, children })))
}

/// Renumber surviving children and drop removed ones.
///
/// Each removed child takes its separator with it: trailing `": "` of the
/// text just before it or, when it has no text before it, leading `": "` of
/// the text just after it. Text left adjacent is merged.
fn rebuild_segments(segments: &[Segment], remap: &[Option<usize>]) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut trim_next = false;
    for segment in segments {
        match segment {
            Segment::Child(i) => match remap[*i] {
                Some(new) => {
                    out.push(Segment::Child(new));
                    trim_next = false;
                }
                None => match out.last_mut() {
                    Some(Segment::Text(prev)) => {
                        trim_separator_end(prev);
                        trim_next = false;
                    }
                    _ => trim_next = true,
                },
            },
            Segment::Text(t) => {
                let t = if trim_next { trim_separator_start(t) } else { t.as_str() };
                trim_next = false;
                match out.last_mut() {
                    Some(Segment::Text(prev)) => prev.push_str(t),
                    _ => out.push(Segment::Text(t.to_string())),
                }
            }
        }
    }
    out.retain(|s| !matches!(s, Segment::Text(t) if t.is_empty()));
    out
}

fn trim_separator_end(text: &mut String) {
    let trimmed = text.trim_end();
    let len = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end().len();
    text.truncate(len);
}

fn trim_separator_start(text: &str) -> &str {
    let trimmed = text.trim_start();
    trimmed.strip_prefix(':').unwrap_or(trimmed).trim_start()
}
