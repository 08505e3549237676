//! Depth-first flattening of nested sequences.
//!
//! Whether an element is descended into is decided by an explicit
//! [`Classify`] implementation rather than by probing it for iterability.
//! This lets text and bytes stay scalars even though they are sequences.

use std::fmt;

use tracing::{debug, trace};

use crate::{from_iter, ClassificationError, Cursor, IterCursor, Step, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<T, C> {
    Scalar(T),
    Container(C),
}

pub trait Classify<T> {
    type Children: IntoIterator<Item = T>;

    fn classify(&self, value: T) -> Result<Shape<T, Self::Children>, ClassificationError>;
}

impl<T, C, F> Classify<T> for F
where
    F: Fn(T) -> Result<Shape<T, C>, ClassificationError>,
    C: IntoIterator<Item = T>,
{
    type Children = C;

    fn classify(&self, value: T) -> Result<Shape<T, C>, ClassificationError> {
        self(value)
    }
}

/// Lists are containers; ints, text and bytes are scalars. Maps are
/// rejected: it is ambiguous whether their keys, values or entries should
/// come out.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueClassifier;

impl Classify<Value> for ValueClassifier {
    type Children = Vec<Value>;

    fn classify(&self, value: Value) -> Result<Shape<Value, Vec<Value>>, ClassificationError> {
        match value {
            Value::List(items) => Ok(Shape::Container(items)),
            Value::Map(_) => Err(ClassificationError::Unclassifiable { kind: value.kind() }),
            scalar @ (Value::Int(_) | Value::Text(_) | Value::Bytes(_)) => {
                Ok(Shape::Scalar(scalar))
            }
        }
    }
}

type Level<T, K> = <<K as Classify<T>>::Children as IntoIterator>::IntoIter;

/// Flattening adapter; see [`Cursor::flatten_with`].
///
/// Keeps one child iterator per open nesting level on top of the owned
/// outer cursor. Produces `Ok(scalar)` in depth-first, left-to-right order.
/// Empty containers produce nothing. The first classification failure is
/// produced as an `Err`, after which the adapter is exhausted.
pub struct Flatten<C, K>
where
    C: Cursor,
    K: Classify<C::Item>,
{
    outer: C,
    stack: Vec<Level<C::Item, K>>,
    classifier: K,
    max_depth: Option<usize>,
    done: bool,
}

impl<C, K> Flatten<C, K>
where
    C: Cursor,
    K: Classify<C::Item>,
{
    pub fn new(outer: C, classifier: K) -> Self {
        Self {
            outer,
            stack: Vec::new(),
            classifier,
            max_depth: None,
            done: false,
        }
    }

    /// Fails with [`ClassificationError::DepthLimit`] instead of descending
    /// into more than `limit` nested containers. Guards against classifiers
    /// that never bottom out.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn fail(&mut self, err: ClassificationError) -> Step<Result<C::Item, ClassificationError>> {
        debug!(depth = self.stack.len(), %err, "flatten failed");
        self.stack.clear();
        self.done = true;
        Step::Value(Err(err))
    }
}

impl<C, K> Cursor for Flatten<C, K>
where
    C: Cursor,
    K: Classify<C::Item>,
{
    type Item = Result<C::Item, ClassificationError>;

    fn advance(&mut self) -> Step<Self::Item> {
        loop {
            if self.done {
                return Step::Exhausted;
            }
            let next = match self.stack.last_mut() {
                Some(level) => match level.next() {
                    Some(value) => value,
                    None => {
                        self.stack.pop();
                        trace!(depth = self.stack.len(), "level exhausted");
                        continue;
                    }
                },
                None => match self.outer.advance() {
                    Step::Value(value) => value,
                    Step::Exhausted => {
                        self.done = true;
                        return Step::Exhausted;
                    }
                },
            };
            match self.classifier.classify(next) {
                Ok(Shape::Scalar(value)) => return Step::Value(Ok(value)),
                Ok(Shape::Container(children)) => {
                    if let Some(limit) = self.max_depth {
                        if self.stack.len() >= limit {
                            return self.fail(ClassificationError::DepthLimit { limit });
                        }
                    }
                    self.stack.push(children.into_iter());
                    trace!(depth = self.stack.len(), "descended");
                }
                Err(err) => return self.fail(err),
            }
        }
    }
}

impl<C, K> fmt::Debug for Flatten<C, K>
where
    C: Cursor + fmt::Debug,
    K: Classify<C::Item> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("outer", &self.outer)
            .field("depth", &self.stack.len())
            .field("classifier", &self.classifier)
            .field("max_depth", &self.max_depth)
            .field("done", &self.done)
            .finish()
    }
}

/// Flattens `values` with the [`ValueClassifier`].
pub fn flatten_values(
    values: Vec<Value>,
) -> Flatten<IterCursor<std::vec::IntoIter<Value>>, ValueClassifier> {
    from_iter(values).flatten_with(ValueClassifier)
}
