//! Lazy expansion of a nested value tree into every implied combination.
//!
//! An [`Expander`] walks one mapping or sequence node. Children that are
//! themselves mappings or sequences become *variation points*, each backed
//! by its own stream of produced values; everything else passes through
//! verbatim. Sequence nodes flatten their variation points in place, while
//! mapping nodes form the Cartesian product of theirs, odometer-style,
//! cascading mapping-typed picks over the accumulated result.

use std::rc::Rc;
use std::vec;

use indexmap::IndexMap;

use crate::error::ExpandError;
use crate::value::Value;

/// Lazy iterator over every combination implied by a nested value tree.
///
/// Built once per root via [`Expander::new`] (or [`Value::expand`]); iterated
/// to exhaustion exactly once. The input is never mutated, and every yielded
/// value is independent of the input and of every other yielded value.
///
/// A sequence root yields its flattened elements; a mapping root yields one
/// merged mapping per combination of its variation points' values.
#[derive(Debug)]
pub struct Expander {
    state: State,
}

impl Expander {
    /// Builds an expander over `root`.
    ///
    /// Only mappings and sequences can anchor an expansion; any other value
    /// is rejected with [`ExpandError::InvalidRoot`].
    pub fn new(root: &Value) -> Result<Expander, ExpandError> {
        match root {
            Value::Seq(items) => Ok(Expander::over_seq(items)),
            Value::Map(fields) => Ok(Expander::over_map(fields)),
            other => Err(ExpandError::InvalidRoot { kind: other.kind() }),
        }
    }

    fn over_seq(items: &[Value]) -> Expander {
        Expander {
            state: State::Seq(SeqState::new(items)),
        }
    }

    fn over_map(fields: &IndexMap<String, Value>) -> Expander {
        Expander {
            state: State::Map(MapState::new(fields)),
        }
    }
}

impl Iterator for Expander {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match &mut self.state {
            State::Seq(seq) => seq.next(),
            State::Map(map) => map.next(),
        }
    }
}

impl Value {
    /// Convenience for [`Expander::new`].
    pub fn expand(&self) -> Result<Expander, ExpandError> {
        Expander::new(self)
    }
}

#[derive(Debug)]
enum State {
    Seq(SeqState),
    Map(MapState),
}

/// Live producer of values for one variation point.
#[derive(Debug)]
enum Stream {
    /// Plain element cursor over a sequence with no nested variation
    /// points; no cascade or product logic is needed for those.
    Cursor(vec::IntoIter<Value>),
    /// Full machinery for anything that does need it.
    Nested(Box<Expander>),
}

impl Stream {
    fn next(&mut self) -> Option<Value> {
        match self {
            Stream::Cursor(elements) => elements.next(),
            Stream::Nested(child) => child.next(),
        }
    }
}

/// The original child value behind a variation point, retained so the
/// stream can be rebuilt with a fresh lifecycle when the odometer carries.
#[derive(Debug)]
enum PointSource {
    Seq(Rc<Vec<Value>>),
    Map(Rc<IndexMap<String, Value>>),
}

impl PointSource {
    fn stream(&self) -> Stream {
        match self {
            PointSource::Seq(items) if items.iter().any(Value::is_expandable) => {
                Stream::Nested(Box::new(Expander::over_seq(items)))
            }
            PointSource::Seq(items) => Stream::Cursor(items.as_ref().clone().into_iter()),
            PointSource::Map(fields) => Stream::Nested(Box::new(Expander::over_map(fields))),
        }
    }
}

/// One digit of the mapping-mode odometer.
#[derive(Debug)]
struct VariationPoint {
    /// Key this point occupies in its mapping node; scalar picks land here.
    key: String,
    source: PointSource,
    stream: Stream,
}

impl VariationPoint {
    fn new(key: &str, source: PointSource) -> VariationPoint {
        let stream = source.stream();
        VariationPoint {
            key: key.to_string(),
            source,
            stream,
        }
    }

    /// Gives this digit a fresh lifecycle after it exhausted mid-product.
    fn reset(&mut self) {
        self.stream = self.source.stream();
    }
}

/// A sequence node position: either a verbatim element or a variation
/// point's stream. Sequence streams are consumed exactly once, so the
/// source is not retained.
#[derive(Debug)]
enum Slot {
    Static(Value),
    Point(Stream),
}

/// Sequence enumerator: emits each position's static value or drains its
/// stream in place, left to right.
#[derive(Debug)]
struct SeqState {
    slots: Vec<Slot>,
    pos: usize,
    done: bool,
}

impl SeqState {
    fn new(items: &[Value]) -> SeqState {
        let slots: Vec<Slot> = items
            .iter()
            .map(|element| match element {
                Value::Seq(s) => Slot::Point(PointSource::Seq(Rc::clone(s)).stream()),
                Value::Map(m) => Slot::Point(PointSource::Map(Rc::clone(m)).stream()),
                other => Slot::Static(other.clone()),
            })
            .collect();
        let done = slots.is_empty();
        SeqState {
            slots,
            pos: 0,
            done,
        }
    }

    fn next(&mut self) -> Option<Value> {
        while !self.done {
            let last = self.pos + 1 == self.slots.len();
            match &mut self.slots[self.pos] {
                Slot::Static(value) => {
                    let element = value.clone();
                    if last {
                        self.done = true;
                    } else {
                        self.pos += 1;
                    }
                    return Some(element);
                }
                Slot::Point(stream) => match stream.next() {
                    Some(element) => return Some(element),
                    None => {
                        if last {
                            self.done = true;
                        } else {
                            self.pos += 1;
                        }
                    }
                },
            }
        }
        None
    }
}

/// Mapping enumerator: a mixed-radix odometer over the variation points,
/// first point slowest, last point fastest.
#[derive(Debug)]
struct MapState {
    /// Entries that pass through unprocessed; also accumulator level 0.
    statics: IndexMap<String, Value>,
    points: Vec<VariationPoint>,
    /// `levels[i]` is the partial combination before point `i`'s pick.
    /// Each pick copies its level before merging, so no state is shared
    /// across branches of the product.
    levels: Vec<IndexMap<String, Value>>,
    digit: usize,
    done: bool,
}

impl MapState {
    fn new(fields: &IndexMap<String, Value>) -> MapState {
        let mut statics = IndexMap::new();
        let mut points = Vec::new();
        for (key, value) in fields {
            match value {
                Value::Seq(s) => {
                    points.push(VariationPoint::new(key, PointSource::Seq(Rc::clone(s))));
                }
                Value::Map(m) => {
                    points.push(VariationPoint::new(key, PointSource::Map(Rc::clone(m))));
                }
                scalar => {
                    statics.insert(key.clone(), scalar.clone());
                }
            }
        }
        let mut levels = vec![IndexMap::new(); points.len()];
        if let Some(first) = levels.first_mut() {
            *first = statics.clone();
        }
        MapState {
            statics,
            points,
            levels,
            digit: 0,
            done: false,
        }
    }

    fn next(&mut self) -> Option<Value> {
        if self.done {
            return None;
        }
        if self.points.is_empty() {
            // nothing varies: the static partition is the one combination
            self.done = true;
            return Some(Value::from(self.statics.clone()));
        }
        let mut digit = self.digit;
        loop {
            match self.points[digit].stream.next() {
                Some(pick) => {
                    let mut partial = self.levels[digit].clone();
                    match pick {
                        // a produced mapping replaces the variant slot:
                        // its keys overlay the accumulated combination
                        Value::Map(fields) => {
                            for (key, value) in fields.iter() {
                                partial.insert(key.clone(), value.clone());
                            }
                        }
                        scalar => {
                            partial.insert(self.points[digit].key.clone(), scalar);
                        }
                    }
                    if digit + 1 == self.points.len() {
                        // fastest digit keeps spinning in place
                        self.digit = digit;
                        return Some(Value::from(partial));
                    }
                    self.levels[digit + 1] = partial;
                    digit += 1;
                }
                None => {
                    if digit == 0 {
                        // the slowest digit ran out: nothing left to carry into
                        self.done = true;
                        return None;
                    }
                    self.points[digit].reset();
                    digit -= 1;
                }
            }
        }
    }
}
