//! Drawing instructions produced by the renderer and the fillers.

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Move { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    BezierCurveTo {
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    },
}

impl Op {
    /// Short instruction name, as used in serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Move { .. } => "move",
            Op::LineTo { .. } => "lineTo",
            Op::BezierCurveTo { .. } => "bcurveTo",
        }
    }

    /// Numeric payload in drawing order.
    pub fn data(&self) -> Vec<f64> {
        match *self {
            Op::Move { x, y } | Op::LineTo { x, y } => vec![x, y],
            Op::BezierCurveTo { cp1x, cp1y, cp2x, cp2y, x, y } => {
                vec![cp1x, cp1y, cp2x, cp2y, x, y]
            }
        }
    }

    /// Where the pen ends up after this op.
    pub fn end_point(&self) -> (f64, f64) {
        match *self {
            Op::Move { x, y } | Op::LineTo { x, y } | Op::BezierCurveTo { x, y, .. } => (x, y),
        }
    }
}

/// What an op-set is for, so later passes can tell strokes from fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpSetType {
    /// An outline stroke
    Path,
    /// A solid fill area
    FillPath,
    /// Pattern fill output (hachure, dots, ...)
    FillSketch,
}

impl OpSetType {
    pub fn name(&self) -> &'static str {
        match self {
            OpSetType::Path => "path",
            OpSetType::FillPath => "fillPath",
            OpSetType::FillSketch => "fillSketch",
        }
    }
}

/// An ordered, tagged sequence of ops.
#[derive(Debug, Clone, PartialEq)]
pub struct OpSet {
    pub kind: OpSetType,
    pub ops: Vec<Op>,
}

impl OpSet {
    pub fn new(kind: OpSetType) -> Self {
        Self { kind, ops: Vec::new() }
    }

    /// An empty pattern-fill set.
    pub fn fill_sketch() -> Self {
        Self::new(OpSetType::FillSketch)
    }

    pub fn with_ops(kind: OpSetType, ops: Vec<Op>) -> Self {
        Self { kind, ops }
    }

    /// Append another set's ops after ours, keeping their order.
    pub fn extend(&mut self, other: OpSet) {
        self.ops.extend(other.ops);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of sub-paths (one per `Move`).
    pub fn move_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Move { .. })).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_payloads() {
        let op = Op::BezierCurveTo { cp1x: 1.0, cp1y: 2.0, cp2x: 3.0, cp2y: 4.0, x: 5.0, y: 6.0 };
        assert_eq!(op.name(), "bcurveTo");
        assert_eq!(op.data(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(op.end_point(), (5.0, 6.0));

        assert_eq!(Op::Move { x: 1.0, y: 2.0 }.data(), vec![1.0, 2.0]);
    }

    #[test]
    fn extend_keeps_order() {
        let mut set = OpSet::fill_sketch();
        set.extend(OpSet::with_ops(OpSetType::Path, vec![
            Op::Move { x: 0.0, y: 0.0 },
            Op::LineTo { x: 1.0, y: 0.0 },
        ]));
        set.extend(OpSet::with_ops(OpSetType::Path, vec![Op::Move { x: 5.0, y: 5.0 }]));

        assert_eq!(set.kind, OpSetType::FillSketch);
        assert_eq!(set.len(), 3);
        assert_eq!(set.move_count(), 2);
        assert_eq!(set.ops[2], Op::Move { x: 5.0, y: 5.0 });
    }
}
