use std::cmp::Ordering;
use std::fmt;

/// The balance code of a node: which of its subtrees, if any, is taller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    /// The left subtree is taller.
    Left,
    /// Both subtrees have the same height.
    Same,
    /// The right subtree is taller.
    Right,
}

impl Code {
    /// Returns the code matching the given left and right subtree heights.
    pub fn from_heights(left: isize, right: isize) -> Code {
        match left.cmp(&right) {
            Ordering::Greater => Code::Left,
            Ordering::Equal => Code::Same,
            Ordering::Less => Code::Right,
        }
    }

    /// Returns the symbol used for this code in debug strings.
    pub fn symbol(self) -> char {
        match self {
            Code::Left => '/',
            Code::Same => '=',
            Code::Right => '\\',
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single rotation's direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// The restructuring needed at a node whose subtrees differ in height by two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rebalance {
    /// One rotation of the unbalanced node.
    Single(Rotation),
    /// Rotate the heavy child in the first direction, then the node in the second.
    Double(Rotation, Rotation),
}

impl Rebalance {
    /// Chooses the restructuring from the unbalanced node's code and its heavy child's code.
    ///
    /// A heavy child with an even code takes the single rotation. Every other combination
    /// falls through to a double rotation on the heavy side.
    pub fn choose(node: Code, heavy_child: Code) -> Rebalance {
        match (node, heavy_child) {
            (Code::Right, Code::Right) | (Code::Right, Code::Same) =>
                Rebalance::Single(Rotation::Left),
            (Code::Left, Code::Left) | (Code::Left, Code::Same) =>
                Rebalance::Single(Rotation::Right),
            (Code::Right, Code::Left) =>
                Rebalance::Double(Rotation::Right, Rotation::Left),
            (Code::Left, Code::Right) | (Code::Same, _) =>
                Rebalance::Double(Rotation::Left, Rotation::Right),
        }
    }

    /// Returns the number of single rotations this restructuring performs.
    pub fn rotations(self) -> usize {
        match self {
            Rebalance::Single(_) => 1,
            Rebalance::Double(..) => 2,
        }
    }
}
