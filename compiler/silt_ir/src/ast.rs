//! Arena-allocated syntax tree.
//!
//! Nodes live in an [`Ast`] and refer to each other by [`NodeId`]. Parent
//! links are plain ids written when a node is allocated, so a child never
//! owns its parent and the tree has no reference cycles.

use crate::{MessageId, Name, NameTable, NodeId, SourceRange, Symbol};
use smallvec::SmallVec;

mod dump;

pub use dump::dump;

/// Literal value carried by a leaf node.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

/// Shape of a node. Operator fields hold the symbol that introduced them.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Placeholder for input that could not be parsed. Holds the symbol of the
    /// token it stands in for.
    Invalid(Symbol),
    Literal(Literal),
    /// Identifier, interned in the tree's own [`NameTable`].
    Name(Name),
    Prefix {
        op: Symbol,
        operand: NodeId,
    },
    Postfix {
        op: Symbol,
        operand: NodeId,
    },
    Binary {
        left: NodeId,
        op: Symbol,
        right: NodeId,
    },
    Ternary {
        condition: NodeId,
        then_branch: NodeId,
        else_branch: NodeId,
    },
    /// Explicit parenthesized group, only produced when a grammar asks for one.
    Group(NodeId),
    /// Delimited, separated items such as `(a, b)`; lambdas take their
    /// parameter lists from it.
    Tuple(Vec<NodeId>),
    Call {
        callee: NodeId,
        args: Vec<NodeId>,
    },
    Lambda {
        params: Vec<NodeId>,
        body: NodeId,
    },
    Block {
        children: Vec<NodeId>,
        separator: Option<Symbol>,
        terminator: Symbol,
    },
    /// Expression in statement position.
    ExprStmt(NodeId),
    /// Grammar-defined construct, e.g. a `let` or `import` statement.
    Tagged {
        tag: Symbol,
        children: Vec<NodeId>,
    },
}

impl NodeKind {
    /// Child ids in source order.
    pub fn children(&self) -> SmallVec<[NodeId; 4]> {
        match self {
            NodeKind::Invalid(_) | NodeKind::Literal(_) | NodeKind::Name(_) => SmallVec::new(),
            NodeKind::Prefix { operand, .. } | NodeKind::Postfix { operand, .. } => {
                smallvec::smallvec![*operand]
            }
            NodeKind::Binary { left, right, .. } => smallvec::smallvec![*left, *right],
            NodeKind::Ternary {
                condition,
                then_branch,
                else_branch,
            } => smallvec::smallvec![*condition, *then_branch, *else_branch],
            NodeKind::Group(inner) | NodeKind::ExprStmt(inner) => smallvec::smallvec![*inner],
            NodeKind::Call { callee, args } => {
                let mut out = SmallVec::with_capacity(args.len() + 1);
                out.push(*callee);
                out.extend(args.iter().copied());
                out
            }
            NodeKind::Lambda { params, body } => {
                let mut out: SmallVec<[NodeId; 4]> = params.iter().copied().collect();
                out.push(*body);
                out
            }
            NodeKind::Block { children, .. }
            | NodeKind::Tagged { children, .. }
            | NodeKind::Tuple(children) => children.iter().copied().collect(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, NodeKind::Invalid(_))
    }
}

/// Node storage, struct-of-arrays.
#[derive(Clone, Debug, Default)]
pub struct Ast {
    kinds: Vec<NodeKind>,
    ranges: Vec<SourceRange>,
    parents: Vec<Option<NodeId>>,
    messages: Vec<SmallVec<[MessageId; 1]>>,
    names: NameTable,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node. Every child named by `kind` gets the new node as parent.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: NodeKind, range: SourceRange) -> NodeId {
        let raw = u32::try_from(self.kinds.len())
            .unwrap_or_else(|_| panic!("ast arena exceeded {} nodes", u32::MAX));
        let id = NodeId::from_raw(raw);
        for child in kind.children() {
            if let Some(parent) = self.parents.get_mut(child.index()) {
                *parent = Some(id);
            }
        }
        self.kinds.push(kind);
        self.ranges.push(range);
        self.parents.push(None);
        self.messages.push(SmallVec::new());
        id
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.kinds[id.index()]
    }

    #[inline]
    pub fn range(&self, id: NodeId) -> SourceRange {
        self.ranges[id.index()]
    }

    /// Replace a node's range, e.g. to widen an expression over its parentheses.
    pub fn set_range(&mut self, id: NodeId, range: SourceRange) {
        self.ranges[id.index()] = range;
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.index()]
    }

    pub fn children(&self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        self.kind(id).children()
    }

    /// Parent chain from the direct parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&node| self.parent(node))
    }

    pub fn attach_message(&mut self, id: NodeId, message: MessageId) {
        self.messages[id.index()].push(message);
    }

    /// Messages attached to a node, in insertion order.
    pub fn messages(&self, id: NodeId) -> &[MessageId] {
        &self.messages[id.index()]
    }

    /// Intern an identifier spelling in this tree.
    pub fn intern_name(&mut self, text: &str) -> Name {
        self.names.intern(text)
    }

    /// Spelling of an identifier of this tree.
    pub fn name(&self, name: Name) -> &str {
        self.names.text(name)
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// All ids in allocation order. Children are always allocated before
    /// their parents.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.kinds.len())
            .map(|index| NodeId::from_raw(u32::try_from(index).unwrap_or(u32::MAX)))
    }
}

#[cfg(test)]
mod tests;
