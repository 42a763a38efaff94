//! The concrete syntax tree: `Node = Token | List(NodeList)`.
//!
//! `spec.md` §9 notes that the source this spec was distilled from tangles
//! value, AST and token into a cycle (a token's value can carry an AST
//! pointer; an AST node wraps a token; a value can be an AST pointer). The
//! fix collapses all three into one recursive type: a `Node` is either a
//! leaf `Token` or a `List` of `Node`s, and the "AST pointer embedded in a
//! token value" (`Value::CstRef`) is just a shared, immutable, downward-only
//! reference to a sub-tree of this same type. Because `Token`'s `value`
//! field can itself hold a `Value::CstRef(Rc<Node>)`, this module and
//! `value.rs` are mutually dependent by construction — that is the cycle
//! the redesign keeps, deliberately, since it is no longer a *reference*
//! cycle (there are no `Rc` back-edges, only values pointing at sub-trees
//! strictly beneath them).

use std::rc::Rc;

use sproutc_util::Span;

use crate::token::{Token, TokenKind};

/// A node of the concrete syntax tree: a single token, or a parenthesised
/// list of nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Token(Token),
    List(NodeList),
}

/// A persistent cons-chain of `Node`s. The empty list is semantically nil.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum NodeList {
    #[default]
    Nil,
    Cons(Rc<NodeCell>),
}

#[derive(Debug, PartialEq)]
pub struct NodeCell {
    pub head: Node,
    pub tail: NodeList,
}

impl Node {
    pub fn token(tok: Token) -> Self {
        Node::Token(tok)
    }

    pub fn list(items: NodeList) -> Self {
        Node::List(items)
    }

    /// A list node built from children in source order.
    pub fn of(items: Vec<Node>) -> Self {
        Node::List(NodeList::from_vec(items))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Node::Token(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(t) => Some(t),
            Node::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&NodeList> {
        match self {
            Node::List(l) => Some(l),
            Node::Token(_) => None,
        }
    }

    pub fn kind(&self) -> Option<TokenKind> {
        self.as_token().map(|t| t.kind)
    }

    /// A representative source location: the token itself, or the first
    /// descendant token of a list (there is no location for an empty list).
    pub fn span(&self) -> Option<Span> {
        match self {
            Node::Token(t) => Some(t.span),
            Node::List(list) => list.iter().find_map(Node::span),
        }
    }
}

impl NodeList {
    pub fn nil() -> Self {
        NodeList::Nil
    }

    pub fn cons(head: Node, tail: NodeList) -> Self {
        NodeList::Cons(Rc::new(NodeCell { head, tail }))
    }

    /// Builds a list from children already in source order (no reversal
    /// needed — the parser's productions push children into a `Vec` as
    /// they're parsed, then hand the whole vector here).
    pub fn from_vec(items: Vec<Node>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(NodeList::Nil, |tail, head| NodeList::cons(head, tail))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, NodeList::Nil)
    }

    pub fn head(&self) -> Option<&Node> {
        match self {
            NodeList::Nil => None,
            NodeList::Cons(cell) => Some(&cell.head),
        }
    }

    pub fn tail(&self) -> Option<&NodeList> {
        match self {
            NodeList::Nil => None,
            NodeList::Cons(cell) => Some(&cell.tail),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.is_nil()
    }

    pub fn iter(&self) -> NodeListIter<'_> {
        NodeListIter { cur: self }
    }

    pub fn to_vec(&self) -> Vec<Node> {
        self.iter().cloned().collect()
    }
}

pub struct NodeListIter<'a> {
    cur: &'a NodeList,
}

impl<'a> Iterator for NodeListIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cur {
            NodeList::Nil => None,
            NodeList::Cons(cell) => {
                self.cur = &cell.tail;
                Some(&cell.head)
            }
        }
    }
}
