//! The immutable grammar DAG.
//!
//! Nodes live in an arena (`Graph`) addressed by stable `NodeId` indices
//! rather than `Rc`/pointer edges: this
//! lets `_execute → _execute`-style back-edges exist before `freeze()`
//! without `Weak`/`RefCell`. Grounded on the "parse one production, push
//! one syntax node" shape of `apollo_parser::parser::grammar::*`,
//! generalized from a single recursive-descent call tree to a graph of
//! reusable branch targets.

use std::fmt;

use crate::diagnostic::Diagnostic;
use crate::font::Font;
use crate::reader::Reader;
use crate::suggestion::Suggestion;
use crate::version::VersionPredicate;
use mccmd_idtable::IdNode;

/// A stable index into a `Graph`'s node arena. `Copy`, cheap to store on
/// every `Branch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value captured during parsing, consulted by checkers and by the
/// decorator nodes that feed `BlockSpec`'s dynamic suggestions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }
}

/// Tier 1/2 failure: a rule didn't match (`Expectation`, cheap, try
/// the next branch) or matched-then-broke (`ArgParse`, carries the
/// diagnostic to surface if this branch turns out to be the best one).
#[derive(Debug, Clone)]
pub enum ParseFailure {
    Expectation,
    ArgParse(Diagnostic),
}

pub type LeafFn = Box<dyn Fn(&mut Reader) -> Result<Value, ParseFailure> + Send + Sync>;
pub type SuggestFn = Box<dyn Fn(&SuggestEnv<'_>) -> Vec<Suggestion> + Send + Sync>;
pub type CheckerFn = Box<dyn Fn(&Value) -> Option<Diagnostic> + Send + Sync>;

/// Snapshot of values captured earlier in the *same line* that a
/// `Dynamic` node needs to resolve an `IdTable` path. Threaded through
/// `Marker` rather than mutated on the shared `Node`, so the frozen graph
/// stays race-free across concurrent parses.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub block_id: Option<String>,
    pub block_state_key: Option<String>,
}

/// What a `Dynamic` node's `_suggest()` needs at resolution time: the
/// captured context and, if available, the catalogue to resolve against.
pub struct SuggestEnv<'a> {
    pub context: &'a Context,
    pub id_table: Option<&'a mccmd_idtable::IdTable>,
}

/// Flattens a resolved `IdNode` into suggestion candidates. Plain `fn`
/// pointers (no closures) since the two use sites (`BlockSpec` key/value
/// lookups) need no captured state beyond their `IdNode` argument.
pub type IdMapFn = fn(&IdNode) -> Vec<(String, Option<String>)>;
/// Computes the `IdTable` path for a dynamic node from the captured
/// `Context`; returns `None` when the context doesn't have what's needed
/// yet (degrades to the node's own suggestions).
pub type PathFn = fn(&Context) -> Option<Vec<String>>;

/// Re-routes a node's suggestion resolution through the `IdTable` instead
/// of its own static `suggest` function, without touching how it parses.
/// This is the decorator redesign for the source's `DynamicId` monkey-patch:
/// rather than wrapping `inner` in a second graph node (which
/// would lose `inner`'s own identity at the point an `AutoCompleteUnit`
/// captures it), dynamic resolution is metadata carried directly on the
/// node it modifies.
pub struct DynamicSuggest {
    pub path: PathFn,
    pub map: IdMapFn,
}

/// Where a successfully-parsed `Value::Str` gets written into the
/// `Marker`'s `Context` so a later `DynamicSuggest`'s `PathFn` can see it.
/// The decorator-field counterpart of the `path`/`map` pair above: the
/// source's `ResultTracked` wraps `_parse` with a callback that mutates a
/// closed-over variable, which this crate instead expresses as metadata
/// the engine consults after a node's own parse succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextCapture {
    /// `BlockSpec`'s block id, with a `minecraft:` namespace prefix
    /// stripped if present (`nodes.py`'s `BlockSpec._set_block_id`).
    BlockId,
    /// `BlockSpec._BlockStatePair`'s state key (`nodes.py`'s `_set_key`).
    BlockStateKey,
}

pub enum NodeKind {
    /// Consumes characters via the `Reader` and returns a `Value` or fails.
    Leaf { parse: LeafFn, suggest: SuggestFn },
    /// No parsing of its own; a join/split point in the graph (the
    /// `Compressed` kind, used for `Empty()`-style roots and composites).
    Compressed,
    /// Opens its own `Marker` scope; sets font/AC marks itself rather than
    /// relying on engine defaults (quoted strings, embedded JSON).
    Subparsing(crate::subparser::SubparseFn),
    /// Terminal sentinel: end of line, end of argument.
    Finish,
}

/// `Branch := {target, version_predicate?, is_close, require_arg_end}`.
/// `require_arg_end` is folded into `is_close` here: the
/// engine requires a terminator before descending into any branch that
/// isn't `is_close` when the parent node's `argument_end` is set —
/// keeping a second independent flag would let the two disagree with no
/// way to express that in the grammar DSL below, so this crate treats
/// them as one knob (see DESIGN.md's Open Questions).
#[derive(Clone, Copy)]
pub struct Branch {
    pub target: NodeId,
    pub version_predicate: VersionPredicate,
    pub is_close: bool,
}

pub struct NodeData {
    pub kind: NodeKind,
    pub branches: Vec<Branch>,
    pub default_font: Option<Font>,
    pub note_key: Option<&'static str>,
    /// Message key used to build an `Expectation` diagnostic if this node's
    /// failure to parse ends up being the deepest-reaching one on the line
    /// (engine.rs). `None` falls back to a generic "unknown" key.
    pub expect_key: Option<&'static str>,
    pub checkers: Vec<CheckerFn>,
    pub argument_end: bool,
    pub dynamic: Option<DynamicSuggest>,
    pub context_capture: Option<ContextCapture>,
}

/// The grammar DAG. Mutable while under construction; `freeze()` flips
/// `frozen` and the parse/suggestion passes must not mutate it afterward.
/// A process-wide instance is shared behind
/// `Arc` (see `crate::grammar::get_default_tree`).
pub struct Graph {
    nodes: Vec<NodeData>,
    frozen: bool,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new(), frozen: false }
    }

    fn assert_mutable(&self) {
        debug_assert!(!self.frozen, "grammar graph mutated after freeze()");
    }

    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        self.assert_mutable();
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            branches: Vec::new(),
            default_font: None,
            note_key: None,
            expect_key: None,
            checkers: Vec::new(),
            argument_end: true,
            dynamic: None,
            context_capture: None,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }

    fn get_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.assert_mutable();
        &mut self.nodes[id.0 as usize]
    }

    /// Appends a branch in declared order. Returns `from` so call sites can chain further
    /// `.branch`/`.note`/`.font` calls the way `nodes.py` chains them.
    pub fn branch(&mut self, from: NodeId, to: NodeId) -> NodeId {
        self.branch_with(from, to, VersionPredicate::Always, false)
    }

    pub fn branch_versioned(&mut self, from: NodeId, to: NodeId, pred: VersionPredicate) -> NodeId {
        self.branch_with(from, to, pred, false)
    }

    pub fn branch_close(&mut self, from: NodeId, to: NodeId) -> NodeId {
        self.branch_with(from, to, VersionPredicate::Always, true)
    }

    pub fn branch_with(&mut self, from: NodeId, to: NodeId, pred: VersionPredicate, is_close: bool) -> NodeId {
        self.get_mut(from).branches.push(Branch { target: to, version_predicate: pred, is_close });
        from
    }

    pub fn font(&mut self, id: NodeId, font: Font) -> NodeId {
        self.get_mut(id).default_font = Some(font);
        id
    }

    pub fn note(&mut self, id: NodeId, key: &'static str) -> NodeId {
        self.get_mut(id).note_key = Some(key);
        id
    }

    pub fn expect(&mut self, id: NodeId, key: &'static str) -> NodeId {
        self.get_mut(id).expect_key = Some(key);
        id
    }

    /// Attaches id-catalogue-backed dynamic suggestion resolution to an
    /// existing node without altering how it parses.
    pub fn dynamic(&mut self, id: NodeId, path: PathFn, map: IdMapFn) -> NodeId {
        self.get_mut(id).dynamic = Some(DynamicSuggest { path, map });
        id
    }

    /// Writes this node's parsed value into the parse's `Context` on
    /// success, so a sibling node's `DynamicSuggest` can read it back.
    pub fn capture(&mut self, id: NodeId, capture: ContextCapture) -> NodeId {
        self.get_mut(id).context_capture = Some(capture);
        id
    }

    pub fn checker(&mut self, id: NodeId, checker: CheckerFn) -> NodeId {
        self.get_mut(id).checkers.push(checker);
        id
    }

    pub fn no_argument_end(&mut self, id: NodeId) -> NodeId {
        self.get_mut(id).argument_end = false;
        id
    }

    /// Convenience: a dedicated terminal node reachable via `.branch`.
    /// `nodes.py`'s `EOL().note(...)` equivalent; callers attach their own
    /// note via `note()`.
    pub fn finish_node(&mut self) -> NodeId {
        self.alloc(NodeKind::Finish)
    }

    /// Freezes the graph: from this point on, mutation is a logic error.
    /// Cheap — just flips a flag, since
    /// construction already only ever appended.
    pub fn freeze(mut self) -> Self {
        self.frozen = true;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
