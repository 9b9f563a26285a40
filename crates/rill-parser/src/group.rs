//! Scanner groups and the rule DSL.
//!
//! A group is a named, ordered list of `(pattern, action)` rules with an
//! optional parent. At scan time exactly one group is active (the top of the
//! parser's group stack); its *effective* rules are its own followed by its
//! transitive ancestors', so a child can shadow a parent rule at equal match
//! length while still inheriting everything else.
//!
//! Rules are registered through a small builder:
//!
//! ```ignore
//! registry.group_mut(normal).rule(digit.many1()).run(Parser::on_number);
//! ```
//!
//! Compilation to a DFA happens on first activation and is memoized, so a
//! parser reused across inputs compiles each group once.

use indexmap::IndexMap;

use crate::automata::dfa::Dfa;
use crate::automata::nfa::Nfa;
use crate::lexer::Parser;
use crate::pattern::Pattern;

/// A semantic action, invoked with the matched text available on the parser.
pub type Action = fn(&mut Parser);

/// Stable identifier of a defined group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) usize);

/// One `(pattern, action)` rule.
pub struct Rule {
    pub pattern: Pattern,
    pub action: Action,
}

/// The compiled form of a group: its DFA plus the action table indexed by
/// the DFA's rule tags (effective rule order).
pub(crate) struct CompiledGroup {
    pub dfa: Dfa,
    pub actions: Vec<Action>,
}

/// A named scanner group.
pub struct Group {
    name: String,
    parent: Option<GroupId>,
    rules: Vec<Rule>,
    compiled: Option<CompiledGroup>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start registering a rule; finish with [`RuleBuilder::run`].
    pub fn rule(&mut self, pattern: Pattern) -> RuleBuilder<'_> {
        RuleBuilder {
            group: self,
            pattern,
        }
    }
}

/// Pending rule registration.
pub struct RuleBuilder<'a> {
    group: &'a mut Group,
    pattern: Pattern,
}

impl RuleBuilder<'_> {
    pub fn run(self, action: Action) {
        self.group.rules.push(Rule {
            pattern: self.pattern,
            action,
        });
        // A new rule invalidates any previously compiled automaton.
        self.group.compiled = None;
    }
}

/// All defined groups, indexed by id and by name.
pub struct Registry {
    groups: Vec<Group>,
    by_name: IndexMap<String, GroupId>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            groups: Vec::new(),
            by_name: IndexMap::new(),
        }
    }

    pub fn define(&mut self, name: &str) -> GroupId {
        assert!(
            !self.by_name.contains_key(name),
            "scanner group {name:?} defined twice"
        );
        let id = GroupId(self.groups.len());
        self.groups.push(Group {
            name: name.to_owned(),
            parent: None,
            rules: Vec::new(),
            compiled: None,
        });
        self.by_name.insert(name.to_owned(), id);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<GroupId> {
        self.by_name.get(name).copied()
    }

    pub fn set_parent(&mut self, child: GroupId, parent: GroupId) {
        self.groups[child.0].parent = Some(parent);
        self.groups[child.0].compiled = None;
    }

    pub fn group_mut(&mut self, id: GroupId) -> &mut Group {
        &mut self.groups[id.0]
    }

    /// The group and its ancestors, nearest first.
    fn ancestry(&self, id: GroupId) -> Vec<GroupId> {
        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.groups[current.0].parent {
            assert!(
                chain.len() <= self.groups.len(),
                "scanner group parent cycle involving {:?}",
                self.groups[id.0].name
            );
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Compile the group's effective rule list if it is not compiled yet.
    pub(crate) fn ensure_compiled(&mut self, id: GroupId) {
        if self.groups[id.0].compiled.is_some() {
            return;
        }
        let chain = self.ancestry(id);
        let rules = || {
            chain
                .iter()
                .flat_map(|group| self.groups[group.0].rules.iter())
        };
        let nfa = Nfa::rule_union(rules().map(|rule| &rule.pattern));
        let dfa = Dfa::from_nfa(&nfa);
        let actions = rules().map(|rule| rule.action).collect();
        self.groups[id.0].compiled = Some(CompiledGroup { dfa, actions });
    }

    pub(crate) fn compiled(&self, id: GroupId) -> &CompiledGroup {
        self.groups[id.0]
            .compiled
            .as_ref()
            .unwrap_or_else(|| panic!("group {:?} activated before compilation", self.groups[id.0].name))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
