//! Block tree descriptors for the `.bky` visual program.

use std::collections::{BTreeSet, HashSet};

use crate::error::{ModelError, Result};
use crate::ids::BlockId;

/// Canvas coordinates of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Named field value such as `OP`, `TEXT` or `COMPONENT_SELECTOR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub text: String,
}

/// Element names allowed inside a `<mutation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationTag {
    Arg,
    LocalName,
    EventParam,
}

impl MutationTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arg => "arg",
            Self::LocalName => "localname",
            Self::EventParam => "eventparam",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationChild {
    pub tag: MutationTag,
    pub name: String,
}

/// Block metadata carried in a `<mutation>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mutation {
    pub attributes: Vec<(String, String)>,
    pub children: Vec<MutationChild>,
}

impl Mutation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, tag: MutationTag, name: impl Into<String>) -> Self {
        self.children.push(MutationChild {
            tag,
            name: name.into(),
        });
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A value input slot holding one expression block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueInput {
    pub name: String,
    pub block: Block,
}

/// A statement input slot holding the first block of a statement chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementInput {
    pub name: String,
    pub body: Block,
}

/// One node of the visual program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub kind: String,
    pub inline: Option<bool>,
    pub position: Option<Position>,
    pub mutation: Option<Mutation>,
    pub fields: Vec<Field>,
    pub values: Vec<ValueInput>,
    pub statements: Vec<StatementInput>,
    pub next: Option<Box<Block>>,
}

impl Block {
    pub fn new(id: BlockId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            inline: None,
            position: None,
            mutation: None,
            fields: Vec::new(),
            values: Vec::new(),
            statements: Vec::new(),
            next: None,
        }
    }

    pub fn push_field(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.fields.push(Field {
            name: name.into(),
            text: text.into(),
        });
    }

    pub fn push_value(&mut self, name: impl Into<String>, block: Block) {
        self.values.push(ValueInput {
            name: name.into(),
            block,
        });
    }

    pub fn push_statement(&mut self, name: impl Into<String>, body: Block) {
        self.statements.push(StatementInput {
            name: name.into(),
            body,
        });
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.text.as_str())
    }

    pub fn value(&self, name: &str) -> Option<&Block> {
        self.values.iter().find(|v| v.name == name).map(|v| &v.block)
    }

    pub fn statement(&self, name: &str) -> Option<&Block> {
        self.statements
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.body)
    }

    /// Attach `block` after the last block of this statement chain.
    pub fn append_next(&mut self, block: Block) {
        let mut tail = &mut self.next;
        while let Some(next) = tail {
            tail = &mut next.next;
        }
        *tail = Some(Box::new(block));
    }

    /// `head` followed by `rest` through `next` links, keeping their order.
    pub fn chain(mut head: Block, rest: impl IntoIterator<Item = Block>) -> Block {
        for block in rest {
            head.append_next(block);
        }
        head
    }

    /// This block followed by its `next` siblings.
    pub fn statement_chain(&self) -> StatementChain<'_> {
        StatementChain {
            current: Some(self),
        }
    }

    /// Every block reachable from this one, in document order.
    pub fn walk(&self) -> Blocks<'_> {
        Blocks { stack: vec![self] }
    }
}

pub struct StatementChain<'a> {
    current: Option<&'a Block>,
}

impl<'a> Iterator for StatementChain<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.current?;
        self.current = block.next.as_deref();
        Some(block)
    }
}

/// Pre-order iterator: values, then statements, then `next`.
pub struct Blocks<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.stack.pop()?;
        if let Some(next) = block.next.as_deref() {
            self.stack.push(next);
        }
        self.stack
            .extend(block.statements.iter().rev().map(|s| &s.body));
        self.stack.extend(block.values.iter().rev().map(|v| &v.block));
        Some(block)
    }
}

/// The complete block workspace of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockProgram {
    pub blocks: Vec<Block>,
}

impl BlockProgram {
    pub fn walk(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().flat_map(Block::walk)
    }

    pub fn block_count(&self) -> usize {
        self.walk().count()
    }

    /// Block ids must be unique across the whole program.
    pub fn validate_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for block in self.walk() {
            if !seen.insert(block.id) {
                return Err(ModelError::DuplicateBlockId(block.id.to_string()));
            }
        }
        Ok(())
    }

    /// Component instances named by `instance_name` mutation attributes.
    pub fn referenced_components(&self) -> BTreeSet<&str> {
        self.walk()
            .filter_map(|b| b.mutation.as_ref())
            .filter_map(|m| m.attribute("instance_name"))
            .collect()
    }

    /// Fails on the first referenced component that `known` does not contain.
    pub fn validate_references(&self, known: &[&str]) -> Result<()> {
        for name in self.referenced_components() {
            if !known.contains(&name) {
                return Err(ModelError::UnknownComponent(name.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::BlockIds;

    fn text(ids: &mut BlockIds, value: &str) -> Block {
        let mut block = Block::new(ids.next_id(), "text");
        block.push_field("TEXT", value);
        block
    }

    #[test]
    fn chain_nests_in_order() {
        let mut ids = BlockIds::new();
        let x = text(&mut ids, "X");
        let chained = Block::chain(x, [text(&mut ids, "Y"), text(&mut ids, "Z")]);
        let order: Vec<_> = chained
            .statement_chain()
            .map(|b| b.field("TEXT").unwrap_or_default())
            .collect();
        assert_eq!(order, vec!["X", "Y", "Z"]);
        let y = chained.next.as_deref().expect("Y");
        assert_eq!(y.field("TEXT"), Some("Y"));
        assert_eq!(y.next.as_deref().and_then(|z| z.field("TEXT")), Some("Z"));
    }

    #[test]
    fn chain_without_successors_is_the_head() {
        let mut ids = BlockIds::new();
        let head = text(&mut ids, "only");
        let chained = Block::chain(head.clone(), []);
        assert_eq!(chained, head);
    }

    #[test]
    fn append_next_goes_to_tail() {
        let mut ids = BlockIds::new();
        let mut head = text(&mut ids, "1");
        head.append_next(text(&mut ids, "2"));
        head.append_next(text(&mut ids, "3"));
        assert_eq!(head.statement_chain().count(), 3);
    }

    #[test]
    fn walk_visits_values_statements_then_next() {
        let mut ids = BlockIds::new();
        let mut root = Block::new(ids.next_id(), "controls_if");
        root.push_value("IF0", text(&mut ids, "cond"));
        root.push_statement("DO0", text(&mut ids, "body"));
        root.append_next(text(&mut ids, "after"));
        let program = BlockProgram { blocks: vec![root] };
        let visited: Vec<_> = program.walk().map(|b| b.id.to_string()).collect();
        assert_eq!(visited, vec!["b1", "b2", "b3", "b4"]);
        assert!(program.validate_ids().is_ok());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut ids = BlockIds::new();
        let repeated = text(&mut ids, "same");
        let program = BlockProgram {
            blocks: vec![repeated.clone(), repeated],
        };
        assert!(matches!(
            program.validate_ids(),
            Err(ModelError::DuplicateBlockId(id)) if id == "b1"
        ));
    }

    #[test]
    fn references_come_from_instance_names() {
        let mut ids = BlockIds::new();
        let mut block = Block::new(ids.next_id(), "component_event");
        block.mutation = Some(
            Mutation::new()
                .with_attribute("component_type", "Button")
                .with_attribute("instance_name", "ManualButton"),
        );
        let program = BlockProgram {
            blocks: vec![block],
        };
        assert!(program.referenced_components().contains("ManualButton"));
        assert!(program.validate_references(&["ManualButton"]).is_ok());
        assert!(program.validate_references(&["Other"]).is_err());
    }
}
