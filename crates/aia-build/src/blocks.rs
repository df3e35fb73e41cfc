//! Typed constructors for the block kinds used by the program.
//!
//! Every constructor takes its child blocks by value, so a child is owned by
//! exactly one parent and ids never repeat. Ids follow issue order: most
//! children are built by the caller before their parent, while top-level
//! definitions and list selections take their id before their contents.

use aia_model::{Block, BlockIds, Mutation, MutationTag, Position};
use aia_schema::ComponentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Minus,
    Multiply,
    Divide,
}

impl ArithmeticOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Neq,
}

impl CompareOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neq => "NEQ",
        }
    }
}

/// Issues blocks with ids from a counter owned by one build run.
#[derive(Debug, Default)]
pub struct BlockFactory {
    ids: BlockIds,
}

impl BlockFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issued(&self) -> u32 {
        self.ids.issued()
    }

    fn block(&mut self, kind: &str) -> Block {
        Block::new(self.ids.next_id(), kind)
    }

    fn inline_block(&mut self, kind: &str) -> Block {
        let mut block = self.block(kind);
        block.inline = Some(false);
        block
    }

    pub fn text(&mut self, text: &str) -> Block {
        let mut block = self.block("text");
        block.push_field("TEXT", text);
        block
    }

    pub fn number(&mut self, value: i64) -> Block {
        let mut block = self.block("math_number");
        block.push_field("NUM", value.to_string());
        block
    }

    pub fn boolean(&mut self, value: bool) -> Block {
        let mut block = self.block("logic_boolean");
        block.push_field("BOOL", if value { "TRUE" } else { "FALSE" });
        block
    }

    pub fn arithmetic(&mut self, op: ArithmeticOp, left: Block, right: Block) -> Block {
        let mut block = self.block("math_arithmetic");
        block.push_field("OP", op.as_str());
        block.push_value("A", left);
        block.push_value("B", right);
        block
    }

    pub fn round(&mut self, operand: Block) -> Block {
        let mut block = self.block("math_round");
        block.push_field("OP", "ROUND");
        block.push_value("NUM", operand);
        block
    }

    pub fn compare(&mut self, op: CompareOp, left: Block, right: Block) -> Block {
        let mut block = self.block("logic_compare");
        block.push_field("OP", op.as_str());
        block.push_value("A", left);
        block.push_value("B", right);
        block
    }

    /// Read a local or procedure variable.
    pub fn variable(&mut self, name: &str) -> Block {
        let mut block = self.block("lexical_variable_get");
        block.push_field("VAR", name);
        block
    }

    /// Read an event handler parameter.
    pub fn event_param(&mut self, name: &str) -> Block {
        let mut block = self.block("lexical_variable_get");
        block.mutation = Some(Mutation::new().with_child(MutationTag::EventParam, name));
        block.push_field("VAR", name);
        block
    }

    pub fn local_declaration(&mut self, name: &str, initial: Block, body: Block) -> Block {
        let mut block = self.inline_block("local_declaration_statement");
        block.mutation = Some(Mutation::new().with_child(MutationTag::LocalName, name));
        block.push_field("VAR0", name);
        block.push_value("DECL0", initial);
        block.push_statement("STACK", body);
        block
    }

    pub fn set_property(
        &mut self,
        instance: &str,
        component_type: ComponentType,
        property: &str,
        value: Block,
    ) -> Block {
        let mut block = self.property_block(instance, component_type, property, "set");
        block.push_value("VALUE", value);
        block
    }

    pub fn get_property(
        &mut self,
        instance: &str,
        component_type: ComponentType,
        property: &str,
    ) -> Block {
        self.property_block(instance, component_type, property, "get")
    }

    fn property_block(
        &mut self,
        instance: &str,
        component_type: ComponentType,
        property: &str,
        set_or_get: &str,
    ) -> Block {
        let mut block = self.inline_block("component_set_get");
        block.mutation = Some(
            Mutation::new()
                .with_attribute("component_type", component_type.tag)
                .with_attribute("set_or_get", set_or_get)
                .with_attribute("property_name", property)
                .with_attribute("is_generic", "false")
                .with_attribute("instance_name", instance),
        );
        block.push_field("COMPONENT_SELECTOR", instance);
        block.push_field("PROP", property);
        block
    }

    pub fn call_method(
        &mut self,
        instance: &str,
        component_type: ComponentType,
        method: &str,
        args: Vec<Block>,
    ) -> Block {
        let mut block = self.inline_block("component_method");
        block.mutation = Some(
            Mutation::new()
                .with_attribute("component_type", component_type.tag)
                .with_attribute("method_name", method)
                .with_attribute("is_generic", "false")
                .with_attribute("instance_name", instance),
        );
        block.push_field("COMPONENT_SELECTOR", instance);
        for (index, arg) in args.into_iter().enumerate() {
            block.push_value(format!("ARG{index}"), arg);
        }
        block
    }

    pub fn text_join(&mut self, items: Vec<Block>) -> Block {
        let mut block = self.inline_block("text_join");
        block.mutation = Some(Mutation::new().with_attribute("items", items.len().to_string()));
        for (index, item) in items.into_iter().enumerate() {
            block.push_value(format!("ADD{index}"), item);
        }
        block
    }

    pub fn text_split(&mut self, text: Block, at: Block) -> Block {
        let mut block = self.inline_block("text_split");
        block.mutation = Some(Mutation::new().with_attribute("mode", "SPLIT"));
        block.push_field("OP", "SPLIT");
        block.push_value("TEXT", text);
        block.push_value("AT", at);
        block
    }

    /// One-based list item selection. The index literal is numbered after
    /// the selection block.
    pub fn select_item(&mut self, list: Block, index: i64) -> Block {
        let mut block = self.block("lists_select_item");
        let position = self.number(index);
        block.push_value("LIST", list);
        block.push_value("NUM", position);
        block
    }

    pub fn if_else(&mut self, condition: Block, then: Block, otherwise: Option<Block>) -> Block {
        let mut block = self.inline_block("controls_if");
        if otherwise.is_some() {
            block.mutation = Some(Mutation::new().with_attribute("else", "1"));
        }
        block.push_value("IF0", condition);
        block.push_statement("DO0", then);
        if let Some(otherwise) = otherwise {
            block.push_statement("ELSE", otherwise);
        }
        block
    }

    pub fn call_procedure(&mut self, name: &str, params: &[&str], args: Vec<Block>) -> Block {
        let mut block = self.inline_block("procedures_callnoreturn");
        let mutation = params
            .iter()
            .fold(Mutation::new().with_attribute("name", name), |m, param| {
                m.with_child(MutationTag::Arg, *param)
            });
        block.mutation = Some(mutation);
        block.push_field("PROCNAME", name);
        for (index, arg) in args.into_iter().enumerate() {
            block.push_value(format!("ARG{index}"), arg);
        }
        block
    }

    /// Top-level procedure definition. Its id is issued before the body's.
    pub fn define_procedure(
        &mut self,
        name: &str,
        params: &[&str],
        position: Position,
        body: impl FnOnce(&mut Self) -> Block,
    ) -> Block {
        let mut block = self.block("procedures_defnoreturn");
        block.position = Some(position);
        let mutation = params.iter().fold(Mutation::new(), |m, param| {
            m.with_child(MutationTag::Arg, *param)
        });
        block.mutation = Some(mutation);
        block.push_field("NAME", name);
        for (index, param) in params.iter().enumerate() {
            block.push_field(format!("VAR{index}"), *param);
        }
        let stack = body(self);
        block.push_statement("STACK", stack);
        block
    }

    pub fn component_event(
        &mut self,
        component_type: ComponentType,
        instance: &str,
        event: &str,
        position: Position,
        body: Block,
    ) -> Block {
        let mut block = self.block("component_event");
        block.position = Some(position);
        block.mutation = Some(
            Mutation::new()
                .with_attribute("component_type", component_type.tag)
                .with_attribute("is_generic", "false")
                .with_attribute("instance_name", instance)
                .with_attribute("event_name", event),
        );
        block.push_field("COMPONENT_SELECTOR", instance);
        block.push_statement("DO", body);
        block
    }
}
