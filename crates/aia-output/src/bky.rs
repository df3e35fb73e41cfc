//! `Screen1.bky`: the block program as Blockly XML.
//!
//! Written without indentation or XML declaration. Element order inside a
//! block is fixed: mutation, fields, values, statements, next.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use aia_model::{Block, BlockProgram, Mutation};

/// Namespace of the root `<xml>` element.
pub const BLOCKLY_NS: &str = "http://www.w3.org/1999/xhtml";

pub fn render_bky(program: &BlockProgram) -> Result<String> {
    let mut xml = Writer::new(Vec::new());
    let mut root = BytesStart::new("xml");
    root.push_attribute(("xmlns", BLOCKLY_NS));
    xml.write_event(Event::Start(root))?;
    for block in &program.blocks {
        write_block(&mut xml, block)?;
    }
    xml.write_event(Event::End(BytesEnd::new("xml")))?;
    String::from_utf8(xml.into_inner()).context("block program is not valid UTF-8")
}

fn write_block<W: Write>(xml: &mut Writer<W>, block: &Block) -> Result<()> {
    let id = block.id.to_string();
    let mut start = BytesStart::new("block");
    start.push_attribute(("type", block.kind.as_str()));
    start.push_attribute(("id", id.as_str()));
    if let Some(inline) = block.inline {
        start.push_attribute(("inline", if inline { "true" } else { "false" }));
    }
    if let Some(position) = block.position {
        let x = position.x.to_string();
        let y = position.y.to_string();
        start.push_attribute(("x", x.as_str()));
        start.push_attribute(("y", y.as_str()));
    }
    xml.write_event(Event::Start(start))?;

    if let Some(mutation) = &block.mutation {
        write_mutation(xml, mutation)?;
    }
    for field in &block.fields {
        write_named(xml, "field", &field.name, |xml| {
            if !field.text.is_empty() {
                xml.write_event(Event::Text(BytesText::new(&field.text)))?;
            }
            Ok(())
        })?;
    }
    for value in &block.values {
        write_named(xml, "value", &value.name, |xml| write_block(xml, &value.block))?;
    }
    for statement in &block.statements {
        write_named(xml, "statement", &statement.name, |xml| {
            write_block(xml, &statement.body)
        })?;
    }
    if let Some(next) = &block.next {
        xml.write_event(Event::Start(BytesStart::new("next")))?;
        write_block(xml, next)?;
        xml.write_event(Event::End(BytesEnd::new("next")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("block")))?;
    Ok(())
}

fn write_mutation<W: Write>(xml: &mut Writer<W>, mutation: &Mutation) -> Result<()> {
    let mut start = BytesStart::new("mutation");
    for (name, value) in &mutation.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    if mutation.children.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }
    xml.write_event(Event::Start(start))?;
    for child in &mutation.children {
        let mut node = BytesStart::new(child.tag.as_str());
        node.push_attribute(("name", child.name.as_str()));
        xml.write_event(Event::Empty(node))?;
    }
    xml.write_event(Event::End(BytesEnd::new("mutation")))?;
    Ok(())
}

/// `<tag name="...">` around whatever `body` writes.
fn write_named<W: Write>(
    xml: &mut Writer<W>,
    tag: &str,
    name: &str,
    body: impl FnOnce(&mut Writer<W>) -> Result<()>,
) -> Result<()> {
    let mut start = BytesStart::new(tag);
    start.push_attribute(("name", name));
    xml.write_event(Event::Start(start))?;
    body(xml)?;
    xml.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aia_model::{BlockIds, MutationTag, Position};

    fn text(ids: &mut BlockIds, value: &str) -> Block {
        let mut block = Block::new(ids.next_id(), "text");
        block.push_field("TEXT", value);
        block
    }

    #[test]
    fn single_block_document() {
        let mut ids = BlockIds::new();
        let program = BlockProgram {
            blocks: vec![text(&mut ids, "hi")],
        };
        let xml = render_bky(&program).expect("render");
        insta::assert_snapshot!(xml, @r#"<xml xmlns="http://www.w3.org/1999/xhtml"><block type="text" id="b1"><field name="TEXT">hi</field></block></xml>"#);
    }

    #[test]
    fn attributes_and_mutation_children() {
        let mut ids = BlockIds::new();
        let mut event = Block::new(ids.next_id(), "component_event");
        event.position = Some(Position::new(40, 220));
        event.mutation = Some(Mutation::new().with_attribute("instance_name", "Screen1"));
        let mut get = Block::new(ids.next_id(), "lexical_variable_get");
        get.inline = Some(false);
        get.mutation = Some(Mutation::new().with_child(MutationTag::EventParam, "value"));
        get.push_field("VAR", "value");
        event.push_statement("DO", get);
        let xml = render_bky(&BlockProgram {
            blocks: vec![event],
        })
        .expect("render");
        insta::assert_snapshot!(xml, @r#"<xml xmlns="http://www.w3.org/1999/xhtml"><block type="component_event" id="b1" x="40" y="220"><mutation instance_name="Screen1"/><statement name="DO"><block type="lexical_variable_get" id="b2" inline="false"><mutation><eventparam name="value"/></mutation><field name="VAR">value</field></block></statement></block></xml>"#);
    }

    #[test]
    fn chain_nests_each_successor_in_next() {
        let mut ids = BlockIds::new();
        let x = text(&mut ids, "X");
        let chained = Block::chain(x, [text(&mut ids, "Y"), text(&mut ids, "Z")]);
        let xml = render_bky(&BlockProgram {
            blocks: vec![chained],
        })
        .expect("render");
        insta::assert_snapshot!(xml, @r#"<xml xmlns="http://www.w3.org/1999/xhtml"><block type="text" id="b1"><field name="TEXT">X</field><next><block type="text" id="b2"><field name="TEXT">Y</field><next><block type="text" id="b3"><field name="TEXT">Z</field></block></next></block></next></block></xml>"#);
    }

    #[test]
    fn empty_field_text_is_an_empty_element() {
        let mut ids = BlockIds::new();
        let xml = render_bky(&BlockProgram {
            blocks: vec![text(&mut ids, "")],
        })
        .expect("render");
        assert!(xml.contains(r#"<field name="TEXT"></field>"#));
    }
}
