//! Block program for `Screen1`: the command procedure and every event handler.

use aia_model::{Block, BlockProgram, Position};
use aia_schema::effects::{Direction, EFFECT_SLIDERS, EffectSlider};
use aia_schema::widgets::{
    self, BLUETOOTH_CLIENT, BLUETOOTH_NAME, BUTTON, CHECK_BOX, COLOR_CHANNELS, COLOR_HANDLERS,
    COMMAND_TERMINATOR, CONNECT_PICKER, DISCONNECT_BUTTON, FORM, LABEL, LIST_PICKER,
    MODE_HANDLERS, MSG_CONNECT_FIRST, MSG_CONNECTED_TO, MSG_CONNECTION_FAILED, MSG_DISCONNECTED,
    MSG_TAP_CONNECT, NOTIFIER, NOTIFIER_NAME, SCREEN, SELECTION_SEPARATOR, SEND_COMMAND,
    SEND_COMMAND_ARG, SLIDER, SLIDER_HANDLERS, STATUS_LABEL,
};

use crate::blocks::{ArithmeticOp, BlockFactory, CompareOp};

const THUMB_POSITION: &str = "thumbPosition";
const SLIDER_VALUE: &str = "sliderValue";
const CHECKBOX_VALUE: &str = "value";

/// Build the full program with a fresh id counter.
pub fn build_program() -> BlockProgram {
    build_program_with(&mut BlockFactory::new())
}

pub fn build_program_with(factory: &mut BlockFactory) -> BlockProgram {
    let mut blocks = vec![
        send_command_procedure(factory),
        screen_initialize(factory),
        before_picking(factory),
        after_picking(factory),
        disconnect_click(factory),
    ];
    for (index, button) in widgets::mode_buttons().enumerate() {
        let command = factory.text(button.command);
        let body = send_command(factory, command);
        blocks.push(factory.component_event(
            BUTTON,
            button.component,
            "Click",
            Position::new(MODE_HANDLERS.x, MODE_HANDLERS.y(index)),
            body,
        ));
    }
    for (index, channel) in COLOR_CHANNELS.iter().enumerate() {
        let on = factory.text(channel.on_command);
        let on = send_command(factory, on);
        let off = factory.text(channel.off_command);
        let off = send_command(factory, off);
        let checked = factory.event_param(CHECKBOX_VALUE);
        let body = factory.if_else(checked, on, Some(off));
        blocks.push(factory.component_event(
            CHECK_BOX,
            channel.checkbox,
            "Changed",
            Position::new(COLOR_HANDLERS.x, COLOR_HANDLERS.y(index)),
            body,
        ));
    }
    for (index, slider) in EFFECT_SLIDERS.iter().enumerate() {
        let position = Position::new(SLIDER_HANDLERS.x, SLIDER_HANDLERS.y(index));
        blocks.push(slider_changed(factory, slider, position));
    }
    BlockProgram { blocks }
}

/// `call SendCommand(cmd)`.
fn send_command(factory: &mut BlockFactory, command: Block) -> Block {
    factory.call_procedure(SEND_COMMAND, &[SEND_COMMAND_ARG], vec![command])
}

fn show_alert(factory: &mut BlockFactory, message: Block) -> Block {
    factory.call_method(NOTIFIER_NAME, NOTIFIER, "ShowAlert", vec![message])
}

fn set_status(factory: &mut BlockFactory, text: Block) -> Block {
    factory.set_property(STATUS_LABEL, LABEL, "Text", text)
}

fn set_status_text(factory: &mut BlockFactory, text: &str) -> Block {
    let literal = factory.text(text);
    set_status(factory, literal)
}

fn alert_text(factory: &mut BlockFactory, text: &str) -> Block {
    let literal = factory.text(text);
    show_alert(factory, literal)
}

fn send_command_procedure(factory: &mut BlockFactory) -> Block {
    factory.define_procedure(
        SEND_COMMAND,
        &[SEND_COMMAND_ARG],
        Position::new(40, 20),
        |factory| {
            let connected = factory.get_property(BLUETOOTH_NAME, BLUETOOTH_CLIENT, "IsConnected");
            let cmd = factory.variable(SEND_COMMAND_ARG);
            let terminator = factory.text(COMMAND_TERMINATOR);
            let line = factory.text_join(vec![cmd, terminator]);
            let send = factory.call_method(BLUETOOTH_NAME, BLUETOOTH_CLIENT, "SendText", vec![line]);
            let alert = alert_text(factory, MSG_CONNECT_FIRST);
            factory.if_else(connected, send, Some(alert))
        },
    )
}

fn screen_initialize(factory: &mut BlockFactory) -> Block {
    let status = set_status_text(factory, MSG_TAP_CONNECT);
    let mut labels = Vec::new();
    for slider in EFFECT_SLIDERS {
        let text = factory.text(&slider.default_label_text());
        labels.push(factory.set_property(slider.label, LABEL, "Text", text));
    }
    let body = Block::chain(status, labels);
    factory.component_event(FORM, SCREEN, "Initialize", Position::new(40, 220), body)
}

fn before_picking(factory: &mut BlockFactory) -> Block {
    let devices = factory.get_property(BLUETOOTH_NAME, BLUETOOTH_CLIENT, "AddressesAndNames");
    let body = factory.set_property(CONNECT_PICKER, LIST_PICKER, "Elements", devices);
    factory.component_event(
        LIST_PICKER,
        CONNECT_PICKER,
        "BeforePicking",
        Position::new(320, 20),
        body,
    )
}

/// Item `index` of the picker selection split on the name/address separator.
fn selection_part(factory: &mut BlockFactory, index: i64) -> Block {
    let selection = factory.get_property(CONNECT_PICKER, LIST_PICKER, "Selection");
    let separator = factory.text(SELECTION_SEPARATOR);
    let parts = factory.text_split(selection, separator);
    factory.select_item(parts, index)
}

fn connected_message(factory: &mut BlockFactory) -> Block {
    let prefix = factory.text(MSG_CONNECTED_TO);
    let device_name = selection_part(factory, 1);
    factory.text_join(vec![prefix, device_name])
}

fn after_picking(factory: &mut BlockFactory) -> Block {
    let selection = factory.get_property(CONNECT_PICKER, LIST_PICKER, "Selection");
    let empty = factory.text("");
    let picked = factory.compare(CompareOp::Neq, selection, empty);

    let address = selection_part(factory, 2);
    let connect = factory.call_method(BLUETOOTH_NAME, BLUETOOTH_CLIENT, "Connect", vec![address]);

    let status = connected_message(factory);
    let status = set_status(factory, status);
    let alert = connected_message(factory);
    let alert = show_alert(factory, alert);
    let success = Block::chain(status, [alert]);

    let failure_status = set_status_text(factory, MSG_CONNECTION_FAILED);
    let failure_alert = alert_text(factory, MSG_CONNECTION_FAILED);
    let failure = Block::chain(failure_status, [failure_alert]);

    let outcome = factory.if_else(connect, success, Some(failure));
    let body = factory.if_else(picked, outcome, None);
    factory.component_event(
        LIST_PICKER,
        CONNECT_PICKER,
        "AfterPicking",
        Position::new(320, 200),
        body,
    )
}

fn disconnect_click(factory: &mut BlockFactory) -> Block {
    let disconnect = factory.call_method(BLUETOOTH_NAME, BLUETOOTH_CLIENT, "Disconnect", Vec::new());
    let mut rest = vec![set_status_text(factory, MSG_DISCONNECTED)];
    for channel in COLOR_CHANNELS {
        let unchecked = factory.boolean(false);
        rest.push(factory.set_property(channel.checkbox, CHECK_BOX, "Checked", unchecked));
    }
    rest.push(alert_text(factory, MSG_DISCONNECTED));
    let body = Block::chain(disconnect, rest);
    factory.component_event(
        BUTTON,
        DISCONNECT_BUTTON,
        "Click",
        Position::new(40, 420),
        body,
    )
}

/// `round(base ∓ range × thumbPosition / 100)`, mirroring the design-time mapping.
fn slider_expression(factory: &mut BlockFactory, slider: &EffectSlider) -> Block {
    let thumb = factory.event_param(THUMB_POSITION);
    let range = factory.number(i64::from(slider.range));
    let scaled = factory.arithmetic(ArithmeticOp::Multiply, range, thumb);
    let hundred = factory.number(100);
    let delta = factory.arithmetic(ArithmeticOp::Divide, scaled, hundred);
    let base = factory.number(i64::from(slider.base));
    let op = match slider.direction {
        Direction::Decreasing => ArithmeticOp::Minus,
        Direction::Increasing => ArithmeticOp::Add,
    };
    let value = factory.arithmetic(op, base, delta);
    factory.round(value)
}

fn slider_changed(factory: &mut BlockFactory, slider: &EffectSlider, position: Position) -> Block {
    let value = slider_expression(factory, slider);

    let mut parts = vec![factory.text(slider.prefix), factory.variable(SLIDER_VALUE)];
    if !slider.suffix.is_empty() {
        parts.push(factory.text(slider.suffix));
    }
    let label_text = factory.text_join(parts);
    let set_label = factory.set_property(slider.label, LABEL, "Text", label_text);

    let prefix = factory.text(&slider.command_prefix());
    let current = factory.variable(SLIDER_VALUE);
    let command = factory.text_join(vec![prefix, current]);
    let send = send_command(factory, command);

    let body = Block::chain(set_label, [send]);
    let local = factory.local_declaration(SLIDER_VALUE, value, body);
    factory.component_event(SLIDER, slider.slider, "PositionChanged", position, local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handlers_appear_in_program_order() {
        let program = build_program();
        let kinds: Vec<_> = program.blocks.iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(kinds[0], "procedures_defnoreturn");
        assert!(kinds[1..].iter().all(|k| *k == "component_event"));
        assert_eq!(program.blocks.len(), 5 + 5 + 4 + 5);
    }

    #[test]
    fn initialize_chains_status_then_labels() {
        let mut factory = BlockFactory::new();
        let init = screen_initialize(&mut factory);
        let body = init.statement("DO").expect("body");
        let targets: Vec<_> = body
            .statement_chain()
            .filter_map(|b| b.mutation.as_ref())
            .filter_map(|m| m.attribute("instance_name"))
            .collect();
        assert_eq!(
            targets,
            vec![
                "StatusLabel",
                "BlinkLabel",
                "ChaseLabel",
                "FadeLabel",
                "RainbowLabel",
                "TwinkleLabel"
            ]
        );
    }

    #[test]
    fn slider_expression_follows_direction() {
        let mut factory = BlockFactory::new();
        let blink = slider_expression(&mut factory, &EFFECT_SLIDERS[0]);
        let fade = slider_expression(&mut factory, &EFFECT_SLIDERS[2]);
        let op = |b: &Block| {
            b.value("NUM")
                .and_then(|inner| inner.field("OP"))
                .map(str::to_string)
        };
        assert_eq!(op(&blink).as_deref(), Some("MINUS"));
        assert_eq!(op(&fade).as_deref(), Some("ADD"));
    }

    #[test]
    fn thumb_position_is_numbered_before_the_range() {
        let mut factory = BlockFactory::new();
        let rounded = slider_expression(&mut factory, &EFFECT_SLIDERS[0]);
        let multiply = rounded
            .value("NUM")
            .and_then(|sum| sum.value("B"))
            .and_then(|divide| divide.value("A"))
            .expect("range times thumb");
        let range = multiply.value("A").expect("range");
        let thumb = multiply.value("B").expect("thumb");
        assert_eq!(range.field("NUM"), Some("1950"));
        assert_eq!(thumb.field("VAR"), Some(THUMB_POSITION));
        assert_eq!(thumb.id.to_string(), "b1");
        assert_eq!(range.id.to_string(), "b2");
    }

    #[test]
    fn suffix_adds_a_third_join_item() {
        let mut factory = BlockFactory::new();
        let blink = slider_changed(&mut factory, &EFFECT_SLIDERS[0], Position::new(0, 0));
        let fade = slider_changed(&mut factory, &EFFECT_SLIDERS[2], Position::new(0, 0));
        let join_items = |event: &Block| {
            event
                .statement("DO")
                .and_then(|local| local.statement("STACK"))
                .and_then(|set| set.value("VALUE"))
                .and_then(|join| join.mutation.as_ref())
                .and_then(|m| m.attribute("items"))
                .map(str::to_string)
        };
        assert_eq!(join_items(&blink).as_deref(), Some("3"));
        assert_eq!(join_items(&fade).as_deref(), Some("2"));
    }

    #[test]
    fn program_ids_are_unique() {
        assert!(build_program().validate_ids().is_ok());
    }
}
