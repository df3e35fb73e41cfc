//! Component tree for `Screen1`.

use aia_model::{Component, ComponentIds, Property, Screen, ScreenFile};
use aia_schema::effects::{EFFECT_SLIDERS, EffectSlider, SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN};
use aia_schema::project::{APP_TITLE, AUTH_URL, SCM_SOURCE, SCREEN_PROPERTIES, YA_VERSION};
use aia_schema::widgets::{
    ALIGN_CENTER, BLUETOOTH_CLIENT, BLUETOOTH_NAME, BUTTON, CHECK_BOX, COLOR_CHANNELS,
    COLOR_LAYOUT, CONNECT_PICKER, CONNECTION_ROW, ComponentType, DISCONNECT_BUTTON, FILL_PARENT,
    FORM, HORIZONTAL_ARRANGEMENT, LABEL, LIST_PICKER, MAIN_LAYOUT, MANUAL_LABEL, MODE_LABEL,
    MODE_ROWS, MSG_NOT_CONNECTED, NOTIFIER, NOTIFIER_NAME, SCREEN, SETTINGS_LABEL, SLIDER,
    STATUS_LABEL, TEXT_ALIGN_CENTER, TITLE_LABEL, VERTICAL_ARRANGEMENT,
};

/// Creates components, issuing one id per call in call order.
#[derive(Debug, Default)]
pub struct ComponentBuilder {
    ids: ComponentIds,
}

impl ComponentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component(
        &mut self,
        name: &str,
        component_type: ComponentType,
        properties: &[(&str, &str)],
        children: Vec<Component>,
    ) -> Component {
        Component {
            name: name.to_string(),
            kind: component_type.tag.to_string(),
            version: component_type.version,
            uuid: self.ids.next_id(),
            properties: properties
                .iter()
                .map(|(key, value)| Property::new(*key, *value))
                .collect(),
            children,
        }
    }

    pub fn leaf(
        &mut self,
        name: &str,
        component_type: ComponentType,
        properties: &[(&str, &str)],
    ) -> Component {
        self.component(name, component_type, properties, Vec::new())
    }

    pub fn last_id(&self) -> u32 {
        self.ids.last()
    }
}

/// Build the complete `.scm` envelope.
pub fn build_screen_file() -> ScreenFile {
    ScreenFile {
        auth_url: AUTH_URL.iter().map(ToString::to_string).collect(),
        ya_version: YA_VERSION.to_string(),
        source: SCM_SOURCE.to_string(),
        properties: build_screen(&mut ComponentBuilder::new()),
    }
}

pub fn build_screen(builder: &mut ComponentBuilder) -> Screen {
    let main_layout = main_layout(builder);
    let notifier = builder.leaf(NOTIFIER_NAME, NOTIFIER, &[]);
    let bluetooth = builder.leaf(BLUETOOTH_NAME, BLUETOOTH_CLIENT, &[("Enabled", "True")]);

    Screen {
        name: SCREEN.to_string(),
        kind: FORM.tag.to_string(),
        version: FORM.version,
        properties: SCREEN_PROPERTIES
            .iter()
            .map(|(key, value)| Property::new(*key, *value))
            .collect(),
        children: vec![main_layout, notifier, bluetooth],
    }
}

fn main_layout(builder: &mut ComponentBuilder) -> Component {
    let mut children = Vec::new();
    children.push(builder.leaf(
        TITLE_LABEL,
        LABEL,
        &[
            ("Text", APP_TITLE),
            ("FontSize", "20"),
            ("TextAlignment", TEXT_ALIGN_CENTER),
        ],
    ));
    children.push(connection_row(builder));
    children.push(builder.leaf(
        STATUS_LABEL,
        LABEL,
        &[("Text", MSG_NOT_CONNECTED), ("Width", FILL_PARENT)],
    ));
    children.push(section_label(builder, MODE_LABEL, "Modes"));
    for (row_name, buttons) in MODE_ROWS {
        let row_children = buttons
            .iter()
            .map(|button| builder.leaf(button.component, BUTTON, &[("Text", button.text)]))
            .collect();
        children.push(builder.component(
            row_name,
            HORIZONTAL_ARRANGEMENT,
            &[("Width", FILL_PARENT)],
            row_children,
        ));
    }
    children.push(section_label(builder, MANUAL_LABEL, "Manual Colors"));
    children.push(color_layout(builder));
    children.push(section_label(builder, SETTINGS_LABEL, "Effect Settings"));
    for slider in EFFECT_SLIDERS {
        children.push(slider_layout(builder, slider));
    }

    builder.component(
        MAIN_LAYOUT,
        VERTICAL_ARRANGEMENT,
        &[("AlignHorizontal", ALIGN_CENTER), ("Width", FILL_PARENT)],
        children,
    )
}

fn connection_row(builder: &mut ComponentBuilder) -> Component {
    let picker = builder.leaf(
        CONNECT_PICKER,
        LIST_PICKER,
        &[("Text", "Connect"), ("Width", FILL_PARENT)],
    );
    let disconnect = builder.leaf(
        DISCONNECT_BUTTON,
        BUTTON,
        &[("Text", "Disconnect"), ("Width", FILL_PARENT)],
    );
    builder.component(
        CONNECTION_ROW,
        HORIZONTAL_ARRANGEMENT,
        &[("AlignHorizontal", ALIGN_CENTER), ("Width", FILL_PARENT)],
        vec![picker, disconnect],
    )
}

fn section_label(builder: &mut ComponentBuilder, name: &str, text: &str) -> Component {
    builder.leaf(name, LABEL, &[("Text", text), ("FontBold", "True")])
}

fn color_layout(builder: &mut ComponentBuilder) -> Component {
    let checkboxes = COLOR_CHANNELS
        .iter()
        .map(|channel| {
            builder.leaf(
                channel.checkbox,
                CHECK_BOX,
                &[("Text", channel.text), ("Checked", "False")],
            )
        })
        .collect();
    builder.component(
        COLOR_LAYOUT,
        VERTICAL_ARRANGEMENT,
        &[("Width", FILL_PARENT)],
        checkboxes,
    )
}

fn slider_layout(builder: &mut ComponentBuilder, slider: &EffectSlider) -> Component {
    let text = slider.default_label_text();
    let label = builder.leaf(slider.label, LABEL, &[("Text", text.as_str())]);
    let max = SLIDER_MAX.to_string();
    let min = SLIDER_MIN.to_string();
    let thumb = SLIDER_DEFAULT.to_string();
    let control = builder.leaf(
        slider.slider,
        SLIDER,
        &[
            ("MaxValue", max.as_str()),
            ("MinValue", min.as_str()),
            ("ThumbPosition", thumb.as_str()),
            ("Width", FILL_PARENT),
        ],
    );
    builder.component(
        &slider.layout_name(),
        VERTICAL_ARRANGEMENT,
        &[("Width", FILL_PARENT)],
        vec![label, control],
    )
}
