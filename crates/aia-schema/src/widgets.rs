//! Component types, fixed component names and the command tables.

/// An App Inventor component type tag and the schema version it is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentType {
    pub tag: &'static str,
    pub version: u32,
}

impl ComponentType {
    const fn new(tag: &'static str, version: u32) -> Self {
        Self { tag, version }
    }
}

pub const FORM: ComponentType = ComponentType::new("Form", 31);
pub const LABEL: ComponentType = ComponentType::new("Label", 5);
pub const BUTTON: ComponentType = ComponentType::new("Button", 7);
pub const CHECK_BOX: ComponentType = ComponentType::new("CheckBox", 2);
pub const SLIDER: ComponentType = ComponentType::new("Slider", 3);
pub const LIST_PICKER: ComponentType = ComponentType::new("ListPicker", 9);
pub const VERTICAL_ARRANGEMENT: ComponentType = ComponentType::new("VerticalArrangement", 4);
pub const HORIZONTAL_ARRANGEMENT: ComponentType = ComponentType::new("HorizontalArrangement", 4);
pub const NOTIFIER: ComponentType = ComponentType::new("Notifier", 6);
pub const BLUETOOTH_CLIENT: ComponentType = ComponentType::new("BluetoothClient", 8);

// Property values used by the designer.
pub const FILL_PARENT: &str = "-2";
pub const ALIGN_CENTER: &str = "3";
pub const TEXT_ALIGN_CENTER: &str = "1";

pub const SCREEN: &str = "Screen1";
pub const TITLE_LABEL: &str = "TitleLabel";
pub const MAIN_LAYOUT: &str = "MainLayout";
pub const CONNECTION_ROW: &str = "ConnectionRow";
pub const CONNECT_PICKER: &str = "ConnectPicker";
pub const DISCONNECT_BUTTON: &str = "DisconnectButton";
pub const STATUS_LABEL: &str = "StatusLabel";
pub const MODE_LABEL: &str = "ModeLabel";
pub const MANUAL_LABEL: &str = "ManualLabel";
pub const COLOR_LAYOUT: &str = "ColorLayout";
pub const SETTINGS_LABEL: &str = "SettingsLabel";
pub const NOTIFIER_NAME: &str = "Notifier1";
pub const BLUETOOTH_NAME: &str = "BluetoothClient1";

/// Name of the procedure every handler routes commands through.
pub const SEND_COMMAND: &str = "SendCommand";
pub const SEND_COMMAND_ARG: &str = "cmd";

/// Line terminator appended to each command, as typed into a text block.
pub const COMMAND_TERMINATOR: &str = "\\n";
/// Separator between device name and address in a picker selection.
pub const SELECTION_SEPARATOR: &str = "\\n";

pub const MSG_CONNECT_FIRST: &str = "Connect to the ESP32 over Bluetooth first.";
pub const MSG_TAP_CONNECT: &str = "Tap Connect to pair with WIFILampV1.";
pub const MSG_CONNECTED_TO: &str = "Connected to ";
pub const MSG_CONNECTION_FAILED: &str = "Connection failed. Make sure the lamp is discoverable.";
pub const MSG_DISCONNECTED: &str = "Disconnected.";
pub const MSG_NOT_CONNECTED: &str = "Not connected";

/// A button that switches the lamp into one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeButton {
    pub component: &'static str,
    pub text: &'static str,
    pub command: &'static str,
}

/// Rows of mode buttons as laid out on screen.
pub const MODE_ROWS: &[(&str, &[ModeButton])] = &[
    (
        "ModeRow1",
        &[
            ModeButton {
                component: "ManualButton",
                text: "Manual",
                command: "MODE MANUAL",
            },
            ModeButton {
                component: "ChaseButton",
                text: "Chase",
                command: "MODE CHASE",
            },
        ],
    ),
    (
        "ModeRow2",
        &[
            ModeButton {
                component: "BlinkModeButton",
                text: "Blink",
                command: "MODE BLINK",
            },
            ModeButton {
                component: "FadeModeButton",
                text: "Fade",
                command: "MODE FADE",
            },
        ],
    ),
    (
        "ModeRow3",
        &[ModeButton {
            component: "RainbowModeButton",
            text: "Rainbow",
            command: "MODE RAINBOW",
        }],
    ),
];

/// Mode buttons in handler order.
pub fn mode_buttons() -> impl Iterator<Item = &'static ModeButton> {
    MODE_ROWS.iter().flat_map(|(_, buttons)| buttons.iter())
}

/// A checkbox toggling one LED channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorChannel {
    pub checkbox: &'static str,
    pub text: &'static str,
    pub on_command: &'static str,
    pub off_command: &'static str,
}

pub const COLOR_CHANNELS: &[ColorChannel] = &[
    ColorChannel {
        checkbox: "CheckBoxRed",
        text: "Red",
        on_command: "RED ON",
        off_command: "RED OFF",
    },
    ColorChannel {
        checkbox: "CheckBoxGreen",
        text: "Green",
        on_command: "GREEN ON",
        off_command: "GREEN OFF",
    },
    ColorChannel {
        checkbox: "CheckBoxBlue",
        text: "Blue",
        on_command: "BLUE ON",
        off_command: "BLUE OFF",
    },
    ColorChannel {
        checkbox: "CheckBoxWhite",
        text: "White",
        on_command: "WHITE ON",
        off_command: "WHITE OFF",
    },
];

/// Canvas placement of a column of event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerColumn {
    pub x: i32,
    pub first_y: i32,
    pub step: i32,
}

impl HandlerColumn {
    #[must_use]
    pub const fn y(&self, index: usize) -> i32 {
        self.first_y + self.step * index as i32
    }
}

pub const MODE_HANDLERS: HandlerColumn = HandlerColumn {
    x: 40,
    first_y: 640,
    step: 120,
};
pub const COLOR_HANDLERS: HandlerColumn = HandlerColumn {
    x: 600,
    first_y: 40,
    step: 140,
};
pub const SLIDER_HANDLERS: HandlerColumn = HandlerColumn {
    x: 900,
    first_y: 40,
    step: 200,
};
