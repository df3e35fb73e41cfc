//! Component tree descriptors for the `.scm` screen definition.
//!
//! Property order is significant: the serialized mapping lists keys in the
//! order they were added, never sorted.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ModelError, Result};
use crate::ids::ComponentId;

/// Key under which child components are nested.
pub const COMPONENTS_KEY: &str = "$Components";

/// A single `name=value` component property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One visible or non-visible component on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub kind: String,
    pub version: u32,
    pub uuid: ComponentId,
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    /// Look up a property value by name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Depth-first, pre-order walk over this component and its descendants.
    pub fn iter(&self) -> Components<'_> {
        Components { stack: vec![self] }
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("$Name", &self.name)?;
        map.serialize_entry("$Type", &self.kind)?;
        map.serialize_entry("$Version", &self.version.to_string())?;
        map.serialize_entry("Uuid", &self.uuid.to_string())?;
        for property in &self.properties {
            map.serialize_entry(&property.name, &property.value)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry(COMPONENTS_KEY, &self.children)?;
        }
        map.end()
    }
}

/// The screen (`Form`) at the root of the component tree.
///
/// Unlike ordinary components the screen carries the reserved id `0`, written
/// after its properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub name: String,
    pub kind: String,
    pub version: u32,
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Screen {
    /// Every component below the screen, depth-first in document order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.children.iter().flat_map(Component::iter)
    }

    pub fn find(&self, name: &str) -> Option<&Component> {
        self.components().find(|c| c.name == name)
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.components().map(|c| c.name.as_str()).collect()
    }

    /// Check that component names are unique and distinct from the screen name.
    pub fn validate_names(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        seen.insert(self.name.as_str());
        for component in self.components() {
            if !seen.insert(component.name.as_str()) {
                return Err(ModelError::DuplicateComponentName(component.name.clone()));
            }
        }
        Ok(())
    }
}

impl Serialize for Screen {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("$Name", &self.name)?;
        map.serialize_entry("$Type", &self.kind)?;
        map.serialize_entry("$Version", &self.version.to_string())?;
        for property in &self.properties {
            map.serialize_entry(&property.name, &property.value)?;
        }
        map.serialize_entry("Uuid", &ComponentId::SCREEN.to_string())?;
        if !self.children.is_empty() {
            map.serialize_entry(COMPONENTS_KEY, &self.children)?;
        }
        map.end()
    }
}

/// Envelope stored inside the `.scm` blob.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScreenFile {
    #[serde(rename = "authURL")]
    pub auth_url: Vec<String>,
    #[serde(rename = "YaVersion")]
    pub ya_version: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Properties")]
    pub properties: Screen,
}

/// Pre-order iterator over a component subtree.
pub struct Components<'a> {
    stack: Vec<&'a Component>,
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<Self::Item> {
        let component = self.stack.pop()?;
        self.stack.extend(component.children.iter().rev());
        Some(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, uuid: u32) -> Component {
        Component {
            name: name.to_string(),
            kind: "Button".to_string(),
            version: 7,
            uuid: ComponentId::new(uuid),
            properties: vec![Property::new("Text", name)],
            children: vec![],
        }
    }

    fn row(children: Vec<Component>) -> Component {
        Component {
            name: "Row".to_string(),
            kind: "HorizontalArrangement".to_string(),
            version: 4,
            uuid: ComponentId::new(1004),
            properties: vec![Property::new("Width", "-2")],
            children,
        }
    }

    #[test]
    fn leaf_serializes_without_children_key() {
        let json = serde_json::to_string(&leaf("A", 1001)).expect("serialize");
        assert_eq!(
            json,
            r#"{"$Name":"A","$Type":"Button","$Version":"7","Uuid":"1001","Text":"A"}"#
        );
    }

    #[test]
    fn children_keep_construction_order() {
        let parent = row(vec![leaf("C", 1001), leaf("A", 1002), leaf("B", 1003)]);
        let json = serde_json::to_string(&parent).expect("serialize");
        let c = json.find(r#""$Name":"C""#).expect("C");
        let a = json.find(r#""$Name":"A""#).expect("A");
        let b = json.find(r#""$Name":"B""#).expect("B");
        assert!(c < a && a < b);
        assert_eq!(parent.child_names(), vec!["C", "A", "B"]);
    }

    #[test]
    fn properties_are_not_sorted() {
        let mut component = leaf("Z", 1001);
        component.properties = vec![Property::new("Width", "-2"), Property::new("Text", "z")];
        let json = serde_json::to_string(&component).expect("serialize");
        assert!(json.find("Width").expect("width") < json.find("Text").expect("text"));
    }

    #[test]
    fn screen_writes_uuid_after_properties() {
        let screen = Screen {
            name: "Screen1".to_string(),
            kind: "Form".to_string(),
            version: 31,
            properties: vec![Property::new("Title", "T")],
            children: vec![leaf("A", 1001)],
        };
        let json = serde_json::to_string(&screen).expect("serialize");
        assert!(json.starts_with(
            r#"{"$Name":"Screen1","$Type":"Form","$Version":"31","Title":"T","Uuid":"0","$Components":["#
        ));
    }

    #[test]
    fn walk_is_depth_first_in_document_order() {
        let screen = Screen {
            name: "Screen1".to_string(),
            kind: "Form".to_string(),
            version: 31,
            properties: vec![],
            children: vec![row(vec![leaf("A", 1001), leaf("B", 1002)]), leaf("C", 1005)],
        };
        assert_eq!(screen.component_names(), vec!["Row", "A", "B", "C"]);
        assert_eq!(screen.find("B").map(|c| c.uuid), Some(ComponentId::new(1002)));
        assert!(screen.validate_names().is_ok());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let screen = Screen {
            name: "Screen1".to_string(),
            kind: "Form".to_string(),
            version: 31,
            properties: vec![],
            children: vec![leaf("A", 1001), leaf("A", 1002)],
        };
        assert!(matches!(
            screen.validate_names(),
            Err(ModelError::DuplicateComponentName(name)) if name == "A"
        ));
    }
}
