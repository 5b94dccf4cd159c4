//! Style Properties
//!
//! Custom-property setter for the shine surface.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shine_mapper::Channel;

/// Applies channel values to the rendering surface
pub trait StyleSink {
    /// Set a channel's custom property to a formatted value
    fn set_property(&mut self, channel: Channel, value: &str);

    /// Drop a channel's custom property
    fn remove_property(&mut self, channel: Channel);
}

impl<T: StyleSink + ?Sized> StyleSink for Box<T> {
    fn set_property(&mut self, channel: Channel, value: &str) {
        (**self).set_property(channel, value);
    }

    fn remove_property(&mut self, channel: Channel) {
        (**self).remove_property(channel);
    }
}

impl<T: StyleSink + ?Sized> StyleSink for Rc<RefCell<T>> {
    fn set_property(&mut self, channel: Channel, value: &str) {
        self.borrow_mut().set_property(channel, value);
    }

    fn remove_property(&mut self, channel: Channel) {
        self.borrow_mut().remove_property(channel);
    }
}

/// Single inline declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Inline style declaration block.
///
/// Keeps insertion order so `css_text` is stable.
#[derive(Debug, Clone, Default)]
pub struct InlineStyle {
    properties: Vec<Property>,
    by_name: HashMap<String, usize>,
    writes: usize,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get property value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.properties.get(i))
            .map(|p| p.value.as_str())
    }

    /// Get a channel's current value
    pub fn channel(&self, channel: Channel) -> Option<&str> {
        self.get(channel.property_name())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.writes += 1;
        if let Some(&index) = self.by_name.get(name) {
            self.properties[index].value = value.to_string();
        } else {
            self.by_name.insert(name.to_string(), self.properties.len());
            self.properties.push(Property {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.by_name.remove(name)?;
        self.writes += 1;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.properties.remove(index).value)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of set/remove operations applied so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Serialize as a `style` attribute value
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|p| format!("{}: {};", p.name, p.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl StyleSink for InlineStyle {
    fn set_property(&mut self, channel: Channel, value: &str) {
        self.set(channel.property_name(), value);
    }

    fn remove_property(&mut self, channel: Channel) {
        self.remove(channel.property_name());
    }
}
