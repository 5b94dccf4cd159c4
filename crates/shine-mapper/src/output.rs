//! Visual Output
//!
//! Output channels and the values computed for one sample.

use crate::format::Unit;

/// Logical output channel on the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    ShinePositionX,
    ShinePositionY,
    RotateX,
    RotateY,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::ShinePositionX,
        Channel::ShinePositionY,
        Channel::RotateX,
        Channel::RotateY,
    ];

    /// CSS custom property carrying this channel
    pub fn property_name(&self) -> &'static str {
        match self {
            Self::ShinePositionX => "--shine-position-x",
            Self::ShinePositionY => "--shine-position-y",
            Self::RotateX => "--rotate-x",
            Self::RotateY => "--rotate-y",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Self::ShinePositionX | Self::ShinePositionY => Unit::Percent,
            Self::RotateX | Self::RotateY => Unit::Degrees,
        }
    }
}

/// Values computed from one orientation sample.
///
/// Only channels enabled in the mapper config are present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisualOutput {
    pub shine_x: Option<f64>,
    pub shine_y: Option<f64>,
    pub rotate_x: Option<f64>,
    pub rotate_y: Option<f64>,
}

impl VisualOutput {
    pub fn get(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::ShinePositionX => self.shine_x,
            Channel::ShinePositionY => self.shine_y,
            Channel::RotateX => self.rotate_x,
            Channel::RotateY => self.rotate_y,
        }
    }

    /// Produced channels in surface order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        Channel::ALL
            .into_iter()
            .filter_map(|channel| self.get(channel).map(|value| (channel, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_properties() {
        let names: Vec<_> = Channel::ALL.iter().map(|c| c.property_name()).collect();
        assert_eq!(
            names,
            ["--shine-position-x", "--shine-position-y", "--rotate-x", "--rotate-y"]
        );
        assert_eq!(Channel::RotateY.unit(), Unit::Degrees);
    }

    #[test]
    fn test_iter_skips_absent() {
        let output = VisualOutput {
            shine_x: Some(12.0),
            rotate_y: Some(-3.0),
            ..Default::default()
        };

        let produced: Vec<_> = output.iter().collect();
        assert_eq!(produced, vec![(Channel::ShinePositionX, 12.0), (Channel::RotateY, -3.0)]);
        assert!(VisualOutput::default().is_empty());
    }
}
