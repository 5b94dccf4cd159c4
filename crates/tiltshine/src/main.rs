//! tiltshine demo
//!
//! Mounts a shine button on a simulated sensor and sweeps it through a tilt.
//!
//! Usage: `tiltshine-demo [direct|unsupported|granted|denied|error] [horizontal|planar|wide|rotating]`

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Context};
use tiltshine::mapper::{Mapper, OrientationSample, Variant};
use tiltshine::sensors::{PermissionOutcome, SimulatedSensor};
use tiltshine::surface::{InlineStyle, NoticeLog, PseudoElement, ReadoutPanel, StaticComputedStyle};
use tiltshine::{with_layer_sizes, ButtonConfig, ShinyButton, Surface};
use tracing_subscriber::EnvFilter;

fn sensor_for(scenario: &str) -> anyhow::Result<SimulatedSensor> {
    Ok(match scenario {
        "direct" => SimulatedSensor::direct(),
        "unsupported" => SimulatedSensor::unsupported(),
        "granted" => SimulatedSensor::gated(PermissionOutcome::Granted),
        "denied" => SimulatedSensor::gated(PermissionOutcome::Denied),
        "error" => SimulatedSensor::gated(PermissionOutcome::Error("NotAllowedError".into())),
        other => bail!("unknown scenario '{other}'"),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let scenario = args.next().unwrap_or_else(|| "granted".into());
    let variant = match args.next() {
        Some(name) => Variant::from_name(&name).with_context(|| format!("unknown variant '{name}'"))?,
        None => Variant::Planar,
    };

    println!("tiltshine v{} ({scenario}, {variant:?})", tiltshine::VERSION);

    let sensor = sensor_for(&scenario)?;
    let style = Rc::new(RefCell::new(InlineStyle::new()));
    let panel = Rc::new(RefCell::new(ReadoutPanel::new()));
    let notices = Rc::new(RefCell::new(NoticeLog::new()));

    let mut config = variant.config();
    if variant == Variant::Horizontal {
        let host = StaticComputedStyle::new()
            .with(PseudoElement::Before, "350% 100%")
            .with(PseudoElement::After, "300% 100%");
        config = with_layer_sizes(config, &host);
    }
    let mapper = Mapper::new(config).context("invalid mapper config")?;

    let surface = Surface::new(style.clone(), notices.clone()).with_diagnostics(panel.clone());
    let button = ShinyButton::mount(sensor.clone(), mapper, surface, ButtonConfig::default());
    println!("label: {:?}", button.control().label);

    if button.awaiting_gesture() {
        let activation = smol::block_on(button.click());
        println!("click: {activation:?}");
    }
    println!("state: {:?}", button.state());

    for notice in notices.borrow().notices() {
        println!("notice: {}", notice.message());
    }

    for gamma in [-60.0, -45.0, -20.0, 0.0, 20.0, 45.0, 60.0] {
        sensor.dispatch(OrientationSample::tilt(15.0, gamma));
        let css = style.borrow().css_text();
        println!("gamma {gamma:>6.1}: {}", if css.is_empty() { "-" } else { css.as_str() });
    }

    sensor.dispatch(OrientationSample::unavailable());
    println!("after unavailable sample: {}", style.borrow().css_text());

    Ok(())
}
