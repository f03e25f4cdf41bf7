//! Sample subscribers and the demo script
//!
//! Registers callbacks of every supported arity, fires the events and
//! prints each invocation to stdout.

use crate::config::DemoConfig;
use crate::sysdata::{Mode, SysData};
use anyhow::{Context, Result};
use multicast::multicast;

multicast! {
    pub struct Callback0Args() [1];
}

multicast! {
    pub struct Callback2Args(i: i32, f: f32) [1];
}

multicast! {
    pub struct Callback3Args(i: i32, f: f32, f2: f32) [1];
}

multicast! {
    pub struct Callback4Args(i: i32, f: f32, f2: f32, f3: f32) [1];
}

multicast! {
    pub struct Callback5Args(i: i32, f: f32, f2: f32, f3: f32, f4: f32) [1];
}

static CALLBACK_0_ARGS: Callback0Args = Callback0Args::new();
static CALLBACK_2_ARGS: Callback2Args = Callback2Args::new();
static CALLBACK_3_ARGS: Callback3Args = Callback3Args::new();
static CALLBACK_4_ARGS: Callback4Args = Callback4Args::new();
static CALLBACK_5_ARGS: Callback5Args = Callback5Args::new();

pub fn callback0() {
    println!("Callback0Args:");
}

pub fn callback2(i: i32, f: f32) {
    println!("Callback2Args: {} {:.6}", i, f);
}

pub fn callback3(i: i32, f: f32, f2: f32) {
    println!("Callback3Args: {} {:.6} {:.6}", i, f, f2);
}

pub fn callback4(i: i32, f: f32, f2: f32, f3: f32) {
    println!("Callback4Args: {} {:.6} {:.6} {:.6}", i, f, f2, f3);
}

pub fn callback5(i: i32, f: f32, f2: f32, f3: f32, f4: f32) {
    println!("Callback5Args: {} {:.6} {:.6} {:.6} {:.6}", i, f, f2, f3, f4);
}

pub fn mode_callback1(mode: Mode) {
    println!("ModeCallback1: {} ({})", mode as u8, mode);
}

pub fn mode_callback2(mode: Mode) {
    println!("ModeCallback2: {} ({})", mode as u8, mode);
}

/// Run the demo script
pub fn run(config: &DemoConfig) -> Result<()> {
    let mut sys = SysData::new();

    sys.mode_changed()
        .register(mode_callback1)
        .context("Failed to register ModeCallback1")?;
    sys.mode_changed()
        .register(mode_callback2)
        .context("Failed to register ModeCallback2")?;

    for mode in &config.modes {
        sys.set_mode(*mode);
    }

    // The second unregister is a no-op
    sys.mode_changed().unregister(mode_callback1);
    sys.mode_changed().unregister(mode_callback1);

    for mode in &config.after_unregister {
        sys.set_mode(*mode);
    }

    log::debug!("Final mode: {}", sys.mode());

    if config.arity_demos {
        run_arity_demos()?;
    }

    Ok(())
}

/// Register, invoke and unregister one callback per arity
fn run_arity_demos() -> Result<()> {
    CALLBACK_0_ARGS.register(callback0)?;
    CALLBACK_0_ARGS.invoke();
    CALLBACK_0_ARGS.unregister(callback0);

    CALLBACK_2_ARGS.register(callback2)?;
    CALLBACK_2_ARGS.invoke(123, 1.23);
    CALLBACK_2_ARGS.unregister(callback2);

    CALLBACK_3_ARGS.register(callback3)?;
    CALLBACK_3_ARGS.invoke(123, 1.23, 3.21);
    CALLBACK_3_ARGS.unregister(callback3);

    CALLBACK_4_ARGS.register(callback4)?;
    CALLBACK_4_ARGS.invoke(123, 1.23, 3.21, 5.55);
    CALLBACK_4_ARGS.unregister(callback4);

    CALLBACK_5_ARGS.register(callback5)?;
    CALLBACK_5_ARGS.invoke(123, 1.23, 3.21, 5.55, 9.99);
    CALLBACK_5_ARGS.unregister(callback5);

    Ok(())
}
