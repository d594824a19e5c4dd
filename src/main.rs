#![cfg_attr(target_os = "vexos", no_main, no_std)]

#[cfg(target_os = "vexos")]
extern crate alloc;

#[cfg(target_os = "vexos")]
mod robot;

#[cfg(target_os = "vexos")]
#[vexide::main]
async fn main(peripherals: vexide::prelude::Peripherals) {
    use vexide::prelude::*;

    robot::logger::init(log::LevelFilter::Info).expect("logger installed twice");
    let robot = robot::Robot::new(peripherals).await;
    robot.compete().await;
}

#[cfg(not(target_os = "vexos"))]
fn main() {
    eprintln!("mecanum-teleop runs on the V5 brain; build and upload it with `cargo v5`");
}
