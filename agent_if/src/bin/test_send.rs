//! Simple manual telemetry send test
//!
//! Sends one key-value pair and one pose to an agent on the default localhost port and prints
//! the outcome of each. An agent must be running for the sends to succeed.

use agent_if::{net::AgentParams, reporter::TelemReporter, telem::Pose};

fn main() {
    // Target the default local agent
    let reporter = TelemReporter::new(&AgentParams::default());

    print!("Sending key-value data... ");
    match reporter.send_key_value("battery_percent", 56.0) {
        true => println!("ok"),
        false => println!("failed, is the agent running?"),
    }

    print!("Sending pose... ");
    let pose = Pose::new("map", [5.0, 4.0, 0.0], [0.0, 0.0, -0.131, 0.991]);
    match reporter.send_pose(&pose) {
        true => println!("ok"),
        false => println!("failed, is the agent running?"),
    }
}
