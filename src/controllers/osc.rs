// src/controllers/osc.rs
// OSC Controller
//
// Lets another machine on the network tap the scene.

use nannou_osc as osc;
use std::error::Error;
use tracing::{debug, warn};

pub const ACTIVATE_ADDR: &str = "/ballsquare/activate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OscCommand {
    Activate,
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        debug!("listening for OSC on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message) {
                    Some(command) => self.command_queue.push(command),
                    None => warn!("Unknown OSC address pattern: {}", message.addr),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub fn parse_message(message: &osc::Message) -> Option<OscCommand> {
    match message.addr.as_str() {
        ACTIVATE_ADDR => Some(OscCommand::Activate),
        _ => None,
    }
}
