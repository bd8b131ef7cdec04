// src/controllers/osc.rs
// OSC control surface for the overlay

use nannou_osc as osc;
use std::error::Error;

#[derive(Debug)]
pub enum OscCommand {
    SetGridType {
        value: String,
    },
    SetThickness {
        value: f32,
    },
    SetOpacity {
        value: f32,
    },
    SetColor {
        spec: String,
    },
    SetVisibility {
        setting: bool,
    },
    ToggleVisibility,
    ApplyPreset {
        name: String,
    },
    SetBackgroundColor {
        spec: String,
    },
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match message.addr.as_str() {
                    "/overlay/gridtype" => {
                        if let [osc::Type::String(value)] = &message.args[..] {
                            self.command_queue.push(OscCommand::SetGridType {
                                value: value.clone(),
                            });
                        }
                    }
                    "/overlay/thickness" => {
                        if let [osc::Type::Float(value)] = &message.args[..] {
                            self.command_queue
                                .push(OscCommand::SetThickness { value: *value });
                        }
                    }
                    "/overlay/opacity" => {
                        if let [osc::Type::Float(value)] = &message.args[..] {
                            self.command_queue
                                .push(OscCommand::SetOpacity { value: *value });
                        }
                    }
                    "/overlay/color" => {
                        if let [osc::Type::String(spec)] = &message.args[..] {
                            self.command_queue
                                .push(OscCommand::SetColor { spec: spec.clone() });
                        }
                    }
                    "/overlay/visible" => {
                        if let [osc::Type::Int(setting)] = &message.args[..] {
                            self.command_queue.push(OscCommand::SetVisibility {
                                setting: *setting != 0,
                            });
                        }
                    }
                    "/overlay/toggle" => {
                        self.command_queue.push(OscCommand::ToggleVisibility);
                    }
                    "/overlay/preset" => {
                        if let [osc::Type::String(name)] = &message.args[..] {
                            self.command_queue
                                .push(OscCommand::ApplyPreset { name: name.clone() });
                        }
                    }
                    "/background/color" => {
                        if let [osc::Type::String(spec)] = &message.args[..] {
                            self.command_queue
                                .push(OscCommand::SetBackgroundColor { spec: spec.clone() });
                        }
                    }
                    _ => (),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_port: u16) -> Result<Self, Box<dyn Error>> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    fn send(&self, addr: &str, args: Vec<osc::Type>) {
        self.sender
            .send(
                (addr.to_string(), args),
                (self.target_addr.as_str(), self.target_port),
            )
            .ok();
    }

    pub fn send_grid_type(&self, value: &str) {
        self.send(
            "/overlay/gridtype",
            vec![osc::Type::String(value.to_string())],
        );
    }

    pub fn send_thickness(&self, value: f32) {
        self.send("/overlay/thickness", vec![osc::Type::Float(value)]);
    }

    pub fn send_opacity(&self, value: f32) {
        self.send("/overlay/opacity", vec![osc::Type::Float(value)]);
    }

    pub fn send_color(&self, spec: &str) {
        self.send("/overlay/color", vec![osc::Type::String(spec.to_string())]);
    }

    pub fn send_visibility(&self, setting: bool) {
        self.send(
            "/overlay/visible",
            vec![osc::Type::Int(if setting { 1 } else { 0 })],
        );
    }

    pub fn send_toggle_visibility(&self) {
        self.send("/overlay/toggle", vec![]);
    }

    pub fn send_preset(&self, name: &str) {
        self.send("/overlay/preset", vec![osc::Type::String(name.to_string())]);
    }

    pub fn send_background_color(&self, spec: &str) {
        self.send(
            "/background/color",
            vec![osc::Type::String(spec.to_string())],
        );
    }
}
