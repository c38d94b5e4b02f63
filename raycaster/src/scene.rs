use crate::app::ApplicationState;
use crate::window::InputEvent;
use anyhow::Result;

#[derive(Clone, Debug, PartialEq)]
pub enum FrameCommand {
    Exit,
}

pub trait Scene {
    fn activation(&mut self, state: ApplicationState) -> Result<()>;
    fn deactivation(&mut self, state: ApplicationState) -> Result<()>;

    fn input(&mut self, state: ApplicationState, event: InputEvent) -> Result<Option<FrameCommand>>;
    fn frame(&mut self, state: ApplicationState, delta: f32) -> Result<Option<FrameCommand>>;
}
