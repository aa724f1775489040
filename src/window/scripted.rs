// Window stand-in for tests: replays a fixed list of events, one batch per poll.

use crate::utils::error::SurfaceError;
use crate::window::surface::FrameSurface;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedEvent {
    CloseRequested,
    Focused(bool),
    Garbage(Vec<u8>),
}

#[derive(Debug)]
pub struct ScriptedSurface {
    pub requested: (u32, u32),
    pub drawable: (u32, u32),
    pub polls: usize,
    pub presents: usize,
    pub fail_presents: bool,
    batches: VecDeque<Vec<ScriptedEvent>>,
    close_requested: bool,
}

impl ScriptedSurface {
    pub fn new(requested: (u32, u32), drawable: (u32, u32)) -> Self {
        Self {
            requested,
            drawable,
            polls: 0,
            presents: 0,
            fail_presents: false,
            batches: VecDeque::new(),
            close_requested: false,
        }
    }

    pub fn with_batches(mut self, batches: Vec<Vec<ScriptedEvent>>) -> Self {
        self.batches = batches.into();
        self
    }
}

impl FrameSurface for ScriptedSurface {
    fn drawable_size(&self) -> (u32, u32) {
        self.drawable
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn poll_events(&mut self) {
        self.polls += 1;
        if let Some(batch) = self.batches.pop_front() {
            if batch.contains(&ScriptedEvent::CloseRequested) {
                self.close_requested = true;
            }
        }
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.presents += 1;
        if self.fail_presents {
            return Err(SurfaceError::Present("surface lost".into()));
        }
        Ok(())
    }
}
