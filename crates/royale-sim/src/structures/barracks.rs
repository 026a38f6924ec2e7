//! Barracks: trains batches of one creep archetype. Never self-destructs.

use royale_core::catalog::CreepType;
use royale_core::types::PlayerId;

#[derive(Debug, Clone, PartialEq)]
pub struct Barracks {
    pub owner: PlayerId,
    creep_type: CreepType,
    progress: u32,
    progress_max: u32,
    is_training: bool,
}

impl Barracks {
    pub fn new(owner: PlayerId, creep_type: CreepType) -> Self {
        Self {
            owner,
            creep_type,
            progress: 0,
            progress_max: creep_type.stats().build_time,
            is_training: false,
        }
    }

    pub fn creep_type(&self) -> CreepType {
        self.creep_type
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn progress_max(&self) -> u32 {
        self.progress_max
    }

    pub fn is_training(&self) -> bool {
        self.is_training
    }

    /// Begin a training run. Does nothing if one is already under way.
    pub fn start_training(&mut self) {
        if !self.is_training {
            self.is_training = true;
            self.progress = 0;
        }
    }

    /// Switch archetype. Refused (returns `false`) mid-run.
    pub fn set_creep_type(&mut self, creep_type: CreepType) -> bool {
        if self.is_training {
            return false;
        }
        self.creep_type = creep_type;
        self.progress_max = creep_type.stats().build_time;
        true
    }

    /// One training tick. `on_complete` fires once, on the tick the run
    /// finishes, with the archetype that was trained.
    pub fn act(&mut self, on_complete: impl FnOnce(CreepType)) -> bool {
        if self.is_training {
            self.progress += 1;
            if self.progress == self.progress_max {
                self.progress = 0;
                self.is_training = false;
                on_complete(self.creep_type);
            }
        }
        false
    }

    pub fn extra_tooltip_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("BARRACKS ({})", self.creep_type)];
        if self.is_training {
            lines.push(format!("Progress: {}/{}", self.progress, self.progress_max));
        }
        lines
    }
}
