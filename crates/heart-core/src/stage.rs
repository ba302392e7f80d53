//! Lifecycle of one presentation stage.
//!
//! `Idle -> Assembling -> Assembled -> Flattened -> Idle`. Taps only count
//! once the heart has assembled; a tap while assembling is dropped, not queued.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StagePhase {
    #[default]
    Idle,
    Assembling,
    Assembled,
    Flattened,
}

/// What the host should do in response to a tap on the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Ignored,
    Flatten,
    Close,
}

/// What the host should do when the viewport changes size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeAction {
    Nothing,
    RefitHeart,
    RespreadGrid,
}

/// Instruction and hint copy shown above and below the tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageCopy {
    pub instruction: &'static str,
    pub hint: &'static str,
}

pub const COPY_ASSEMBLING: StageCopy = StageCopy {
    instruction: "蓝紫色的祝福即将抵达，请稍候...",
    hint: "提示：爱心完成后，轻触屏幕让祝福铺满整个冬夜",
};

pub const COPY_ASSEMBLED: StageCopy = StageCopy {
    instruction: "这颗心为你跳动，点击屏幕接受全部祝福",
    hint: "提示：轻触即可让祝福遍布每个角落",
};

pub const COPY_FLATTENED: StageCopy = StageCopy {
    instruction: "冬夜已被祝福铺满，再次点击可重新开启礼物",
    hint: "提示：再点一次即可返回“确定”按钮",
};

#[derive(Clone, Debug, Default)]
pub struct Stage {
    phase: StagePhase,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StagePhase {
        self.phase
    }

    pub fn start(&mut self) {
        self.phase = StagePhase::Assembling;
    }

    /// Returns `true` if the stage was assembling and is now assembled. Late
    /// completions after a reset are ignored.
    pub fn mark_assembled(&mut self) -> bool {
        if self.phase == StagePhase::Assembling {
            self.phase = StagePhase::Assembled;
            true
        } else {
            false
        }
    }

    pub fn interact(&mut self) -> Interaction {
        match self.phase {
            StagePhase::Idle | StagePhase::Assembling => Interaction::Ignored,
            StagePhase::Assembled => {
                self.phase = StagePhase::Flattened;
                Interaction::Flatten
            }
            StagePhase::Flattened => {
                self.phase = StagePhase::Idle;
                Interaction::Close
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = StagePhase::Idle;
    }

    pub fn resize_action(&self) -> ResizeAction {
        match self.phase {
            StagePhase::Idle => ResizeAction::Nothing,
            StagePhase::Assembling | StagePhase::Assembled => ResizeAction::RefitHeart,
            StagePhase::Flattened => ResizeAction::RespreadGrid,
        }
    }

    pub fn copy(&self) -> StageCopy {
        match self.phase {
            StagePhase::Idle | StagePhase::Assembling => COPY_ASSEMBLING,
            StagePhase::Assembled => COPY_ASSEMBLED,
            StagePhase::Flattened => COPY_FLATTENED,
        }
    }
}
