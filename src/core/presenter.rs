use super::constants::OVERLAY_SLIDE_PX;
use super::stages::StageTable;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn between(from: usize, to: usize) -> Self {
        if to >= from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Forward scrolling brings content in from the left and pushes the old
    /// content out to the right; backward scrolling mirrors it.
    pub fn enter_side(self) -> Side {
        match self {
            Direction::Forward => Side::Left,
            Direction::Backward => Side::Right,
        }
    }

    pub fn exit_side(self) -> Side {
        match self {
            Direction::Forward => Side::Right,
            Direction::Backward => Side::Left,
        }
    }
}

/// Opacity and horizontal offset of a content block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPose {
    pub opacity: f32,
    pub offset_px: f32,
}

impl LayerPose {
    pub const SHOWN: LayerPose = LayerPose {
        opacity: 1.0,
        offset_px: 0.0,
    };

    fn hidden_at(side: Side) -> Self {
        LayerPose {
            opacity: 0.0,
            offset_px: side.sign() * OVERLAY_SLIDE_PX,
        }
    }

    fn lerp(self, end: LayerPose, t: f32) -> Self {
        LayerPose {
            opacity: self.opacity + (end.opacity - self.opacity) * t,
            offset_px: self.offset_px + (end.offset_px - self.offset_px) * t,
        }
    }
}

/// A transition eases both blocks from their start poses: `from` toward the
/// exit side, `to` toward fully shown. Interrupted transitions start from
/// wherever the blocks were, so nothing jumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayState {
    Idle,
    Showing(usize),
    Transitioning {
        from: usize,
        to: usize,
        elapsed: f32,
        from_start: LayerPose,
        to_start: LayerPose,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayEvent {
    Exit { stage: usize, toward: Side },
    Enter { stage: usize, from: Side },
    Settled { stage: usize },
}

/// Per-frame styling of one stage's content block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayLayer {
    pub stage: usize,
    pub opacity: f32,
    pub offset_px: f32,
    pub interactive: bool,
}

/// Request for the page's scroll-to-element helper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub anchor: String,
}

/// Close approximation of the cubic-bezier(0.16, 1, 0.3, 1) used for the
/// stage cross-fade.
#[inline]
pub fn ease_out_expo(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

pub type OverlayEvents = SmallVec<[OverlayEvent; 2]>;

pub struct OverlayPresenter {
    state: OverlayState,
    stage_count: usize,
    duration_sec: f32,
}

impl OverlayPresenter {
    pub fn new(stage_count: usize, duration_sec: f32) -> Self {
        let state = if stage_count == 0 {
            OverlayState::Idle
        } else {
            OverlayState::Showing(0)
        };
        Self {
            state,
            stage_count,
            duration_sec: duration_sec.max(0.0),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Stage whose content is (or is becoming) visible.
    pub fn shown(&self) -> Option<usize> {
        match self.state {
            OverlayState::Idle => None,
            OverlayState::Showing(i) => Some(i),
            OverlayState::Transitioning { to, .. } => Some(to),
        }
    }

    /// The single stage that accepts pointer/keyboard input. Outgoing content
    /// loses it the moment a transition starts.
    pub fn interactive_stage(&self) -> Option<usize> {
        self.shown()
    }

    pub fn is_interactive(&self, stage: usize) -> bool {
        self.interactive_stage() == Some(stage)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, OverlayState::Transitioning { .. })
    }

    /// React to a newly resolved stage. Re-presenting the shown stage is a
    /// no-op; unknown indices are ignored.
    pub fn present(&mut self, index: usize) -> OverlayEvents {
        let mut events = OverlayEvents::new();
        if index >= self.stage_count {
            return events;
        }
        let current = self.poses();
        let outgoing = match self.state {
            OverlayState::Idle => {
                self.state = OverlayState::Showing(index);
                events.push(OverlayEvent::Enter {
                    stage: index,
                    from: Direction::Forward.enter_side(),
                });
                return events;
            }
            OverlayState::Showing(cur) | OverlayState::Transitioning { to: cur, .. } => cur,
        };
        if outgoing == index {
            return events;
        }
        let dir = Direction::between(outgoing, index);
        let pose_of = |stage: usize| current.iter().find(|(s, _)| *s == stage).map(|(_, p)| *p);
        self.state = OverlayState::Transitioning {
            from: outgoing,
            to: index,
            elapsed: 0.0,
            from_start: pose_of(outgoing).unwrap_or(LayerPose::SHOWN),
            // reversing picks the fading block up where it is
            to_start: pose_of(index).unwrap_or_else(|| LayerPose::hidden_at(dir.enter_side())),
        };
        events.push(OverlayEvent::Exit {
            stage: outgoing,
            toward: dir.exit_side(),
        });
        events.push(OverlayEvent::Enter {
            stage: index,
            from: dir.enter_side(),
        });
        events
    }

    /// Advance an in-flight transition; returns `Settled` when it completes.
    pub fn advance(&mut self, dt_sec: f32) -> Option<OverlayEvent> {
        let duration = self.duration_sec;
        if let OverlayState::Transitioning { to, elapsed, .. } = &mut self.state {
            let to = *to;
            *elapsed += dt_sec.max(0.0);
            if *elapsed >= duration {
                self.state = OverlayState::Showing(to);
                return Some(OverlayEvent::Settled { stage: to });
            }
        }
        None
    }

    /// Eased transition progress in [0, 1]; 1 when not transitioning.
    pub fn transition_progress(&self) -> f32 {
        match self.state {
            OverlayState::Transitioning { elapsed, .. } if self.duration_sec > 0.0 => {
                ease_out_expo(elapsed / self.duration_sec)
            }
            _ => 1.0,
        }
    }

    fn poses(&self) -> SmallVec<[(usize, LayerPose); 2]> {
        let mut out = SmallVec::new();
        match self.state {
            OverlayState::Idle => {}
            OverlayState::Showing(stage) => out.push((stage, LayerPose::SHOWN)),
            OverlayState::Transitioning {
                from,
                to,
                from_start,
                to_start,
                ..
            } => {
                let t = self.transition_progress();
                let dir = Direction::between(from, to);
                out.push((from, from_start.lerp(LayerPose::hidden_at(dir.exit_side()), t)));
                out.push((to, to_start.lerp(LayerPose::SHOWN, t)));
            }
        }
        out
    }

    pub fn layers(&self) -> SmallVec<[OverlayLayer; 2]> {
        let interactive = self.interactive_stage();
        self.poses()
            .into_iter()
            .map(|(stage, pose)| OverlayLayer {
                stage,
                opacity: pose.opacity,
                offset_px: pose.offset_px,
                interactive: interactive == Some(stage),
            })
            .collect()
    }

    /// CTA click on `stage`. Ignored unless that stage is the interactive one.
    pub fn activate_cta(&self, stage: usize, table: &StageTable) -> Option<NavigationRequest> {
        if !self.is_interactive(stage) {
            return None;
        }
        table.content(stage).map(|c| NavigationRequest {
            anchor: c.cta_target.clone(),
        })
    }

    /// Show `index` immediately with no transition (mount-time priming).
    pub fn reset_to(&mut self, index: usize) {
        if index < self.stage_count {
            self.state = OverlayState::Showing(index);
        }
    }

    /// Drop any visible content (unmount).
    pub fn clear(&mut self) {
        self.state = OverlayState::Idle;
    }
}
