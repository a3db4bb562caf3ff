use serde::{Deserialize, Serialize};

/// Phases of the jump gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatePhase {
    /// Latch armed, cooldown expired: a jump may fire.
    Ready,
    /// Latch armed but the cooldown is still running.
    Cooling,
    /// A jump fired and the up key has not been seen released since.
    Disarmed,
}

/// Cooldown timer plus a one-shot latch gating jump triggering.
///
/// The latch re-arms by level-sensing the up flag every frame rather than on
/// a discrete release event, and the cooldown counts down independently of
/// the latch. A jump fires only in [`GatePhase::Ready`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpGate {
    phase: GatePhase,
    cooldown: f32,
}

impl JumpGate {
    pub fn new() -> Self {
        Self {
            phase: GatePhase::Ready,
            cooldown: 0.0,
        }
    }

    /// Advance the gate by one frame. `up_held` is the level of the up flag
    /// this frame. Drifting slightly below zero is tolerated; only the sign
    /// of the cooldown matters.
    pub fn tick(&mut self, dt: f32, up_held: bool) {
        if self.cooldown > 0.0 {
            self.cooldown -= dt;
        }
        match self.phase {
            GatePhase::Disarmed if !up_held => {
                self.phase = if self.cooldown > 0.0 {
                    GatePhase::Cooling
                } else {
                    GatePhase::Ready
                };
            },
            GatePhase::Cooling if self.cooldown <= 0.0 => {
                self.phase = GatePhase::Ready;
            },
            _ => {},
        }
    }

    /// True when a jump may fire this frame.
    pub fn ready(&self) -> bool {
        self.phase == GatePhase::Ready
    }

    /// Consume the gate for one jump: disarm the latch and restart the
    /// cooldown.
    pub fn fire(&mut self, cooldown: f32) {
        self.phase = GatePhase::Disarmed;
        self.cooldown = cooldown;
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }
}

impl Default for JumpGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn starts_ready() {
        let gate = JumpGate::new();
        assert!(gate.ready());
        assert_eq!(gate.cooldown(), 0.0);
    }

    #[test]
    fn firing_disarms_and_restarts_cooldown() {
        let mut gate = JumpGate::new();
        gate.fire(0.75);
        assert_eq!(gate.phase(), GatePhase::Disarmed);
        assert_eq!(gate.cooldown(), 0.75);
        assert!(!gate.ready());
    }

    #[test]
    fn held_up_never_rearms() {
        let mut gate = JumpGate::new();
        gate.fire(0.75);
        // Hold up far past the cooldown: the latch must stay disarmed.
        for _ in 0..300 {
            gate.tick(DT, true);
        }
        assert_eq!(gate.phase(), GatePhase::Disarmed);
        assert!(!gate.ready());
    }

    #[test]
    fn release_during_cooldown_rearms_to_cooling() {
        let mut gate = JumpGate::new();
        gate.fire(0.75);
        gate.tick(DT, false);
        assert_eq!(gate.phase(), GatePhase::Cooling);
        assert!(!gate.ready());
    }

    #[test]
    fn cooling_becomes_ready_when_cooldown_expires() {
        let mut gate = JumpGate::new();
        gate.fire(0.75);
        gate.tick(DT, false);
        // 0.75 s at 60 fps is 45 frames; run extra to absorb float error.
        for _ in 0..60 {
            gate.tick(DT, false);
        }
        assert_eq!(gate.phase(), GatePhase::Ready);
    }

    #[test]
    fn cooling_expires_even_while_up_is_held_again() {
        let mut gate = JumpGate::new();
        gate.fire(0.75);
        gate.tick(DT, false);
        assert_eq!(gate.phase(), GatePhase::Cooling);
        // Re-press up: the latch is already armed, the timer keeps running.
        for _ in 0..60 {
            gate.tick(DT, true);
        }
        assert_eq!(gate.phase(), GatePhase::Ready);
    }

    #[test]
    fn cooldown_runs_while_disarmed() {
        let mut gate = JumpGate::new();
        gate.fire(0.75);
        for _ in 0..60 {
            gate.tick(DT, true);
        }
        assert!(gate.cooldown() <= 0.0);
        // First frame with up released goes straight to Ready.
        gate.tick(DT, false);
        assert!(gate.ready());
    }

    #[test]
    fn negative_cooldown_is_harmless() {
        let mut gate = JumpGate::new();
        gate.fire(0.01);
        for _ in 0..10 {
            gate.tick(DT, false);
        }
        assert!(gate.cooldown() <= 0.0);
        assert!(gate.ready());
        // Ticking more never un-readies the gate.
        gate.tick(DT, false);
        assert!(gate.ready());
    }
}
