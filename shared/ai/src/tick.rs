use crate::CombatAgent;
use standoff_api::prelude::*;

impl CombatAgent {
    /// Routes a single host event to its handler.
    pub fn handle(&mut self, host: &impl Host, event: &Event) {
        match event {
            Event::Scanned(scan) => self.on_detect(host, scan),
            Event::BulletMissed => self.on_bullet_missed(),
            Event::BulletHitBullet => self.on_bullet_collision(),
            Event::BulletHit { energy } => self.on_hit(*energy),
        }
    }

    /// Runs one tick: handles `events` in delivery order, then the per-tick
    /// update, and returns the commands to commit.
    pub fn advance_tick(&mut self, host: &impl Host, events: &[Event]) -> Commands {
        for event in events {
            self.handle(host, event);
        }
        self.on_tick(host);
        self.take_commands()
    }

    /// Returns the queued commands, leaving an empty buffer behind.
    pub fn take_commands(&mut self) -> Commands {
        std::mem::take(&mut self.commands)
    }
}
