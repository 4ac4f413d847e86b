//! Lifecycle of one instance's style rule.
//!
//! `StyleRegistration` owns exactly one keyed entry on a shared registry:
//!
//! | call             | effect on the registry                                 |
//! |------------------|--------------------------------------------------------|
//! | `start()`        | upsert the rule under the instance key                 |
//! | `update_speed()` | rebuild the rule, rewrite the same key if started      |
//! | `stop()`         | remove the key if still present; later calls are no-ops |
//!
//! Rewriting the rule on a speed change restarts the animation from offset 0.
//! That restart is the accepted cost of keeping a single rule per instance.

use tracing::debug;

use crate::identity::AnimationId;
use crate::registry::{SharedStyleRegistry, Upsert};
use crate::rule::ScrollRule;

pub struct StyleRegistration {
    registry: SharedStyleRegistry,
    key: String,
    rule: ScrollRule,
    active: bool,
}

impl StyleRegistration {
    /// Prepare a registration; nothing touches the registry until [`start`](Self::start)
    pub fn new(registry: SharedStyleRegistry, id: AnimationId, speed_seconds: f32) -> Self {
        Self {
            registry,
            key: id.style_key(),
            rule: ScrollRule::new(id, speed_seconds),
            active: false,
        }
    }

    pub fn id(&self) -> &AnimationId {
        self.rule.id()
    }

    /// Key of the owned registry entry
    pub fn style_key(&self) -> &str {
        &self.key
    }

    pub fn rule(&self) -> &ScrollRule {
        &self.rule
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Class to put on the animating element, only once the rule is installed
    pub fn class_name(&self) -> Option<&str> {
        self.active.then(|| self.rule.id().as_str())
    }

    /// Install the rule. Calling again rewrites the same entry.
    pub fn start(&mut self) -> &AnimationId {
        let outcome = self.registry.upsert_rule(&self.key, &self.rule.to_css());
        if outcome == Upsert::Replaced && !self.active {
            debug!(key = %self.key, "style key already present, overwriting");
        }
        self.active = true;
        debug!(id = %self.rule.id(), speed = self.rule.speed_seconds(), "style registration started");
        self.rule.id()
    }

    /// Rebuild the rule for a new cycle length.
    ///
    /// Returns whether the rule changed. A started registration rewrites its
    /// existing entry; no second entry is ever created.
    pub fn update_speed(&mut self, speed_seconds: f32) -> bool {
        let rule = ScrollRule::new(self.rule.id().clone(), speed_seconds);
        if rule == self.rule {
            return false;
        }
        debug!(
            id = %self.rule.id(),
            from = self.rule.speed_seconds(),
            to = rule.speed_seconds(),
            "style registration speed changed"
        );
        self.rule = rule;
        if self.active {
            self.registry.upsert_rule(&self.key, &self.rule.to_css());
        }
        true
    }

    /// Remove the rule. Safe to call any number of times, and safe when the
    /// entry was already removed by someone else.
    pub fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        let removed = self.registry.remove_rule(&self.key);
        debug!(id = %self.rule.id(), removed, "style registration stopped");
        removed
    }
}

impl Drop for StyleRegistration {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for StyleRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistration")
            .field("key", &self.key)
            .field("speed_seconds", &self.rule.speed_seconds())
            .field("active", &self.active)
            .finish()
    }
}
