use std::cell::Cell;
use std::rc::Rc;

/// Shared between an effect's async task and its cleanup.
///
/// Yew runs the cleanup when the effect's dependencies change or the
/// component unmounts; a task that finishes afterwards must not write state.
#[derive(Debug, Clone, Default)]
pub struct EffectGuard(Rc<Cell<bool>>);

impl EffectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    /// Cleanup closure for `use_effect_with`
    pub fn canceller(&self) -> impl FnOnce() {
        let guard = self.clone();
        move || guard.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_seen_by_task_clone() {
        let guard = EffectGuard::new();
        let task = guard.clone();
        assert!(!task.is_cancelled());

        (guard.canceller())();
        assert!(task.is_cancelled());
    }

    #[test]
    fn test_late_response_for_previous_day_is_dropped() {
        // Day 15 is selected, then day 16 before the first response arrives
        let first = EffectGuard::new();
        let first_task = first.clone();
        (first.canceller())();
        let second = EffectGuard::new();
        let second_task = second.clone();

        let mut shown: Option<u32> = None;
        let mut loading = true;
        let mut deliver = |task: &EffectGuard, day: u32| {
            if task.is_cancelled() {
                return;
            }
            shown = Some(day);
            loading = false;
        };

        // The second request finishes first, the stale one last
        deliver(&second_task, 16);
        deliver(&first_task, 15);
        assert_eq!(shown, Some(16));
        assert!(!loading);
    }

    #[test]
    fn test_stale_task_leaves_loading_alone() {
        let stale = EffectGuard::new();
        let stale_task = stale.clone();
        (stale.canceller())();
        let _current = EffectGuard::new();

        let mut loading = true;
        if !stale_task.is_cancelled() {
            loading = false;
        }
        assert!(loading);
    }
}
