/// Receives step loop events and decides how the run should proceed.
///
/// Observers let callers record or steer a simulation without changing the
/// step loop, enabling trajectory output, logging, or early stopping.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// loop-specific action and `None` lets the loop continue unchanged.
///
/// Closures automatically implement `Observer`, a built-in impl for `()`
/// provides a no-op observer, and a pair of observers sees every event in
/// order (see the tuple impl).
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Feeds each event to both observers, first then second.
///
/// Both observers always see the event. If both return an action, the first
/// observer's action wins.
impl<E, A, O1, O2> Observer<E, A> for (O1, O2)
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Stop,
        Pause,
    }

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<Action> = observer.observe(&1_u32);
        assert_eq!(action, None);
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| {
            seen.push(*event);
            (*event >= 2).then_some(Action::Stop)
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some(Action::Stop));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn pair_feeds_both_and_prefers_first_action() {
        let mut first_seen = 0;
        let mut second_seen = 0;

        {
            let mut pair = (
                |_: &u32| -> Option<Action> {
                    first_seen += 1;
                    None
                },
                |event: &u32| {
                    second_seen += 1;
                    (*event == 3).then_some(Action::Pause)
                },
            );

            assert_eq!(pair.observe(&1), None);
            assert_eq!(pair.observe(&3), Some(Action::Pause));
        }

        assert_eq!(first_seen, 2);
        assert_eq!(second_seen, 2);

        let mut both = (
            |_: &u32| Some(Action::Stop),
            |_: &u32| Some(Action::Pause),
        );
        assert_eq!(both.observe(&0), Some(Action::Stop));
    }
}
