use std::fmt;

/// Handle for removing a change subscriber from an [`Observable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// A two-way-bindable property: explicit getter/setter with an internal
/// change-notification callback list.
///
/// Subscribers are invoked synchronously, after the new value is stored and
/// only when the value actually changed. Callbacks receive the new value by
/// reference and must not assume they can re-enter the carousel that owns
/// the property.
pub struct Observable<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Box<dyn FnMut(&T)>)>,
}

impl<T> Observable<T> {
    /// Property holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a change callback. The callback does not fire for the
    /// current value, only for subsequent changes.
    pub fn subscribe(&mut self, f: impl FnMut(&T) + 'static) -> Subscription {
        self.next_id += 1;
        self.subscribers.push((self.next_id, Box::new(f)));
        Subscription(self.next_id)
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription.0);
        self.subscribers.len() != before
    }
}

impl<T: PartialEq> Observable<T> {
    /// Store `value` and notify subscribers if it differs from the current
    /// value. Returns whether a change was published.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, f) in &mut self.subscribers {
            f(&self.value);
        }
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
