//! Event declaration macro

/// Declare a multicast event as its own type
///
/// ```
/// multicast::multicast! {
///     /// Fired when a sample is ready
///     pub struct SampleReady(channel: u8, value: f32) [4];
/// }
///
/// fn on_sample(channel: u8, value: f32) {
///     println!("channel {} = {}", channel, value);
/// }
///
/// let event = SampleReady::new();
/// event.register(on_sample).unwrap();
/// event.invoke(2, 0.5);
/// assert_eq!(SampleReady::CAPACITY, 4);
/// ```
///
/// The generated type wraps a [`Multicast`](crate::Multicast) whose
/// callback type is `fn(arg types...)`; `invoke` takes the arguments one by
/// one. Query methods (`len`, `contains`, ...) are reachable through
/// `Deref`. Two declarations with the same arguments are distinct types.
///
/// Every argument type must be at least as visible as the declared event,
/// since the types appear in the public `Deref` target. A `pub` event over
/// a private type is rejected with E0446:
///
/// ```compile_fail,E0446
/// enum Level {
///     Low,
/// }
///
/// multicast::multicast! {
///     pub struct LevelChanged(level: Level) [1];
/// }
/// ```
///
/// Arguments are owned values. Borrowed argument types such as `&str` make
/// the callback a higher-ranked `for<'a> fn(&'a str)`, which does not
/// implement [`Callback`](crate::Callback); pass `String` or another owned
/// type instead:
///
/// ```compile_fail
/// multicast::multicast! {
///     struct Named(name: &str) [2];
/// }
///
/// fn on_name(_: &str) {}
///
/// Named::new().register(on_name).unwrap();
/// ```
#[macro_export]
macro_rules! multicast {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($($arg:ident: $ty:ty),* $(,)?) [$capacity:expr];
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        $vis struct $name {
            inner: $crate::Multicast<fn($($ty),*), { $capacity }>,
        }

        #[allow(dead_code)]
        impl $name {
            /// Maximum number of simultaneous subscribers
            pub const CAPACITY: usize = $capacity;

            pub const fn new() -> Self {
                Self {
                    inner: $crate::Multicast::new(),
                }
            }

            /// Register a subscriber and return the slot it occupies
            pub fn register(&self, callback: fn($($ty),*)) -> $crate::Result<usize> {
                self.inner.register(callback)
            }

            /// Unregister the first slot holding `callback`; `false` if absent
            pub fn unregister(&self, callback: fn($($ty),*)) -> bool {
                self.inner.unregister(callback)
            }

            /// Call every registered subscriber in slot order
            pub fn invoke(&self, $($arg: $ty),*) {
                self.inner.invoke(($($arg,)*))
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::Multicast<fn($($ty),*), { $capacity }>;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    thread_local! {
        static LOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn take_log() -> Vec<String> {
        LOG.with(|log| log.take())
    }

    crate::multicast! {
        /// No-argument event
        struct Tick() [1];
    }

    crate::multicast! {
        struct Reading(sensor: u16, celsius: f32) [2];
    }

    crate::multicast! {
        struct Packet(a: i32, b: f32, c: f32, d: f32, e: f32,) [1];
    }

    fn on_tick() {
        LOG.with(|log| log.borrow_mut().push("tick".into()));
    }

    fn on_reading(sensor: u16, celsius: f32) {
        LOG.with(|log| log.borrow_mut().push(format!("reading {} {}", sensor, celsius)));
    }

    fn on_packet(a: i32, b: f32, c: f32, d: f32, e: f32) {
        LOG.with(|log| log.borrow_mut().push(format!("packet {} {} {} {} {}", a, b, c, d, e)));
    }

    #[test]
    fn test_declared_events() {
        let tick = Tick::new();
        let reading = Reading::default();
        let packet = Packet::new();

        tick.register(on_tick).unwrap();
        reading.register(on_reading).unwrap();
        packet.register(on_packet).unwrap();

        tick.invoke();
        reading.invoke(7, 21.5);
        packet.invoke(123, 1.23, 3.21, 5.55, 9.99);

        assert_eq!(
            take_log(),
            vec!["tick", "reading 7 21.5", "packet 123 1.23 3.21 5.55 9.99"]
        );
    }

    #[test]
    fn test_declared_event_capacity() {
        let tick = Tick::new();
        assert_eq!(Tick::CAPACITY, 1);
        tick.register(on_tick).unwrap();
        assert!(tick.register(on_tick).is_err());

        // Deref exposes the query methods
        assert_eq!(tick.len(), 1);
        assert!(tick.unregister(on_tick));
        assert!(!tick.unregister(on_tick));
        assert!(tick.is_empty());
    }
}
