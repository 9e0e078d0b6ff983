//! Latest-value flight-data bus.
//!
//! Topics are single-writer, many-reader: each publish replaces the stored
//! reading and bumps a sequence counter, and a [`Subscription`] observes at
//! most the newest reading per poll. Intermediate readings are never
//! replayed, so a consumer that polls slower than the publisher publishes
//! simply sees the latest value.
//!
//! A topic can quantize every published value to a fixed number of decimal
//! places, matching the precision of the ARINC 429 word the reading came
//! from on the real aircraft bus. Quantization happens at publish time;
//! consumers never re-round.

// =============================================================================
// Topic (write side)
// =============================================================================

/// A single latest-value topic.
pub struct Topic {
    latest: Option<f32>,
    seq: u32,
    precision: Option<u8>,
}

impl Topic {
    /// Topic delivering published values untouched.
    pub const fn new() -> Self {
        Self {
            latest: None,
            seq: 0,
            precision: None,
        }
    }

    /// Topic quantizing every published value to `decimals` places.
    pub const fn with_precision(decimals: u8) -> Self {
        Self {
            latest: None,
            seq: 0,
            precision: Some(decimals),
        }
    }

    /// Publish a new reading, replacing any unconsumed one.
    pub fn publish(
        &mut self,
        value: f32,
    ) {
        let value = match self.precision {
            Some(decimals) => {
                let scale = 10u32.pow(u32::from(decimals)) as f32;
                (value * scale).round() / scale
            }
            None => value,
        };
        self.latest = Some(value);
        self.seq = self.seq.wrapping_add(1);
    }

    /// Latest published reading, if any was ever published.
    #[inline]
    pub const fn latest(&self) -> Option<f32> { self.latest }
}

impl Default for Topic {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Subscription (read side)
// =============================================================================

/// Read side of a [`Topic`].
///
/// Holds only the last observed sequence number, so any number of
/// subscriptions to the same topic stay independent of each other.
pub struct Subscription {
    last_seen: u32,
}

impl Subscription {
    /// Subscription that has observed nothing yet.
    pub const fn new() -> Self { Self { last_seen: 0 } }

    /// Newest reading this subscription has not yet observed, if any.
    pub fn poll(
        &mut self,
        topic: &Topic,
    ) -> Option<f32> {
        if topic.seq == self.last_seen {
            return None;
        }
        self.last_seen = topic.seq;
        topic.latest
    }
}

impl Default for Subscription {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Bus
// =============================================================================

/// The set of topics the HUD instruments consume.
pub struct FlightDataBus {
    /// Magnetic heading in degrees, [0, 360). Quantized to 2 decimals.
    pub heading: Topic,
    /// Vertical pixel offset slaving horizon-mode instruments to the
    /// horizon line. Delivered verbatim.
    pub horizon_offset: Topic,
}

impl FlightDataBus {
    pub const fn new() -> Self {
        Self {
            heading: Topic::with_precision(2),
            horizon_offset: Topic::new(),
        }
    }
}

impl Default for FlightDataBus {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_before_publish_returns_none() {
        let topic = Topic::new();
        let mut sub = Subscription::new();
        assert!(
            sub.poll(&topic).is_none(),
            "Subscription should see nothing before the first publish"
        );
    }

    #[test]
    fn test_publish_then_poll() {
        let mut topic = Topic::new();
        let mut sub = Subscription::new();

        topic.publish(123.5);

        assert_eq!(sub.poll(&topic), Some(123.5), "First poll should see the reading");
        assert!(sub.poll(&topic).is_none(), "Second poll should see nothing new");
    }

    #[test]
    fn test_latest_value_wins() {
        let mut topic = Topic::new();
        let mut sub = Subscription::new();

        topic.publish(10.0);
        topic.publish(20.0);
        topic.publish(30.0);

        assert_eq!(
            sub.poll(&topic),
            Some(30.0),
            "A slow consumer should see only the newest reading"
        );
        assert!(sub.poll(&topic).is_none(), "Intermediate readings are never replayed");
    }

    #[test]
    fn test_precision_quantization_at_publish() {
        let mut topic = Topic::with_precision(2);
        let mut sub = Subscription::new();

        topic.publish(123.456_789);
        let value = sub.poll(&topic).unwrap();
        assert!(
            (value - 123.46).abs() < 1e-4,
            "2-decimal topic should deliver 123.46, got {value}"
        );

        topic.publish(359.994);
        let value = sub.poll(&topic).unwrap();
        assert!(
            (value - 359.99).abs() < 1e-4,
            "2-decimal topic should deliver 359.99, got {value}"
        );
    }

    #[test]
    fn test_no_precision_passes_value_verbatim() {
        let mut topic = Topic::new();
        let mut sub = Subscription::new();

        topic.publish(-12.345_678);
        assert_eq!(
            sub.poll(&topic),
            Some(-12.345_678),
            "Unquantized topic should deliver the exact value"
        );
    }

    #[test]
    fn test_subscriptions_are_independent() {
        let mut topic = Topic::new();
        let mut sub_a = Subscription::new();
        let mut sub_b = Subscription::new();

        topic.publish(42.0);

        assert_eq!(sub_a.poll(&topic), Some(42.0), "First subscription sees the reading");
        assert_eq!(
            sub_b.poll(&topic),
            Some(42.0),
            "Second subscription sees it too, independently"
        );
        assert!(sub_a.poll(&topic).is_none());
        assert!(sub_b.poll(&topic).is_none());
    }

    #[test]
    fn test_republish_same_value_is_a_new_reading() {
        let mut topic = Topic::new();
        let mut sub = Subscription::new();

        topic.publish(20.0);
        assert_eq!(sub.poll(&topic), Some(20.0));

        // Same value again still counts as a delivery
        topic.publish(20.0);
        assert_eq!(
            sub.poll(&topic),
            Some(20.0),
            "Re-publishing the same value should still be observable"
        );
    }

    #[test]
    fn test_flight_data_bus_heading_precision() {
        let mut bus = FlightDataBus::new();
        let mut sub = Subscription::new();

        bus.heading.publish(180.005_4);
        let value = sub.poll(&bus.heading).unwrap();
        assert!(
            (value - 180.01).abs() < 1e-4,
            "Heading topic should quantize to 2 decimals, got {value}"
        );
    }

    #[test]
    fn test_flight_data_bus_horizon_offset_verbatim() {
        let mut bus = FlightDataBus::new();
        let mut sub = Subscription::new();

        bus.horizon_offset.publish(7.123_456);
        assert_eq!(
            sub.poll(&bus.horizon_offset),
            Some(7.123_456),
            "Horizon offset should not be quantized"
        );
    }

    #[test]
    fn test_topic_latest_accessor() {
        let mut topic = Topic::new();
        assert!(topic.latest().is_none(), "No reading before first publish");

        topic.publish(1.5);
        assert_eq!(topic.latest(), Some(1.5));
    }
}
