use crate::calc::interface::MacInterface;
use crate::calc::size::PacketSize;
use crate::calc::unit::TimeUnit;
use tracing::debug;

/// Time `size` bytes occupy the wire on `interface`, in `unit`
///
/// Bits are scaled into the target unit before dividing by the line rate, so
/// whole results such as 12 µs for a 1500-byte frame on GMII come out exact.
pub fn packet_duration(size: PacketSize, interface: MacInterface, unit: TimeUnit) -> f64 {
    let bits = size.bits() as f64;
    let duration = bits * unit.scale_factor() / interface.bits_per_second() as f64;
    debug!(
        bytes = size.bytes(),
        interface = %interface,
        unit = %unit,
        duration,
        "Computed packet duration"
    );
    duration
}

/// Calculator bound to one interface and time unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationCalculator {
    pub interface: MacInterface,
    pub unit: TimeUnit,
}

impl DurationCalculator {
    pub fn new(interface: MacInterface, unit: TimeUnit) -> Self {
        Self { interface, unit }
    }

    pub fn duration(&self, size: PacketSize) -> f64 {
        packet_duration(size, self.interface, self.unit)
    }

    /// Wire time of a single byte
    pub fn per_byte(&self) -> f64 {
        self.duration(PacketSize(1))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_interface() -> impl Strategy<Value = MacInterface> {
        prop::sample::select(MacInterface::ALL.to_vec())
    }

    fn any_unit() -> impl Strategy<Value = TimeUnit> {
        prop::sample::select(TimeUnit::ALL.to_vec())
    }

    fn close(a: f64, b: f64) -> bool {
        a == b || ((a - b) / b.abs().max(a.abs())).abs() < 1e-9
    }

    proptest! {
        #[test]
        fn test_matches_reference_formula(
            bytes in 0u64..1_000_000_000_000,
            iface in any_interface(),
            unit in any_unit(),
        ) {
            let expected = bytes as f64 * 8.0 / iface.bits_per_second() as f64 * unit.scale_factor();
            let actual = packet_duration(PacketSize(bytes), iface, unit);
            prop_assert!(close(actual, expected), "{} vs {}", actual, expected);
        }

        #[test]
        fn test_monotonic_in_size(
            a in any::<u64>(),
            b in any::<u64>(),
            iface in any_interface(),
            unit in any_unit(),
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                packet_duration(PacketSize(lo), iface, unit)
                    <= packet_duration(PacketSize(hi), iface, unit)
            );
        }

        #[test]
        fn test_unit_ratio(
            bytes in 0u64..1_000_000_000_000,
            iface in any_interface(),
            from in any_unit(),
            to in any_unit(),
        ) {
            let ratio = to.scale_factor() / from.scale_factor();
            let converted = packet_duration(PacketSize(bytes), iface, from) * ratio;
            prop_assert!(close(packet_duration(PacketSize(bytes), iface, to), converted));
        }

        #[test]
        fn test_xgmii_is_ten_times_faster(
            bytes in 0u64..1_000_000_000_000,
            unit in any_unit(),
        ) {
            let gmii = packet_duration(PacketSize(bytes), MacInterface::Gmii, unit);
            let xgmii = packet_duration(PacketSize(bytes), MacInterface::Xgmii, unit);
            prop_assert!(close(xgmii, gmii / 10.0));
        }
    }
}
