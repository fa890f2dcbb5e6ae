use clap::Parser;
use packettime::calc::{packet_duration, DurationCalculator, MacInterface, PacketSize, TimeUnit};
use packettime::cli::{Config, Reporter, Result, Session};
use std::io::Cursor;

/// Test helper: relative comparison with a 1e-9 tolerance
fn assert_close(actual: f64, expected: f64) {
    let scale = actual.abs().max(expected.abs());
    assert!(
        actual == expected || (actual - expected).abs() / scale < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_reference_scenarios() {
    assert_close(
        packet_duration(PacketSize(1500), MacInterface::Gmii, TimeUnit::Microsecond),
        12.0,
    );
    assert_close(
        packet_duration(PacketSize(1500), MacInterface::Xgmii, TimeUnit::Nanosecond),
        1200.0,
    );
}

#[test]
fn test_jumbo_frame_in_every_unit() {
    let calc = DurationCalculator::new(MacInterface::Gmii, TimeUnit::Second);
    let seconds = calc.duration(PacketSize(9000));
    assert_close(seconds, 0.000072);

    for unit in TimeUnit::ALL {
        let scaled = packet_duration(PacketSize(9000), MacInterface::Gmii, unit);
        assert_close(scaled, seconds * unit.scale_factor());
    }
}

#[test]
fn test_size_parsed_from_text() -> std::result::Result<(), packettime::calc::CalcError> {
    let size: PacketSize = "1,500".parse()?;
    let interface: MacInterface = "xgmii".parse()?;
    let unit: TimeUnit = "ns".parse()?;
    assert_close(packet_duration(size, interface, unit), 1200.0);
    Ok(())
}

#[test]
fn test_config_to_reading() {
    let config = Config::try_parse_from(["packettime", "64", "-i", "XGMII", "-u", "ps"]).unwrap();
    assert!(config.validate().is_ok());

    let reading = Session::from_config(&config).reading();
    assert_close(reading.duration, 51_200.0);
}

#[test]
fn test_interactive_session_transcript() -> Result<()> {
    colored::control::set_override(false);

    let mut reporter = Reporter::new(Vec::new());
    let mut session = Session::default();
    session.run(Cursor::new("1500\nxgmii\nns\nnope\n"), &mut reporter)?;

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(out.contains("0 bytes @ GMII = 0 µs"));
    assert!(out.contains("1500 bytes @ GMII = 12 µs"));
    assert!(out.contains("1500 bytes @ XGMII = 1.2 µs"));
    assert!(out.contains("1500 bytes @ XGMII = 1,200 ns"));
    assert!(out.contains("nope"));

    // last accepted state survives the rejected line
    let reading = session.reading();
    assert_eq!(reading.size, PacketSize(1500));
    assert_eq!(reading.unit, TimeUnit::Nanosecond);
    Ok(())
}
