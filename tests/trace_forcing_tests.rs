//! Runs in its own test binary: the default configuration is read from the
//! environment once per process, and the logger can only be installed once.

use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_stream::stream_configuration::TRACE_FORCING_ENV;
use lazy_stream::{default_config, range_from, StreamExt, UtilityStreamExt};
use log::{Level, LevelFilter, Log, Metadata, Record};

static FORCINGS: AtomicUsize = AtomicUsize::new(0);

struct ForcingCounter;

impl Log for ForcingCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Trace && record.args().to_string() == "Forcing stream tail" {
            FORCINGS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: ForcingCounter = ForcingCounter;

#[test]
fn test_trace_forcing_reaches_every_forcing() {
    std::env::set_var(TRACE_FORCING_ENV, "1");
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);
    assert!(default_config().trace_forcing);

    let stream = range_from(1);
    stream.tail().unwrap();
    assert_eq!(FORCINGS.load(Ordering::SeqCst), 1);

    // Iterator bridge: 5 items force 4 tails
    assert_eq!(stream.materialize(5), vec![1, 2, 3, 4, 5]);
    assert_eq!(FORCINGS.load(Ordering::SeqCst), 5);

    // Combinator thunks trace their inner forcing as well as the outer one
    let before = FORCINGS.load(Ordering::SeqCst);
    assert_eq!(stream.map(|x| x * 2).at(1), Ok(4));
    assert_eq!(FORCINGS.load(Ordering::SeqCst), before + 2);
}
