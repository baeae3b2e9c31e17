#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use inplace_xml::events::{Event, Recorder};
use inplace_xml::{Config, Error, Parser};

#[derive(Debug, Arbitrary)]
struct Input {
    config: Config,
    document: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let Input {
        config,
        mut document,
    } = input;
    let len = document.len();

    let mut recorder = Recorder::new();
    match Parser::with_config(config).parse(&mut document, &mut recorder) {
        Ok(()) => {
            assert_eq!(recorder.events.first(), Some(&Event::StartDocument));
            assert_eq!(recorder.events.last(), Some(&Event::EndDocument));
        }
        Err(Error::Syntax(e)) => assert!(e.position <= len),
        Err(Error::Handler(e)) => panic!("recorder never fails: {}", e),
    }
});
