//! Key event emission on the shared input sink

use rmi4_core::SharedInputSink;

/// Report the current button level. No edge detection: the same level may be
/// reported on consecutive attentions.
pub fn emit(sink: &SharedInputSink, key_code: u16, pressed: bool) {
    sink.lock().report_key(key_code, pressed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmi4_core::codes::BTN_LEFT;
    use rmi4_core::mock::{KeyEvent, RecordingInputSink};

    #[test]
    fn test_emit_reports_every_level() {
        let (sink, handle) = RecordingInputSink::shared();

        emit(&handle, BTN_LEFT, true);
        emit(&handle, BTN_LEFT, true);
        emit(&handle, BTN_LEFT, false);

        let events = sink.lock().events.clone();
        assert_eq!(
            events,
            vec![
                KeyEvent {
                    code: BTN_LEFT,
                    pressed: true
                },
                KeyEvent {
                    code: BTN_LEFT,
                    pressed: true
                },
                KeyEvent {
                    code: BTN_LEFT,
                    pressed: false
                },
            ]
        );
    }
}
